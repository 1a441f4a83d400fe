// File: src/tui/handlers.rs
// Handles keyboard input for the TUI.
use crate::config::AppTheme;
use crate::error::TaskResult;
use crate::model::{NewTask, SortKey, TaskStatus};
use crate::tui::action::{Action, MenuCommand};
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // The history popup swallows the next key.
    if state.show_history {
        state.show_history = false;
        return None;
    }

    match state.mode {
        InputMode::Normal => handle_normal(key, state),
        InputMode::ChoosingTheme => handle_theme_choice(key, state),
        _ => {
            handle_text_input(key, state);
            None
        }
    }
}

fn handle_normal(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        KeyCode::Esc => {
            if !state.active_search.is_empty() {
                state.active_search.clear();
                state.refresh_filtered_view();
            }
        }
        KeyCode::Char(c) => match MenuCommand::from_key(c) {
            Some(cmd) => return run_menu_command(cmd, state),
            None => state.message = "Invalid command. Please try again.".to_string(),
        },
        _ => {}
    }
    None
}

pub fn run_menu_command(cmd: MenuCommand, state: &mut AppState) -> Option<Action> {
    state.push_command(cmd.label());

    match cmd {
        MenuCommand::AddTask => state.begin_input(InputMode::AddingTitle, ""),
        MenuCommand::RemoveTask => prompt_for_selected(state, InputMode::Removing),
        MenuCommand::MarkComplete => prompt_for_selected(state, InputMode::Completing),
        MenuCommand::MarkIncomplete => prompt_for_selected(state, InputMode::Incompleting),
        MenuCommand::ListTasks => {
            state.active_search.clear();
            state.refresh_filtered_view();
            state.message = if state.tasks.is_empty() {
                "No tasks available.".to_string()
            } else {
                format!("Listing all {} tasks.", state.tasks.len())
            };
        }
        MenuCommand::ViewHistory => state.show_history = true,
        MenuCommand::ChangeTheme => state.mode = InputMode::ChoosingTheme,
        MenuCommand::Exit => {
            state.message = "Exiting Task Manager. Goodbye!".to_string();
            return Some(Action::Quit);
        }
        MenuCommand::Undo => {
            let result = state.controller.undo();
            state.message = outcome(result.map(str::to_string));
            state.refresh_filtered_view();
        }
        MenuCommand::Redo => {
            let result = state.controller.redo();
            state.message = outcome(result.map(str::to_string));
            state.refresh_filtered_view();
        }
        MenuCommand::Search => {
            let current = state.active_search.clone();
            state.begin_input(InputMode::Searching, &current);
        }
        MenuCommand::CycleSort => {
            let key = state.sort_key.map(SortKey::next).unwrap_or(SortKey::DueDate);
            state.controller.sort(key);
            state.sort_key = Some(key);
            state.message = format!("Tasks sorted by {}.", key);
            state.refresh_filtered_view();
        }
    }
    None
}

fn prompt_for_selected(state: &mut AppState, mode: InputMode) {
    let title = state
        .get_selected_task()
        .map(|t| t.title.clone())
        .unwrap_or_default();
    state.begin_input(mode, &title);
}

fn handle_text_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.cancel_input();
            state.message = "Cancelled.".to_string();
        }
        KeyCode::Enter => submit_input(state),
        KeyCode::Backspace => {
            state.input_buffer.pop();
        }
        KeyCode::Char(c) => state.input_buffer.push(c),
        _ => {}
    }
}

fn submit_input(state: &mut AppState) {
    let input = std::mem::take(&mut state.input_buffer);
    let mode = state.mode;
    state.mode = InputMode::Normal;

    match mode {
        InputMode::AddingTitle => {
            state.pending_title = Some(input);
            state.begin_input(InputMode::AddingDescription, "");
            return;
        }
        InputMode::AddingDescription => {
            let title = state.pending_title.take().unwrap_or_default();
            let mut new = NewTask::new(title, input);
            new.priority = state.config.default_priority;
            let result = state.controller.add_task(new);
            state.message = outcome(result.map(|_| "Task added successfully.".to_string()));
        }
        InputMode::Removing => {
            let result = state.controller.remove_task(&input);
            state.message = outcome(applied(result, "Task removed successfully.", &input));
        }
        InputMode::Completing => {
            let result = state.controller.set_status(&input, TaskStatus::Complete);
            state.message = outcome(applied(result, "Task marked as complete.", &input));
        }
        InputMode::Incompleting => {
            let result = state.controller.set_status(&input, TaskStatus::Incomplete);
            state.message = outcome(applied(result, "Task marked as incomplete.", &input));
        }
        InputMode::Searching => {
            state.active_search = input.trim().to_string();
            state.message = if state.active_search.is_empty() {
                "Search cleared.".to_string()
            } else {
                format!("Searching for: {}", state.active_search)
            };
        }
        InputMode::Normal | InputMode::ChoosingTheme => {}
    }
    state.refresh_filtered_view();
}

fn handle_theme_choice(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    state.mode = InputMode::Normal;
    let theme = match key.code {
        KeyCode::Char('1') => AppTheme::Default,
        KeyCode::Char('2') => AppTheme::Dark,
        KeyCode::Char('3') => AppTheme::Light,
        _ => {
            state.message = "Invalid choice. Theme not changed.".to_string();
            return None;
        }
    };
    state.config.theme = theme;
    state.message = format!("Theme set to {}.", theme);
    Some(Action::SaveConfig)
}

// Lenient mode reports a miss as `Ok(false)`.
fn applied(result: TaskResult<bool>, success: &str, title: &str) -> TaskResult<String> {
    result.map(|hit| {
        if hit {
            success.to_string()
        } else {
            format!("Task '{}' not found; nothing changed.", title)
        }
    })
}

fn outcome(result: TaskResult<String>) -> String {
    match result {
        Ok(msg) => msg,
        Err(e) => format!("Error: {}", e),
    }
}
