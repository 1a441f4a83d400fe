// File: src/tui/view.rs
use crate::config::AppTheme;
use crate::model::TaskDisplay;
use crate::tui::action::MenuCommand;
use crate::tui::state::{AppState, InputMode};
use crate::validation::ValidationMode;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

struct Palette {
    fg: Color,
    bg: Color,
    accent: Color,
    done: Color,
    highlight_bg: Color,
}

fn palette(theme: AppTheme) -> Palette {
    match theme {
        AppTheme::Default => Palette {
            fg: Color::Reset,
            bg: Color::Reset,
            accent: Color::Cyan,
            done: Color::DarkGray,
            highlight_bg: Color::Blue,
        },
        AppTheme::Dark => Palette {
            fg: Color::White,
            bg: Color::Black,
            accent: Color::LightMagenta,
            done: Color::Gray,
            highlight_bg: Color::DarkGray,
        },
        AppTheme::Light => Palette {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Blue,
            done: Color::Gray,
            highlight_bg: Color::LightCyan,
        },
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let p = palette(state.theme());
    let base = Style::default().fg(p.fg).bg(p.bg);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);

    // --- MENU ---
    let history = state.controller.history();
    let mut numbered: Vec<Span> = Vec::new();
    let mut extra: Vec<Span> = Vec::new();
    for cmd in MenuCommand::iter() {
        let target = if cmd.key().is_ascii_digit() {
            &mut numbered
        } else {
            &mut extra
        };
        let available = match cmd {
            MenuCommand::Undo => history.can_undo(),
            MenuCommand::Redo => history.can_redo(),
            _ => true,
        };
        let key_style = if available {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.done)
        };
        target.push(Span::styled(format!(" {}", cmd.key()), key_style));
        target.push(Span::raw(format!(":{} ", cmd.label())));
    }
    let menu_title = match state.controller.mode() {
        ValidationMode::Validated => " Task Manager ",
        ValidationMode::Lenient => " Task Manager [lenient] ",
    };
    let menu = Paragraph::new(vec![Line::from(numbered), Line::from(extra)])
        .style(base)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(menu_title));
    f.render_widget(menu, v_chunks[0]);

    // --- TASK LIST ---
    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|t| {
            let style = if t.status.is_done() {
                Style::default().fg(p.done).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(p.fg)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", t.checkbox_symbol())),
                Span::styled(t.title.clone(), style),
            ]))
        })
        .collect();

    let mut list_title = format!(" Tasks ({}) ", state.tasks.len());
    if !state.active_search.is_empty() {
        list_title = format!(" Tasks ({}) [/{}] ", state.tasks.len(), state.active_search);
    }
    if let Some(key) = state.sort_key {
        list_title.push_str(&format!("[sort: {}] ", key));
    }

    let list = List::new(items)
        .style(base)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(
            Style::default()
                .bg(p.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, h_chunks[0], &mut state.list_state);

    // --- DETAILS ---
    let details: Vec<Line> = match state.get_selected_task() {
        Some(task) => task.to_detail_lines().into_iter().map(Line::from).collect(),
        None => vec![Line::from("No tasks available.")],
    };
    let details = Paragraph::new(details)
        .style(base)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(details, h_chunks[1]);

    // --- FOOTER ---
    let footer = match state.mode {
        InputMode::Normal => Paragraph::new(state.message.as_str())
            .style(base)
            .block(Block::default().borders(Borders::ALL).title(" Status ")),
        InputMode::ChoosingTheme => Paragraph::new(state.mode.prompt())
            .style(Style::default().fg(p.accent).bg(p.bg))
            .block(Block::default().borders(Borders::ALL).title(" Theme ")),
        mode => Paragraph::new(format!("> {}", state.input_buffer))
            .style(Style::default().fg(p.accent).bg(p.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} (Enter:Submit Esc:Cancel) ", mode.prompt())),
            ),
    };
    f.render_widget(Clear, v_chunks[2]);
    f.render_widget(footer, v_chunks[2]);

    if state.mode.takes_text() {
        let x = input_cursor_x(v_chunks[2], state.input_buffer.chars().count());
        f.set_cursor_position((x, v_chunks[2].y + 1));
    }

    // --- COMMAND HISTORY POPUP ---
    if state.show_history {
        let area = centered_rect(50, 60, f.area());
        let history = state.controller.history();
        let mut lines: Vec<Line> = vec![
            Line::from(format!(
                "Undo steps: {}  Redo steps: {}",
                history.undo_depth(),
                history.redo_depth()
            )),
            Line::from(""),
        ];
        if state.command_history.is_empty() {
            lines.push(Line::from("No commands in history."));
        } else {
            lines.extend(
                state
                    .command_history
                    .iter()
                    .enumerate()
                    .map(|(i, c)| Line::from(format!("{:>2}. {}", i + 1, c))),
            );
        }
        let popup = Paragraph::new(lines).style(base).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .title(" Command History (any key to close) "),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

// Past the "> " prefix, clamped inside the right border.
fn input_cursor_x(area: Rect, input_len: usize) -> u16 {
    let len = u16::try_from(input_len).unwrap_or(u16::MAX);
    area.x
        .saturating_add(3)
        .saturating_add(len)
        .min(area.right().saturating_sub(2))
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controller::TaskController;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draws_tasks_and_details() {
        let mut c = TaskController::default();
        c.add_task(("Buy milk", "two litres")).unwrap();
        let mut state = AppState::new(c, Config::default());
        let screen = render(&mut state);
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Tasks (1)"));
        assert!(screen.contains("Description: two litres"));
    }

    #[test]
    fn test_cursor_clamped_for_long_input() {
        let area = Rect::new(0, 17, 100, 3);
        assert_eq!(input_cursor_x(area, 4), 7);
        assert_eq!(input_cursor_x(area, 70_000), 98);
        assert_eq!(input_cursor_x(area, usize::MAX), 98);
    }

    #[test]
    fn test_long_input_renders() {
        let mut state = AppState::new(TaskController::default(), Config::default());
        state.begin_input(InputMode::AddingTitle, &"x".repeat(70_000));
        let screen = render(&mut state);
        assert!(screen.contains("Enter task title"));
    }

    #[test]
    fn test_draws_history_popup() {
        let mut state = AppState::new(TaskController::default(), Config::default());
        state.push_command("List Tasks");
        state.show_history = true;
        let screen = render(&mut state);
        assert!(screen.contains("Command History"));
        assert!(screen.contains("1. List Tasks"));
    }

    #[test]
    fn test_history_popup_shows_depths() {
        let mut c = TaskController::default();
        c.add_task(("A", "d")).unwrap();
        c.add_task(("B", "d")).unwrap();
        c.undo().unwrap();
        let mut state = AppState::new(c, Config::default());
        state.show_history = true;
        let screen = render(&mut state);
        assert!(screen.contains("Undo steps: 1  Redo steps: 1"));
    }

    #[test]
    fn test_lenient_mode_in_header() {
        let c = TaskController::new(ValidationMode::Lenient);
        let mut state = AppState::new(c, Config::default());
        assert!(render(&mut state).contains("Task Manager [lenient]"));

        let mut state = AppState::new(TaskController::default(), Config::default());
        assert!(!render(&mut state).contains("[lenient]"));
    }
}
