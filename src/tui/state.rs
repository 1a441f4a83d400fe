// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::{AppTheme, Config};
use crate::controller::TaskController;
use crate::model::{SortKey, Task};
use crate::query::FilterOptions;
use ratatui::widgets::ListState;
use std::collections::VecDeque;

pub const COMMAND_HISTORY_LEN: usize = 50;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    AddingTitle,
    AddingDescription,
    Removing,
    Completing,
    Incompleting,
    Searching,
    ChoosingTheme,
}

impl InputMode {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::AddingTitle => "Enter task title",
            InputMode::AddingDescription => "Enter task description",
            InputMode::Removing => "Enter task title to remove",
            InputMode::Completing => "Enter task title to mark as complete",
            InputMode::Incompleting => "Enter task title to mark as incomplete",
            InputMode::Searching => "Search keywords (space separated, any match)",
            InputMode::ChoosingTheme => "Choose a theme: 1. Default  2. Dark Mode  3. Light Mode",
        }
    }

    pub fn takes_text(&self) -> bool {
        !matches!(self, InputMode::Normal | InputMode::ChoosingTheme)
    }
}

pub struct AppState {
    // Data
    pub controller: TaskController,
    pub config: Config,
    pub tasks: Vec<Task>,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub show_history: bool,

    // Input Buffers
    pub input_buffer: String,
    pub pending_title: Option<String>,
    pub active_search: String,
    pub sort_key: Option<SortKey>,

    pub command_history: VecDeque<String>,
}

impl AppState {
    pub fn new(controller: TaskController, config: Config) -> Self {
        let mut state = Self {
            controller,
            config,
            tasks: Vec::new(),
            list_state: ListState::default(),
            mode: InputMode::Normal,
            message: "Choose a menu option.".to_string(),
            show_history: false,
            input_buffer: String::new(),
            pending_title: None,
            active_search: String::new(),
            sort_key: None,
            command_history: VecDeque::with_capacity(COMMAND_HISTORY_LEN),
        };
        state.refresh_filtered_view();
        state
    }

    pub fn theme(&self) -> AppTheme {
        self.config.theme
    }

    pub fn push_command(&mut self, command: impl Into<String>) {
        if self.command_history.len() == COMMAND_HISTORY_LEN {
            self.command_history.pop_front();
        }
        self.command_history.push_back(command.into());
    }

    /// Rebuilds the visible list from the store and the active search.
    pub fn refresh_filtered_view(&mut self) {
        let keywords: Vec<String> = self
            .active_search
            .split_whitespace()
            .map(str::to_string)
            .collect();
        self.tasks = self.controller.filter(&FilterOptions {
            keywords,
            ..FilterOptions::default()
        });

        let len = self.tasks.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(idx));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|i| self.tasks.get(i))
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.tasks.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.tasks.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Enters a text prompt, pre-filled with `initial`.
    pub fn begin_input(&mut self, mode: InputMode, initial: &str) {
        self.mode = mode;
        self.input_buffer = initial.to_string();
    }

    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input_buffer.clear();
        self.pending_title = None;
    }
}
