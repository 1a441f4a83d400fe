// Defines menu commands and the side effects the TUI loop must perform.
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuCommand {
    AddTask,
    RemoveTask,
    ListTasks,
    MarkComplete,
    MarkIncomplete,
    ViewHistory,
    ChangeTheme,
    Exit,
    Undo,
    Redo,
    Search,
    CycleSort,
}

impl MenuCommand {
    pub fn key(self) -> char {
        match self {
            MenuCommand::AddTask => '1',
            MenuCommand::RemoveTask => '2',
            MenuCommand::ListTasks => '3',
            MenuCommand::MarkComplete => '4',
            MenuCommand::MarkIncomplete => '5',
            MenuCommand::ViewHistory => '6',
            MenuCommand::ChangeTheme => '7',
            MenuCommand::Exit => '8',
            MenuCommand::Undo => 'u',
            MenuCommand::Redo => 'r',
            MenuCommand::Search => '/',
            MenuCommand::CycleSort => 's',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddTask => "Add Task",
            MenuCommand::RemoveTask => "Remove Task",
            MenuCommand::ListTasks => "List Tasks",
            MenuCommand::MarkComplete => "Mark Task as Complete",
            MenuCommand::MarkIncomplete => "Mark Task as Incomplete",
            MenuCommand::ViewHistory => "View Command History",
            MenuCommand::ChangeTheme => "Change Theme",
            MenuCommand::Exit => "Exit",
            MenuCommand::Undo => "Undo",
            MenuCommand::Redo => "Redo",
            MenuCommand::Search => "Search",
            MenuCommand::CycleSort => "Sort",
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        if c == 'q' {
            return Some(MenuCommand::Exit);
        }
        MenuCommand::iter().find(|m| m.key() == c)
    }
}

/// Effects handled by the main loop, which owns the terminal and the context.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    SaveConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<char> = MenuCommand::iter().map(|m| m.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), MenuCommand::iter().count());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(MenuCommand::from_key('1'), Some(MenuCommand::AddTask));
        assert_eq!(MenuCommand::from_key('q'), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_key('9'), None);
    }
}
