/*
 * taskpad/src/history.rs
 *
 * Snapshot-based undo/redo for a single `TaskStore`.
 *
 * Every mutation pushes a deep copy of the pre-mutation store onto the undo
 * stack and clears the redo stack. Undo and redo swap whole snapshots, so
 * they restore titles, descriptions, statuses, extension fields and order.
 */

use crate::error::{TaskError, TaskResult};
use crate::store::TaskStore;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: VecDeque<TaskStore>,
    redo_stack: Vec<TaskStore>,
    /// Maximum number of undo snapshots kept. `None` keeps everything.
    limit: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Records `current` as the state to return to, before a mutation is applied.
    pub fn record(&mut self, current: &TaskStore) {
        self.push_undo(current.clone());
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, current: &mut TaskStore) -> TaskResult<()> {
        let previous = self.undo_stack.pop_back().ok_or(TaskError::NothingToUndo)?;
        let now = std::mem::replace(current, previous);
        self.redo_stack.push(now);
        Ok(())
    }

    pub fn redo(&mut self, current: &mut TaskStore) -> TaskResult<()> {
        let next = self.redo_stack.pop().ok_or(TaskError::NothingToRedo)?;
        let now = std::mem::replace(current, next);
        self.push_undo(now);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn push_undo(&mut self, snapshot: TaskStore) {
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewTask;

    fn store_with(titles: &[&str]) -> TaskStore {
        let mut s = TaskStore::new();
        for t in titles {
            s.add(NewTask::new(*t, "d")).unwrap();
        }
        s
    }

    #[test]
    fn test_empty_history_reports_nothing() {
        let mut h = HistoryManager::new();
        let mut s = store_with(&["A"]);
        assert_eq!(h.undo(&mut s), Err(TaskError::NothingToUndo));
        assert_eq!(h.redo(&mut s), Err(TaskError::NothingToRedo));
        assert_eq!(s.titles(), vec!["A"]);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut h = HistoryManager::new();
        let mut s = store_with(&[]);
        h.record(&s);
        s.add(NewTask::new("A", "d")).unwrap();
        h.undo(&mut s).unwrap();
        assert!(h.can_redo());

        h.record(&s);
        s.add(NewTask::new("B", "d")).unwrap();
        assert!(!h.can_redo());
        assert_eq!(h.undo_depth(), 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut h = HistoryManager::with_limit(Some(2));
        let mut s = store_with(&[]);
        for t in ["A", "B", "C"] {
            h.record(&s);
            s.add(NewTask::new(t, "d")).unwrap();
        }
        assert_eq!(h.undo_depth(), 2);
        h.undo(&mut s).unwrap();
        h.undo(&mut s).unwrap();
        assert_eq!(s.titles(), vec!["A"]);
        assert_eq!(h.undo(&mut s), Err(TaskError::NothingToUndo));
    }
}
