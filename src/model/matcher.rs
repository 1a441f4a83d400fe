// Per-task predicates used by the query engine.
//
// All text matching is case-insensitive substring matching on title and
// description. Category and tag checks are exact.

use crate::model::item::{Task, TaskStatus};
use std::collections::BTreeSet;

impl Task {
    pub fn has_status(&self, status: TaskStatus) -> bool {
        self.status == status
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// OR semantics: true if any keyword matches. An empty list matches nothing.
    pub fn matches_any_keyword<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.matches_keyword(k.as_ref()))
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Exact match of the whole "/"-split category against `segments`.
    /// "Work/Project A" matches ["Work", "Project A"] but not ["Work"].
    pub fn in_category_path<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        if self.category.is_none() {
            return false;
        }
        let path = self.category_path();
        path.len() == segments.len() && path.iter().zip(segments).all(|(a, b)| *a == b.as_ref())
    }

    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        !self.tags.is_disjoint(tags)
    }
}
