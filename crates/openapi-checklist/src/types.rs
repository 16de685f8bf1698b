//! Type definitions for checklist extraction

use crate::summary::clean_summary;
use std::fmt;

/// A single checklist line: one operation under one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    /// URL path (e.g., "/uapi/domestic-stock/v1/trading/order-cash")
    pub path: String,
    /// Operation key under the path, usually an HTTP method ("get", "post")
    pub method: String,
    /// Summary as written in the document, before cleanup
    pub summary: Option<String>,
}

impl ChecklistItem {
    pub fn new(path: impl Into<String>, method: impl Into<String>, summary: Option<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            summary,
        }
    }

    /// Summary with markers removed, if the operation has one
    pub fn cleaned_summary(&self) -> Option<String> {
        self.summary.as_deref().map(clean_summary)
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cleaned_summary() {
            Some(summary) => write!(f, "- [ ] {} ({}) : {}", self.path, self.method, summary),
            None => write!(f, "- [ ] {} ({})", self.path, self.method),
        }
    }
}

/// All checklist items of a document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChecklistItem> {
        self.items.iter()
    }

    /// Rendered lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a ChecklistItem;
    type IntoIter = std::slice::Iter<'a, ChecklistItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_summary() {
        let item = ChecklistItem::new("/a", "get", Some("J_Fetch thing".to_string()));
        assert_eq!(item.to_string(), "- [ ] /a (get) : Fetch thing");
    }

    #[test]
    fn test_display_without_summary() {
        let item = ChecklistItem::new("/b", "post", None);
        assert_eq!(item.to_string(), "- [ ] /b (post)");
    }

    #[test]
    fn test_empty_summary_keeps_separator() {
        let item = ChecklistItem::new("/c", "put", Some("J_".to_string()));
        assert_eq!(item.to_string(), "- [ ] /c (put) : ");
    }

    #[test]
    fn test_lines_follow_item_order() {
        let checklist = Checklist::new(vec![
            ChecklistItem::new("/z", "get", None),
            ChecklistItem::new("/a", "get", Some("List".to_string())),
        ]);

        assert_eq!(checklist.len(), 2);
        assert_eq!(
            checklist.lines(),
            vec!["- [ ] /z (get)".to_string(), "- [ ] /a (get) : List".to_string()]
        );
    }
}
