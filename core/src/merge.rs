//! Category merging across configuration fragments.
//!
//! A caller that parses several configuration fragments separately (or
//! concatenates parse results from multiple sources) ends up with repeated
//! category titles. [`merge_categories`] combines them: binds of same-titled
//! categories are concatenated in encounter order, and the output keeps the
//! first-seen order of titles.
//!
//! Grouping pairs a title→slot index with an append-only vector rather than
//! iterating a map, so the output order is deterministic on every platform.
//!
//! # Example
//!
//! ```
//! use hypr_cheatsheet_core::{Bind, Category, merge_categories};
//!
//! let first = Category::new("Applications").with_bind(Bind::new("Super + T", "Terminal"));
//! let second = Category::new("Media").with_bind(Bind::new("XF86AUDIOMUTE", "Mute"));
//! let third = Category::new("Applications").with_bind(Bind::new("Super + B", "Browser"));
//!
//! let merged = merge_categories([first, second, third]);
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].title, "Applications");
//! assert_eq!(merged[0].binds.len(), 2);
//! assert_eq!(merged[1].title, "Media");
//! ```

use std::collections::HashMap;

use crate::Category;

/// Merges categories of identical title into one category each.
///
/// Titles are compared exactly (case-sensitive). Bind sequences are
/// concatenated in the order the groups are encountered; output categories
/// appear in first-seen-title order. Groups left without any bind are
/// dropped from the output.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_core::{Bind, Category, merge_categories};
///
/// // Case-sensitive titles stay separate.
/// let merged = merge_categories([
///     Category::new("media").with_bind(Bind::new("A", "a")),
///     Category::new("Media").with_bind(Bind::new("B", "b")),
/// ]);
/// assert_eq!(merged.len(), 2);
///
/// // Empty groups vanish.
/// let merged = merge_categories([Category::new("Empty")]);
/// assert!(merged.is_empty());
/// ```
pub fn merge_categories(categories: impl IntoIterator<Item = Category>) -> Vec<Category> {
    let mut slot_by_title: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Category> = Vec::new();

    for category in categories {
        match slot_by_title.get(&category.title) {
            Some(&slot) => merged[slot].binds.extend(category.binds),
            None => {
                slot_by_title.insert(category.title.clone(), merged.len());
                merged.push(category);
            }
        }
    }

    merged.retain(|category| !category.binds.is_empty());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bind;

    fn category(title: &str, descs: &[&str]) -> Category {
        let mut category = Category::new(title);
        for desc in descs {
            category.binds.push(Bind::new("Super + X", *desc));
        }
        category
    }

    #[test]
    fn test_merge_concatenates_same_title_in_encounter_order() {
        let merged = merge_categories([
            category("Focus", &["left"]),
            category("Apps", &["terminal"]),
            category("Focus", &["right"]),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "Focus");
        assert_eq!(
            merged[0]
                .binds
                .iter()
                .map(|b| b.desc.as_str())
                .collect::<Vec<_>>(),
            vec!["left", "right"]
        );
        assert_eq!(merged[1].title, "Apps");
    }

    #[test]
    fn test_merge_preserves_first_seen_title_order() {
        let merged = merge_categories([
            category("C", &["1"]),
            category("A", &["2"]),
            category("B", &["3"]),
            category("A", &["4"]),
        ]);

        let titles: Vec<_> = merged.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_merge_drops_empty_groups() {
        let merged = merge_categories([
            category("Empty", &[]),
            category("Apps", &["terminal"]),
            category("Empty", &[]),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Apps");
    }

    #[test]
    fn test_merge_is_associative_for_non_empty_inputs() {
        let a = category("X", &["1"]);
        let b = category("Y", &["2"]);
        let c = category("X", &["3"]);

        let two_step = merge_categories(
            merge_categories([a.clone(), b.clone()])
                .into_iter()
                .chain([c.clone()]),
        );
        let one_step = merge_categories([a, b, c]);

        assert_eq!(two_step, one_step);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert!(merge_categories(std::iter::empty::<Category>()).is_empty());
    }
}
