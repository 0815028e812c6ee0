//! Structural validation of cheat-sheet data.
//!
//! The parser upholds these invariants by construction; validation exists
//! for data that arrives from other sources (deserialized caches,
//! hand-assembled categories) before it reaches a UI.
//!
//! # Examples
//!
//! ```
//! use hypr_cheatsheet_core::{Bind, Category, validate_categories};
//!
//! let good = vec![Category::new("Apps").with_bind(Bind::new("Super + T", "Terminal"))];
//! assert!(validate_categories(&good).is_empty());
//!
//! let bad = vec![Category::new("Apps")];
//! assert!(!validate_categories(&bad).is_empty());
//! ```

use thiserror::Error;

use crate::Category;

/// Cheat-sheet validation errors.
///
/// Each variant describes a specific structural problem. The `Display` impl
/// provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Category title is empty or whitespace-only.
    #[error("category title cannot be empty")]
    EmptyCategoryTitle,
    /// Category holds no binds.
    #[error("category has no binds: {0}")]
    CategoryWithoutBinds(String),
    /// A bind carries an empty description.
    #[error("bind has no description: {0}")]
    BindWithoutDescription(String),
}

/// Validates a sequence of display categories.
///
/// Checks every category and bind and returns all problems found, in source
/// order. An empty result means the data satisfies the display invariants:
/// non-empty titles, at least one bind per category, and a non-empty
/// description on every bind.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_core::{Bind, Category, ValidationError, validate_categories};
///
/// let categories = vec![Category::new("Apps").with_bind(Bind::new("Super + T", ""))];
/// let errors = validate_categories(&categories);
/// assert_eq!(
///     errors,
///     vec![ValidationError::BindWithoutDescription("Super + T".to_string())]
/// );
/// ```
pub fn validate_categories(categories: &[Category]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for category in categories {
        if category.title.trim().is_empty() {
            errors.push(ValidationError::EmptyCategoryTitle);
        }
        if category.binds.is_empty() {
            errors.push(ValidationError::CategoryWithoutBinds(
                category.title.clone(),
            ));
        }
        for bind in &category.binds {
            if bind.desc.trim().is_empty() {
                errors.push(ValidationError::BindWithoutDescription(bind.keys.clone()));
            }
        }
    }

    errors
}
