//! Display type definitions for keybind cheat sheets.
//!
//! This module defines the data model handed to a cheat-sheet UI. The types
//! are designed for serialization with [`serde`] and carry no knowledge of
//! where the underlying configuration text came from.

use serde::{Deserialize, Serialize};

/// Title of the implicit category that collects binds appearing before any
/// recognized header line.
///
/// The bucket only survives into output when it actually receives binds.
pub const DEFAULT_CATEGORY_TITLE: &str = "General";

/// A single keybinding entry as shown on a cheat sheet.
///
/// `keys` holds the canonical display combo (modifiers in fixed
/// `Super, Ctrl, Alt, Shift` order, joined with `" + "`); `desc` holds the
/// human-readable description. A bind without a description is never
/// constructed by the parser — the cheat sheet has nothing to show for it.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_core::Bind;
///
/// let bind = Bind::new("Super + T", "Launch terminal");
/// assert_eq!(bind.keys, "Super + T");
/// assert_eq!(bind.desc, "Launch terminal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind {
    /// Canonical key-combo display string (e.g., "Super + Shift + Q")
    pub keys: String,
    /// Human-readable description of what the bind does
    pub desc: String,
}

impl Bind {
    /// Creates a bind from a formatted combo and a description.
    pub fn new(keys: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            desc: desc.into(),
        }
    }
}

/// A named grouping of binds for display.
///
/// Categories come from recognized header lines in the configuration text,
/// or default to [`DEFAULT_CATEGORY_TITLE`]. Binds keep the relative order
/// of their source lines.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_core::{Bind, Category};
///
/// let category = Category::new("Applications")
///     .with_bind(Bind::new("Super + T", "Launch terminal"))
///     .with_bind(Bind::new("Super + Shift + Q", "Kill window"));
///
/// assert_eq!(category.title, "Applications");
/// assert_eq!(category.binds.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display title for the grouping
    pub title: String,
    /// Binds in source line order
    pub binds: Vec<Bind>,
}

impl Category {
    /// Creates an empty category with the given title.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypr_cheatsheet_core::Category;
    ///
    /// let category = Category::new("Window Focus");
    /// assert!(category.binds.is_empty());
    /// ```
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            binds: Vec::new(),
        }
    }

    /// Adds a bind to this category.
    pub fn with_bind(mut self, bind: Bind) -> Self {
        self.binds.push(bind);
        self
    }

    /// Total number of binds in this category.
    pub fn bind_count(&self) -> usize {
        self.binds.len()
    }
}
