//! Core display types and shared cheat-sheet primitives.
//!
//! This crate defines the data handed to a keybind cheat-sheet UI:
//!
//! - [`Bind`] — one keybinding row: a canonical key combo plus a
//!   human-readable description.
//! - [`Category`] — a titled, ordered group of binds.
//! - [`merge_categories`] — combines same-titled categories from one or
//!   more parse results, preserving first-seen order.
//! - [`validate_categories`] — checks the display invariants (non-empty
//!   titles, non-empty categories, described binds) on externally supplied
//!   data.
//!
//! The parsing engine that produces these values from Hyprland-style
//! configuration text lives in the `hypr-cheatsheet-parser` crate.
//!
//! # Example
//!
//! ```
//! use hypr_cheatsheet_core::*;
//!
//! let fragment_a = vec![
//!     Category::new("Applications").with_bind(Bind::new("Super + T", "Launch terminal")),
//! ];
//! let fragment_b = vec![
//!     Category::new("Applications").with_bind(Bind::new("Super + B", "Launch browser")),
//!     Category::new("Media").with_bind(Bind::new("XF86AUDIOMUTE", "Toggle mute")),
//! ];
//!
//! let merged = merge_categories(fragment_a.into_iter().chain(fragment_b));
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].binds.len(), 2);
//! assert!(validate_categories(&merged).is_empty());
//! ```

mod merge;
mod types;
mod validate;

pub use merge::merge_categories;
pub use types::{Bind, Category, DEFAULT_CATEGORY_TITLE};
pub use validate::{ValidationError, validate_categories};
