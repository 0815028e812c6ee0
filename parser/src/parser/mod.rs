//! Keybind configuration parser.
//!
//! This module implements the single-pass walk over concatenated
//! configuration text. Modifier variables are resolved up front from the
//! full text, then each line is classified in a fixed order:
//!
//! - **Category header** — one of five comment styles opens a new category
//!   (pure decoration rows are classified out first).
//! - **Bind statement** — `bindd` with a native description field, or any
//!   other `bind` variant with a trailing `#` comment description.
//! - Anything else is noise and is skipped.
//!
//! Categories are emitted in first-appearance order, and only when they
//! hold at least one described bind — that includes the implicit
//! "General" bucket open before the first header.
//!
//! The primary entry point is [`ConfigParser::new`] followed by
//! [`ConfigParser::parse`]; most consumers should use the higher-level
//! [`parse_config`](crate::parse_config) function instead.

mod bind;
mod combo;
mod header;
mod modifiers;

use tracing::debug;

use hypr_cheatsheet_core::{Category, DEFAULT_CATEGORY_TITLE};

pub use bind::{BindLine, parse_bind_line};
pub use combo::format_key_combo;
pub use header::parse_category_header;
pub use modifiers::{ModifierMap, expand_modifiers, resolve_modifiers};

/// Skipped bind statements kept verbatim in diagnostics, at most.
const SKIPPED_SAMPLE_LIMIT: usize = 16;

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// Recognized headers plus every line matching the bind keyword.
    pub relevant_lines: usize,
    /// Recognized headers plus bind statements that produced a row.
    pub recognized_lines: usize,
    /// Bind statements that yielded no cheat-sheet row.
    pub skipped_binds: usize,
    /// Sample of skipped bind statements, as they appeared in the input.
    pub unresolved_lines: Vec<String>,
}

impl ParseDiagnostics {
    /// Share of relevant lines that produced output, in `0.0..=1.0`.
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }
}

/// Parser for concatenated keybind configuration text.
///
/// The input is one string: the caller-chosen concatenation of any number
/// of configuration fragments. The parser has no notion of file boundaries
/// and never raises — malformed lines degrade to skips that show up only
/// in [`ParseDiagnostics`].
pub struct ConfigParser {
    raw_text: String,
    warnings: Vec<String>,
    diagnostics: ParseDiagnostics,
}

impl ConfigParser {
    /// Creates a new parser over the given configuration text.
    pub fn new(config_text: &str) -> Self {
        Self {
            raw_text: config_text.to_string(),
            warnings: Vec::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Parses the text and returns display categories in first-appearance
    /// order.
    ///
    /// Repeated calls are idempotent: warnings and diagnostics are rebuilt
    /// from scratch each time, and the same input always yields the same
    /// categories.
    pub fn parse(&mut self) -> Vec<Category> {
        self.warnings.clear();
        self.diagnostics = ParseDiagnostics::default();

        let modifiers = resolve_modifiers(&self.raw_text);
        debug!(definitions = modifiers.len(), "resolved modifier variables");
        if modifiers.aliases_diverge() {
            self.warnings.push(
                "$mod and $mainmod are defined with different values; both definitions are kept"
                    .to_string(),
            );
        }

        let mut categories = Vec::new();
        let mut current = Category::new(DEFAULT_CATEGORY_TITLE);

        for line in self.raw_text.lines() {
            if let Some(title) = parse_category_header(line) {
                self.diagnostics.relevant_lines += 1;
                self.diagnostics.recognized_lines += 1;
                if !current.binds.is_empty() {
                    debug!(title = %current.title, binds = current.binds.len(), "category complete");
                    categories.push(current);
                }
                current = Category::new(title);
                continue;
            }

            match parse_bind_line(line, &modifiers) {
                BindLine::Parsed(bind) => {
                    self.diagnostics.relevant_lines += 1;
                    self.diagnostics.recognized_lines += 1;
                    current.binds.push(bind);
                }
                BindLine::Skipped => {
                    self.diagnostics.relevant_lines += 1;
                    self.diagnostics.skipped_binds += 1;
                    if self.diagnostics.unresolved_lines.len() < SKIPPED_SAMPLE_LIMIT {
                        self.diagnostics.unresolved_lines.push(line.trim().to_string());
                    }
                }
                BindLine::NotABind => {}
            }
        }

        if !current.binds.is_empty() {
            debug!(title = %current.title, binds = current.binds.len(), "category complete");
            categories.push(current);
        }

        categories
    }

    /// Warnings accumulated by the last parse.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Diagnostics for the last parse.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_bucket_vanishes_without_binds() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             ### Applications ###\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n",
        );
        let categories = parser.parse();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Applications");
    }

    #[test]
    fn test_general_bucket_survives_when_it_has_binds() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n\
             ### Applications ###\n\
             bindd = $mainMod, B, Launch browser, exec, firefox\n",
        );
        let categories = parser.parse();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].title, DEFAULT_CATEGORY_TITLE);
        assert_eq!(categories[1].title, "Applications");
    }

    #[test]
    fn test_header_without_binds_vanishes() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             ### Empty Section ###\n\
             ### Applications ###\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n",
        );
        let categories = parser.parse();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Applications");
    }

    #[test]
    fn test_decoration_does_not_close_current_category() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             ### Applications ###\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n\
             ##########\n\
             bindd = $mainMod, B, Launch browser, exec, firefox\n",
        );
        let categories = parser.parse();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].binds.len(), 2);
    }

    #[test]
    fn test_binds_keep_source_line_order() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             # 1. Focus\n\
             bind = $mainMod, H, movefocus, l # Focus left\n\
             bind = $mainMod, J, movefocus, d # Focus down\n\
             bind = $mainMod, K, movefocus, u # Focus up\n",
        );
        let categories = parser.parse();

        let descs: Vec<_> = categories[0]
            .binds
            .iter()
            .map(|b| b.desc.as_str())
            .collect();
        assert_eq!(descs, vec!["Focus left", "Focus down", "Focus up"]);
    }

    #[test]
    fn test_diagnostics_count_skipped_binds() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             ### Applications ###\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n\
             bind = $mainMod, J, movefocus, d\n",
        );
        parser.parse();

        let diagnostics = parser.diagnostics();
        assert_eq!(diagnostics.relevant_lines, 3);
        assert_eq!(diagnostics.recognized_lines, 2);
        assert_eq!(diagnostics.skipped_binds, 1);
        assert_eq!(diagnostics.unresolved_lines.len(), 1);
        assert!((diagnostics.coverage() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_divergent_aliases_produce_a_warning_but_identical_output() {
        let text = "$mod = SUPER\n\
                    $mainMod = SUPER ALT\n\
                    bindd = $mod, T, Launch terminal, exec, kitty\n\
                    bindd = $mainMod, B, Launch browser, exec, firefox\n";

        let mut parser = ConfigParser::new(text);
        let categories = parser.parse();

        assert_eq!(parser.warnings().len(), 1);
        assert_eq!(categories[0].binds[0].keys, "Super + T");
        assert_eq!(categories[0].binds[1].keys, "Super + Alt + B");
    }

    #[test]
    fn test_repeated_parse_is_deterministic() {
        let mut parser = ConfigParser::new(
            "$mainMod = SUPER\n\
             ### Applications ###\n\
             bindd = $mainMod, T, Launch terminal, exec, kitty\n\
             bind = $mainMod, X, exec, thing\n",
        );
        let first = parser.parse();
        let first_skipped = parser.diagnostics().skipped_binds;
        let second = parser.parse();

        assert_eq!(first, second);
        assert_eq!(parser.diagnostics().skipped_binds, first_skipped);
    }

    #[test]
    fn test_empty_input_yields_no_categories() {
        assert!(ConfigParser::new("").parse().is_empty());
        assert_eq!(ConfigParser::new("").diagnostics().coverage(), 0.0);
    }
}
