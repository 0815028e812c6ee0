//! Keybind cheat-sheet extraction from Hyprland-style configuration text.
//!
//! This crate turns one concatenated blob of window-manager configuration
//! text into ordered display categories of described keybindings. It
//! understands exactly two corners of the configuration language — modifier
//! variable assignments and `bind` statements — plus five comment styles
//! used as category headers:
//!
//! - **Native descriptions** — `bindd = mods, key, description, ...`
//! - **Comment descriptions** — `bind = mods, key, dispatcher, args # text`
//!   (quoted `#"text"` or unquoted, with URL/path false positives rejected)
//! - **Headers** — numbered (`# 1. Title`), banner (`### Title ###`),
//!   separator (`# === Title ===`), and bracketed (`# [Title]`) styles;
//!   decoration rows are never headers.
//!
//! Parsing is total: no input can fail, malformed lines are skipped, and
//! the only observable failure is an empty result.
//!
//! # Main entry points
//!
//! - [`parse_config`] — parse a configuration blob into categories.
//! - [`parse_config_with_report`] — same, plus a structured
//!   [`ParseReport`] with coverage metrics and warnings.
//!
//! Acquiring the text (finding config files, concatenating them) is the
//! caller's responsibility; the parser consumes a finished string and has
//! no knowledge of files or processes.
//!
//! # Example
//!
//! ```
//! use hypr_cheatsheet_parser::parse_config;
//!
//! let config = "\
//! $mainMod = SUPER
//!
//! ### Applications ###
//! bindd = $mainMod, T, Launch terminal, exec, kitty
//!
//! # 1. Window Focus
//! bind = $mainMod, H, movefocus, l # Focus left
//! ";
//!
//! let categories = parse_config(config);
//! assert_eq!(categories.len(), 2);
//! assert_eq!(categories[0].title, "Applications");
//! assert_eq!(categories[0].binds[0].keys, "Super + T");
//! assert_eq!(categories[1].binds[0].desc, "Focus left");
//! ```

pub mod parser;
pub mod report;

use hypr_cheatsheet_core::Category;

use parser::ConfigParser;
use report::ParseReport;

/// Result of a reported parse run.
#[derive(Debug, Clone)]
pub struct ParseRun {
    /// Display categories in first-appearance order.
    pub categories: Vec<Category>,
    /// Outcome and coverage metrics for the run.
    pub report: ParseReport,
}

/// Parses a configuration blob into display categories.
///
/// This is the primary entry point. Categories appear in first-appearance
/// order; every category holds at least one bind and every bind carries a
/// non-empty description. An empty result means the input contained no
/// usable, described keybindings.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_parser::parse_config;
///
/// let categories = parse_config("bind = SUPER, Return, exec, kitty # Open terminal");
/// assert_eq!(categories.len(), 1);
/// assert_eq!(categories[0].title, "General");
/// assert_eq!(categories[0].binds[0].keys, "Super + RETURN");
/// ```
pub fn parse_config(config_text: &str) -> Vec<Category> {
    let mut parser = ConfigParser::new(config_text);
    parser.parse()
}

/// Parses a configuration blob with full reporting.
///
/// Like [`parse_config`], but additionally produces a [`ParseReport`] with
/// the success flag, category/bind counts, line coverage, a sample of
/// skipped bind statements, and warnings.
///
/// # Examples
///
/// ```
/// use hypr_cheatsheet_parser::parse_config_with_report;
///
/// let run = parse_config_with_report("# nothing bindable here");
/// assert!(!run.report.success);
/// assert!(run.categories.is_empty());
/// ```
pub fn parse_config_with_report(config_text: &str) -> ParseRun {
    let mut parser = ConfigParser::new(config_text);
    let categories = parser.parse();
    let diagnostics = parser.diagnostics();

    let report = ParseReport {
        success: !categories.is_empty(),
        categories: categories.len(),
        binds: categories.iter().map(|c| c.binds.len()).sum(),
        coverage: diagnostics.coverage(),
        relevant_lines: diagnostics.relevant_lines,
        recognized_lines: diagnostics.recognized_lines,
        skipped_binds: diagnostics.skipped_binds,
        unresolved_lines: diagnostics.unresolved_lines.clone(),
        warnings: parser.warnings().to_vec(),
    };

    ParseRun { categories, report }
}
