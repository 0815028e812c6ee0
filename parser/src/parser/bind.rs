//! Bind-statement parsing.
//!
//! Recognizes the `bind` statement family (`bind`, `bindd`, `binde`,
//! `bindl`, `bindel`, `bindm`, ...) and extracts a display bind from it.
//! Descriptions come from one of two conventions: `bindd` carries the
//! description as an explicit third field, every other variant may carry it
//! as a trailing `#` comment.

use regex::Regex;
use std::sync::LazyLock;

use hypr_cheatsheet_core::Bind;

use super::combo::format_key_combo;
use super::modifiers::{ModifierMap, expand_modifiers};

static PATTERNS: LazyLock<BindPatterns> = LazyLock::new(BindPatterns::new);

struct BindPatterns {
    // bind= with an optional suffix of d/e/l/m flag characters
    keyword: Regex,
    // trailing #"quoted description"
    quoted_comment: Regex,
    // trailing # unquoted text
    trailing_comment: Regex,
}

impl BindPatterns {
    fn new() -> Self {
        Self {
            keyword: Regex::new(r"(?i)^(bind[delm]*)\s*=\s*(.+)$")
                .expect("static regex must compile"),
            quoted_comment: Regex::new(r#"#"([^"]+)"\s*$"#).expect("static regex must compile"),
            trailing_comment: Regex::new(r"#\s*([^#]+?)\s*$").expect("static regex must compile"),
        }
    }
}

/// Outcome of examining one line as a bind statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindLine {
    /// A bind statement with a usable description.
    Parsed(Bind),
    /// A bind statement that yields no cheat-sheet row: too few fields, or
    /// no recoverable description.
    Skipped,
    /// Not a bind statement at all.
    NotABind,
}

/// Examines one line as a bind statement.
///
/// Empty lines and comment lines are never binds. A recognized statement
/// is comma-split into trimmed fields (modifiers, key, rest); the modifier
/// field is expanded against `modifiers` before formatting. Statements
/// without a usable description are skipped, not errors.
pub fn parse_bind_line(line: &str, modifiers: &ModifierMap) -> BindLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return BindLine::NotABind;
    }

    let Some(caps) = PATTERNS.keyword.captures(trimmed) else {
        return BindLine::NotABind;
    };
    let keyword = caps[1].to_lowercase();
    let rest = caps.get(2).map_or("", |m| m.as_str());

    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return BindLine::Skipped;
    }

    let mods = expand_modifiers(fields[0], modifiers);
    let key = fields[1];

    let description = if keyword == "bindd" {
        // Native form: bindd = mods, key, description, dispatcher, args
        Some(fields[2]).filter(|d| !d.is_empty()).map(str::to_string)
    } else {
        // Comment form: bind = mods, key, dispatcher, args #"description"
        comment_description(rest)
    };

    match description {
        Some(desc) => BindLine::Parsed(Bind::new(format_key_combo(&mods, key), desc)),
        None => BindLine::Skipped,
    }
}

/// Recovers a description from trailing comment text on the statement.
///
/// The quoted form wins over the unquoted form. An unquoted candidate is
/// accepted only when it contains neither `://` nor `/` and does not open
/// with a quote character, which keeps URLs and filesystem paths that
/// happen to follow a `#` out of the cheat sheet.
fn comment_description(rest: &str) -> Option<String> {
    if let Some(caps) = PATTERNS.quoted_comment.captures(rest) {
        return Some(caps[1].to_string());
    }

    let caps = PATTERNS.trailing_comment.captures(rest)?;
    let candidate = &caps[1];
    if candidate.contains("://") || candidate.contains('/') || candidate.starts_with('"') {
        return None;
    }
    Some(candidate.to_string())
}
