//! Category header recognition.
//!
//! Config authors mark sections in several comment styles. Five of them are
//! recognized here; pure decoration rows (hash runs, comment rules) are
//! rejected first so visual dividers never open a category.

use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<HeaderPatterns> = LazyLock::new(HeaderPatterns::new);

struct HeaderPatterns {
    // ########## on its own
    hash_run: Regex,
    // # ======== or # --------
    comment_rule: Regex,
    // # 1. Category
    numbered: Regex,
    // ### Category ###
    banner: Regex,
    // # === Category === or # --- Category ---
    separator: Regex,
    // # [Category] or # {Category}
    bracketed: Regex,
}

impl HeaderPatterns {
    fn new() -> Self {
        Self {
            hash_run: Regex::new(r"^#{3,}$").expect("static regex must compile"),
            comment_rule: Regex::new(r"^#\s*[=\-]{3,}\s*$").expect("static regex must compile"),
            numbered: Regex::new(r"^#\s*\d+\.\s*(.+)$").expect("static regex must compile"),
            banner: Regex::new(r"^#{2,}\s+([^#]+?)\s+#{2,}$").expect("static regex must compile"),
            separator: Regex::new(r"^#\s*[=\-]{2,}\s+(.+?)\s+[=\-]{2,}\s*$")
                .expect("static regex must compile"),
            bracketed: Regex::new(r"^#\s*[\[{]\s*(.+?)\s*[\]}]\s*$")
                .expect("static regex must compile"),
        }
    }
}

/// Extracts a category title from a header line, or `None` when the line
/// is not a header.
///
/// Rules are tried in a fixed order and the first match wins: decoration
/// rows are classified out, then the numbered, banner, separator, and
/// bracketed styles. Several rules can match the same line, so the order is
/// part of the contract. Titles are returned trimmed.
pub fn parse_category_header(line: &str) -> Option<String> {
    let trimmed = line.trim();

    if PATTERNS.hash_run.is_match(trimmed) || PATTERNS.comment_rule.is_match(trimmed) {
        return None;
    }

    if let Some(caps) = PATTERNS.numbered.captures(trimmed) {
        return Some(caps[1].trim().to_string());
    }

    if let Some(caps) = PATTERNS.banner.captures(trimmed) {
        let title = caps[1].trim();
        if !title.is_empty() {
            return Some(title.to_string());
        }
    }

    if let Some(caps) = PATTERNS.separator.captures(trimmed) {
        return Some(caps[1].trim().to_string());
    }

    if let Some(caps) = PATTERNS.bracketed.captures(trimmed) {
        return Some(caps[1].trim().to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_style() {
        assert_eq!(
            parse_category_header("# 1. Window Focus").as_deref(),
            Some("Window Focus")
        );
        assert_eq!(
            parse_category_header("#12. Workspaces").as_deref(),
            Some("Workspaces")
        );
    }

    #[test]
    fn test_banner_style() {
        assert_eq!(
            parse_category_header("### Applications ###").as_deref(),
            Some("Applications")
        );
        assert_eq!(
            parse_category_header("## Media keys ####").as_deref(),
            Some("Media keys")
        );
    }

    #[test]
    fn test_separator_style() {
        assert_eq!(
            parse_category_header("# === Workspaces ===").as_deref(),
            Some("Workspaces")
        );
        assert_eq!(
            parse_category_header("# --- Scratchpad ---").as_deref(),
            Some("Scratchpad")
        );
    }

    #[test]
    fn test_bracketed_style() {
        assert_eq!(
            parse_category_header("# [Launchers]").as_deref(),
            Some("Launchers")
        );
        assert_eq!(
            parse_category_header("# { Special }").as_deref(),
            Some("Special")
        );
    }

    #[test]
    fn test_decoration_rows_are_not_headers() {
        assert_eq!(parse_category_header("##########"), None);
        assert_eq!(parse_category_header("# ========"), None);
        assert_eq!(parse_category_header("# ----------"), None);
    }

    #[test]
    fn test_plain_comment_is_not_a_header() {
        assert_eq!(parse_category_header("# remember to reload"), None);
        assert_eq!(parse_category_header("bind = SUPER, T, exec, kitty"), None);
        assert_eq!(parse_category_header(""), None);
    }

    #[test]
    fn test_banner_without_title_is_not_a_header() {
        assert_eq!(parse_category_header("###   ###"), None);
    }
}
