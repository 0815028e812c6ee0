//! Structured parse reporting for cheat-sheet extraction.

use serde::{Deserialize, Serialize};

/// Per-parse report with the outcome and line-coverage metrics.
///
/// Produced by [`parse_config_with_report`](crate::parse_config_with_report).
/// `success` is the only failure signal the parser exposes: parsing is
/// best-effort and total, so "failure" means no category retained a
/// described bind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// False when the input contained no usable, described keybindings.
    pub success: bool,
    /// Number of categories in the result.
    pub categories: usize,
    /// Total binds across all categories.
    pub binds: usize,
    /// Recognized share of relevant lines, `0.0` for empty input.
    pub coverage: f64,
    /// Recognized headers plus every line matching the bind keyword.
    pub relevant_lines: usize,
    /// Recognized headers plus bind statements that produced a row.
    pub recognized_lines: usize,
    /// Bind statements that yielded no cheat-sheet row.
    pub skipped_binds: usize,
    /// Sample of skipped bind statements, as they appeared in the input.
    pub unresolved_lines: Vec<String>,
    /// Non-fatal observations, e.g. divergent `$mod`/`$mainmod` values.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_roundtrips_through_json() {
        let report = ParseReport {
            success: true,
            categories: 2,
            binds: 5,
            coverage: 0.8,
            relevant_lines: 10,
            recognized_lines: 8,
            skipped_binds: 2,
            unresolved_lines: vec!["bind = SUPER, X, exec, thing".to_string()],
            warnings: Vec::new(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"skipped_binds\":2"));

        let back: ParseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.categories, 2);
        assert_eq!(back.unresolved_lines.len(), 1);
    }
}
