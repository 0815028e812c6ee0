//! Modifier variable resolution and expansion.
//!
//! Hyprland configs bind their main modifier to a user-chosen variable
//! (`$mainMod = SUPER`, `$mod = SUPER SHIFT`, or any other name). The
//! resolver collects those assignments in one pass over the full text; the
//! expander substitutes `$name` references inside a bind's modifier field.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// $mod = SUPER or $mainMod = SUPER SHIFT, with an optional trailing comment.
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$(\w+)\s*=\s*([\w\s]+?)(?:\s*#.*)?$").expect("static regex must compile")
});
static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+)").expect("static regex must compile"));

/// Resolved modifier variables, keyed by lowercased name.
///
/// Built once per parse call and immutable afterwards. A definition whose
/// value is empty still overwrites earlier definitions of the same name,
/// but counts as undefined for alias cross-linking and expansion.
#[derive(Debug, Clone, Default)]
pub struct ModifierMap {
    definitions: HashMap<String, String>,
}

impl ModifierMap {
    /// Number of recorded definitions, including empty-valued ones.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no definitions were recorded.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// True when `mod` and `mainmod` are both defined with different
    /// values. The definitions are kept as given either way.
    pub fn aliases_diverge(&self) -> bool {
        matches!(
            (self.defined("mod"), self.defined("mainmod")),
            (Some(a), Some(b)) if a != b
        )
    }

    fn defined(&self, name: &str) -> Option<&str> {
        self.definitions
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Scans the full configuration text for `$name = value` assignments.
///
/// Later definitions of a name overwrite earlier ones. After the scan,
/// `mod` and `mainmod` mirror each other when exactly one of the pair is
/// defined; two independent definitions are left as given.
pub fn resolve_modifiers(config_text: &str) -> ModifierMap {
    let mut definitions = HashMap::new();

    for line in config_text.lines() {
        let trimmed = line.trim();
        if let Some(caps) = ASSIGNMENT_RE.captures(trimmed) {
            definitions.insert(caps[1].to_lowercase(), caps[2].trim().to_string());
        }
    }

    let mut map = ModifierMap { definitions };

    let mod_value = map.defined("mod").map(str::to_string);
    let mainmod_value = map.defined("mainmod").map(str::to_string);
    match (mod_value, mainmod_value) {
        (None, Some(value)) => {
            map.definitions.insert("mod".to_string(), value);
        }
        (Some(value), None) => {
            map.definitions.insert("mainmod".to_string(), value);
        }
        _ => {}
    }

    map
}

/// Expands `$name` references in a bind's modifier field.
///
/// Matches are enumerated left to right over the original field, but each
/// replacement rewrites the first occurrence of the matched text still
/// present in the working string. A replacement can therefore be rewritten
/// again by a later match with the same spelling. Names without a
/// definition stay verbatim.
pub fn expand_modifiers(modifier_field: &str, modifiers: &ModifierMap) -> String {
    let mut expanded = modifier_field.to_string();

    for caps in VARIABLE_RE.captures_iter(modifier_field) {
        let name = caps[1].to_lowercase();
        if let Some(value) = modifiers.defined(&name) {
            expanded = expanded.replacen(&caps[0], value, 1);
        }
    }

    expanded
}
