//! Canonical key-combo formatting.

/// Modifier detection tokens and their canonical display forms, in fixed
/// display order.
const MODIFIER_ORDER: [(&str, &str); 4] = [
    ("SUPER", "Super"),
    ("CTRL", "Ctrl"),
    ("ALT", "Alt"),
    ("SHIFT", "Shift"),
];

/// Formats an expanded modifier string and a key token into the display
/// combo, e.g. `"Super + Shift + Q"`.
///
/// Modifiers are emitted in the fixed `Super, Ctrl, Alt, Shift` order no
/// matter how the input spells them; the key is trimmed and uppercased and
/// appended when non-empty. Detection is case-insensitive substring
/// containment, so a modifier word embedded in a longer token also emits
/// its modifier.
pub fn format_key_combo(modifiers: &str, key: &str) -> String {
    let upper = modifiers.to_uppercase();
    let mut parts: Vec<String> = MODIFIER_ORDER
        .iter()
        .filter(|(token, _)| upper.contains(token))
        .map(|(_, canonical)| (*canonical).to_string())
        .collect();

    let key = key.trim().to_uppercase();
    if !key.is_empty() {
        parts.push(key);
    }

    parts.join(" + ")
}
