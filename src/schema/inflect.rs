//! Naming helpers for generated field names.

/// Pluralize an entity identifier for use as a list field name.
///
/// - already ends in `s` -> unchanged
/// - ends in `y` -> `ies`
/// - otherwise -> append `s`
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('y') {
        format!("{}ies", stem)
    } else {
        format!("{}s", word)
    }
}

/// Inverse of [`pluralize`] for ordinary nouns.
///
/// - `ies` -> `y`
/// - `ses` -> drop one `s`
/// - trailing `s` not preceded by another `s` -> drop it
/// - otherwise unchanged
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if word.ends_with("ses") {
        word[..word.len() - 1].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Replace every character that is not an ASCII letter, digit or `_` with `_`.
///
/// GraphQL names are restricted to `[_A-Za-z0-9]`, so non-ASCII letters are
/// replaced too.
pub fn sanitize_field_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
