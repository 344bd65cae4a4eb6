//! Tokenizer for multi-valued list cells (`country`, `listed_in`).

/// Split a comma-separated list cell into trimmed, non-empty tokens.
///
/// Upstream separators are not fully consistent (extra whitespace, trailing
/// commas), so tokens are trimmed and empties dropped; an empty or blank cell
/// yields no tokens at all.
pub fn split_list_field(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|token| !token.is_empty())
}
