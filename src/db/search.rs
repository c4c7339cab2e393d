//! Search term handling shared by the repositories.
//!
//! Terms are always bound as parameters. Each term becomes a
//! `LIKE ?1 ESCAPE '\'` pattern matching it as a substring; SQLite's `LIKE`
//! is case-insensitive for ASCII letters.

/// Escape character used in every `LIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// `%term%` with `%`, `_` and the escape character taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Splits a free-text client query into name tokens.
///
/// The query is lower-cased and split on whitespace, commas and periods;
/// each token then gets an upper-case first letter, matching how names are
/// stored ("tomich, a." -> ["Tomich", "A"]). Case folding matters for
/// non-ASCII names, which `LIKE` compares case-sensitively.
pub fn name_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
