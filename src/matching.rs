//! Abbreviation matching shared by the command tree and the schema resolver.
//!
//! A typed word selects a sibling when it is a prefix of exactly one sibling's
//! name. A full name that is also a prefix of another sibling's name is
//! ambiguous.

/// Anything addressable by name among its siblings.
pub trait Named {
    /// Sibling-unique name
    fn name(&self) -> &str;
}

/// Outcome of matching one typed word against a sibling set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<T> {
    /// No sibling starts with the word
    None,

    /// Exactly one sibling selected
    Unique(T),

    /// Several siblings start with the word (in sibling order)
    Ambiguous(Vec<T>),
}

/// Match `word` against `items` by case-sensitive prefix.
///
/// The empty word never matches.
pub fn by_prefix<'n, T, I>(items: I, word: &str) -> Match<&'n T>
where
    T: Named + ?Sized + 'n,
    I: IntoIterator<Item = &'n T>,
{
    if word.is_empty() {
        return Match::None;
    }

    let mut found = Vec::new();
    for item in items {
        if item.name().starts_with(word) {
            found.push(item);
        }
    }

    match found.len() {
        0 => Match::None,
        1 => Match::Unique(found[0]),
        _ => Match::Ambiguous(found),
    }
}
