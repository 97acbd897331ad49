use crate::constants::WORD_DELIMITER;

/// Lazy word stream over a query. Cloning restarts it from the same position.
pub type Words<'a> = std::str::Split<'a, char>;

/// Split a query on single spaces.
/// No trimming: a leading, trailing or doubled space yields an empty word,
/// and an empty query yields exactly one empty word. The classifier drops
/// empty words, so they never reach the clause builder.
pub fn tokenize(query: &str) -> Words<'_> {
    query.split(WORD_DELIMITER)
}
