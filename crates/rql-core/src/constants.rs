/// Repetition count for a clause whose first token is not a QUANTITY.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Subject of a clause that names no IDENTIFIER.
pub const DEFAULT_IDENTIFIER: &str = "character";

/// The only delimiter the lexer splits on. Tabs and newlines stay inside tokens.
pub const WORD_DELIMITER: char = ' ';

/// Joins literal values into clause text.
pub const TEXT_SEPARATOR: &str = " ";
