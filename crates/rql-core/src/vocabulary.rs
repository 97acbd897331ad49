//! Closed keyword vocabulary.
//!
//! Every word a query may use is listed here once. Lookups are exact and
//! case-sensitive: `Dot` and `dot ` are not keywords.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Grammatical role of a recognized word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Opens a sentence (`there`).
    Start,
    /// Existence and polarity (`is`, `are`, `can_be`).
    Verb,
    /// A decimal repetition count.
    Quantity,
    /// Validation rule (`alphanumeric`, `numeric`).
    Rule,
    /// The subject being described (`groups`, `character`).
    Identifier,
    /// How subjects are glued together (`separated`, `joined`).
    Feature,
    /// Links a feature to what follows (`by`, `using`).
    Relation,
    /// A named literal character (`slash`, `dot`).
    Symbol,
    /// Clause boundary (`and`).
    Emplacer,
    /// Denies what follows (`not`).
    Negation,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Verb => "VERB",
            Self::Quantity => "QUANTITY",
            Self::Rule => "RULE",
            Self::Identifier => "IDENTIFIER",
            Self::Feature => "FEATURE",
            Self::Relation => "RELATION",
            Self::Symbol => "SYMBOL",
            Self::Emplacer => "EMPLACER",
            Self::Negation => "NEGATION",
        }
    }

    /// Structural words steer clause building and never land in a clause.
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Start | Self::Verb | Self::Emplacer)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const KEYWORDS: &[(&str, Category)] = &[
    ("there", Category::Start),
    ("and", Category::Emplacer),
    ("is", Category::Verb),
    ("are", Category::Verb),
    ("can_be", Category::Verb),
    ("alphanumeric", Category::Rule),
    ("numeric", Category::Rule),
    ("groups", Category::Identifier),
    ("group", Category::Identifier),
    ("character", Category::Identifier),
    ("by", Category::Relation),
    ("using", Category::Relation),
    ("separated", Category::Feature),
    ("joined", Category::Feature),
    ("slash", Category::Symbol),
    ("dot", Category::Symbol),
    ("not", Category::Negation),
];

const SYMBOLS: &[(&str, &str)] = &[("slash", "/"), ("dot", ".")];

static KEYWORD_TABLE: LazyLock<HashMap<&'static str, Category>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static SYMBOL_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYMBOLS.iter().copied().collect());

/// Category of a keyword, or `None` if the word is not in the vocabulary.
pub fn lookup(word: &str) -> Option<Category> {
    KEYWORD_TABLE.get(word).copied()
}

/// Literal character(s) a SYMBOL keyword stands for.
pub fn symbol_literal(word: &str) -> Option<&'static str> {
    SYMBOL_TABLE.get(word).copied()
}

/// All keywords with their categories, sorted by word.
pub fn keywords() -> impl Iterator<Item = (&'static str, Category)> {
    let mut sorted: Vec<(&'static str, Category)> = KEYWORDS.to_vec();
    sorted.sort_unstable_by_key(|(word, _)| *word);
    sorted.into_iter()
}
