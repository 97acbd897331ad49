use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::tokenizer::tokenize;
use crate::vocabulary::Category;

/// A classified word: its category plus the word exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    pub category: Category,
    pub value: String,
}

impl Procedure {
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

/// Turn classified words into procedures, preserving order.
/// Unrecognized words produce no procedure.
pub fn build_procedures<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<Procedure> {
    words
        .into_iter()
        .enumerate()
        .filter_map(|(position, word)| match classify(word) {
            Some(category) => {
                tracing::debug!(position = position + 1, %category, word, "classified");
                Some(Procedure::new(category, word))
            }
            None => {
                tracing::debug!(position = position + 1, word, "dropped unrecognized word");
                None
            }
        })
        .collect()
}

/// Lex and classify a whole query.
pub fn procedures_for(query: &str) -> Vec<Procedure> {
    build_procedures(tokenize(query))
}
