use serde::{Deserialize, Serialize};

use crate::clause::Clause;
use crate::constants::{DEFAULT_IDENTIFIER, DEFAULT_QUANTITY};
use crate::error::{CompileError, Result};
use crate::vocabulary::{Category, symbol_literal};

/// Typed facts read off one clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseAttributes {
    /// Repetition count. Only a QUANTITY in first position counts.
    pub quantity: u32,
    /// Last IDENTIFIER seen in the clause.
    pub identifier: String,
    pub rules: Vec<String>,
    pub features: Vec<String>,
    /// Resolved SYMBOL literals (`slash` becomes `/`).
    pub symbols: Vec<String>,
}

impl Default for ClauseAttributes {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            identifier: DEFAULT_IDENTIFIER.to_string(),
            rules: Vec::new(),
            features: Vec::new(),
            symbols: Vec::new(),
        }
    }
}

fn parse_quantity(literal: &str) -> Result<u32> {
    literal
        .parse::<u32>()
        .map_err(|_| CompileError::MalformedQuantity {
            literal: literal.to_string(),
        })
}

/// Derive a clause's attributes in one forward scan of its tokens.
pub fn extract_attributes(clause: &Clause) -> Result<ClauseAttributes> {
    let mut attributes = ClauseAttributes::default();

    for (index, token) in clause.tokens.iter().enumerate() {
        match token.category {
            Category::Quantity if index == 0 => {
                attributes.quantity = parse_quantity(&token.value)?;
            }
            Category::Identifier => attributes.identifier = token.value.clone(),
            Category::Rule => attributes.rules.push(token.value.clone()),
            Category::Feature => attributes.features.push(token.value.clone()),
            Category::Symbol => {
                let literal = symbol_literal(&token.value).unwrap_or(token.value.as_str());
                attributes.symbols.push(literal.to_string());
            }
            _ => {}
        }
    }

    Ok(attributes)
}
