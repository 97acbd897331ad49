use serde::{Deserialize, Serialize};

use crate::attributes::{ClauseAttributes, extract_attributes};
use crate::clause::{Clause, ClauseTree, build_tree};
use crate::error::Result;
use crate::procedure::{Procedure, procedures_for};

/// Full result of compiling one query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledQuery {
    pub query: String,
    pub procedures: Vec<Procedure>,
    pub tree: ClauseTree,
    /// `attributes[i]` describes `tree.clauses[i]`.
    pub attributes: Vec<ClauseAttributes>,
}

impl CompiledQuery {
    /// Clauses paired with their attributes, in order.
    pub fn clauses(&self) -> impl Iterator<Item = (&Clause, &ClauseAttributes)> {
        self.tree.iter().zip(self.attributes.iter())
    }
}

/// Compile a query: lex → classify → build clauses → extract attributes.
pub fn compile(query: &str) -> Result<CompiledQuery> {
    let procedures = procedures_for(query);
    let tree = build_tree(&procedures)?;
    let attributes = tree
        .iter()
        .map(extract_attributes)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        query,
        procedures = procedures.len(),
        clauses = tree.len(),
        "compiled query"
    );

    Ok(CompiledQuery {
        query: query.to_string(),
        procedures,
        tree,
        attributes,
    })
}
