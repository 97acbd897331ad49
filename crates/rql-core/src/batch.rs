//! Batch compilation: every query of one invocation, plus the inputs they
//! will eventually be matched against.
//!
//! Inputs are carried alongside the queries but never read by the compiler.
//! Binding them to clause identifiers belongs to the matching stage.

use serde::{Deserialize, Serialize};

use crate::error::{BatchError, Result};
use crate::query::{CompiledQuery, compile};

/// Queries and inputs of one invocation. Both lists are non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBatch {
    queries: Vec<String>,
    inputs: Vec<String>,
}

impl QueryBatch {
    pub fn new(
        queries: Vec<String>,
        inputs: Vec<String>,
    ) -> std::result::Result<Self, BatchError> {
        match (queries.is_empty(), inputs.is_empty()) {
            (true, true) => Err(BatchError::MissingQueryAndInput),
            (true, false) => Err(BatchError::MissingQuery),
            (false, true) => Err(BatchError::MissingInput),
            (false, false) => Ok(Self { queries, inputs }),
        }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Compile every query in order. Stops at the first failure.
    pub fn compile(&self) -> Result<Vec<CompiledQuery>> {
        self.queries.iter().map(|q| compile(q)).collect()
    }
}
