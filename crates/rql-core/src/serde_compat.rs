//! JSON hand-off format for compiled batches.
//!
//! This is what a matching stage consumes: every compiled query with its
//! clauses and attributes, plus the raw inputs of the invocation. Categories
//! and modes are written as their upper-case names.

use serde::{Deserialize, Serialize};

use crate::batch::QueryBatch;
use crate::query::CompiledQuery;

pub const CURRENT_VERSION: &str = "1";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct WireExport {
    pub version: String,
    pub queries: Vec<CompiledQuery>,
    #[serde(default)]
    pub inputs: Vec<String>,
}

/// Serialize a compiled batch to pretty JSON.
pub fn export_json(batch: &QueryBatch, compiled: &[CompiledQuery]) -> serde_json::Result<String> {
    let export = WireExport {
        version: CURRENT_VERSION.to_string(),
        queries: compiled.to_vec(),
        inputs: batch.inputs().to_vec(),
    };
    serde_json::to_string_pretty(&export)
}

/// Parse an export produced by [`export_json`].
pub fn import_json(json: &str) -> serde_json::Result<WireExport> {
    serde_json::from_str(json)
}
