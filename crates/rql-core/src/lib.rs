//! RegexQL query compiler front-end.
//!
//! Turns an English-like rule such as "there are 2 alphanumeric groups
//! separated by slash and not dot" into an ordered list of clauses. Each
//! clause carries a polarity, the words that were recognized in it, and the
//! attributes read off those words: repetition count, subject, validation
//! rules, joining features and literal symbols.
//!
//! Pipeline: words → procedures → clause tree → attributes. The vocabulary is
//! closed and unknown words are dropped silently.
//!
//! Zero I/O: no opinions about how queries arrive or where results go.

pub mod attributes;
pub mod batch;
pub mod classifier;
pub mod clause;
pub mod constants;
pub mod error;
pub mod procedure;
pub mod query;
pub mod report;
pub mod serde_compat;
pub mod tokenizer;
pub mod vocabulary;

pub use attributes::{ClauseAttributes, extract_attributes};
pub use batch::QueryBatch;
pub use classifier::classify;
pub use clause::{Clause, ClauseMode, ClauseTree, build_tree};
pub use constants::{DEFAULT_IDENTIFIER, DEFAULT_QUANTITY};
pub use error::{BatchError, CompileError, Result};
pub use procedure::{Procedure, build_procedures, procedures_for};
pub use query::{CompiledQuery, compile};
pub use report::{render_inputs, render_report};
pub use serde_compat::{CURRENT_VERSION, WireExport, export_json, import_json};
pub use tokenizer::tokenize;
pub use vocabulary::Category;
