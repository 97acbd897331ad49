use std::fmt;

/// Failure to compile a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// No word of the query was recognized.
    EmptyExpression,
    /// A QUANTITY word that does not fit a repetition count.
    MalformedQuantity { literal: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::EmptyExpression => write!(f, "Error (1000) Expression can't be empty"),
            CompileError::MalformedQuantity { literal } => {
                write!(f, "malformed quantity literal '{literal}'")
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// A batch missing one of its required lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    MissingQuery,
    MissingInput,
    MissingQueryAndInput,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::MissingQuery => write!(f, "Error (300) query is required parameter"),
            BatchError::MissingInput => write!(f, "Error (300) input is required parameter"),
            BatchError::MissingQueryAndInput => {
                write!(f, "Error (300) both query and input are required parameters")
            }
        }
    }
}

impl std::error::Error for BatchError {}

pub type Result<T> = std::result::Result<T, CompileError>;
