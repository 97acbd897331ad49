//! Single-pass clause builder.
//!
//! The procedure stream is cut into clauses at EMPLACER words (`and`). Every
//! clause records the polarity it was opened under: VERB words set it for the
//! clause they govern, EMPLACER words decide it for the clause that follows
//! them. In both cases a NEGATION immediately after the word makes the clause
//! NEGATIVE. The last decided polarity is carried forward to each new clause.
//!
//! Clauses are siblings in one ordered list; nothing nests.

use std::fmt;
use std::iter::Peekable;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::constants::TEXT_SEPARATOR;
use crate::error::{CompileError, Result};
use crate::procedure::Procedure;
use crate::vocabulary::Category;

/// How downstream matching should treat a clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseMode {
    /// No verb or boundary has governed the clause yet.
    #[default]
    Default,
    /// Must hold.
    Affirmative,
    /// Must not hold.
    Negative,
    /// May hold.
    Optional,
}

impl ClauseMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Affirmative => "AFFIRMATIVE",
            Self::Negative => "NEGATIVE",
            Self::Optional => "OPTIONAL",
        }
    }
}

impl fmt::Display for ClauseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment of a query between clause boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Non-structural procedures in encounter order.
    pub tokens: Vec<Procedure>,
    /// Literal values of `tokens`, space-joined.
    pub text: String,
    pub mode: ClauseMode,
}

impl Clause {
    pub fn new(mode: ClauseMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn push(&mut self, procedure: &Procedure) {
        if !self.text.is_empty() {
            self.text.push_str(TEXT_SEPARATOR);
        }
        self.text.push_str(&procedure.value);
        self.tokens.push(procedure.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Ordered clauses of one query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseTree {
    pub clauses: Vec<Clause>,
}

impl ClauseTree {
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl<'a> IntoIterator for &'a ClauseTree {
    type Item = &'a Clause;
    type IntoIter = Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

/// Polarity decided by a VERB or EMPLACER from the procedure right after it.
/// A missing next procedure counts as "not NEGATION".
fn polarity_of_next(next: Option<&Procedure>) -> ClauseMode {
    match next {
        Some(p) if p.category == Category::Negation => ClauseMode::Negative,
        _ => ClauseMode::Affirmative,
    }
}

struct TreeBuilder<'a> {
    procedures: Peekable<Iter<'a, Procedure>>,
    closed: Vec<Clause>,
    current: Clause,
    /// Mode handed to the next clause that opens.
    pending: ClauseMode,
    /// Set by an EMPLACER until the boundary is cut.
    slice: bool,
}

impl<'a> TreeBuilder<'a> {
    fn new(procedures: &'a [Procedure]) -> Self {
        Self {
            procedures: procedures.iter().peekable(),
            closed: Vec::new(),
            current: Clause::default(),
            pending: ClauseMode::Default,
            slice: false,
        }
    }

    fn run(mut self) -> ClauseTree {
        while let Some(procedure) = self.procedures.next() {
            tracing::trace!(
                category = %procedure.category,
                value = %procedure.value,
                slice = self.slice,
                pending = %self.pending,
                "procedure"
            );
            match procedure.category {
                Category::Start => {}
                Category::Verb => self.verb(procedure),
                Category::Emplacer => self.emplacer(),
                _ => {
                    self.cut_if_sliced();
                    self.current.push(procedure);
                }
            }
        }
        self.finish()
    }

    fn verb(&mut self, procedure: &Procedure) {
        // A verb after a boundary governs the clause that boundary opens.
        self.cut_if_sliced();
        let mode = match procedure.value.as_str() {
            "is" | "are" => polarity_of_next(self.procedures.peek().copied()),
            _ => ClauseMode::Optional,
        };
        self.current.mode = mode;
        self.pending = mode;
    }

    fn emplacer(&mut self) {
        // Back-to-back boundaries still delimit a (empty) clause each.
        self.cut_if_sliced();
        self.slice = true;
        self.pending = polarity_of_next(self.procedures.peek().copied());
    }

    fn cut_if_sliced(&mut self) {
        if self.slice {
            self.cut();
        }
    }

    fn cut(&mut self) {
        let opened = Clause::new(self.pending);
        let finished = std::mem::replace(&mut self.current, opened);
        tracing::debug!(text = %finished.text, mode = %finished.mode, "clause closed");
        self.closed.push(finished);
        self.slice = false;
    }

    fn finish(mut self) -> ClauseTree {
        // A trailing boundary still opens its clause.
        self.cut_if_sliced();
        tracing::debug!(text = %self.current.text, mode = %self.current.mode, "clause closed");
        self.closed.push(self.current);
        ClauseTree {
            clauses: self.closed,
        }
    }
}

/// Build the clause tree for a procedure stream.
///
/// Produces exactly one clause more than the stream has EMPLACER procedures.
/// Fails with [`CompileError::EmptyExpression`] on an empty stream.
pub fn build_tree(procedures: &[Procedure]) -> Result<ClauseTree> {
    if procedures.is_empty() {
        return Err(CompileError::EmptyExpression);
    }
    Ok(TreeBuilder::new(procedures).run())
}
