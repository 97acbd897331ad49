//! Human-readable trace of a compilation.
//!
//! Markdown-flavoured: one `#` section per query, `##` per clause, then the
//! clause's tokens and extracted details. Empty lists are omitted.

use std::fmt::Write;

use crate::attributes::ClauseAttributes;
use crate::clause::Clause;
use crate::query::CompiledQuery;

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

fn push_clause(out: &mut String, clause: &Clause, attributes: &ClauseAttributes) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "## expressions for <{}> mode <{}>",
        clause.text, clause.mode
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "### tokens");
    let _ = writeln!(out);
    for token in &clause.tokens {
        let _ = writeln!(out, "- {} : {}", token.category, token.value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "#### details");
    let _ = writeln!(out);
    let _ = writeln!(out, "QUANTITY: {}", attributes.quantity);
    let _ = writeln!(out, "IDENTIFIER: {}", attributes.identifier);
    push_list(out, "RULES", &attributes.rules);
    push_list(out, "FEATURES", &attributes.features);
    push_list(out, "SYMBOLS", &attributes.symbols);
}

/// Render the trace for one compiled query.
pub fn render_report(compiled: &CompiledQuery) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# running on <{}>", compiled.query);
    let _ = writeln!(out);
    let _ = writeln!(out, "## procedures");
    let _ = writeln!(out, "- position : type : keyword or value");
    for (position, procedure) in compiled.procedures.iter().enumerate() {
        let _ = writeln!(
            out,
            "- {} : {} : {}",
            position + 1,
            procedure.category,
            procedure.value
        );
    }

    for (clause, attributes) in compiled.clauses() {
        push_clause(&mut out, clause, attributes);
    }

    out
}

/// Render the inputs section that follows the per-query reports.
pub fn render_inputs(inputs: &[String]) -> String {
    let mut out = String::from("# inputs :\n");
    for input in inputs {
        let _ = writeln!(out, "- {input}");
    }
    out
}
