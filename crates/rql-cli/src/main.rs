use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rql_core::vocabulary::{self, symbol_literal};
use rql_core::{CompiledQuery, QueryBatch, export_json, render_inputs, render_report};

#[derive(Parser)]
#[command(name = "rql", about = "Compile RegexQL rules into structured clauses")]
struct Cli {
    /// Rule to compile, e.g. "there are 2 numeric groups and not dot" (repeatable)
    #[arg(long = "query", value_name = "QUERY")]
    queries: Vec<String>,

    /// Text the rules will be matched against (repeatable)
    #[arg(long = "input", value_name = "INPUT")]
    inputs: Vec<String>,

    /// Enable debug logging of every classification and clause
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the keyword vocabulary and exit
    #[arg(long, exclusive = true)]
    keywords: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.keywords {
        cmd_keywords();
        return Ok(());
    }

    cmd_compile(&cli)
}

fn cmd_keywords() {
    for (word, category) in vocabulary::keywords() {
        match symbol_literal(word) {
            Some(literal) => println!("{word:<14}{category} ({literal})"),
            None => println!("{word:<14}{category}"),
        }
    }
}

fn cmd_compile(cli: &Cli) -> Result<()> {
    let batch = QueryBatch::new(cli.queries.clone(), cli.inputs.clone())?;
    tracing::debug!(
        queries = batch.queries().len(),
        inputs = batch.inputs().len(),
        "compiling batch"
    );

    let compiled = batch.compile().context("failed to compile query")?;

    match cli.format {
        Format::Text => print_text(&batch, &compiled),
        Format::Json => {
            let json = export_json(&batch, &compiled).context("failed to serialize result")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_text(batch: &QueryBatch, compiled: &[CompiledQuery]) {
    for query in compiled {
        println!("{}", render_report(query));
    }
    print!("{}", render_inputs(batch.inputs()));
}
