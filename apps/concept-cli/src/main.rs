//! Markdown concept analyzer binary
//!
//! Scans a markdown file or directory tree and reports whole-word
//! occurrence counts for a list of concepts.

use anyhow::bail;
use clap::{Parser, ValueEnum};
use concept_cli::{concepts, report, scan};
use concept_engine::ConceptEngine;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "concept-analyzer")]
#[command(
    version,
    about = "Count whole-word concept occurrences in markdown documents"
)]
struct Args {
    /// Markdown file or directory to scan
    path: PathBuf,

    /// Concept to search for (repeatable)
    #[arg(short = 'c', long = "concept")]
    concepts: Vec<String>,

    /// File with one concept per line (blank lines ignored)
    #[arg(long)]
    concepts_file: Option<PathBuf>,

    /// Match concepts case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the tables/JSON only.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let concepts =
        concepts::assemble_concepts(&args.concepts, args.concepts_file.as_deref())?;
    if concepts.is_empty() {
        bail!("No concepts specified. Use --concept or --concepts-file.");
    }

    let documents = scan::load_documents(&args.path)?;
    if documents.is_empty() {
        println!("No markdown files found at {}", args.path.display());
        return Ok(());
    }
    tracing::info!(
        "analyzing {} document(s) for {} concept(s)",
        documents.len(),
        concepts.len()
    );

    let engine = ConceptEngine::new(args.case_sensitive);
    let analysis = engine.analyze_documents(&documents, &concepts)?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", report::render_summary(&analysis));
            println!();
            print!("{}", report::render_breakdown(&analysis));
        }
        OutputFormat::Json => {
            println!("{}", report::render_json(&analysis, args.case_sensitive)?);
        }
    }

    Ok(())
}
