//! Query command handlers
//!
//! Each handler reads the corpus, runs one matcher over it, renders the
//! result and writes it to stdout or the requested file. Skipped sources
//! and run summaries go to stderr so stdout stays a pure result stream.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::file_reader::{read_corpus, Corpus};
use crate::core::render::{
    render_counts_text, write_output, Columns, OutputFormat, RenderConfig, Renderer,
};
use crate::query::counts::CountsStore;
use crate::query::filter::{all_of, any_of, diff, CategoryQuery};

fn report_warnings(corpus: &Corpus, quiet: bool) {
    if quiet {
        return;
    }
    for warning in &corpus.warnings {
        eprintln!("Warning: {}", warning);
    }
}

/// Run the diff command: cards that have `category_a` but lack `category_b`.
#[allow(clippy::too_many_arguments)]
pub fn run_diff(
    category_a: &str,
    category_b: &str,
    files: &[PathBuf],
    out: Option<&Path>,
    store: &mut CountsStore,
    quiet: bool,
    verbose: bool,
    config: RenderConfig,
) -> Result<()> {
    let corpus = read_corpus(files);
    report_warnings(&corpus, quiet);

    let report = diff(category_a, category_b, corpus.records());
    store.replace(report.counts.clone());

    let renderer = Renderer::with_config(config);
    let payload = renderer.render_cards(&report.matches, Columns::default())?;
    write_output(&payload, out)?;

    if !quiet {
        let cat_a = category_a.trim().to_lowercase();
        let cat_b = category_b.trim().to_lowercase();
        eprintln!("Processed vcards: {}", report.total);
        eprintln!("vcards with '{}': {}", cat_a, report.with_a);
        eprintln!("vcards with '{}': {}", cat_b, report.with_b);
        eprintln!(
            "Matches (has '{}', lacks '{}'): {}",
            cat_a,
            cat_b,
            report.matches.len()
        );
        if verbose {
            eprint!("{}", render_counts_text(store.current()));
        }
    }

    Ok(())
}

/// Run the contacts / contacts-all commands: any-of or all-of selection.
#[allow(clippy::too_many_arguments)]
pub fn run_contacts(
    categories: &[String],
    files: &[PathBuf],
    require_all: bool,
    columns: Columns,
    out: Option<&Path>,
    quiet: bool,
    config: RenderConfig,
) -> Result<()> {
    let query = CategoryQuery::parse(categories);
    let corpus = read_corpus(files);
    report_warnings(&corpus, quiet);

    let records = corpus.records();
    let total = records.len();
    let matches = if require_all {
        all_of(&query, records)
    } else {
        any_of(&query, records)
    };

    let renderer = Renderer::with_config(config);
    let payload = renderer.render_cards(&matches, columns)?;
    write_output(&payload, out)?;

    if !quiet {
        eprintln!("Processed vcards: {}", total);
        eprintln!("Matches: {}", matches.len());
    }

    Ok(())
}

/// Run the counts command: category occurrence counts across the corpus.
pub fn run_counts(
    files: &[PathBuf],
    out: Option<&Path>,
    store: &mut CountsStore,
    quiet: bool,
    config: RenderConfig,
) -> Result<()> {
    let corpus = read_corpus(files);
    report_warnings(&corpus, quiet);

    let records = corpus.records();
    let counts = store.update(&records).clone();

    match config.format {
        OutputFormat::Raw => {
            // Raw counts go to stderr; stdout stays reserved for vCard
            // payloads.
            let table = render_counts_text(&counts);
            if !quiet {
                eprint!("{}", table);
            }
            if out.is_some() {
                write_output(&table, out)?;
            }
        }
        OutputFormat::Jsonl | OutputFormat::Json => {
            let renderer = Renderer::with_config(config);
            let payload = renderer.render_counts(&counts)?;
            write_output(&payload, out)?;
        }
    }

    Ok(())
}
