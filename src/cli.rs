//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{Columns, OutputFormat, RenderConfig};
use crate::query::api;
use crate::query::counts::CountsStore;

/// vcfsieve - select and count vCard contacts by category.
#[derive(Parser, Debug)]
#[command(name = "vcfsieve")]
#[command(
    author,
    version,
    about,
    long_about = r#"vcfsieve scans one or more vCard (.vcf) files and selects contacts by
their CATEGORIES property. Folded lines are unfolded before parsing and
matching is always case-insensitive.

Matched cards are printed to stdout (or --out FILE) so the output remains a
valid vCard stream; warnings and summaries go to stderr.

Output formats:
- raw: the vCard stream itself (default)
- jsonl: one JSON object per card (name, categories, phones)
- json: a single JSON array

Examples:
    vcfsieve diff Work Friends contacts.vcf
    vcfsieve contacts --category work,friends a.vcf b.vcf
    vcfsieve contacts-all --category work --category friends a.vcf --name
    vcfsieve counts contacts.vcf
"#
)]
pub struct Cli {
    /// Output format (raw/jsonl/json).
    #[arg(
        long,
        global = true,
        default_value = "raw",
        value_name = "FORMAT",
        long_help = "Select the output format for matched cards.\n\n\
Supported values:\n\
- raw (default): the vCard stream itself\n\
- jsonl: one JSON object per card\n\
- json: a single JSON array\n\n\
Tip: Prefer raw when piping the output into another vCard consumer."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human\n\
readability. Has no effect on the raw format."
    )]
    pub pretty: bool,

    /// Quiet mode (suppress stderr warnings and summaries).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress non-essential stderr output (skip warnings and run\n\
summaries). Matched cards are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics on stderr. For diff this includes\n\
the whole-corpus category counts."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Output vCards that have CATEGORY_A but not CATEGORY_B.
    #[command(
        long_about = "Select cards whose category set contains CATEGORY_A but not\n\
CATEGORY_B. Comparison is case-insensitive over trimmed category names.\n\n\
A summary (processed cards, per-category totals, match count) is printed to\n\
stderr; stdout carries only the matching cards.\n\n\
Examples:\n\
  vcfsieve diff Work Friends contacts.vcf\n\
  vcfsieve diff work friends a.vcf b.vcf --out matches.vcf\n"
    )]
    Diff {
        /// Category that must be present.
        #[arg(value_name = "CATEGORY_A")]
        category_a: String,

        /// Category that must be absent.
        #[arg(value_name = "CATEGORY_B")]
        category_b: String,

        /// One or more .vcf files.
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Write matches to a file (default stdout).
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Output vCards that have any of the given categories.
    #[command(
        long_about = "Select cards whose category set intersects the query. Category\n\
values may be repeated or comma/semicolon-joined in a single value; matching\n\
is case-insensitive. An empty query matches nothing.\n\n\
Examples:\n\
  vcfsieve contacts --category work contacts.vcf\n\
  vcfsieve contacts --category work,friends a.vcf b.vcf --name --number\n"
    )]
    Contacts {
        /// Category names; a value may itself be comma/semicolon-joined.
        #[arg(long, short, value_name = "CATEGORY", required = true)]
        category: Vec<String>,

        /// One or more .vcf files.
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Output only the contact name instead of the full vCard.
        #[arg(long)]
        name: bool,

        /// Output only the telephone numbers instead of the full vCard.
        #[arg(long)]
        number: bool,

        /// Write matches to a file (default stdout).
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Output vCards that have all of the given categories.
    #[command(
        long_about = "Select cards whose category set contains every query category.\n\
Takes the same inputs as contacts; a single-category query behaves exactly\n\
like contacts.\n\n\
Example:\n\
  vcfsieve contacts-all --category work --category friends contacts.vcf\n"
    )]
    ContactsAll {
        /// Category names; a value may itself be comma/semicolon-joined.
        #[arg(long, short, value_name = "CATEGORY", required = true)]
        category: Vec<String>,

        /// One or more .vcf files.
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Output only the contact name instead of the full vCard.
        #[arg(long)]
        name: bool,

        /// Output only the telephone numbers instead of the full vCard.
        #[arg(long)]
        number: bool,

        /// Write matches to a file (default stdout).
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Compute and print category occurrence counts.
    #[command(
        long_about = "Count how many cards carry each category across the given files.\n\
In raw mode the table is printed to stderr (stdout stays clean); with\n\
--format json or jsonl a JSON object is written to stdout. With no files the\n\
previously computed counts, if any, are reported.\n\n\
Examples:\n\
  vcfsieve counts contacts.vcf\n\
  vcfsieve counts contacts.vcf --format json\n"
    )]
    Counts {
        /// Optional .vcf files to compute counts from.
        #[arg(value_name = "FILE", num_args = 0..)]
        files: Vec<PathBuf>,

        /// Write the counts to a file as well.
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let config = RenderConfig::with_pretty(format, cli.pretty);

    // The last-computed category counts live for the duration of one run and
    // are threaded through the handlers that compute them.
    let mut store = CountsStore::new();

    match cli.command {
        Commands::Diff {
            category_a,
            category_b,
            files,
            out,
        } => api::run_diff(
            &category_a,
            &category_b,
            &files,
            out.as_deref(),
            &mut store,
            cli.quiet,
            cli.verbose,
            config,
        ),

        Commands::Contacts {
            category,
            files,
            name,
            number,
            out,
        } => api::run_contacts(
            &category,
            &files,
            false,
            Columns { name, number },
            out.as_deref(),
            cli.quiet,
            config,
        ),

        Commands::ContactsAll {
            category,
            files,
            name,
            number,
            out,
        } => api::run_contacts(
            &category,
            &files,
            true,
            Columns { name, number },
            out.as_deref(),
            cli.quiet,
            config,
        ),

        Commands::Counts { files, out } => {
            api::run_counts(&files, out.as_deref(), &mut store, cli.quiet, config)
        }
    }
}
