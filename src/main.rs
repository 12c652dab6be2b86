//! vcfsieve - a CLI for selecting and counting vCard contacts by category
//!
//! vcfsieve provides:
//! - Category selection over one or more .vcf files (any-of, all-of, and
//!   has-A-but-not-B)
//! - Category occurrence counts across a corpus
//! - Raw vCard, jsonl and json output

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod query;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
