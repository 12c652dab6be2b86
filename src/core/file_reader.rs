//! Corpus reading
//!
//! Turns a list of input paths into decoded text blobs, one per existing,
//! readable path, in input order. Sources that cannot be read are skipped
//! and reported as warnings; a missing file never aborts a run.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::model::Record;

/// A source that was skipped while reading a corpus.
#[derive(Debug, Error)]
pub enum SourceWarning {
    #[error("{} not found, skipping", path.display())]
    Missing { path: PathBuf },

    #[error("{} unreadable ({source}), skipping", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of reading a corpus of vCard files.
#[derive(Debug, Default)]
pub struct Corpus {
    /// One decoded text blob per readable source, in input order.
    pub texts: Vec<String>,

    /// Sources that were skipped.
    pub warnings: Vec<SourceWarning>,
}

impl Corpus {
    /// All complete records across the corpus, in file order then in-file
    /// order.
    pub fn records(&self) -> Vec<Record> {
        self.texts
            .iter()
            .flat_map(|text| Record::scan(text))
            .collect()
    }
}

/// Read every existing, readable path into decoded text.
pub fn read_corpus(paths: &[PathBuf]) -> Corpus {
    let mut corpus = Corpus::default();

    for path in paths {
        if !path.exists() {
            corpus.warnings.push(SourceWarning::Missing { path: path.clone() });
            continue;
        }
        match read_text(path) {
            Ok(text) => corpus.texts.push(text),
            Err(source) => corpus.warnings.push(SourceWarning::Unreadable {
                path: path.clone(),
                source,
            }),
        }
    }

    corpus
}

/// Decode one file to text: UTF-8 with BOM stripping, lossy conversion for
/// anything else. Decoding never fails; only I/O errors surface.
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_owned(),
        None => text,
    })
}
