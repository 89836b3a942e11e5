//! Worker roster import from the legacy directory's CSV export.
//!
//! Rows are parsed leniently, canonicalized (status spellings, skill
//! aliases), and then pushed through the same intake validation the storage
//! boundary uses, so an imported profile is indistinguishable from a stored
//! one. Unusable rows are skipped with a reason instead of failing the whole
//! import.

mod mapping;
mod normalizer;
mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::workflows::assignment::domain::WorkerProfile;
use crate::workflows::assignment::intake;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Row rejected during import, with the operator-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}

/// Validated import result.
#[derive(Debug)]
pub struct RosterImport {
    pub workers: Vec<WorkerProfile>,
    pub skipped: Vec<SkippedRow>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<RosterImport, RosterImportError> {
        let file = File::open(path).map_err(RosterImportError::Io)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RosterImport, RosterImportError> {
        let rows = parser::parse_rows(reader)?;

        let mut workers = Vec::new();
        let mut skipped = Vec::new();

        for (line, document) in rows {
            match intake::worker_from_document(document) {
                Ok(profile) => workers.push(profile),
                Err(err) => skipped.push(SkippedRow {
                    line,
                    reason: err.to_string(),
                }),
            }
        }

        Ok(RosterImport { workers, skipped })
    }
}
