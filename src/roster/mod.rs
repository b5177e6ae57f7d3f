//! CSV boundary for admission roster exports.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::cohort::{derive_roster, ApplicantRecord};

/// Failures while turning a roster export into applicant records.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a roster export and runs intake, yielding cleaned records with
/// every derived field already computed against the given home institution.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        home_institution: &str,
    ) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, home_institution)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        home_institution: &str,
    ) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        let rows = parser::parse_rows(reader)?;
        Ok(derive_roster(rows, home_institution))
    }
}
