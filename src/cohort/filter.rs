//! Cascading inclusion filters and lookup helpers over the roster.

use std::collections::BTreeSet;

use super::domain::ApplicantRecord;

/// Program restriction for the first filter stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgramSelector {
    /// Keep every program (the review tool's "All" choice).
    #[default]
    All,
    /// Keep only records whose program matches exactly.
    Only(String),
}

impl ProgramSelector {
    fn admits(&self, program: &str) -> bool {
        match self {
            ProgramSelector::All => true,
            ProgramSelector::Only(selected) => program == selected,
        }
    }
}

/// Reviewer-chosen cohort restrictions, applied as a fixed cascade:
/// program, then bachelor majors, then universities.
///
/// `None` for an allow-list means "no restriction"; an explicit set is
/// absolute, so `Some` of an empty set excludes every record. Filtering is
/// pure and order-preserving: the input roster is never mutated and
/// surviving records keep their relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortFilter {
    pub program: ProgramSelector,
    pub majors: Option<BTreeSet<String>>,
    pub universities: Option<BTreeSet<String>>,
}

impl CohortFilter {
    /// Restrict to a single program with no further allow-lists.
    pub fn for_program(program: impl Into<String>) -> Self {
        Self {
            program: ProgramSelector::Only(program.into()),
            ..Self::default()
        }
    }

    /// Run the cascade and return the surviving records.
    pub fn apply(&self, records: &[ApplicantRecord]) -> Vec<ApplicantRecord> {
        let after_program: Vec<ApplicantRecord> = records
            .iter()
            .filter(|record| self.program.admits(&record.program))
            .cloned()
            .collect();
        let after_majors = retain_allowed(after_program, &self.majors, |record| {
            record.bachelor_major.as_str()
        });
        retain_allowed(after_majors, &self.universities, |record| {
            record.graduated_from.as_str()
        })
    }
}

fn retain_allowed<F>(
    records: Vec<ApplicantRecord>,
    allowed: &Option<BTreeSet<String>>,
    key: F,
) -> Vec<ApplicantRecord>
where
    F: Fn(&ApplicantRecord) -> &str,
{
    match allowed {
        None => records,
        Some(values) => records
            .into_iter()
            .filter(|record| values.contains(key(record)))
            .collect(),
    }
}

/// Distinct program names, sorted, blanks excluded. Feeds the choice lists
/// a caller offers before building a [`CohortFilter`].
pub fn distinct_programs(records: &[ApplicantRecord]) -> Vec<String> {
    distinct_values(records, |record| record.program.as_str())
}

/// Distinct bachelor majors, sorted, blanks excluded.
pub fn distinct_majors(records: &[ApplicantRecord]) -> Vec<String> {
    distinct_values(records, |record| record.bachelor_major.as_str())
}

/// Distinct universities of graduation, sorted, blanks excluded.
pub fn distinct_universities(records: &[ApplicantRecord]) -> Vec<String> {
    distinct_values(records, |record| record.graduated_from.as_str())
}

fn distinct_values<F>(records: &[ApplicantRecord], key: F) -> Vec<String>
where
    F: Fn(&ApplicantRecord) -> &str,
{
    let values: BTreeSet<&str> = records
        .iter()
        .map(|record| key(record))
        .filter(|value| !value.is_empty())
        .collect();
    values.into_iter().map(str::to_string).collect()
}

/// Case-insensitive substring search across every raw string field of each
/// record, including the unnormalized GPA cell. A blank term matches all
/// records; derived numeric fields are not searched.
pub fn search_records(records: &[ApplicantRecord], term: &str) -> Vec<ApplicantRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .cloned()
        .collect()
}

fn matches_term(record: &ApplicantRecord, needle: &str) -> bool {
    [
        record.name.as_str(),
        record.national_id.as_str(),
        record.phone.as_str(),
        record.email.as_str(),
        record.status.as_str(),
        record.program.as_str(),
        record.semester.as_str(),
        record.bachelor_major.as_str(),
        record.graduated_from.as_str(),
        record.gender.as_str(),
        record.gpa_raw.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
