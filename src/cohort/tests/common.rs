use std::collections::BTreeSet;

use crate::cohort::domain::{ApplicantRecord, RawApplicantRow};
use crate::cohort::scoring::{ScoredApplicant, ScoringWeights};

pub(super) const HOME_INSTITUTION: &str = "جامعة الأمير سطام بن عبدالعزيز";
pub(super) const OTHER_UNIVERSITY: &str = "King Saud University";

pub(super) fn raw_row(name: &str, gpa: &str, aptitude: &str, tests: &str) -> RawApplicantRow {
    RawApplicantRow {
        name: name.to_string(),
        national_id: "1098765432".to_string(),
        phone: "0551234567".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status: "Submitted".to_string(),
        program: "MSc Computer Science".to_string(),
        semester: "Fall 2025".to_string(),
        bachelor_major: "Computer Science".to_string(),
        graduated_from: OTHER_UNIVERSITY.to_string(),
        gpa: gpa.to_string(),
        tests_taken: tests.to_string(),
        gender: "Female".to_string(),
        aptitude_score: aptitude.to_string(),
    }
}

pub(super) fn applicant(
    name: &str,
    program: &str,
    major: &str,
    university: &str,
) -> ApplicantRecord {
    ApplicantRecord {
        name: name.to_string(),
        national_id: "1098765432".to_string(),
        phone: "0551234567".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status: "Submitted".to_string(),
        program: program.to_string(),
        semester: "Fall 2025".to_string(),
        bachelor_major: major.to_string(),
        graduated_from: university.to_string(),
        gender: "Female".to_string(),
        gpa_raw: "4.5/5".to_string(),
        gpa_normalized: Some(4.5),
        aptitude_score: Some(80.0),
        tests_taken: 1.0,
        home_institution_flag: 0.0,
    }
}

pub(super) fn scored(name: &str, score: f64) -> ScoredApplicant {
    ScoredApplicant {
        applicant: applicant(name, "MSc Computer Science", "Computer Science", OTHER_UNIVERSITY),
        score,
    }
}

pub(super) fn default_weights() -> ScoringWeights {
    ScoringWeights {
        gpa_rate: 0.5,
        aptitude_rate: 0.5,
        tests_rate: 0.0,
        graduate_from_rate: 0.0,
    }
}

pub(super) fn allow(values: &[&str]) -> Option<BTreeSet<String>> {
    Some(values.iter().map(|value| value.to_string()).collect())
}

pub(super) fn names(records: &[ApplicantRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}
