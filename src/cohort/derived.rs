//! Score inputs derived from raw roster cells at intake.

use super::domain::{ApplicantRecord, RawApplicantRow};
use super::gpa::normalize_gpa;

/// Bonus value granted when the applicant graduated from the home
/// institution. The flag is always this bonus or zero.
pub const HOME_INSTITUTION_BONUS: f64 = 100.0;

/// Two-level home-institution flag from the graduated-from cell.
///
/// Only an exact match against the configured institution name earns the
/// bonus; blank cells and every other university read as zero.
pub fn home_institution_flag(graduated_from: &str, home_institution: &str) -> f64 {
    let university = graduated_from.trim();
    if !university.is_empty() && university == home_institution {
        HOME_INSTITUTION_BONUS
    } else {
        0.0
    }
}

/// Coerce the tests-taken cell to a non-negative count.
///
/// Blank cells, "not applicable" markers, and anything else that is not a
/// finite non-negative number coerce to zero: an unreadable cell means no
/// tests on record, never a hole in the score formula.
pub fn coerce_tests_taken(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Coerce the aptitude-score cell to a number, `None` when it has none.
///
/// Unlike tests-taken there is no safe substitute value here, so anything
/// non-numeric stays missing and the scoring stage decides what to do.
pub fn coerce_aptitude_score(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Build the cleaned applicant record from one raw roster row, computing
/// every derived field exactly once.
pub fn applicant_from_row(row: RawApplicantRow, home_institution: &str) -> ApplicantRecord {
    let gpa_normalized = normalize_gpa(&row.gpa);
    let aptitude_score = coerce_aptitude_score(&row.aptitude_score);
    let tests_taken = coerce_tests_taken(&row.tests_taken);
    let home_institution_flag = home_institution_flag(&row.graduated_from, home_institution);

    ApplicantRecord {
        name: tidy(row.name),
        national_id: tidy(row.national_id),
        phone: tidy(row.phone),
        email: tidy(row.email),
        status: tidy(row.status),
        program: tidy(row.program),
        semester: tidy(row.semester),
        bachelor_major: tidy(row.bachelor_major),
        graduated_from: tidy(row.graduated_from),
        gender: tidy(row.gender),
        gpa_raw: tidy(row.gpa),
        gpa_normalized,
        aptitude_score,
        tests_taken,
        home_institution_flag,
    }
}

/// Intake conversion for a whole roster, preserving row order.
pub fn derive_roster(rows: Vec<RawApplicantRow>, home_institution: &str) -> Vec<ApplicantRecord> {
    rows.into_iter()
        .map(|row| applicant_from_row(row, home_institution))
        .collect()
}

fn tidy(cell: String) -> String {
    cell.trim().to_string()
}
