//! Applicant cohort pipeline: intake normalization, filtering, scoring,
//! and selection.
//!
//! Every stage is a pure function over owned data. A roster flows through
//! as raw rows, becomes [`ApplicantRecord`]s at intake (GPA normalization
//! and the other derived fields happen exactly once, there), gets narrowed
//! by a [`CohortFilter`], scored under validated [`ScoringWeights`], and
//! finally ranked and cut to the committee's top N.

pub mod derived;
pub mod domain;
pub mod filter;
pub mod gpa;
pub mod scoring;
pub mod selection;
pub mod summary;
pub mod views;

#[cfg(test)]
mod tests;

pub use derived::{
    applicant_from_row, coerce_aptitude_score, coerce_tests_taken, derive_roster,
    home_institution_flag, HOME_INSTITUTION_BONUS,
};
pub use domain::{ApplicantRecord, RawApplicantRow};
pub use filter::{
    distinct_majors, distinct_programs, distinct_universities, search_records, CohortFilter,
    ProgramSelector,
};
pub use gpa::normalize_gpa;
pub use scoring::{
    score_applicants, IncompleteApplicant, ScoreInput, ScoredApplicant, ScoringOutcome,
    ScoringWeights, WeightError, GPA_SCALE_MULTIPLIER,
};
pub use selection::{rank_by_score, select_top};
pub use summary::{
    cohort_summary, numeric_summary, score_summary, top_value_counts, value_counts, CohortSummary,
    NumericSummary, ValueCount, TOP_VALUES_LIMIT,
};
pub use views::{roster_rows, selection_rows, ApplicantRowView};
