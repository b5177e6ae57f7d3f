//! Flat row projections for external writers and displays.

use serde::Serialize;

use super::domain::ApplicantRecord;
use super::scoring::ScoredApplicant;

/// The fixed export projection: identity, the score inputs that explain a
/// ranking, and the composite score when one exists. Contact details and
/// workflow fields stay out of exported files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantRowView {
    pub name: String,
    pub national_id: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub gpa_normalized: Option<f64>,
    pub aptitude_score: Option<f64>,
    pub bachelor_major: String,
    pub graduated_from: String,
}

impl ApplicantRowView {
    pub fn from_record(record: &ApplicantRecord) -> Self {
        Self {
            name: record.name.clone(),
            national_id: record.national_id.clone(),
            gender: record.gender.clone(),
            score: None,
            gpa_normalized: record.gpa_normalized,
            aptitude_score: record.aptitude_score,
            bachelor_major: record.bachelor_major.clone(),
            graduated_from: record.graduated_from.clone(),
        }
    }

    pub fn from_scored(scored: &ScoredApplicant) -> Self {
        let mut view = Self::from_record(&scored.applicant);
        view.score = Some(scored.score);
        view
    }
}

/// Project an unscored roster slice, preserving order.
pub fn roster_rows(records: &[ApplicantRecord]) -> Vec<ApplicantRowView> {
    records.iter().map(ApplicantRowView::from_record).collect()
}

/// Project a ranked selection, preserving rank order.
pub fn selection_rows(selected: &[ScoredApplicant]) -> Vec<ApplicantRowView> {
    selected.iter().map(ApplicantRowView::from_scored).collect()
}
