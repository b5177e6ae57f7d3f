//! Descriptive statistics for the roster overview panels.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::ApplicantRecord;
use super::scoring::ScoredApplicant;

/// How many rows the truncated frequency tables keep.
pub const TOP_VALUES_LIMIT: usize = 10;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Frequency table for one categorical field, most frequent first, ties
/// broken by value ascending so the output is deterministic. Blank cells
/// are not counted.
pub fn value_counts<F>(records: &[ApplicantRecord], key: F) -> Vec<ValueCount>
where
    F: Fn(&ApplicantRecord) -> &str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        let value = key(record);
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut table: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // Stable sort on top of the map's value ordering keeps ties alphabetical.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// [`value_counts`] truncated to the `limit` most frequent values.
pub fn top_value_counts<F>(records: &[ApplicantRecord], key: F, limit: usize) -> Vec<ValueCount>
where
    F: Fn(&ApplicantRecord) -> &str,
{
    let mut table = value_counts(records, key);
    table.truncate(limit);
    table
}

/// Spread statistics for one numeric column, quartiles included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; zero when fewer than two values.
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Describe a numeric column. `None` when there are no values to describe.
pub fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = sorted
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    };

    Some(NumericSummary {
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linearly interpolated percentile over an already-sorted slice.
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// The overview panel's aggregate view of one cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub total: usize,
    pub gender_counts: Vec<ValueCount>,
    pub top_programs: Vec<ValueCount>,
    pub top_majors: Vec<ValueCount>,
    pub top_universities: Vec<ValueCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<NumericSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aptitude: Option<NumericSummary>,
}

/// Aggregate a cohort for the overview: headcount, the categorical
/// frequency tables, and spread statistics over the numeric columns
/// (missing values excluded, not zero-filled).
pub fn cohort_summary(records: &[ApplicantRecord]) -> CohortSummary {
    let gpas: Vec<f64> = records
        .iter()
        .filter_map(|record| record.gpa_normalized)
        .collect();
    let aptitudes: Vec<f64> = records
        .iter()
        .filter_map(|record| record.aptitude_score)
        .collect();

    CohortSummary {
        total: records.len(),
        gender_counts: value_counts(records, |record| record.gender.as_str()),
        top_programs: top_value_counts(records, |record| record.program.as_str(), TOP_VALUES_LIMIT),
        top_majors: top_value_counts(
            records,
            |record| record.bachelor_major.as_str(),
            TOP_VALUES_LIMIT,
        ),
        top_universities: top_value_counts(
            records,
            |record| record.graduated_from.as_str(),
            TOP_VALUES_LIMIT,
        ),
        gpa: numeric_summary(&gpas),
        aptitude: numeric_summary(&aptitudes),
    }
}

/// Spread of the composite scores a scoring pass produced.
pub fn score_summary(scored: &[ScoredApplicant]) -> Option<NumericSummary> {
    let scores: Vec<f64> = scored.iter().map(|entry| entry.score).collect();
    numeric_summary(&scores)
}
