//! Weighted composite scoring over the filtered cohort.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::ApplicantRecord;
use super::gpa::round_to_2;

/// Multiplier lifting the 0-5 normalized GPA into the same 0-100 band the
/// other score inputs live on.
pub const GPA_SCALE_MULTIPLIER: f64 = 20.0;

const GPA_RATE_BOUNDS: (f64, f64) = (0.3, 1.0);
const APTITUDE_RATE_BOUNDS: (f64, f64) = (0.3, 0.5);
const TESTS_RATE_BOUNDS: (f64, f64) = (0.0, 0.3);
const GRADUATE_FROM_RATE_BOUNDS: (f64, f64) = (0.0, 0.2);

/// The four reviewer-chosen weight rates. Each rate is bounded and the four
/// must sum to exactly 1.00 at two-decimal precision; [`ScoringWeights::validate`]
/// enforces both before any score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub gpa_rate: f64,
    pub aptitude_rate: f64,
    pub tests_rate: f64,
    pub graduate_from_rate: f64,
}

impl Default for ScoringWeights {
    /// The review committee's starting point: GPA and aptitude split evenly,
    /// the optional inputs off.
    fn default() -> Self {
        Self {
            gpa_rate: 0.5,
            aptitude_rate: 0.5,
            tests_rate: 0.0,
            graduate_from_rate: 0.0,
        }
    }
}

/// Weight configurations the calculator refuses to run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("{rate} must lie within {min}..={max}, got {value}")]
    RateOutOfBounds {
        rate: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("weight rates must sum to 1.00 at two decimals, got {sum}")]
    RatesDoNotSumToOne { sum: f64 },
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), WeightError> {
        check_rate("GPA rate", self.gpa_rate, GPA_RATE_BOUNDS)?;
        check_rate("aptitude rate", self.aptitude_rate, APTITUDE_RATE_BOUNDS)?;
        check_rate("tests rate", self.tests_rate, TESTS_RATE_BOUNDS)?;
        check_rate(
            "graduate-from rate",
            self.graduate_from_rate,
            GRADUATE_FROM_RATE_BOUNDS,
        )?;

        let sum = self.gpa_rate + self.aptitude_rate + self.tests_rate + self.graduate_from_rate;
        if round_to_2(sum) != 1.0 {
            return Err(WeightError::RatesDoNotSumToOne { sum });
        }

        Ok(())
    }
}

fn check_rate(rate: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), WeightError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(WeightError::RateOutOfBounds {
            rate,
            value,
            min,
            max,
        })
    }
}

/// Score inputs that can be absent on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreInput {
    NormalizedGpa,
    AptitudeScore,
}

impl ScoreInput {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreInput::NormalizedGpa => "normalized GPA",
            ScoreInput::AptitudeScore => "aptitude score",
        }
    }
}

/// A record annotated with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredApplicant {
    pub applicant: ApplicantRecord,
    pub score: f64,
}

/// A record the calculator skipped, with the inputs it lacked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncompleteApplicant {
    pub applicant: ApplicantRecord,
    pub missing: Vec<ScoreInput>,
}

/// Everything one scoring pass produced. `scored` and `incomplete` each keep
/// the cohort's original order and together cover it exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub scored: Vec<ScoredApplicant>,
    pub incomplete: Vec<IncompleteApplicant>,
}

/// Validate the weights, then score every record that has both optional
/// inputs present.
///
/// Records missing a normalized GPA or an aptitude score are not silently
/// zero-filled; they land in [`ScoringOutcome::incomplete`] with the missing
/// inputs named so the committee sees its data problems instead of a quietly
/// deflated ranking.
pub fn score_applicants(
    records: &[ApplicantRecord],
    weights: &ScoringWeights,
) -> Result<ScoringOutcome, WeightError> {
    weights.validate()?;

    let mut outcome = ScoringOutcome::default();
    for record in records {
        match (record.gpa_normalized, record.aptitude_score) {
            (Some(gpa), Some(aptitude)) => {
                let score = gpa * GPA_SCALE_MULTIPLIER * weights.gpa_rate
                    + aptitude * weights.aptitude_rate
                    + record.tests_taken * weights.tests_rate
                    + record.home_institution_flag * weights.graduate_from_rate;
                outcome.scored.push(ScoredApplicant {
                    applicant: record.clone(),
                    score,
                });
            }
            (gpa, aptitude) => {
                let mut missing = Vec::new();
                if gpa.is_none() {
                    missing.push(ScoreInput::NormalizedGpa);
                }
                if aptitude.is_none() {
                    missing.push(ScoreInput::AptitudeScore);
                }
                outcome.incomplete.push(IncompleteApplicant {
                    applicant: record.clone(),
                    missing,
                });
            }
        }
    }

    Ok(outcome)
}
