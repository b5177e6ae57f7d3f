//! Ranking and top-N selection over scored applicants.

use std::cmp::Ordering;

use super::scoring::ScoredApplicant;

/// Rank applicants by composite score, highest first.
///
/// The sort is stable, so applicants with equal scores keep the order they
/// arrived in. Two reviewers running the same roster through the same
/// weights always see the same listing.
pub fn rank_by_score(scored: &[ScoredApplicant]) -> Vec<ScoredApplicant> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// The `min(n, len)` highest-scoring applicants, best first.
///
/// Total on both ends: zero selects nothing, a request past the end selects
/// the whole ranking.
pub fn select_top(scored: &[ScoredApplicant], n: usize) -> Vec<ScoredApplicant> {
    let mut ranked = rank_by_score(scored);
    ranked.truncate(n);
    ranked
}
