use std::{cmp::Reverse, collections::HashMap};

use crate::investor::{Investor, InvestorScore};

const SCORE_MIN: i64 = 0;
const SCORE_MAX: i64 = 100;

/// Merges externally produced score tuples onto the candidate list and
/// returns a new list ordered by match score, best first.
///
/// Tuples whose id matches no candidate are dropped. When `scored` carries
/// more than one tuple for the same id, the later occurrence wins. Candidates
/// without a tuple pass through unchanged, keeping whatever score and reason
/// they already had. Scores outside 0-100 are clamped. The sort is stable, so
/// equal scores keep the candidate order and reruns with identical scores
/// render identically.
///
/// The output always has the same length and id set as `candidates`; the
/// inputs are never mutated.
pub fn merge_and_rank(candidates: &[Investor], scored: &[InvestorScore]) -> Vec<Investor> {
	let mut latest: HashMap<&str, &InvestorScore> = HashMap::with_capacity(scored.len());

	for tuple in scored {
		latest.insert(tuple.id.as_str(), tuple);
	}

	let mut merged: Vec<Investor> = candidates
		.iter()
		.map(|candidate| match latest.get(candidate.id.as_str()) {
			Some(tuple) => Investor {
				match_score: tuple.score.map(clamp_score),
				match_reason: tuple.reason.clone(),
				..candidate.clone()
			},
			None => candidate.clone(),
		})
		.collect();

	merged.sort_by_key(|investor| Reverse(investor.match_score.unwrap_or(0)));

	merged
}

fn clamp_score(score: i64) -> u8 {
	score.clamp(SCORE_MIN, SCORE_MAX) as u8
}
