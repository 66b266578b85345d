use std::collections::HashSet;

use robo_domain::{
	CandidatePool, Error, Investor, InvestorScore, InvestorStatus, merge_and_rank, seed,
};

fn candidate(id: &str) -> Investor {
	Investor {
		id: id.to_string(),
		name: format!("Investor {id}"),
		firm: format!("Firm {id}"),
		focus: "Generalist".to_string(),
		aum: "$1B".to_string(),
		past_deals: vec!["DealCo".to_string()],
		website: "example.com".to_string(),
		status: InvestorStatus::New,
		match_score: None,
		match_reason: None,
	}
}

fn scored_candidate(id: &str, score: u8, reason: &str) -> Investor {
	Investor {
		match_score: Some(score),
		match_reason: Some(reason.to_string()),
		..candidate(id)
	}
}

fn tuple(id: &str, score: i64, reason: &str) -> InvestorScore {
	InvestorScore { id: id.to_string(), score: Some(score), reason: Some(reason.to_string()) }
}

fn ids(investors: &[Investor]) -> Vec<&str> {
	investors.iter().map(|investor| investor.id.as_str()).collect()
}

#[test]
fn output_keeps_length_and_id_set() {
	let candidates = vec![candidate("1"), candidate("2"), candidate("3")];
	let scored = vec![tuple("2", 55, "fit"), tuple("99", 100, "ghost")];
	let ranked = merge_and_rank(&candidates, &scored);

	assert_eq!(ranked.len(), candidates.len());

	let expected: HashSet<&str> = ids(&candidates).into_iter().collect();
	let actual: HashSet<&str> = ids(&ranked).into_iter().collect();

	assert_eq!(actual, expected);
}

#[test]
fn unknown_ids_are_dropped() {
	let candidates = vec![candidate("1"), candidate("2"), candidate("3")];
	let scored = vec![tuple("99", 100, "ghost")];
	let ranked = merge_and_rank(&candidates, &scored);

	assert_eq!(ranked.len(), 3);
	assert!(ranked.iter().all(|investor| investor.match_score.is_none()));
	assert!(!ids(&ranked).contains(&"99"));
}

#[test]
fn later_duplicate_wins() {
	let candidates = vec![candidate("1"), candidate("2")];
	let scored = vec![tuple("1", 40, "early"), tuple("1", 70, "late")];
	let ranked = merge_and_rank(&candidates, &scored);
	let first = ranked.iter().find(|investor| investor.id == "1").expect("missing candidate");

	assert_eq!(first.match_score, Some(70));
	assert_eq!(first.match_reason.as_deref(), Some("late"));
}

#[test]
fn unscored_candidates_keep_previous_values() {
	let candidates =
		vec![scored_candidate("1", 33, "old reason"), candidate("2"), candidate("3")];
	let scored = vec![tuple("2", 90, "fresh")];
	let ranked = merge_and_rank(&candidates, &scored);
	let kept = ranked.iter().find(|investor| investor.id == "1").expect("missing candidate");

	assert_eq!(kept.match_score, Some(33));
	assert_eq!(kept.match_reason.as_deref(), Some("old reason"));
}

#[test]
fn tuple_without_score_overwrites_with_none() {
	let candidates = vec![scored_candidate("1", 80, "stale")];
	let scored = vec![InvestorScore { id: "1".to_string(), score: None, reason: None }];
	let ranked = merge_and_rank(&candidates, &scored);

	assert_eq!(ranked[0].match_score, None);
	assert_eq!(ranked[0].match_reason, None);
}

#[test]
fn sorts_descending_with_missing_scores_last() {
	let candidates = vec![candidate("1"), candidate("2"), candidate("3")];
	let scored = vec![tuple("1", 10, "low"), tuple("3", 88, "high")];
	let ranked = merge_and_rank(&candidates, &scored);

	assert_eq!(ids(&ranked), vec!["3", "1", "2"]);
}

#[test]
fn ties_keep_candidate_pool_order() {
	let candidates = vec![candidate("1"), candidate("2"), candidate("3")];
	let scored = vec![tuple("2", 90, "fit"), tuple("1", 90, "fit2")];
	let ranked = merge_and_rank(&candidates, &scored);

	// Both score 90, so pool order decides: "1" before "2", unscored "3" last.
	assert_eq!(ids(&ranked), vec!["1", "2", "3"]);
	assert_eq!(ranked[0].match_reason.as_deref(), Some("fit2"));
	assert_eq!(ranked[1].match_reason.as_deref(), Some("fit"));
	assert_eq!(ranked[2].match_score, None);
}

#[test]
fn merging_without_new_scores_changes_nothing() {
	let candidates = vec![candidate("1"), candidate("2"), candidate("3")];
	let scored = vec![tuple("2", 90, "fit"), tuple("1", 90, "fit2")];
	let ranked = merge_and_rank(&candidates, &scored);
	let reranked = merge_and_rank(&ranked, &[]);

	assert_eq!(reranked, ranked);
}

#[test]
fn inputs_are_not_mutated() {
	let candidates = vec![candidate("1"), candidate("2")];
	let snapshot = candidates.clone();
	let scored = vec![tuple("1", 95, "fit")];
	let _ = merge_and_rank(&candidates, &scored);

	assert_eq!(candidates, snapshot);
}

#[test]
fn out_of_range_scores_are_clamped() {
	let candidates = vec![candidate("1"), candidate("2")];
	let scored = vec![tuple("1", 150, "too high"), tuple("2", -5, "too low")];
	let ranked = merge_and_rank(&candidates, &scored);

	assert_eq!(ranked[0].id, "1");
	assert_eq!(ranked[0].match_score, Some(100));
	assert_eq!(ranked[1].match_score, Some(0));
}

#[test]
fn pool_rejects_duplicate_ids() {
	let investors = vec![candidate("1"), candidate("2"), candidate("1")];
	let err = CandidatePool::new(investors).expect_err("duplicate id must be rejected");

	match err {
		Error::DuplicateInvestorId { id } => assert_eq!(id, "1"),
	}
}

#[test]
fn pool_preserves_authoring_order() {
	let pool = CandidatePool::new(vec![candidate("b"), candidate("a"), candidate("c")])
		.expect("pool must build");

	assert_eq!(ids(pool.investors()), vec!["b", "a", "c"]);
	assert!(pool.get("a").is_some());
	assert!(pool.get("missing").is_none());
}

#[test]
fn seed_table_builds_a_valid_pool() {
	let investors = seed::investors();
	let pool = CandidatePool::new(investors).expect("seed data must have unique ids");

	assert_eq!(pool.len(), 6);
	assert!(pool.investors().iter().all(|investor| investor.status == InvestorStatus::New));
	assert!(pool.investors().iter().all(|investor| investor.match_score.is_none()));
}

#[test]
fn investor_serializes_with_wire_field_names() {
	let investor = scored_candidate("1", 91, "fit");
	let json = serde_json::to_value(&investor).expect("serialize investor");

	assert_eq!(json["matchScore"], 91);
	assert_eq!(json["matchReason"], "fit");
	assert_eq!(json["pastDeals"][0], "DealCo");
	assert_eq!(json["status"], "New");
}
