use color_eyre::{Result, eyre};
use serde_json::Value;

use robo_config::OracleConfig;
use robo_domain::{Investor, InvestorScore, PitchProfile};

/// Asks the oracle to score every candidate against the pitch profile.
///
/// The parsed list is deliberately tolerant: ids may arrive as strings or
/// numbers, scores and reasons may be absent, and entries without an id are
/// dropped. Unknown and duplicate ids are left in place; sanitizing those is
/// the merge step's contract, not the parser's.
pub async fn score_candidates(
	cfg: &OracleConfig,
	profile: &PitchProfile,
	candidates: &[Investor],
) -> Result<Vec<InvestorScore>> {
	let prompt = scoring_prompt(profile, candidates);
	let json = crate::complete(cfg, &prompt).await?;

	parse_score_json(json)
}

fn scoring_prompt(profile: &PitchProfile, candidates: &[Investor]) -> String {
	let roster = candidates
		.iter()
		.map(|investor| {
			format!(
				"ID: {}, Name: {}, Firm: {}, Focus: {}, Past Deals: {}",
				investor.id,
				investor.name,
				investor.firm,
				investor.focus,
				investor.past_deals.join(", ")
			)
		})
		.collect::<Vec<_>>()
		.join("\n---\n");

	format!(
		"You are a placement agent.\n\n\
		 PITCH DETAILS:\n\
		 Company: {}\n\
		 Industry: {}\n\
		 Stage: {}\n\
		 Summary: {}\n\
		 Ideal Profile: {}\n\n\
		 CANDIDATE INVESTORS:\n{roster}\n\n\
		 Task:\n\
		 1. Score each investor from 0 to 100 based on fit.\n\
		 2. Provide a 1 sentence reason for the score.\n\n\
		 Respond with a JSON array of objects with 'id', 'matchScore' and 'matchReason'.",
		profile.company_name,
		profile.industry,
		profile.stage,
		profile.summary,
		profile.ideal_investor_profile,
	)
}

fn parse_score_json(json: Value) -> Result<Vec<InvestorScore>> {
	let payload: Value = match crate::content_text(&json) {
		Some(content) => serde_json::from_str(content)
			.map_err(|_| eyre::eyre!("Scorer content is not valid JSON."))?,
		None => json,
	};
	let items = payload
		.as_array()
		.ok_or_else(|| eyre::eyre!("Scorer response is not a JSON array."))?;
	let mut scores = Vec::with_capacity(items.len());

	for item in items {
		let Some(id) = item_id(item) else {
			continue;
		};

		scores.push(InvestorScore {
			id,
			score: item.get("matchScore").and_then(Value::as_i64),
			reason: item.get("matchReason").and_then(Value::as_str).map(str::to_string),
		});
	}

	Ok(scores)
}

fn item_id(item: &Value) -> Option<String> {
	match item.get("id")? {
		Value::String(id) => Some(id.clone()),
		Value::Number(id) => Some(id.to_string()),
		_ => None,
	}
}
