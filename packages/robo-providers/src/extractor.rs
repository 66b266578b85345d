use color_eyre::{Result, eyre};
use serde_json::Value;

use robo_config::OracleConfig;
use robo_domain::PitchProfile;

/// Asks the oracle to turn free-form pitch text into a structured profile.
/// The response must carry every profile field; up to three attempts are made
/// before the response is declared malformed.
pub async fn extract_profile(cfg: &OracleConfig, text: &str) -> Result<PitchProfile> {
	let prompt = extraction_prompt(text);

	for _ in 0..3 {
		let json = crate::complete(cfg, &prompt).await?;

		if let Ok(profile) = parse_profile_json(json) {
			return Ok(profile);
		}
	}

	Err(eyre::eyre!("Extractor response is not a valid pitch profile."))
}

fn extraction_prompt(text: &str) -> String {
	format!(
		"You are a senior investment banker. Analyze the following pitch deck text and \
		 extract the structured data.\n\
		 Respond with a JSON object containing exactly these string fields: companyName, \
		 industry, stage, askAmount, valueProposition, idealInvestorProfile, summary.\n\n\
		 TEXT:\n{text}"
	)
}

fn parse_profile_json(json: Value) -> Result<PitchProfile> {
	let payload = match crate::content_text(&json) {
		Some(content) => serde_json::from_str(content)
			.map_err(|_| eyre::eyre!("Extractor content is not valid JSON."))?,
		None if json.is_object() => json,
		None => return Err(eyre::eyre!("Extractor response is missing JSON content.")),
	};

	serde_json::from_value(payload)
		.map_err(|_| eyre::eyre!("Extractor payload is missing required profile fields."))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn profile_payload() -> String {
		serde_json::json!({
			"companyName": "NexusAI",
			"industry": "Fintech",
			"stage": "Seed",
			"askAmount": "$2M",
			"valueProposition": "AI trading for retail investors.",
			"idealInvestorProfile": "Fintech seed funds.",
			"summary": "Algorithmic trading app."
		})
		.to_string()
	}

	#[test]
	fn parses_profile_from_choice_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": profile_payload() } }
			]
		});
		let profile = parse_profile_json(json).expect("parse failed");

		assert_eq!(profile.company_name, "NexusAI");
		assert_eq!(profile.ask_amount, "$2M");
	}

	#[test]
	fn parses_bare_object_response() {
		let json: Value = serde_json::from_str(&profile_payload()).expect("payload is JSON");
		let profile = parse_profile_json(json).expect("parse failed");

		assert_eq!(profile.stage, "Seed");
	}

	#[test]
	fn rejects_payload_with_missing_fields() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "{\"companyName\": \"NexusAI\"}" } }
			]
		});

		assert!(parse_profile_json(json).is_err());
	}

	#[test]
	fn rejects_non_json_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "sorry, no" } }
			]
		});

		assert!(parse_profile_json(json).is_err());
	}
}
