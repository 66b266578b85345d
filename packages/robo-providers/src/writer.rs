use color_eyre::{Result, eyre};
use serde_json::Value;

use robo_config::OracleConfig;
use robo_domain::{Investor, PitchProfile};

/// Generates a subject line for the cold email. An empty response falls back
/// to a deterministic "Intro: company x firm" line instead of failing.
pub async fn draft_subject(
	cfg: &OracleConfig,
	profile: &PitchProfile,
	investor: &Investor,
) -> Result<String> {
	let prompt = subject_prompt(profile, investor);
	let json = crate::complete(cfg, &prompt).await?;

	match parse_text(&json) {
		Some(subject) => Ok(subject),
		None => Ok(format!("Intro: {} x {}", profile.company_name, investor.firm)),
	}
}

/// Generates the cold-email body. Unlike the subject there is no sensible
/// fallback; an empty response is a malformed one.
pub async fn draft_body(
	cfg: &OracleConfig,
	profile: &PitchProfile,
	investor: &Investor,
) -> Result<String> {
	let prompt = body_prompt(profile, investor);
	let json = crate::complete(cfg, &prompt).await?;

	parse_text(&json).ok_or_else(|| eyre::eyre!("Writer response is missing the email body."))
}

fn subject_prompt(profile: &PitchProfile, investor: &Investor) -> String {
	format!(
		"Generate a catchy, professional email subject line for a cold email to {} regarding \
		 {}. Max 7 words. No quotes.",
		investor.name, profile.company_name,
	)
}

fn body_prompt(profile: &PitchProfile, investor: &Investor) -> String {
	let match_reason = investor.match_reason.as_deref().unwrap_or("Strong portfolio fit.");

	format!(
		"Write a warm, professional cold email to {} at {}.\n\n\
		 Context:\n\
		 - We are pitching: {}\n\
		 - Company Summary: {}\n\
		 - Why it's a match for them specifically: {}\n\
		 - Their past deals relevant to this: {}\n\n\
		 Rules:\n\
		 - Keep it under 150 words.\n\
		 - Mention why this specific deal fits their portfolio (referencing past deals).\n\
		 - Ask for a brief 15-min intro call.\n\
		 - No placeholders. Fill in all details.\n\
		 - Return ONLY the body of the email.",
		investor.name,
		investor.firm,
		profile.company_name,
		profile.summary,
		match_reason,
		investor.past_deals.join(", "),
	)
}

fn parse_text(json: &Value) -> Option<String> {
	let content = crate::content_text(json)?;
	let trimmed = content.trim();

	if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
