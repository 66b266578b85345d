use serde::{Deserialize, Serialize};

/// Structured summary extracted from free-form pitch text. All fields are
/// plain text; downstream consumers must tolerate arbitrary strings (the ask
/// amount in particular is never parsed as currency). Replaced wholesale on
/// re-analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchProfile {
	pub company_name: String,
	pub industry: String,
	pub stage: String,
	pub ask_amount: String,
	pub value_proposition: String,
	pub ideal_investor_profile: String,
	pub summary: String,
}

/// A per-investor cold-email draft. One draft is live at a time; it is
/// replaced wholesale when another investor is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachDraft {
	pub recipient_id: String,
	pub subject: String,
	pub body: String,
}
