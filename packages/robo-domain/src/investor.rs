use serde::{Deserialize, Serialize};

/// Pipeline stage an investor sits in. Seed data only ever starts at `New`;
/// the other transitions belong to the (unimplemented) campaign workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorStatus {
	New,
	Contacted,
	#[serde(rename = "Meeting Booked")]
	MeetingBooked,
	Passed,
}

/// One record of the candidate pool. Membership is fixed at startup; only
/// `match_score` and `match_reason` are ever rewritten, by matching runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
	pub id: String,
	pub name: String,
	pub firm: String,
	pub focus: String,
	/// Assets under management, free-form ("$85B", "$1B+").
	pub aum: String,
	/// Display order is authoring order.
	pub past_deals: Vec<String>,
	pub website: String,
	pub status: InvestorStatus,
	#[serde(default)]
	pub match_score: Option<u8>,
	#[serde(default)]
	pub match_reason: Option<String>,
}

/// An externally produced `(id, score, reason)` triple. Untrusted: the id may
/// not exist, the score may be absent or out of range, the reason may be
/// absent. Consumed by [`crate::merge_and_rank`], never retained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestorScore {
	pub id: String,
	#[serde(default, rename = "matchScore")]
	pub score: Option<i64>,
	#[serde(default, rename = "matchReason")]
	pub reason: Option<String>,
}
