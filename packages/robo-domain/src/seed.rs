use crate::investor::{Investor, InvestorStatus};

/// Pitch text used to prefill the analyzer view in demos.
pub const SAMPLE_PITCH: &str = "\
Company: NexusAI
Mission: Democratizing hedge-fund grade algorithmic trading for retail investors.
Product: A mobile app that connects to brokerage accounts (Robinhood, Schwab) and allows users to subscribe to AI-managed trading strategies.
Traction: $500k ARR, 20% MoM growth, 5,000 MAU.
Team: Ex-Goldman Sachs quant traders and Google DeepMind engineers.
Ask: Raising $2M Seed round to acquire regulatory licenses and scale marketing.
Unique Advantage: Proprietary reinforcement learning model that adapts to volatility 10x faster than competitors.
";

/// The built-in candidate table. Six records, unique ids, everything `New`.
pub fn investors() -> Vec<Investor> {
	vec![
		investor(
			"1",
			"Sarah Chen",
			"Sequoia Capital",
			"B2B SaaS, AI Infrastructure, Enterprise",
			"$85B",
			&["Stripe", "Zoom", "Snowflake"],
			"sequoiacap.com",
		),
		investor(
			"2",
			"Marc Andreessen",
			"a16z",
			"Crypto, Consumer Social, American Dynamism",
			"$35B",
			&["Facebook", "Coinbase", "Airbnb"],
			"a16z.com",
		),
		investor(
			"3",
			"Bill Gurley",
			"Benchmark",
			"Marketplaces, Consumer Internet",
			"$9B",
			&["Uber", "Zillow", "Nextdoor"],
			"benchmark.com",
		),
		investor(
			"4",
			"Rebecca Lynn",
			"Canvas Ventures",
			"Fintech, Digital Health, Insurtech",
			"$1.5B",
			&["LendingClub", "Check", "Doximity"],
			"canvas.vc",
		),
		investor(
			"5",
			"Fred Wilson",
			"Union Square Ventures",
			"Web3, Climate, Networks",
			"$4B",
			&["Twitter", "Coinbase", "Etsy"],
			"usv.com",
		),
		investor(
			"6",
			"Garry Tan",
			"Y Combinator",
			"Early Stage, Seed, Agnostic",
			"$1B+",
			&["Coinbase", "Instacart"],
			"ycombinator.com",
		),
	]
}

fn investor(
	id: &str,
	name: &str,
	firm: &str,
	focus: &str,
	aum: &str,
	past_deals: &[&str],
	website: &str,
) -> Investor {
	Investor {
		id: id.to_string(),
		name: name.to_string(),
		firm: firm.to_string(),
		focus: focus.to_string(),
		aum: aum.to_string(),
		past_deals: past_deals.iter().map(|deal| deal.to_string()).collect(),
		website: website.to_string(),
		status: InvestorStatus::New,
		match_score: None,
		match_reason: None,
	}
}
