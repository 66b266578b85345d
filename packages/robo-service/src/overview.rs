use serde::{Deserialize, Serialize};

use robo_domain::Investor;

use crate::BankerService;

/// Dashboard numbers. Match-quality buckets follow the display thresholds:
/// high above 80, medium 51-80, low at 50 and below (absent scores count as
/// low).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
	pub analyzed: bool,
	pub investors_matched: usize,
	pub high_match: usize,
	pub medium_match: usize,
	pub low_match: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub investors: Vec<Investor>,
}

impl BankerService {
	pub async fn overview(&self) -> OverviewResponse {
		let state = self.state().lock().await;
		let score = |investor: &&Investor| i64::from(investor.match_score.unwrap_or(0));

		OverviewResponse {
			analyzed: state.profile.is_some(),
			investors_matched: state.investors.len(),
			high_match: state.investors.iter().filter(|i| score(i) > 80).count(),
			medium_match: state
				.investors
				.iter()
				.filter(|i| score(i) > 50 && score(i) <= 80)
				.count(),
			low_match: state.investors.iter().filter(|i| score(i) <= 50).count(),
		}
	}

	/// The ranked display list: empty until the first successful matching
	/// run, then the latest committed ranking.
	pub async fn list_investors(&self) -> ListResponse {
		let state = self.state().lock().await;

		ListResponse { investors: state.investors.clone() }
	}
}
