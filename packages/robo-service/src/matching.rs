use serde::{Deserialize, Serialize};

use robo_domain::{Investor, matching};

use crate::{BankerService, Error, Result, session::OpKind};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResponse {
	pub investors: Vec<Investor>,
}

impl BankerService {
	/// Scores the candidate pool against the committed profile and commits
	/// the merged, ranked list as the session's display list. On a scoring
	/// failure the previously displayed list is left untouched.
	pub async fn match_investors(&self) -> Result<MatchResponse> {
		let (token, profile, candidates) = {
			let mut state = self.state().lock().await;
			let Some(profile) = state.profile.clone() else {
				return Err(Error::InvalidRequest {
					message: "Analyze a pitch deck before matching investors.".to_string(),
				});
			};
			let token = state.begin(OpKind::Matching)?;

			(token, profile, state.candidates.clone())
		};

		let outcome = self
			.providers
			.scorer
			.score(&self.cfg.providers.oracle, &profile, &candidates)
			.await;
		let mut state = self.state().lock().await;
		let current = state.finish(OpKind::Matching, token);
		let scored = outcome.map_err(|err| Error::Scoring { message: err.to_string() })?;
		let ranked = matching::merge_and_rank(&candidates, &scored);

		if current {
			state.candidates = pool_ordered(&candidates, &ranked);
			state.investors = ranked.clone();
			tracing::info!(tuples = scored.len(), "Investor ranking committed.");
		} else {
			tracing::debug!("Discarding stale match result.");
		}

		Ok(MatchResponse { investors: ranked })
	}
}

/// Restores pool order over the ranked records so the next merge still
/// tie-breaks by the original candidate order.
fn pool_ordered(previous: &[Investor], ranked: &[Investor]) -> Vec<Investor> {
	previous
		.iter()
		.map(|candidate| {
			ranked
				.iter()
				.find(|investor| investor.id == candidate.id)
				.cloned()
				.unwrap_or_else(|| candidate.clone())
		})
		.collect()
}
