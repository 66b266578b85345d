use serde::{Deserialize, Serialize};

use robo_domain::OutreachDraft;

use crate::{BankerService, Error, Result, session::OpKind};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftRequest {
	pub investor_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftResponse {
	pub draft: OutreachDraft,
}

impl BankerService {
	/// Generates a subject and body for the selected investor. The two calls
	/// run concurrently and are joined: if either fails, the whole draft
	/// fails and nothing partial is committed. A successful draft replaces
	/// the session's live draft.
	pub async fn draft_outreach(&self, req: DraftRequest) -> Result<DraftResponse> {
		let (token, profile, investor) = {
			let mut state = self.state().lock().await;
			let Some(profile) = state.profile.clone() else {
				return Err(Error::InvalidRequest {
					message: "Analyze a pitch deck before drafting outreach.".to_string(),
				});
			};
			let Some(investor) = state
				.investors
				.iter()
				.find(|investor| investor.id == req.investor_id)
				.cloned()
			else {
				return Err(Error::NotFound {
					message: format!("No matched investor with id {}.", req.investor_id),
				});
			};
			let token = state.begin(OpKind::Drafting)?;

			(token, profile, investor)
		};

		let oracle = &self.cfg.providers.oracle;
		let outcome = tokio::try_join!(
			self.providers.writer.subject(oracle, &profile, &investor),
			self.providers.writer.body(oracle, &profile, &investor),
		);
		let mut state = self.state().lock().await;
		let current = state.finish(OpKind::Drafting, token);
		let (subject, body) =
			outcome.map_err(|err| Error::Generation { message: err.to_string() })?;
		let draft = OutreachDraft { recipient_id: investor.id.clone(), subject, body };

		if current {
			state.draft = Some(draft.clone());
			tracing::info!(recipient = %investor.name, "Outreach draft committed.");
		} else {
			tracing::debug!("Discarding stale draft result.");
		}

		Ok(DraftResponse { draft })
	}
}
