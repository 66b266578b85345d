use serde::{Deserialize, Serialize};

use robo_domain::PitchProfile;

use crate::{BankerService, Error, Result, session::OpKind};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
	pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
	pub profile: PitchProfile,
}

impl BankerService {
	/// Extracts a structured profile from raw pitch text and commits it as
	/// the session's profile, replacing any previous one wholesale. A
	/// committed profile invalidates matching and drafting results that are
	/// still in flight against the old profile.
	pub async fn analyze(&self, req: AnalyzeRequest) -> Result<AnalyzeResponse> {
		let min_chars = self.cfg.analysis.min_pitch_chars;

		if req.text.trim().chars().count() < min_chars {
			return Err(Error::InvalidRequest {
				message: format!("Pitch text must be at least {min_chars} characters."),
			});
		}

		let token = {
			let mut state = self.state().lock().await;

			state.begin(OpKind::Analysis)?
		};
		let extracted =
			self.providers.extractor.extract(&self.cfg.providers.oracle, &req.text).await;
		let mut state = self.state().lock().await;
		let current = state.finish(OpKind::Analysis, token);
		let profile =
			extracted.map_err(|err| Error::Extraction { message: err.to_string() })?;

		if current {
			state.profile = Some(profile.clone());
			state.invalidate(OpKind::Matching);
			state.invalidate(OpKind::Drafting);
			tracing::info!(company = %profile.company_name, "Pitch profile committed.");
		} else {
			tracing::debug!("Discarding stale analysis result.");
		}

		Ok(AnalyzeResponse { profile })
	}
}
