//! Scripted oracle fakes and fixtures shared by service and API tests. None
//! of these touch the network; they let the pipeline run deterministically.

use std::{
	collections::VecDeque,
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use color_eyre::eyre;
use serde_json::Map;
use tokio::sync::Notify;

use robo_config::{Analysis, Config, OracleConfig, Providers, Service};
use robo_domain::{CandidatePool, Investor, InvestorScore, PitchProfile, seed};
use robo_service::{BoxFuture, DraftWriter, MatchScorer, ProfileExtractor};

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		providers: Providers {
			oracle: OracleConfig {
				provider_id: "test".to_string(),
				api_base: "http://localhost".to_string(),
				api_key: "test-key".to_string(),
				path: "/v1/chat/completions".to_string(),
				model: "test-model".to_string(),
				temperature: 0.2,
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
		analysis: Analysis { min_pitch_chars: 10 },
	}
}

pub fn sample_profile() -> PitchProfile {
	PitchProfile {
		company_name: "NexusAI".to_string(),
		industry: "Fintech".to_string(),
		stage: "Seed".to_string(),
		ask_amount: "$2M".to_string(),
		value_proposition: "AI-managed trading strategies for retail investors.".to_string(),
		ideal_investor_profile: "Seed-stage fintech funds with AI conviction.".to_string(),
		summary: "Mobile app connecting brokerage accounts to AI trading models.".to_string(),
	}
}

pub fn seed_pool() -> CandidatePool {
	CandidatePool::new(seed::investors()).expect("Seed data must have unique ids.")
}

pub fn investor_score(id: &str, score: i64, reason: &str) -> InvestorScore {
	InvestorScore { id: id.to_string(), score: Some(score), reason: Some(reason.to_string()) }
}

pub struct StaticExtractor {
	profile: PitchProfile,
	calls: AtomicUsize,
}
impl StaticExtractor {
	pub fn new(profile: PitchProfile) -> Self {
		Self { profile, calls: AtomicUsize::new(0) }
	}

	pub fn count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl ProfileExtractor for StaticExtractor {
	fn extract<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<PitchProfile>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let profile = self.profile.clone();

		Box::pin(async move { Ok(profile) })
	}
}

pub struct FailingExtractor {
	message: String,
}
impl FailingExtractor {
	pub fn new(message: &str) -> Self {
		Self { message: message.to_string() }
	}
}
impl ProfileExtractor for FailingExtractor {
	fn extract<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<PitchProfile>> {
		let message = self.message.clone();

		Box::pin(async move { Err(eyre::eyre!("{message}")) })
	}
}

pub struct StaticScorer {
	scores: Vec<InvestorScore>,
	calls: AtomicUsize,
}
impl StaticScorer {
	pub fn new(scores: Vec<InvestorScore>) -> Self {
		Self { scores, calls: AtomicUsize::new(0) }
	}

	pub fn count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl MatchScorer for StaticScorer {
	fn score<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_candidates: &'a [Investor],
	) -> BoxFuture<'a, color_eyre::Result<Vec<InvestorScore>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let scores = self.scores.clone();

		Box::pin(async move { Ok(scores) })
	}
}

/// Pops one scripted outcome per call: `Some(scores)` succeeds, `None` fails.
/// Calls past the end of the script fail.
pub struct ScriptedScorer {
	outcomes: Mutex<VecDeque<Option<Vec<InvestorScore>>>>,
}
impl ScriptedScorer {
	pub fn new(outcomes: Vec<Option<Vec<InvestorScore>>>) -> Self {
		Self { outcomes: Mutex::new(outcomes.into_iter().collect()) }
	}
}
impl MatchScorer for ScriptedScorer {
	fn score<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_candidates: &'a [Investor],
	) -> BoxFuture<'a, color_eyre::Result<Vec<InvestorScore>>> {
		let outcome = self
			.outcomes
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.pop_front()
			.flatten();

		Box::pin(async move {
			outcome.ok_or_else(|| eyre::eyre!("Scripted scorer failure."))
		})
	}
}

/// Holds every call until the gate is released, then returns the scores.
/// Used to keep a matching request in flight while the test does something
/// else.
pub struct GatedScorer {
	scores: Vec<InvestorScore>,
	gate: Arc<Notify>,
}
impl GatedScorer {
	pub fn new(scores: Vec<InvestorScore>, gate: Arc<Notify>) -> Self {
		Self { scores, gate }
	}
}
impl MatchScorer for GatedScorer {
	fn score<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_candidates: &'a [Investor],
	) -> BoxFuture<'a, color_eyre::Result<Vec<InvestorScore>>> {
		let scores = self.scores.clone();
		let gate = self.gate.clone();

		Box::pin(async move {
			gate.notified().await;

			Ok(scores)
		})
	}
}

pub struct StaticWriter {
	subject: String,
	body: String,
}
impl StaticWriter {
	pub fn new(subject: &str, body: &str) -> Self {
		Self { subject: subject.to_string(), body: body.to_string() }
	}
}
impl DraftWriter for StaticWriter {
	fn subject<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		let subject = self.subject.clone();

		Box::pin(async move { Ok(subject) })
	}

	fn body<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		let body = self.body.clone();

		Box::pin(async move { Ok(body) })
	}
}

/// Produces a subject but fails the body, for exercising the all-or-nothing
/// join.
pub struct FailingBodyWriter {
	subject: String,
	message: String,
}
impl FailingBodyWriter {
	pub fn new(subject: &str, message: &str) -> Self {
		Self { subject: subject.to_string(), message: message.to_string() }
	}
}
impl DraftWriter for FailingBodyWriter {
	fn subject<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		let subject = self.subject.clone();

		Box::pin(async move { Ok(subject) })
	}

	fn body<'a>(
		&'a self,
		_cfg: &'a OracleConfig,
		_profile: &'a PitchProfile,
		_investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		let message = self.message.clone();

		Box::pin(async move { Err(eyre::eyre!("{message}")) })
	}
}
