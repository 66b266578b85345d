pub mod analyze;
pub mod error;
pub mod matching;
pub mod outreach;
pub mod overview;

mod session;

use std::{future::Future, pin::Pin, sync::Arc};

use tokio::sync::Mutex;

pub use analyze::{AnalyzeRequest, AnalyzeResponse};
pub use error::{Error, Result};
pub use matching::MatchResponse;
pub use outreach::{DraftRequest, DraftResponse};
pub use overview::{ListResponse, OverviewResponse};

use robo_config::{Config, OracleConfig};
use robo_domain::{CandidatePool, Investor, InvestorScore, OutreachDraft, PitchProfile};
use robo_providers::{extractor, scorer, writer};
use session::SessionState;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait ProfileExtractor
where
	Self: Send + Sync,
{
	fn extract<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<PitchProfile>>;
}

pub trait MatchScorer
where
	Self: Send + Sync,
{
	fn score<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		candidates: &'a [Investor],
	) -> BoxFuture<'a, color_eyre::Result<Vec<InvestorScore>>>;
}

pub trait DraftWriter
where
	Self: Send + Sync,
{
	fn subject<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>>;

	fn body<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

/// The injected oracle capability. Swapping these for fakes is how the
/// pipeline is tested without a network dependency.
#[derive(Clone)]
pub struct Providers {
	pub extractor: Arc<dyn ProfileExtractor>,
	pub scorer: Arc<dyn MatchScorer>,
	pub writer: Arc<dyn DraftWriter>,
}

struct DefaultProviders;

impl ProfileExtractor for DefaultProviders {
	fn extract<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<PitchProfile>> {
		Box::pin(extractor::extract_profile(cfg, text))
	}
}

impl MatchScorer for DefaultProviders {
	fn score<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		candidates: &'a [Investor],
	) -> BoxFuture<'a, color_eyre::Result<Vec<InvestorScore>>> {
		Box::pin(scorer::score_candidates(cfg, profile, candidates))
	}
}

impl DraftWriter for DefaultProviders {
	fn subject<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(writer::draft_subject(cfg, profile, investor))
	}

	fn body<'a>(
		&'a self,
		cfg: &'a OracleConfig,
		profile: &'a PitchProfile,
		investor: &'a Investor,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(writer::draft_body(cfg, profile, investor))
	}
}

impl Providers {
	pub fn new(
		extractor: Arc<dyn ProfileExtractor>,
		scorer: Arc<dyn MatchScorer>,
		writer: Arc<dyn DraftWriter>,
	) -> Self {
		Self { extractor, scorer, writer }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { extractor: provider.clone(), scorer: provider.clone(), writer: provider }
	}
}

pub struct BankerService {
	pub cfg: Config,
	pub pool: CandidatePool,
	pub providers: Providers,
	state: Mutex<SessionState>,
}

impl BankerService {
	pub fn new(cfg: Config, pool: CandidatePool) -> Self {
		Self::with_providers(cfg, pool, Providers::default())
	}

	pub fn with_providers(cfg: Config, pool: CandidatePool, providers: Providers) -> Self {
		let state = Mutex::new(SessionState::new(pool.investors().to_vec()));

		Self { cfg, pool, providers, state }
	}

	pub(crate) fn state(&self) -> &Mutex<SessionState> {
		&self.state
	}

	/// The live draft, if one has been generated this session.
	pub async fn current_draft(&self) -> Option<OutreachDraft> {
		self.state.lock().await.draft.clone()
	}
}
