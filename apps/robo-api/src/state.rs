use std::sync::Arc;

use robo_domain::{CandidatePool, seed};
use robo_service::BankerService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<BankerService>,
}
impl AppState {
	pub fn new(config: robo_config::Config) -> color_eyre::Result<Self> {
		let pool = CandidatePool::new(seed::investors())?;

		Ok(Self { service: Arc::new(BankerService::new(config, pool)) })
	}

	pub fn with_service(service: BankerService) -> Self {
		Self { service: Arc::new(service) }
	}
}
