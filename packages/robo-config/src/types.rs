use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	pub analysis: Analysis,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub oracle: OracleConfig,
}

/// Connection settings for the hosted text-generation service. Every outbound
/// operation (extract, score, draft subject, draft body) goes through this one
/// endpoint.
#[derive(Debug, Deserialize)]
pub struct OracleConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Analysis {
	/// Pitch text shorter than this is rejected before any network call.
	pub min_pitch_chars: usize,
}
