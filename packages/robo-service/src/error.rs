pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Operation-boundary errors. External-collaborator failures are converted to
/// `Extraction`/`Scoring`/`Generation` here and leave prior session state
/// unchanged; none of these is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("Extraction failed: {message}")]
	Extraction { message: String },
	#[error("Scoring failed: {message}")]
	Scoring { message: String },
	#[error("Draft generation failed: {message}")]
	Generation { message: String },
}
