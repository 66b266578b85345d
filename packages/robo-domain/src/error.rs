pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Duplicate investor id in candidate pool: {id}.")]
	DuplicateInvestorId { id: String },
}
