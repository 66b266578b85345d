use std::collections::HashSet;

use crate::{Error, Result, investor::Investor};

/// The fixed set of investors eligible for matching. Built once at process
/// start; membership never changes afterwards. Construction rejects duplicate
/// ids, since merging relies on ids being unique.
#[derive(Clone, Debug)]
pub struct CandidatePool {
	investors: Vec<Investor>,
}

impl CandidatePool {
	pub fn new(investors: Vec<Investor>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(investors.len());

		for investor in &investors {
			if !seen.insert(investor.id.clone()) {
				return Err(Error::DuplicateInvestorId { id: investor.id.clone() });
			}
		}

		Ok(Self { investors })
	}

	pub fn investors(&self) -> &[Investor] {
		&self.investors
	}

	pub fn get(&self, id: &str) -> Option<&Investor> {
		self.investors.iter().find(|investor| investor.id == id)
	}

	pub fn len(&self) -> usize {
		self.investors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.investors.is_empty()
	}
}
