use robo_domain::{Investor, OutreachDraft, PitchProfile};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OpKind {
	Analysis,
	Matching,
	Drafting,
}

impl OpKind {
	fn label(self) -> &'static str {
		match self {
			Self::Analysis => "analysis",
			Self::Matching => "matching",
			Self::Drafting => "drafting",
		}
	}
}

#[derive(Debug, Default)]
pub(crate) struct OpSlot {
	in_flight: bool,
	generation: u64,
}

/// Per-session application state. One logical thread of control: at most one
/// operation of each kind is in flight, and results are committed only when
/// the generation captured at start is still current. A committed analysis
/// bumps the matching and drafting generations, so results that raced an
/// older profile are discarded instead of applied.
#[derive(Debug)]
pub(crate) struct SessionState {
	pub(crate) profile: Option<PitchProfile>,
	/// Pool-ordered working copy; accumulates scores across matching runs.
	pub(crate) candidates: Vec<Investor>,
	/// Ranked display list; empty until the first successful matching run.
	pub(crate) investors: Vec<Investor>,
	pub(crate) draft: Option<OutreachDraft>,
	analysis: OpSlot,
	matching: OpSlot,
	drafting: OpSlot,
}

impl SessionState {
	pub(crate) fn new(candidates: Vec<Investor>) -> Self {
		Self {
			profile: None,
			candidates,
			investors: Vec::new(),
			draft: None,
			analysis: OpSlot::default(),
			matching: OpSlot::default(),
			drafting: OpSlot::default(),
		}
	}

	fn slot_mut(&mut self, kind: OpKind) -> &mut OpSlot {
		match kind {
			OpKind::Analysis => &mut self.analysis,
			OpKind::Matching => &mut self.matching,
			OpKind::Drafting => &mut self.drafting,
		}
	}

	/// Claims the slot for `kind` and returns the generation token the caller
	/// must present at completion.
	pub(crate) fn begin(&mut self, kind: OpKind) -> Result<u64> {
		let slot = self.slot_mut(kind);

		if slot.in_flight {
			return Err(Error::Conflict {
				message: format!("Another {} request is still in flight.", kind.label()),
			});
		}

		slot.in_flight = true;
		slot.generation += 1;

		Ok(slot.generation)
	}

	/// Releases the slot and reports whether the token is still current.
	/// A stale token means the result must not be committed.
	pub(crate) fn finish(&mut self, kind: OpKind, token: u64) -> bool {
		let slot = self.slot_mut(kind);

		slot.in_flight = false;
		slot.generation == token
	}

	pub(crate) fn invalidate(&mut self, kind: OpKind) {
		self.slot_mut(kind).generation += 1;
	}
}
