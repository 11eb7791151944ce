#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
pub enum Race {
	Zerg = 0,
	Terran = 1,
	Protoss = 2,
	Random = 6,
	None = 7,
	Unknown = 8,
}
impl Default for Race {
	fn default() -> Self {
		Race::Random
	}
}

/// Outcome of a match from the agent's point of view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromStr)]
pub enum GameResult {
	Victory,
	Defeat,
	/// The match ended without a winner being reported (e.g. the agent left).
	Undecided,
}
impl GameResult {
	pub fn from_winner(is_winner: bool) -> Self {
		if is_winner {
			GameResult::Victory
		} else {
			GameResult::Defeat
		}
	}
}
