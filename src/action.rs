//! Commands which can be issued to units through the bridge.

use crate::{geometry::Position, ids::TechTypeId};

/// Target of a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
	/// Command targets a position (move, attack-move, area spells).
	Pos(Position),
	/// Command targets a unit, given by id (attack, heal, cast on unit).
	Unit(u32),
}
impl From<Position> for Target {
	#[inline]
	fn from(pos: Position) -> Self {
		Target::Pos(pos)
	}
}

/// Order given to a single unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitCommand {
	Move(Position),
	Attack(Target),
	/// Use a tech which needs no target, like stim packs or burrow.
	UseTech(TechTypeId),
	UseTechAt(TechTypeId, Target),
	Stop,
	HoldPosition,
}
