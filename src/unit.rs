//! Snapshot of a single unit as reported by the bridge.

use crate::{
	geometry::{Position, TilePosition},
	ids::{TechTypeId, UnitTypeId},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only copy of a unit's observable attributes at one polling step.
///
/// Units are owned by the game; this crate never mutates them, it only reads
/// what the bridge reports on each step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
	/// Unique id of the unit, stable for its lifetime.
	pub id: u32,
	/// Id of the player controlling the unit.
	pub player_id: u32,
	pub type_id: UnitTypeId,
	/// Center of the unit in pixels.
	pub position: Position,
	pub hit_points: u32,
	pub shields: u32,
	/// Whether the unit is currently accessible to the agent.
	pub exists: bool,
}
impl Unit {
	pub fn new(id: u32, player_id: u32, type_id: UnitTypeId, position: Position) -> Self {
		Self {
			id,
			player_id,
			type_id,
			position,
			hit_points: 0,
			shields: 0,
			exists: true,
		}
	}
	/// Sets hit points and shields.
	pub fn with_health(mut self, hit_points: u32, shields: u32) -> Self {
		self.hit_points = hit_points;
		self.shields = shields;
		self
	}
	#[inline]
	pub fn id(&self) -> u32 {
		self.id
	}
	#[inline]
	pub fn type_id(&self) -> UnitTypeId {
		self.type_id
	}
	#[inline]
	pub fn position(&self) -> Position {
		self.position
	}
	#[inline]
	pub fn tile_position(&self) -> TilePosition {
		self.position.to_tile()
	}
	/// Hit points plus shields.
	#[inline]
	pub fn health_and_shields(&self) -> u32 {
		self.hit_points + self.shields
	}
	#[inline]
	pub fn is_owned_by(&self, player_id: u32) -> bool {
		self.player_id == player_id
	}
	#[inline]
	pub fn can_use(&self, tech: TechTypeId) -> bool {
		self.type_id.can_use(tech)
	}
}
