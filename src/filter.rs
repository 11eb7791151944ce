//! Criteria used to select units from a snapshot.

use crate::{ids::UnitTypeId, unit::Unit};
use rustc_hash::FxHashSet;
use std::{hash::Hash, iter::FromIterator};

/// One dimension of a [`UnitFilter`]: either every value matches, or only the listed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T: Eq + Hash> {
	All,
	Only(FxHashSet<T>),
}
impl<T: Eq + Hash> Selector<T> {
	pub fn only<I: IntoIterator<Item = T>>(items: I) -> Self {
		Selector::Only(items.into_iter().collect())
	}
	#[inline]
	pub fn matches(&self, item: &T) -> bool {
		match self {
			Selector::All => true,
			Selector::Only(items) => items.contains(item),
		}
	}
	#[inline]
	pub fn is_all(&self) -> bool {
		matches!(self, Selector::All)
	}
}
impl<T: Eq + Hash> Default for Selector<T> {
	fn default() -> Self {
		Selector::All
	}
}
impl<T: Eq + Hash> FromIterator<T> for Selector<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Selector::only(iter)
	}
}

/// Conjunction of owner, type and id criteria.
///
/// A unit matches when it matches all three selectors. Special units
/// (see [`SPECIAL_UNITS`](crate::constants::SPECIAL_UNITS)) are dropped before
/// the filter is consulted, see [`Units::select`](crate::units::Units::select).
///
/// # Examples
/// ```
/// use rust_bw::{filter::UnitFilter, ids::UnitTypeId};
///
/// let marines_of_player_1 = UnitFilter::new()
/// 	.players([1])
/// 	.types([UnitTypeId::TerranMarine]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFilter {
	pub players: Selector<u32>,
	pub types: Selector<UnitTypeId>,
	pub units: Selector<u32>,
}
impl UnitFilter {
	/// Filter matching every unit.
	pub fn new() -> Self {
		Self::default()
	}
	pub fn players<I: IntoIterator<Item = u32>>(mut self, players: I) -> Self {
		self.players = Selector::only(players);
		self
	}
	pub fn types<I: IntoIterator<Item = UnitTypeId>>(mut self, types: I) -> Self {
		self.types = Selector::only(types);
		self
	}
	pub fn units<I: IntoIterator<Item = u32>>(mut self, units: I) -> Self {
		self.units = Selector::only(units);
		self
	}
	/// Checks inclusion criteria only.
	#[inline]
	pub fn matches(&self, u: &Unit) -> bool {
		self.players.matches(&u.player_id) && self.types.matches(&u.type_id) && self.units.matches(&u.id)
	}
}
