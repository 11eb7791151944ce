//! Ordered collection of units and the query helpers built on it.

use crate::{
	constants::SPECIAL_UNITS,
	distance::Distance,
	filter::UnitFilter,
	geometry::{Position, Rect},
	ids::{TechTypeId, UnitTypeId},
	unit::Unit,
};
use indexmap::{
	map::{Iter, IterMut, Keys, Values, ValuesMut},
	IndexMap, IndexSet,
};
use itertools::Itertools;
use rustc_hash::FxHasher;
use std::{
	cmp::Ordering,
	collections::{BTreeSet, HashSet},
	hash::{BuildHasher, BuildHasherDefault, Hash},
	iter::{FromIterator, Sum},
	ops::Index,
};

pub mod iter;
use iter::IntoUnits;
pub use iter::UnitsIterator;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

#[inline]
fn cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
	a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Units keyed by id, iterated in the order they were inserted.
///
/// When built from a bridge snapshot, that order is the snapshot order, and
/// every query below preserves it.
#[derive(Default, Clone, Debug)]
pub struct Units(FxIndexMap<u32, Unit>);
impl Units {
	// HashMap methods
	#[inline]
	pub fn new() -> Self {
		Units(FxIndexMap::default())
	}

	#[inline]
	pub fn with_capacity(n: usize) -> Self {
		Units(IndexMap::with_capacity_and_hasher(n, Default::default()))
	}

	#[inline]
	pub fn first(&self) -> Option<&Unit> {
		self.0.values().next()
	}

	#[inline]
	pub fn last(&self) -> Option<&Unit> {
		self.0.values().next_back()
	}

	/// Inserts unit, replacing the one with the same id in place.
	#[inline]
	pub fn push(&mut self, u: Unit) -> Option<Unit> {
		self.0.insert(u.id, u)
	}

	/// Removes unit with given id, keeping the order of the rest.
	#[inline]
	pub fn remove(&mut self, id: u32) -> Option<Unit> {
		self.0.shift_remove(&id)
	}

	#[inline]
	pub fn get(&self, id: u32) -> Option<&Unit> {
		self.0.get(&id)
	}

	#[inline]
	pub fn contains(&self, id: u32) -> bool {
		self.0.contains_key(&id)
	}

	#[inline]
	pub fn iter(&self) -> Values<u32, Unit> {
		self.0.values()
	}

	#[inline]
	pub fn iter_mut(&mut self) -> ValuesMut<u32, Unit> {
		self.0.values_mut()
	}

	#[inline]
	pub fn pairs(&self) -> Iter<u32, Unit> {
		self.0.iter()
	}

	#[inline]
	pub fn pairs_mut(&mut self) -> IterMut<u32, Unit> {
		self.0.iter_mut()
	}

	#[inline]
	pub fn ids(&self) -> Keys<u32, Unit> {
		self.0.keys()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn clear(&mut self) {
		self.0.clear()
	}

	// Units methods

	/// Units matching `filter`, in collection order.
	///
	/// Special units are dropped first, so a special unit is never returned
	/// even when the filter names its type or id explicitly.
	pub fn select<'a>(&'a self, filter: &'a UnitFilter) -> impl Iterator<Item = &'a Unit> + 'a {
		self.iter()
			.exclude_types(&SPECIAL_UNITS)
			.filter(move |u| filter.matches(u))
	}
	/// Owned version of [`select`](Self::select).
	pub fn selected(&self, filter: &UnitFilter) -> Self {
		self.select(filter).cloned().collect()
	}
	pub fn find_ids<T: Container<u32>>(&self, ids: &T) -> Self {
		self.iter().find_ids(ids).cloned().collect()
	}
	pub fn of_type(&self, unit_type: UnitTypeId) -> Self {
		self.iter().of_type(unit_type).cloned().collect()
	}
	pub fn of_types<T: Container<UnitTypeId>>(&self, types: &T) -> Self {
		self.iter().of_types(types).cloned().collect()
	}
	pub fn exclude_types<T: Container<UnitTypeId>>(&self, types: &T) -> Self {
		self.iter().exclude_types(types).cloned().collect()
	}
	pub fn owned_by<T: Container<u32>>(&self, players: &T) -> Self {
		self.iter().owned_by(players).cloned().collect()
	}
	pub fn in_rect(&self, rect: Rect) -> Self {
		self.iter().in_rect(rect).cloned().collect()
	}
	/// Units whose type can use given tech.
	pub fn tech_users(&self, tech: TechTypeId) -> Self {
		self.iter().tech_users(tech).cloned().collect()
	}
	pub fn positions(&self) -> Vec<Position> {
		self.iter().map(|u| u.position).collect()
	}
	/// Mean position of the units, rounded towards zero.
	pub fn center(&self) -> Option<Position> {
		if self.is_empty() {
			None
		} else {
			Some(self.sum(|u| u.position) / self.len() as i32)
		}
	}
	pub fn filter<F>(&self, f: F) -> Self
	where
		F: Fn(&&Unit) -> bool,
	{
		Self(self.iter().filter(f).map(|u| (u.id, u.clone())).collect())
	}
	pub fn sum<T, F>(&self, f: F) -> T
	where
		T: Sum,
		F: Fn(&Unit) -> T,
	{
		self.iter().map(f).sum::<T>()
	}
	// Get closest | furthest
	pub fn closest<P: Into<Position> + Copy>(&self, target: P) -> Option<&Unit> {
		self.iter()
			.min_by(|a, b| cmp(&a.distance_squared(target), &b.distance_squared(target)))
	}
	pub fn furthest<P: Into<Position> + Copy>(&self, target: P) -> Option<&Unit> {
		self.iter()
			.max_by(|a, b| cmp(&a.distance_squared(target), &b.distance_squared(target)))
	}
	pub fn closest_distance<P: Into<Position> + Copy>(&self, target: P) -> Option<f32> {
		self.iter()
			.map(|u| u.distance_squared(target))
			.min_by(cmp)
			.map(f32::sqrt)
	}
	pub fn furthest_distance<P: Into<Position> + Copy>(&self, target: P) -> Option<f32> {
		self.iter()
			.map(|u| u.distance_squared(target))
			.max_by(cmp)
			.map(f32::sqrt)
	}
	pub fn sort<T, F>(&self, f: F) -> Self
	where
		T: Ord,
		F: Fn(&&Unit) -> T,
	{
		self.iter().sorted_by_key(f).cloned().collect()
	}
	pub fn partial_sort<T, F>(&self, f: F) -> Self
	where
		T: PartialOrd,
		F: Fn(&Unit) -> T,
	{
		self.iter()
			.sorted_by(|u1, u2| cmp(&f(u1), &f(u2)))
			.cloned()
			.collect()
	}
}
impl FromIterator<Unit> for Units {
	#[inline]
	fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
		Self(iter.into_iter().map(|u| (u.id, u)).collect())
	}
}
impl IntoIterator for Units {
	type Item = Unit;
	type IntoIter = IntoUnits;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoUnits(self.0.into_iter())
	}
}
impl<'a> IntoIterator for &'a Units {
	type Item = &'a Unit;
	type IntoIter = Values<'a, u32, Unit>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.0.values()
	}
}
impl Index<u32> for Units {
	type Output = Unit;

	#[inline]
	fn index(&self, id: u32) -> &Self::Output {
		&self.0[&id]
	}
}
impl Extend<Unit> for Units {
	#[inline]
	fn extend<T: IntoIterator<Item = Unit>>(&mut self, iter: T) {
		self.0.extend(iter.into_iter().map(|u| (u.id, u)));
	}
}

/// Anything that can answer "is this item in here?".
///
/// Lets unit adaptors take arrays, vectors and sets interchangeably.
pub trait Container<T> {
	fn contains(&self, item: &T) -> bool;
}
impl<T: PartialEq, const N: usize> Container<T> for [T; N] {
	#[inline]
	fn contains(&self, item: &T) -> bool {
		self.iter().any(|x| x == item)
	}
}
impl<T: PartialEq> Container<T> for Vec<T> {
	#[inline]
	fn contains(&self, item: &T) -> bool {
		self.iter().any(|x| x == item)
	}
}
impl<T: Eq + Hash, S: BuildHasher> Container<T> for HashSet<T, S> {
	#[inline]
	fn contains(&self, item: &T) -> bool {
		HashSet::contains(self, item)
	}
}
impl<T: Eq + Hash, S: BuildHasher> Container<T> for IndexSet<T, S> {
	#[inline]
	fn contains(&self, item: &T) -> bool {
		IndexSet::contains(self, item)
	}
}
impl<T: Ord> Container<T> for BTreeSet<T> {
	#[inline]
	fn contains(&self, item: &T) -> bool {
		BTreeSet::contains(self, item)
	}
}
