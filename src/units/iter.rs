//! Lazy unit filters, usable on any iterator over units or unit references.

use super::Container;
use crate::{
	geometry::Rect,
	ids::{TechTypeId, UnitTypeId},
	unit::Unit,
};
use indexmap::map::IntoIter;
use std::borrow::Borrow;

/// Consuming iterator of a [`Units`](super::Units) collection, in insertion order.
pub struct IntoUnits(pub(super) IntoIter<u32, Unit>);

impl Iterator for IntoUnits {
	type Item = Unit;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.0.next().map(|(_, u)| u)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.0.size_hint()
	}
}
impl DoubleEndedIterator for IntoUnits {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.0.next_back().map(|(_, u)| u)
	}
}
impl ExactSizeIterator for IntoUnits {
	fn len(&self) -> usize {
		self.0.len()
	}
}

/// Condition deciding which units a [`Filtered`] iterator keeps.
pub trait UnitPredicate {
	fn keeps(&self, u: &Unit) -> bool;
}

/// Iterator adaptor keeping only the units accepted by its predicate.
#[derive(Clone)]
pub struct Filtered<I, P> {
	iter: I,
	pred: P,
}
impl<I, P> Filtered<I, P> {
	fn new(iter: I, pred: P) -> Self {
		Self { iter, pred }
	}
}

impl<I, P> Iterator for Filtered<I, P>
where
	I: Iterator,
	I::Item: Borrow<Unit>,
	P: UnitPredicate,
{
	type Item = I::Item;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		let pred = &self.pred;
		self.iter.find(|u| pred.keeps(u.borrow()))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.iter.size_hint().1)
	}

	#[inline]
	fn fold<Acc, Fold>(self, init: Acc, mut fold: Fold) -> Acc
	where
		Fold: FnMut(Acc, Self::Item) -> Acc,
	{
		let pred = self.pred;
		self.iter.fold(init, move |acc, u| {
			if pred.keeps(u.borrow()) {
				fold(acc, u)
			} else {
				acc
			}
		})
	}
}
impl<I, P> DoubleEndedIterator for Filtered<I, P>
where
	I: DoubleEndedIterator,
	I::Item: Borrow<Unit>,
	P: UnitPredicate,
{
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		let pred = &self.pred;
		self.iter.rfind(|u| pred.keeps(u.borrow()))
	}
}

// Predicates over a single copied value
macro_rules! value_predicate {
	($(#[$attr:meta])* $name:ident($field:ty), |$v:ident, $u:ident| $keeps:expr) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy)]
		pub struct $name($field);
		impl UnitPredicate for $name {
			#[inline]
			fn keeps(&self, $u: &Unit) -> bool {
				let $v = self.0;
				$keeps
			}
		}
	};
}

// Predicates borrowing a container of accepted (or rejected) values
macro_rules! container_predicate {
	($(#[$attr:meta])* $name:ident<$item:ty>, |$c:ident, $u:ident| $keeps:expr) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy)]
		pub struct $name<'a, T>(&'a T);
		impl<T: Container<$item>> UnitPredicate for $name<'_, T> {
			#[inline]
			fn keeps(&self, $u: &Unit) -> bool {
				let $c = self.0;
				$keeps
			}
		}
	};
}

value_predicate!(
	/// Keeps units of one type.
	OfType(UnitTypeId),
	|unit_type, u| u.type_id == unit_type
);
value_predicate!(
	/// Keeps units strictly inside a rect, same bounds as unit maps.
	InRect(Rect),
	|rect, u| rect.contains(u.position)
);
value_predicate!(
	/// Keeps units whose type can use a tech.
	TechUsers(TechTypeId),
	|tech, u| u.can_use(tech)
);

container_predicate!(
	/// Keeps units with listed ids.
	FindIds<u32>,
	|ids, u| ids.contains(&u.id)
);
container_predicate!(
	/// Keeps units of listed types.
	OfTypes<UnitTypeId>,
	|types, u| types.contains(&u.type_id)
);
container_predicate!(
	/// Drops units of listed types.
	ExcludeTypes<UnitTypeId>,
	|types, u| !types.contains(&u.type_id)
);
container_predicate!(
	/// Keeps units owned by listed players.
	OwnedBy<u32>,
	|players, u| players.contains(&u.player_id)
);

/// Filters available on every iterator yielding [`Unit`]s or `&Unit`s.
pub trait UnitsIterator: Iterator + Sized
where
	Self::Item: Borrow<Unit>,
{
	/// Units whose id is in `ids`.
	fn find_ids<T: Container<u32>>(self, ids: &T) -> Filtered<Self, FindIds<'_, T>> {
		Filtered::new(self, FindIds(ids))
	}
	/// Units of exactly `unit_type`.
	fn of_type(self, unit_type: UnitTypeId) -> Filtered<Self, OfType> {
		Filtered::new(self, OfType(unit_type))
	}
	/// Units whose type is in `types`.
	fn of_types<T: Container<UnitTypeId>>(self, types: &T) -> Filtered<Self, OfTypes<'_, T>> {
		Filtered::new(self, OfTypes(types))
	}
	/// Units whose type is not in `types`.
	fn exclude_types<T: Container<UnitTypeId>>(self, types: &T) -> Filtered<Self, ExcludeTypes<'_, T>> {
		Filtered::new(self, ExcludeTypes(types))
	}
	/// Units owned by one of `players`.
	fn owned_by<T: Container<u32>>(self, players: &T) -> Filtered<Self, OwnedBy<'_, T>> {
		Filtered::new(self, OwnedBy(players))
	}
	/// Units strictly inside `rect`.
	fn in_rect(self, rect: Rect) -> Filtered<Self, InRect> {
		Filtered::new(self, InRect(rect))
	}
	/// Units able to use `tech`.
	fn tech_users(self, tech: TechTypeId) -> Filtered<Self, TechUsers> {
		Filtered::new(self, TechUsers(tech))
	}
}

impl<I> UnitsIterator for I
where
	I: Iterator + Sized,
	I::Item: Borrow<Unit>,
{
}
