//! Traits for comparing distance between positions and units.

use crate::{geometry::Position, unit::Unit};
use std::{cmp::Ordering, iter::FromIterator, vec::IntoIter};

/// Basic trait for comparing distance.
pub trait Distance: Sized {
	/// Calculates squared euclidean distance from `self` to `other`.
	fn distance_squared<P: Into<Position>>(self, other: P) -> f32;

	/// Calculates euclidean distance from `self` to `other`.
	#[inline]
	fn distance<P: Into<Position>>(self, other: P) -> f32 {
		self.distance_squared(other).sqrt()
	}
	/// Checks if distance between `self` and `other` is less than given `distance`.
	#[inline]
	fn is_closer<P: Into<Position>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) < distance * distance
	}
	/// Checks if distance between `self` and `other` is greater than given `distance`.
	#[inline]
	fn is_further<P: Into<Position>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) > distance * distance
	}
}

impl Distance for Position {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> f32 {
		Position::distance_squared(self, other.into())
	}
}
impl Distance for &Position {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> f32 {
		(*self).distance_squared(other.into())
	}
}
impl Distance for &Unit {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> f32 {
		self.position.distance_squared(other.into())
	}
}
impl From<&Unit> for Position {
	#[inline]
	fn from(u: &Unit) -> Self {
		u.position
	}
}

#[inline]
fn cmp_by<T, P>(target: P) -> impl Fn(&T, &T) -> Ordering
where
	T: Distance + Copy,
	P: Into<Position> + Copy,
{
	let f = move |u: &T| u.distance_squared(target);
	move |a, b| f(a).partial_cmp(&f(b)).unwrap_or(Ordering::Equal)
}

/// Helper trait for iterators of items implementing [`Distance`].
pub trait DistanceIterator<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
	/// Maps every item to its euclidean distance from `target`, keeping iterator order.
	fn distances<P: Into<Position> + Copy>(self, target: P) -> Distances<Self, P> {
		Distances { iter: self, target }
	}

	/// Returns closest to `target` item in iterator.
	fn closest<P: Into<Position> + Copy>(self, target: P) -> Option<T> {
		self.min_by(cmp_by(target))
	}
	/// Returns furthest to `target` item in iterator.
	fn furthest<P: Into<Position> + Copy>(self, target: P) -> Option<T> {
		self.max_by(cmp_by(target))
	}

	/// Returns iterator of items sorted by distance to `target`.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and `O(n * log(n))` worst-case.
	fn sort_by_distance<P: Into<Position> + Copy>(self, target: P) -> IntoIter<T> {
		let mut v = Vec::from_iter(self);
		v.sort_by(cmp_by(target));
		v.into_iter()
	}
}

impl<I, T> DistanceIterator<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
}

/// Iterator returned by [`DistanceIterator::distances`].
#[derive(Clone)]
pub struct Distances<I, P> {
	iter: I,
	target: P,
}
impl<I, T, P> Iterator for Distances<I, P>
where
	I: Iterator<Item = T>,
	T: Distance,
	P: Into<Position> + Copy,
{
	type Item = f32;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		let target = self.target;
		self.iter.next().map(|u| u.distance(target))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}
