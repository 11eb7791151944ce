//! Pixel and tile coordinates, sizes and rectangular areas.

use crate::constants::TILE_SIZE;
use std::{
	iter::Sum,
	ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of a grid or a map, in cells, tiles or pixels depending on context.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size {
	pub width: usize,
	pub height: usize,
}
impl Size {
	pub fn new(width: usize, height: usize) -> Self {
		Self { width, height }
	}
	/// Shape of an `ndarray` grid of this size, i.e. `(rows, cols)`.
	pub fn shape(self) -> (usize, usize) {
		(self.height, self.width)
	}
}

/// Position on the map in pixels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
	pub x: i32,
	pub y: i32,
}
impl Position {
	pub fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
	pub fn distance(self, other: Self) -> f32 {
		self.distance_squared(other).sqrt()
	}
	pub fn distance_squared(self, other: Self) -> f32 {
		let dx = (self.x as i64 - other.x as i64) as f32;
		let dy = (self.y as i64 - other.y as i64) as f32;
		dx * dx + dy * dy
	}
	/// Tile containing this pixel.
	pub fn to_tile(self) -> TilePosition {
		TilePosition {
			x: self.x.div_euclid(TILE_SIZE),
			y: self.y.div_euclid(TILE_SIZE),
		}
	}
}
impl From<(i32, i32)> for Position {
	#[inline]
	fn from((x, y): (i32, i32)) -> Self {
		Self { x, y }
	}
}
impl From<Position> for (i32, i32) {
	#[inline]
	fn from(p: Position) -> Self {
		(p.x, p.y)
	}
}
impl From<TilePosition> for Position {
	#[inline]
	fn from(t: TilePosition) -> Self {
		t.to_position()
	}
}
impl Add for Position {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self {
			x: self.x + other.x,
			y: self.y + other.y,
		}
	}
}
impl Sub for Position {
	type Output = Self;

	fn sub(self, other: Self) -> Self {
		Self {
			x: self.x - other.x,
			y: self.y - other.y,
		}
	}
}
impl AddAssign for Position {
	fn add_assign(&mut self, other: Self) {
		self.x += other.x;
		self.y += other.y;
	}
}
impl SubAssign for Position {
	fn sub_assign(&mut self, other: Self) {
		self.x -= other.x;
		self.y -= other.y;
	}
}
impl Mul<i32> for Position {
	type Output = Self;

	fn mul(self, other: i32) -> Self {
		Self {
			x: self.x * other,
			y: self.y * other,
		}
	}
}
impl Div<i32> for Position {
	type Output = Self;

	fn div(self, other: i32) -> Self {
		Self {
			x: self.x / other,
			y: self.y / other,
		}
	}
}
impl Neg for Position {
	type Output = Self;

	fn neg(self) -> Self {
		Self { x: -self.x, y: -self.y }
	}
}
impl Sum for Position {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Default::default(), Add::add)
	}
}

/// Position on the map in build tiles (32x32 pixels).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TilePosition {
	pub x: i32,
	pub y: i32,
}
impl TilePosition {
	pub fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
	/// Top-left pixel of this tile.
	pub fn to_position(self) -> Position {
		Position {
			x: self.x * TILE_SIZE,
			y: self.y * TILE_SIZE,
		}
	}
	/// Center pixel of this tile.
	pub fn center(self) -> Position {
		self.to_position() + Position::new(TILE_SIZE / 2, TILE_SIZE / 2)
	}
}
impl From<Position> for TilePosition {
	#[inline]
	fn from(p: Position) -> Self {
		p.to_tile()
	}
}

/// Rectangular window of the map, anchored at `origin` and spanning
/// `width` x `height` pixels.
///
/// Used as the frame of unit maps: cell `[row, col]` of a map built over a
/// rect is the pixel at `origin + (col, row)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
	pub origin: Position,
	pub width: usize,
	pub height: usize,
}
impl Rect {
	pub fn new(origin: Position, width: usize, height: usize) -> Self {
		Self { origin, width, height }
	}
	/// Rect of the given size centered on `center`.
	pub fn around(center: Position, width: usize, height: usize) -> Self {
		let half = Position::new(width as i32 / 2, height as i32 / 2);
		Self::new(center - half, width, height)
	}
	pub fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}
	/// Returns `(row, col)` of `pos` inside this rect.
	///
	/// Bounds are exclusive on both ends: offsets of `0` on either axis and
	/// offsets equal to the width or height are outside.
	pub fn offset_of(&self, pos: Position) -> Option<(usize, usize)> {
		let dx = pos.x as i64 - self.origin.x as i64;
		let dy = pos.y as i64 - self.origin.y as i64;
		if dx > 0 && dx < self.width as i64 && dy > 0 && dy < self.height as i64 {
			Some((dy as usize, dx as usize))
		} else {
			None
		}
	}
	pub fn contains(&self, pos: Position) -> bool {
		self.offset_of(pos).is_some()
	}
}
