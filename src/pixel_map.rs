//! Rasterizing units into fixed-size grids.
//!
//! Every map is a fresh grid of shape `(height, width)`. A unit at pixel
//! `origin + (col, row)` lands in cell `[row, col]`; units outside the rect,
//! including those exactly on its edges, are skipped.

use crate::{
	client::{BwResult, InterfaceError},
	geometry::Rect,
	unit::Unit,
};
use ndarray::Array2;
use std::borrow::Borrow;

/// Grid of cells which are either empty or occupied.
pub type PixelMap = Array2<Pixel>;
/// Grid of combined hit points and shields.
pub type HealthMap = Array2<u32>;
/// Grid of raw bytes, handy for feeding occupancy into numeric consumers.
pub type ByteMap = Array2<u8>;

#[derive(FromPrimitive, ToPrimitive, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pixel {
	Empty = 0,
	Set = 1,
}
impl Default for Pixel {
	fn default() -> Self {
		Pixel::Empty
	}
}
impl std::fmt::Debug for Pixel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Pixel::Empty => 0.fmt(f),
			Pixel::Set => 1.fmt(f),
		}
	}
}
impl From<Pixel> for u8 {
	#[inline]
	fn from(p: Pixel) -> Self {
		p as u8
	}
}

/// Marks the cell of every unit inside `rect`.
///
/// Several units in one cell still give `Set`.
pub fn units_map<I>(units: I, rect: Rect) -> PixelMap
where
	I: IntoIterator,
	I::Item: Borrow<Unit>,
{
	let mut map = PixelMap::default(rect.size().shape());
	for u in units {
		if let Some(cell) = rect.offset_of(u.borrow().position) {
			map[cell] = Pixel::Set;
		}
	}
	map
}

/// Writes hit points plus shields of every unit inside `rect` to its cell.
///
/// When units share a cell the one coming last in iteration order wins;
/// values are not summed.
pub fn health_map<I>(units: I, rect: Rect) -> HealthMap
where
	I: IntoIterator,
	I::Item: Borrow<Unit>,
{
	let mut map = HealthMap::zeros(rect.size().shape());
	for u in units {
		let u = u.borrow();
		if let Some(cell) = rect.offset_of(u.position) {
			map[cell] = u.health_and_shields();
		}
	}
	map
}

/// Converts an occupancy map to `0`/`1` bytes.
pub fn to_byte_map(map: &PixelMap) -> ByteMap {
	map.mapv(u8::from)
}

/// Shrinks `map` by squashing every `factor` x `factor` block into one cell,
/// which is set if any cell of the block is set.
///
/// Rows and columns that don't fill a whole block are dropped.
pub fn downsample(map: &PixelMap, factor: usize) -> BwResult<PixelMap> {
	if factor == 0 {
		return Err(InterfaceError::ZeroDownsampleFactor.into());
	}
	let (rows, cols) = map.dim();
	let shape = (rows / factor, cols / factor);
	let mut reduced = PixelMap::default(shape);
	for ((row, col), pixel) in map.indexed_iter() {
		let cell = (row / factor, col / factor);
		if *pixel == Pixel::Set && cell.0 < shape.0 && cell.1 < shape.1 {
			reduced[cell] = Pixel::Set;
		}
	}
	Ok(reduced)
}
