use ndarray::{array, Array2};
use rust_bw::{
	pixel_map::{downsample, health_map, to_byte_map, units_map, Pixel},
	prelude::*,
	sandbox::Sandbox,
};

fn marine(id: u32, x: i32, y: i32, hp: u32) -> Unit {
	Unit::new(id, 1, UnitTypeId::TerranMarine, Position::new(x, y)).with_health(hp, 0)
}

#[test]
fn empty_input_gives_empty_grid() {
	let rect = Rect::new(Position::new(0, 0), 4, 3);
	let map = units_map(Vec::<Unit>::new(), rect);
	assert_eq!(map.dim(), (3, 4));
	assert!(map.iter().all(|p| *p == Pixel::Empty));

	let health = health_map(Vec::<Unit>::new(), rect);
	assert_eq!(health, Array2::<u32>::zeros((3, 4)));
}

#[test]
fn origin_and_far_edges_are_outside() {
	let rect = Rect::new(Position::new(100, 200), 5, 4);
	let units = vec![
		marine(1, 100, 200, 1),
		marine(2, 102, 200, 1),
		marine(3, 100, 202, 1),
		marine(4, 105, 202, 1),
		marine(5, 102, 204, 1),
		marine(6, 99, 201, 1),
		marine(7, 104, 203, 1),
	];
	let map = units_map(&units, rect);
	assert_eq!(map.dim(), (4, 5));
	let set = map
		.indexed_iter()
		.filter(|(_, p)| **p == Pixel::Set)
		.map(|(cell, _)| cell)
		.collect::<Vec<_>>();
	assert_eq!(set, vec![(3, 4)]);
}

#[test]
fn unit_at_one_one_in_two_by_two() {
	let rect = Rect::new(Position::new(0, 0), 2, 2);
	let map = units_map(vec![marine(1, 1, 1, 10)], rect);
	assert_eq!(to_byte_map(&map), array![[0, 0], [0, 1]]);
}

#[test]
fn cell_is_row_y_column_x() {
	let rect = Rect::new(Position::new(10, 10), 6, 4);
	let units = vec![marine(1, 15, 11, 7), marine(2, 11, 13, 9)];

	let map = units_map(&units, rect);
	assert_eq!(map[[1, 5]], Pixel::Set);
	assert_eq!(map[[3, 1]], Pixel::Set);
	assert_eq!(map.iter().filter(|p| **p == Pixel::Set).count(), 2);

	let health = health_map(&units, rect);
	assert_eq!(health[[1, 5]], 7);
	assert_eq!(health[[3, 1]], 9);
	assert_eq!(health.sum(), 16);
}

#[test]
fn collisions() {
	let rect = Rect::new(Position::new(0, 0), 3, 3);
	let units = vec![marine(1, 1, 1, 30), marine(2, 1, 1, 12)];

	let map = units_map(&units, rect);
	assert_eq!(map[[1, 1]], Pixel::Set);

	// last unit in iteration order wins, values aren't summed
	let health = health_map(&units, rect);
	assert_eq!(health[[1, 1]], 12);
	let health = health_map(units.iter().rev(), rect);
	assert_eq!(health[[1, 1]], 30);
}

#[test]
fn health_includes_shields() {
	let rect = Rect::new(Position::new(0, 0), 3, 3);
	let zealot = Unit::new(1, 2, UnitTypeId::ProtossZealot, Position::new(2, 1)).with_health(100, 60);
	assert_eq!(health_map(vec![zealot], rect)[[1, 2]], 160);
}

#[test]
fn interface_maps_use_filter() {
	let sandbox = Sandbox::new().with_player(1, vec![2]);
	sandbox.set_units(vec![
		marine(1, 1, 1, 40),
		Unit::new(2, 2, UnitTypeId::ProtossZealot, Position::new(2, 2)).with_health(100, 60),
		Unit::new(3, 1, UnitTypeId::SpecialMapRevealer, Position::new(1, 2)),
	]);
	let interface = sandbox.interface(Settings::default());
	let rect = Rect::new(Position::new(0, 0), 3, 3);

	let map = interface.units_map(rect, &UnitFilter::new());
	assert_eq!(to_byte_map(&map), array![[0, 0, 0], [0, 1, 0], [0, 0, 1]]);

	let enemies = UnitFilter::new().players([2]);
	let health = interface.units_health_map(rect, &enemies);
	assert_eq!(health, array![[0, 0, 0], [0, 0, 0], [0, 0, 160]]);

	let nobody = UnitFilter::new().players([9]);
	assert_eq!(interface.units_health_map(rect, &nobody), Array2::<u32>::zeros((3, 3)));
}

#[test]
fn downsample_any_set() {
	let map = units_map(
		vec![marine(1, 1, 1, 1), marine(2, 5, 2, 1), marine(3, 6, 6, 1)],
		Rect::new(Position::new(0, 0), 8, 7),
	);
	let reduced = downsample(&map, 2).unwrap();
	assert_eq!(reduced.dim(), (3, 4));
	assert_eq!(
		to_byte_map(&reduced),
		array![[1, 0, 0, 0], [0, 0, 1, 0], [0, 0, 0, 0]]
	);
	// the partial block holding row 6 is dropped

	assert!(downsample(&map, 0).is_err());
	assert_eq!(downsample(&map, 1).unwrap(), map);
}

#[test]
fn extreme_coordinates_do_not_overflow() {
	let rect = Rect::new(Position::new(i32::MIN, i32::MIN), 10, 10);
	assert_eq!(rect.offset_of(Position::new(i32::MAX, i32::MAX)), None);
	assert_eq!(rect.offset_of(Position::new(i32::MIN + 3, i32::MIN + 2)), Some((2, 3)));

	let far = Rect::new(Position::new(i32::MAX - 4, 0), 10, 10);
	assert!(!far.contains(Position::new(i32::MIN, 5)));
	let map = units_map(vec![marine(1, i32::MAX, i32::MAX, 5), marine(2, i32::MAX, 3, 5)], far);
	assert_eq!(map.iter().filter(|p| **p == Pixel::Set).count(), 1);
	assert_eq!(map[[3, 4]], Pixel::Set);

	let d = Position::new(i32::MIN, 0).distance(Position::new(i32::MAX, 0));
	assert!((d - 4.294_967e9).abs() < 1e3);
}
