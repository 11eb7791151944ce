use rust_bw::{
	prelude::*,
	sandbox::{Frame, Sandbox},
};

const ME: u32 = 1;
const ENEMY: u32 = 2;

fn marine(id: u32, player: u32, x: i32, y: i32) -> Unit {
	Unit::new(id, player, UnitTypeId::TerranMarine, Position::new(x, y)).with_health(40, 0)
}
fn zealot(id: u32, player: u32, x: i32, y: i32) -> Unit {
	Unit::new(id, player, UnitTypeId::ProtossZealot, Position::new(x, y)).with_health(100, 60)
}
fn revealer(id: u32, player: u32) -> Unit {
	Unit::new(id, player, UnitTypeId::SpecialMapRevealer, Position::new(0, 0))
}

fn sandbox(units: Vec<Unit>) -> Sandbox {
	let sandbox = Sandbox::new().with_player(ME, vec![ENEMY]);
	sandbox.set_units(units);
	sandbox
}

#[test]
fn empty_filter_returns_everything_but_special_units() {
	let sandbox = sandbox(vec![
		marine(10, ME, 0, 0),
		revealer(11, ME),
		zealot(12, ENEMY, 5, 5),
		revealer(13, ENEMY),
	]);
	let interface = sandbox.interface(Settings::default());
	assert_eq!(interface.unit_ids(&UnitFilter::new()), vec![10, 12]);
}

#[test]
fn special_units_are_dropped_even_when_named() {
	let sandbox = sandbox(vec![revealer(11, ME), marine(10, ME, 0, 0)]);
	let interface = sandbox.interface(Settings::default());

	let by_type = UnitFilter::new().types([UnitTypeId::SpecialMapRevealer]);
	assert!(interface.unit_ids(&by_type).is_empty());

	let by_id = UnitFilter::new().units([11, 10]);
	assert_eq!(interface.unit_ids(&by_id), vec![10]);
}

#[test]
fn criteria_are_conjunctive() {
	let sandbox = sandbox(vec![
		marine(1, ME, 0, 0),
		zealot(2, ME, 0, 0),
		marine(3, ENEMY, 0, 0),
		zealot(4, ENEMY, 0, 0),
		marine(5, ME, 0, 0),
	]);
	let interface = sandbox.interface(Settings::default());

	let my_marines = UnitFilter::new().players([ME]).types([UnitTypeId::TerranMarine]);
	assert_eq!(interface.unit_ids(&my_marines), vec![1, 5]);

	let my_marine_5 = my_marines.clone().units([5, 3]);
	assert_eq!(interface.unit_ids(&my_marine_5), vec![5]);

	let both_players = UnitFilter::new().players([ME, ENEMY]).types([UnitTypeId::ProtossZealot]);
	assert_eq!(interface.unit_ids(&both_players), vec![2, 4]);

	let nobody = UnitFilter::new().players([42]);
	assert!(interface.unit_ids(&nobody).is_empty());
}

#[test]
fn projections_keep_snapshot_order() {
	let sandbox = sandbox(vec![
		zealot(30, ENEMY, 100, 200),
		marine(10, ME, 1, 2),
		revealer(5, ENEMY),
		zealot(20, ME, 3, 4),
	]);
	let interface = sandbox.interface(Settings::default());
	let all = UnitFilter::new();

	assert_eq!(interface.unit_ids(&all), vec![30, 10, 20]);
	assert_eq!(
		interface.positions(&all),
		vec![Position::new(100, 200), Position::new(1, 2), Position::new(3, 4)]
	);
	assert_eq!(interface.health(&all), vec![100, 40, 100]);
	assert_eq!(interface.shields(&all), vec![60, 0, 60]);
	assert_eq!(
		interface.filtered(&all, |u| u.health_and_shields()),
		vec![160, 40, 160]
	);

	let units = interface.units(&all);
	assert_eq!(units.len(), 3);
	assert_eq!(units.first().map(|u| u.id), Some(30));
	assert_eq!(units[10].position, Position::new(1, 2));
}

#[test]
fn visibility_defaults_to_own_units() {
	let mut hidden = zealot(3, ENEMY, 0, 0);
	hidden.exists = false;
	let mut dead = marine(4, ME, 0, 0);
	dead.exists = false;
	let sandbox = sandbox(vec![marine(1, ME, 0, 0), zealot(2, ENEMY, 0, 0), hidden, dead]);
	let interface = sandbox.interface(Settings::default());

	assert_eq!(interface.visibility(&UnitFilter::new()), vec![true, false]);
	assert_eq!(
		interface.visibility(&UnitFilter::new().players([ENEMY])),
		vec![true, false]
	);
	assert_eq!(
		interface.visibility(&UnitFilter::new().types([UnitTypeId::ProtossZealot])),
		Vec::<bool>::new()
	);
	// other queries don't default players
	assert_eq!(interface.unit_ids(&UnitFilter::new()), vec![1, 2, 3, 4]);
}

#[test]
fn distances_follow_filtered_order() {
	let sandbox = sandbox(vec![
		marine(1, ME, 3, 4),
		zealot(2, ENEMY, 10, 10),
		marine(3, ME, 0, 5),
	]);
	let interface = sandbox.interface(Settings::default());
	let mine = UnitFilter::new().players([ME]);

	assert_eq!(interface.distances_from_position((0, 0), &mine), vec![5.0, 5.0]);

	// indexed by id
	let origin = interface.units(&mine)[1].clone();
	let distances = interface.distances_from_unit(&origin, &UnitFilter::new());
	assert_eq!(distances.len(), 3);
	assert_eq!(distances[0], 0.0);
	assert!((distances[1] - 7.0f32.hypot(6.0)).abs() < 1e-4);
	assert!((distances[2] - 10f32.sqrt()).abs() < 1e-4);

	assert!(interface
		.distances_from_position((0, 0), &UnitFilter::new().players([42]))
		.is_empty());
}

#[test]
fn units_in_rect_excludes_edges() {
	let sandbox = sandbox(vec![
		marine(1, ME, 100, 100),
		marine(2, ME, 101, 101),
		marine(3, ME, 109, 105),
		marine(4, ME, 110, 105),
		zealot(5, ENEMY, 105, 105),
	]);
	let interface = sandbox.interface(Settings::default());
	let rect = Rect::new(Position::new(100, 100), 10, 10);

	let inside = interface.units_in_rect(rect, &UnitFilter::new());
	assert_eq!(inside.ids().copied().collect::<Vec<_>>(), vec![2, 3, 5]);
	assert_eq!(
		interface
			.units_in_rect(rect, &UnitFilter::new().players([ME]))
			.ids()
			.copied()
			.collect::<Vec<_>>(),
		vec![2, 3]
	);
}

#[test]
fn queries_read_a_fresh_snapshot() {
	let sandbox = Sandbox::new().with_player(ME, vec![ENEMY]);
	sandbox.push_frames(vec![
		Frame::match_start().units(vec![marine(1, ME, 0, 0)]),
		Frame::new().units(vec![marine(1, ME, 0, 0), marine(2, ME, 0, 0)]),
	]);
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();
	assert_eq!(interface.unit_ids(&UnitFilter::new()), vec![1]);

	interface.update().unwrap();
	assert_eq!(interface.unit_ids(&UnitFilter::new()), vec![1, 2]);
}

#[test]
fn each_query_reads_units_once() {
	let sandbox = sandbox(vec![marine(1, ME, 5, 5), zealot(2, ENEMY, 6, 6), revealer(3, ME)]);
	let interface = sandbox.interface(Settings::default());
	let all = UnitFilter::new();
	let rect = Rect::new(Position::new(0, 0), 10, 10);
	let reads = || sandbox.world().unit_reads;

	let before = reads();
	interface.filtered(&all, |u| u.id);
	assert_eq!(reads(), before + 1);
	interface.units(&all);
	assert_eq!(reads(), before + 2);
	interface.units_map(rect, &all);
	assert_eq!(reads(), before + 3);
	interface.units_health_map(rect, &all);
	assert_eq!(reads(), before + 4);
	interface.units_in_rect(rect, &all);
	assert_eq!(reads(), before + 5);
	interface.distances_from_position((0, 0), &all);
	assert_eq!(reads(), before + 6);
	interface.visibility(&all);
	assert_eq!(reads(), before + 7);
}

#[test]
fn units_helpers() {
	let units: Units = vec![
		marine(1, ME, 0, 0),
		zealot(2, ENEMY, 10, 0),
		marine(3, ENEMY, 20, 0),
		revealer(4, ME),
	]
	.into_iter()
	.collect();

	let filter = UnitFilter::new().types([UnitTypeId::TerranMarine]);
	assert_eq!(units.selected(&filter).ids().copied().collect::<Vec<_>>(), vec![1, 3]);
	assert_eq!(units.owned_by(&[ENEMY]).len(), 2);
	assert_eq!(units.of_type(UnitTypeId::ProtossZealot).len(), 1);
	assert_eq!(units.exclude_types(&SPECIAL_UNITS).len(), 3);
	assert_eq!(units.tech_users(TechTypeId::StimPacks).len(), 2);
	assert_eq!(units.closest((12, 0)).map(|u| u.id), Some(2));
	assert_eq!(units.furthest_distance((0, 0)), Some(20.0));
	assert_eq!(
		units.iter().owned_by(&[ME]).of_type(UnitTypeId::TerranMarine).count(),
		1
	);
	let rect = Rect::new(Position::new(-1, -1), 30, 5);
	assert_eq!(
		units
			.iter()
			.find_ids(&[1, 2, 4])
			.of_types(&[UnitTypeId::TerranMarine, UnitTypeId::ProtossZealot])
			.in_rect(rect)
			.rev()
			.map(|u| u.id)
			.collect::<Vec<_>>(),
		vec![2, 1]
	);
}
