use clap::Parser;
use rand::prelude::*;
use rust_bw::{
	pixel_map::{downsample, to_byte_map},
	prelude::*,
	sandbox::Sandbox,
};

/// Scatters random units around a point and prints the maps built from them.
#[derive(Parser)]
#[clap(version, author)]
struct Args {
	/// Number of units for each player
	#[clap(short, long, default_value = "12")]
	count: u32,
	/// Width and height of the map area, in pixels
	#[clap(short, long, default_value = "32")]
	size: usize,
	/// Squash cells into blocks of this size before printing occupancy
	#[clap(short, long, default_value = "1")]
	factor: usize,
	/// Race of the enemy units
	#[clap(short, long, default_value = "Protoss")]
	race: Race,
	#[clap(long)]
	seed: Option<u64>,
}

fn enemy_type(race: Race) -> UnitTypeId {
	match race {
		Race::Zerg => UnitTypeId::ZergZergling,
		Race::Terran => UnitTypeId::TerranMarine,
		_ => UnitTypeId::ProtossZealot,
	}
}

fn main() -> BwResult<()> {
	let args = Args::parse();
	let mut rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	let center = Position::new(512, 512);
	let spread = args.size as i32 / 2;
	let mut scatter = |id: u32, player: u32, type_id: UnitTypeId| {
		let offset = Position::new(rng.gen_range(-spread..=spread), rng.gen_range(-spread..=spread));
		Unit::new(id, player, type_id, center + offset)
			.with_health(rng.gen_range(1..=40), rng.gen_range(0..=20))
	};
	let enemy = enemy_type(args.race);
	let mut units = Vec::with_capacity(args.count as usize * 2);
	for i in 0..args.count {
		units.push(scatter(i, 1, UnitTypeId::TerranMarine));
		units.push(scatter(args.count + i, 2, enemy));
	}

	let sandbox = Sandbox::new().with_player(1, vec![2]);
	sandbox.set_units(units);
	let interface = sandbox.interface(Settings::default());

	let rect = Rect::around(center, args.size, args.size);
	let mine = UnitFilter::new().players([interface.self_id()]);
	let enemies = UnitFilter::new().players(interface.enemy_ids());

	let occupancy = downsample(&interface.units_map(rect, &mine), args.factor)?;
	println!("Own units ({} in rect):", interface.units_in_rect(rect, &mine).len());
	println!("{}", to_byte_map(&occupancy));

	println!("Enemy health and shields:");
	println!("{}", interface.units_health_map(rect, &enemies));

	let distances = interface.distances_from_position(center, &enemies);
	if let Some(closest) = distances.iter().copied().reduce(f32::min) {
		println!("Closest enemy is {:.1} pixels from the center", closest);
	}
	Ok(())
}
