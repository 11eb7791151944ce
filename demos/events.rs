use rust_bw::{
	prelude::*,
	sandbox::{Frame, Sandbox},
};

// Example of how to use events

#[derive(Default)]
struct StimOnSight {
	seen: Vec<u32>,
}
impl Agent for StimOnSight {
	// Use it like here
	fn on_event<C: Client, G: Game, K: Clock>(
		&mut self,
		interface: &mut Interface<C, G, K>,
		event: &Event,
	) -> BwResult<()> {
		match event {
			Event::UnitCreate(id) | Event::UnitShow(id) => {
				let mine = UnitFilter::new()
					.players([interface.self_id()])
					.units([*id]);
				if let Some(u) = interface.units(&mine).first() {
					if u.can_use(TechTypeId::StimPacks) {
						interface.use_stim_pack(u.id)?;
					}
				}
				self.seen.push(*id);
			}
			Event::UnitDestroy(id) => self.seen.retain(|seen| seen != id),
			Event::NukeDetect(pos) => println!("Nuke incoming at {:?}", pos),
			Event::MatchEnd { is_winner } => println!("Match over, won: {}", is_winner),
			_ => {}
		}
		Ok(())
	}
	fn on_end<C: Client, G: Game, K: Clock>(
		&mut self,
		_interface: &mut Interface<C, G, K>,
		result: GameResult,
	) -> BwResult<()> {
		println!("{:?}, units still alive: {:?}", result, self.seen);
		Ok(())
	}
}

fn main() -> BwResult<()> {
	let marine = Unit::new(1, 1, UnitTypeId::TerranMarine, Position::new(64, 64)).with_health(40, 0);
	let medic = Unit::new(2, 1, UnitTypeId::TerranMedic, Position::new(70, 64)).with_health(60, 0);

	// Scripted game, a real bridge plugs into `Interface::new` the same way
	let sandbox = Sandbox::new().with_player(1, vec![2]);
	sandbox.push_frames(vec![
		Frame::match_start(),
		Frame::new()
			.units(vec![marine.clone()])
			.event(Event::UnitCreate(1)),
		Frame::new()
			.units(vec![marine, medic])
			.event(Event::UnitCreate(2)),
		Frame::new().event(Event::NukeDetect(Position::new(300, 200))),
		Frame::new().units(vec![]).event(Event::UnitDestroy(1)),
		Frame::match_end(false),
	]);

	let mut interface = sandbox.interface(Settings::default());
	let mut agent = StimOnSight::default();
	run_episode(&mut interface, &mut agent)?;

	println!("Commands sent: {:?}", sandbox.world().commands);
	Ok(())
}
