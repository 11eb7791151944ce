use rust_bw::{
	map_path_name,
	prelude::*,
	sandbox::{Frame, Sandbox, FRAME_TIME},
};
use std::time::Duration;

fn ready_sandbox() -> Sandbox {
	let sandbox = Sandbox::new()
		.with_player(1, vec![2, 3])
		.with_map("maps\\(2)Bottleneck.scm", 96, 128);
	sandbox.push_frame(Frame::match_start());
	sandbox
}

#[test]
fn connect_retries_with_backoff() {
	let sandbox = ready_sandbox().fail_connects(3);
	let mut interface = sandbox.interface(Settings::default());
	assert_eq!(interface.state(), MatchState::Disconnected);

	interface.connect().unwrap();

	assert_eq!(sandbox.world().connect_attempts, 4);
	assert_eq!(interface.clock().sleeps(), vec![Duration::from_millis(500); 3]);
	assert_eq!(interface.state(), MatchState::InMatch);
	assert!(interface.is_in_game());
}

#[test]
fn connect_uses_configured_retry() {
	let sandbox = ready_sandbox().fail_connects(1);
	let settings = Settings::configured(true, Duration::from_millis(20), false);
	let mut interface = sandbox.interface(settings);
	interface.connect().unwrap();

	assert_eq!(interface.clock().sleeps(), vec![Duration::from_millis(20)]);
	assert!(sandbox.world().flags.is_empty());
}

#[test]
fn connect_waits_for_match_start_then_in_game() {
	let sandbox = Sandbox::new();
	sandbox.push_frames(vec![
		Frame::new(),
		Frame::new().event(Event::MenuFrame),
		Frame::new().event(Event::MatchStart),
		Frame::new(),
		Frame::new().in_game(true),
		Frame::new(),
	]);
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	let world = sandbox.world();
	assert_eq!(world.steps, 5);
	assert_eq!(world.flags, vec![Flag::CompleteMapInformation]);
	assert_eq!(world.frames.len(), 1);
}

#[test]
fn speedup_toggles_speed() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::new(true));
	interface.connect().unwrap();
	assert_eq!(sandbox.world().local_speed, Some(0));
	assert_eq!(sandbox.world().frame_skip, Some(0));

	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::new(false));
	interface.connect().unwrap();
	assert_eq!(sandbox.world().local_speed, Some(167));
	assert_eq!(sandbox.world().frame_skip, Some(24));

	interface.set_speed(GameSpeed::FASTEST);
	assert_eq!(sandbox.world().local_speed, Some(0));
	assert_eq!(GameSpeed::from_speedup(false), GameSpeed::NORMAL);
}

#[test]
fn update_requires_connection() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	assert!(interface.update().is_err());
	assert_eq!(sandbox.world().steps, 0);
}

#[test]
fn frame_count_stops_at_match_end() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();
	sandbox.push_frames(vec![Frame::new(), Frame::new(), Frame::match_end(true), Frame::new()]);
	let steps = sandbox.world().steps;

	let frames = interface.update_for(StepBound::Frames(10)).unwrap();
	assert_eq!(frames, 3);
	assert_eq!(sandbox.world().steps, steps + 3);
	assert!(interface.is_end());
	assert_eq!(interface.state(), MatchState::Ended);

	// next step carries no MatchEnd
	interface.update().unwrap();
	assert!(!interface.is_end());
}

#[test]
fn frame_count_without_match_end() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	assert_eq!(interface.update_for(StepBound::Frames(4)).unwrap(), 4);
	assert_eq!(interface.update_for(StepBound::Frames(0)).unwrap(), 0);
	assert_eq!(interface.update_for(StepBound::Frame).unwrap(), 1);
	assert_eq!(interface.state(), MatchState::InMatch);
}

#[test]
fn duration_ignores_match_end() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();
	sandbox.push_frame(Frame::match_end(false));

	// every clock reading advances by one frame time
	let frames = interface.update_for(StepBound::Duration(FRAME_TIME * 5)).unwrap();
	assert_eq!(frames, 4);
	assert!(!interface.is_end());
	assert_eq!(interface.state(), MatchState::Ended);
}

#[test]
fn step_bounds_from_options() {
	assert_eq!(StepBound::from_options(None, None).unwrap(), StepBound::Frame);
	assert_eq!(StepBound::from_options(Some(3), None).unwrap(), StepBound::Frames(3));
	assert_eq!(
		StepBound::from_options(None, Some(Duration::from_secs(2))).unwrap(),
		StepBound::Duration(Duration::from_secs(2))
	);
	let err = StepBound::from_options(Some(3), Some(Duration::from_secs(2))).unwrap_err();
	assert_eq!(
		err.downcast_ref::<InterfaceError>(),
		Some(&InterfaceError::ConflictingStepBounds)
	);
}

#[test]
fn set_map_waits_for_a_new_match_start() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::new(false));
	interface.connect().unwrap();
	assert!(interface.game_state().has_match_started());

	sandbox.push_frames(vec![
		Frame::new(),
		Frame::new().event(Event::MatchStart),
		Frame::new(),
		Frame::new().in_game(true),
		Frame::new(),
		Frame::new(),
	]);
	let steps = sandbox.world().steps;
	interface.set_map(&map_path_name("(4)Python.scx")).unwrap();

	let world = sandbox.world();
	// MatchStart, then in game, then one more step
	assert_eq!(world.steps, steps + 5);
	assert_eq!(world.restarts, 1);
	assert_eq!(world.map_path_name, "maps\\(4)Python.scx");
	assert_eq!(world.flags, vec![Flag::CompleteMapInformation; 2]);
	assert_eq!((world.local_speed, world.frame_skip), (Some(167), Some(24)));
	drop(world);

	assert_eq!(interface.map_name(), "maps\\(4)Python.scx");
	assert_eq!(interface.state(), MatchState::InMatch);
}

#[test]
fn set_map_passes_paths_through() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	sandbox.push_frame(Frame::match_start());
	interface.set_map("C:\\SC\\maps\\x.scm").unwrap();
	assert_eq!(interface.map_name(), "C:\\SC\\maps\\x.scm");

	sandbox.push_frame(Frame::match_start());
	interface.set_map("(2)Bottleneck.scm").unwrap();
	assert_eq!(interface.map_name(), "(2)Bottleneck.scm");
	assert_eq!(sandbox.world().restarts, 2);
}

#[test]
fn set_map_rejected_by_game() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();
	assert!(interface.set_map("maps\\").is_err());
	assert_eq!(sandbox.world().restarts, 0);
}

#[test]
fn restart_and_quit() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	interface.restart();
	assert_eq!(interface.state(), MatchState::AwaitingMatchStart);
	assert!(interface.events().is_empty());
	assert_eq!(sandbox.world().restarts, 1);

	interface.quit();
	assert_eq!(interface.state(), MatchState::Ended);
	assert!(sandbox.world().left);
}

#[test]
fn map_and_player_info() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	assert_eq!(interface.map_name(), "maps\\(2)Bottleneck.scm");
	assert_eq!(interface.map_size(), Size::new(96, 128));
	assert_eq!(interface.map_pixel_size(), Size::new(96 * 32, 128 * 32));
	assert_eq!(interface.self_id(), 1);
	assert_eq!(interface.enemy_ids(), vec![2, 3]);

	let info = interface.game_info();
	assert_eq!(info.map_name, "(2)Bottleneck.scm");
	assert_eq!(info.map_size.shape(), (128, 96));

	interface.set_viewbox_position(Position::new(320, 64));
	assert_eq!(sandbox.world().screen_position, Some(Position::new(320, 64)));
}

#[test]
fn commands_go_through_the_game() {
	let sandbox = ready_sandbox();
	sandbox.set_units(vec![
		Unit::new(7, 1, UnitTypeId::TerranMarine, Position::new(0, 0)),
		Unit::new(8, 1, UnitTypeId::ProtossZealot, Position::new(0, 0)),
	]);
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();
	let target = Position::new(300, 400);

	assert!(interface.attack_position(7, target).unwrap());
	assert!(interface.move_to_position(7, target).unwrap());
	assert!(interface.use_stim_pack(7).unwrap());
	// zealots have no stim packs, the game decides
	sandbox.world_mut().accept_commands = false;
	assert!(!interface.use_stim_pack(8).unwrap());

	assert_eq!(
		sandbox.world().commands,
		vec![
			(7, UnitCommand::Attack(Target::Pos(target))),
			(7, UnitCommand::Move(target)),
			(7, UnitCommand::UseTech(TechTypeId::StimPacks)),
			(8, UnitCommand::UseTech(TechTypeId::StimPacks)),
		]
	);
}

#[test]
fn command_for_unknown_unit() {
	let sandbox = ready_sandbox();
	let mut interface = sandbox.interface(Settings::default());
	interface.connect().unwrap();

	let err = interface.move_to_position(99, Position::new(1, 1)).unwrap_err();
	assert_eq!(
		err.downcast_ref::<InterfaceError>(),
		Some(&InterfaceError::UnitNotFound(99))
	);
	assert!(sandbox.world().commands.is_empty());
}
