//! Scripted in-memory game, for tests and for developing agents offline.
//!
//! A [`Sandbox`] holds a shared [`World`]. The [`SandboxClient`] and
//! [`SandboxGame`] handles it hands out implement the bridge traits on top of
//! that world: stepping pops the next scripted [`Frame`], and every call that
//! would change the real game is recorded so it can be inspected afterwards.
//!
//! ```
//! use rust_bw::{prelude::*, sandbox::{Frame, Sandbox}};
//!
//! let sandbox = Sandbox::new().with_player(1, vec![2]);
//! sandbox.push_frame(Frame::match_start());
//! sandbox.set_units(vec![Unit::new(7, 1, UnitTypeId::TerranMarine, Position::new(10, 10))]);
//!
//! let mut interface = sandbox.interface(Settings::default());
//! interface.connect().unwrap();
//! assert_eq!(interface.unit_ids(&UnitFilter::new()), vec![7]);
//! ```

use crate::{
	action::UnitCommand,
	bridge::{Client, Game},
	client::BwResult,
	clock::Clock,
	geometry::Position,
	ids::Flag,
	interface::Interface,
	paths::map_file_name,
	unit::Unit,
	Event, Settings,
};
use std::{
	cell::{Cell, Ref, RefCell, RefMut},
	collections::VecDeque,
	rc::Rc,
	time::Duration,
};

pub(crate) type Rw<T> = Rc<RefCell<T>>;

pub(crate) trait Locked<T> {
	fn lock_read(&self) -> Ref<T>;
	fn lock_write(&self) -> RefMut<T>;
}
impl<T> Locked<T> for Rw<T> {
	#[inline]
	fn lock_read(&self) -> Ref<T> {
		self.borrow()
	}
	#[inline]
	fn lock_write(&self) -> RefMut<T> {
		self.borrow_mut()
	}
}

/// Time the sandbox clock advances on every reading, about one frame at normal speed.
pub const FRAME_TIME: Duration = Duration::from_millis(42);

/// What changes in the world on one step.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
	/// Replaces all units when set.
	pub units: Option<Vec<Unit>>,
	/// Events reported by the step.
	pub events: Vec<Event>,
	/// Changes whether the game reports being in game when set.
	pub in_game: Option<bool>,
}
impl Frame {
	/// Frame with no changes and no events.
	pub fn new() -> Self {
		Self::default()
	}
	/// Frame on which the match starts and the game is in game.
	pub fn match_start() -> Self {
		Self::new().event(Event::MatchStart).in_game(true)
	}
	pub fn match_end(is_winner: bool) -> Self {
		Self::new().event(Event::MatchEnd { is_winner })
	}
	pub fn units(mut self, units: Vec<Unit>) -> Self {
		self.units = Some(units);
		self
	}
	pub fn event(mut self, event: Event) -> Self {
		self.events.push(event);
		self
	}
	pub fn in_game(mut self, in_game: bool) -> Self {
		self.in_game = Some(in_game);
		self
	}
}

/// State of the scripted game and log of everything done to it.
#[derive(Debug, Clone)]
pub struct World {
	pub units: Vec<Unit>,
	/// Number of times the full unit list was read.
	pub unit_reads: usize,
	/// Events of the last step.
	pub events: Vec<Event>,
	/// Frames still to be played, one per step.
	pub frames: VecDeque<Frame>,
	pub in_game: bool,
	pub connected: bool,
	/// Connection attempts which will fail before one succeeds.
	pub failing_connects: usize,
	pub connect_attempts: usize,
	/// Number of steps taken.
	pub steps: usize,
	pub self_id: u32,
	pub enemies: Vec<u32>,
	pub map_path_name: String,
	/// Map width in tiles.
	pub map_width: u32,
	/// Map height in tiles.
	pub map_height: u32,
	/// Map to load on the next restart.
	pub next_map: Option<String>,
	/// Value returned by every issued command.
	pub accept_commands: bool,
	/// Issued commands, by unit id.
	pub commands: Vec<(u32, UnitCommand)>,
	pub restarts: usize,
	pub left: bool,
	pub local_speed: Option<i32>,
	pub frame_skip: Option<i32>,
	pub flags: Vec<Flag>,
	pub screen_position: Option<Position>,
}
impl Default for World {
	fn default() -> Self {
		Self {
			units: Vec::new(),
			unit_reads: 0,
			events: Vec::new(),
			frames: VecDeque::new(),
			in_game: false,
			connected: false,
			failing_connects: 0,
			connect_attempts: 0,
			steps: 0,
			self_id: 0,
			enemies: Vec::new(),
			map_path_name: String::new(),
			map_width: 64,
			map_height: 64,
			next_map: None,
			accept_commands: true,
			commands: Vec::new(),
			restarts: 0,
			left: false,
			local_speed: None,
			frame_skip: None,
			flags: Vec::new(),
			screen_position: None,
		}
	}
}
impl World {
	fn step(&mut self) {
		self.steps += 1;
		match self.frames.pop_front() {
			Some(frame) => {
				if let Some(units) = frame.units {
					self.units = units;
				}
				if let Some(in_game) = frame.in_game {
					self.in_game = in_game;
				}
				self.events = frame.events;
			}
			None => self.events.clear(),
		}
	}
}

/// Owner of a scripted world, hands out bridge handles sharing it.
#[derive(Debug, Default, Clone)]
pub struct Sandbox {
	world: Rw<World>,
}
impl Sandbox {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with_player(self, self_id: u32, enemies: Vec<u32>) -> Self {
		{
			let mut world = self.world.lock_write();
			world.self_id = self_id;
			world.enemies = enemies;
		}
		self
	}
	/// Sets the current map, `width` and `height` are in tiles.
	pub fn with_map(self, path: &str, width: u32, height: u32) -> Self {
		{
			let mut world = self.world.lock_write();
			world.map_path_name = path.to_string();
			world.map_width = width;
			world.map_height = height;
		}
		self
	}
	/// Makes the first `n` connection attempts fail.
	pub fn fail_connects(self, n: usize) -> Self {
		self.world.lock_write().failing_connects = n;
		self
	}
	pub fn client(&self) -> SandboxClient {
		SandboxClient {
			world: Rc::clone(&self.world),
		}
	}
	pub fn game(&self) -> SandboxGame {
		SandboxGame {
			world: Rc::clone(&self.world),
		}
	}
	/// Interface over this sandbox with a [`ManualClock`] ticking by [`FRAME_TIME`].
	pub fn interface(&self, settings: Settings) -> Interface<SandboxClient, SandboxGame, ManualClock> {
		Interface::with_clock(self.client(), self.game(), settings, ManualClock::with_tick(FRAME_TIME))
	}
	pub fn world(&self) -> Ref<World> {
		self.world.lock_read()
	}
	pub fn world_mut(&self) -> RefMut<World> {
		self.world.lock_write()
	}
	/// Replaces all units right away.
	pub fn set_units(&self, units: Vec<Unit>) {
		self.world.lock_write().units = units;
	}
	/// Queues a frame to be played by a future step.
	pub fn push_frame(&self, frame: Frame) {
		self.world.lock_write().frames.push_back(frame);
	}
	pub fn push_frames<I: IntoIterator<Item = Frame>>(&self, frames: I) {
		self.world.lock_write().frames.extend(frames);
	}
}

/// [`Client`] handle of a [`Sandbox`].
#[derive(Debug, Clone)]
pub struct SandboxClient {
	world: Rw<World>,
}
impl Client for SandboxClient {
	fn connect(&mut self) -> bool {
		let mut world = self.world.lock_write();
		world.connect_attempts += 1;
		if world.failing_connects > 0 {
			world.failing_connects -= 1;
			false
		} else {
			world.connected = true;
			true
		}
	}
	fn is_connected(&self) -> bool {
		self.world.lock_read().connected
	}
	fn update(&mut self) {
		self.world.lock_write().step();
	}
}

/// [`Game`] handle of a [`Sandbox`].
#[derive(Debug, Clone)]
pub struct SandboxGame {
	world: Rw<World>,
}
impl Game for SandboxGame {
	fn all_units(&self) -> Vec<Unit> {
		let mut world = self.world.lock_write();
		world.unit_reads += 1;
		world.units.clone()
	}
	fn events(&self) -> Vec<Event> {
		self.world.lock_read().events.clone()
	}
	fn is_in_game(&self) -> bool {
		self.world.lock_read().in_game
	}
	fn self_id(&self) -> u32 {
		self.world.lock_read().self_id
	}
	fn enemies(&self) -> Vec<u32> {
		self.world.lock_read().enemies.clone()
	}
	fn get_unit(&self, id: u32) -> Option<Unit> {
		self.world.lock_read().units.iter().find(|u| u.id == id).cloned()
	}
	fn issue_command(&mut self, unit: &Unit, command: UnitCommand) -> BwResult<bool> {
		let mut world = self.world.lock_write();
		world.commands.push((unit.id, command));
		Ok(world.accept_commands)
	}
	fn map_width(&self) -> u32 {
		self.world.lock_read().map_width
	}
	fn map_height(&self) -> u32 {
		self.world.lock_read().map_height
	}
	fn map_path_name(&self) -> String {
		self.world.lock_read().map_path_name.clone()
	}
	fn set_map(&mut self, map: &str) -> BwResult<()> {
		if map_file_name(map).is_empty() {
			return Err(format!("invalid map path: {:?}", map).into());
		}
		self.world.lock_write().next_map = Some(map.to_string());
		Ok(())
	}
	fn restart_game(&mut self) {
		let mut world = self.world.lock_write();
		world.restarts += 1;
		world.in_game = false;
		if let Some(map) = world.next_map.take() {
			world.map_path_name = map;
		}
	}
	fn leave_game(&mut self) {
		let mut world = self.world.lock_write();
		world.left = true;
		world.in_game = false;
	}
	fn set_local_speed(&mut self, speed: i32) {
		self.world.lock_write().local_speed = Some(speed);
	}
	fn set_frame_skip(&mut self, frame_skip: i32) {
		self.world.lock_write().frame_skip = Some(frame_skip);
	}
	fn enable_flag(&mut self, flag: Flag) {
		self.world.lock_write().flags.push(flag);
	}
	fn set_screen_position(&mut self, pos: Position) {
		self.world.lock_write().screen_position = Some(pos);
	}
}

/// Clock that only moves when told to, and never blocks.
///
/// Every reading advances it by its tick, so loops bounded by time always
/// finish. Sleeping advances it by the slept duration and is recorded.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
	now: Rc<Cell<Duration>>,
	tick: Duration,
	sleeps: Rw<Vec<Duration>>,
}
impl ManualClock {
	/// Clock which stands still unless slept on or advanced.
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with_tick(tick: Duration) -> Self {
		Self {
			tick,
			..Self::default()
		}
	}
	/// Current time, without ticking.
	pub fn elapsed(&self) -> Duration {
		self.now.get()
	}
	pub fn advance(&self, duration: Duration) {
		self.now.set(self.now.get() + duration);
	}
	/// Durations of every sleep so far.
	pub fn sleeps(&self) -> Vec<Duration> {
		self.sleeps.lock_read().clone()
	}
}
impl Clock for ManualClock {
	fn now(&self) -> Duration {
		let now = self.now.get();
		self.now.set(now + self.tick);
		now
	}
	fn sleep(&self, duration: Duration) {
		debug!("Sleeping for {:?}", duration);
		self.advance(duration);
		self.sleeps.lock_write().push(duration);
	}
}
