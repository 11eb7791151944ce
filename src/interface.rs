//! The context object tying the bridge, the clock and the match state together.

use crate::{
	action::{Target, UnitCommand},
	bridge::{Client, Game},
	client::{BwResult, InterfaceError, StepBound},
	clock::{Clock, SystemClock},
	distance::DistanceIterator,
	filter::{Selector, UnitFilter},
	game_info::GameInfo,
	game_state::{GameState, MatchState},
	geometry::{Position, Rect, Size},
	ids::{Flag, TechTypeId},
	paths::map_path_name,
	pixel_map::{self, HealthMap, PixelMap},
	unit::Unit,
	units::{Units, UnitsIterator},
	Event, GameSpeed, Settings,
};

/// Entry point for querying units and controlling the match.
///
/// Owns the bridge handles, the clock and the [`GameState`]. Queries read a
/// fresh snapshot of units from the game on every call; stepping is the only
/// thing that changes the match state.
pub struct Interface<C, G, K = SystemClock> {
	client: C,
	game: G,
	clock: K,
	settings: Settings,
	state: GameState,
}

impl<C: Client, G: Game> Interface<C, G> {
	/// Interface backed by the wall clock.
	pub fn new(client: C, game: G, settings: Settings) -> Self {
		Self::with_clock(client, game, settings, SystemClock::new())
	}
}

impl<C: Client, G: Game, K: Clock> Interface<C, G, K> {
	pub fn with_clock(client: C, game: G, settings: Settings, clock: K) -> Self {
		let mut state = GameState::default();
		if client.is_connected() {
			state.connected();
		}
		Self {
			client,
			game,
			clock,
			settings,
			state,
		}
	}

	#[inline]
	pub fn client(&self) -> &C {
		&self.client
	}
	#[inline]
	pub fn game(&self) -> &G {
		&self.game
	}
	#[inline]
	pub fn clock(&self) -> &K {
		&self.clock
	}
	#[inline]
	pub fn settings(&self) -> &Settings {
		&self.settings
	}
	#[inline]
	pub fn game_state(&self) -> &GameState {
		&self.state
	}
	#[inline]
	pub fn state(&self) -> MatchState {
		self.state.state()
	}
	/// Events of the latest step.
	#[inline]
	pub fn events(&self) -> &[Event] {
		self.state.events()
	}
	/// Map and player information read from the game right now.
	pub fn game_info(&self) -> GameInfo {
		GameInfo::from_game(&self.game)
	}

	// Unit queries

	/// All units currently known to the agent, in the game's order.
	pub fn snapshot(&self) -> Units {
		self.game.all_units().into_iter().collect()
	}
	/// Projects every unit matching `filter` with `f`.
	///
	/// The snapshot is read once per call. Special units are never passed to
	/// `f`, whatever the filter says. Results keep snapshot order.
	pub fn filtered<T, F>(&self, filter: &UnitFilter, f: F) -> Vec<T>
	where
		F: FnMut(&Unit) -> T,
	{
		self.snapshot().select(filter).map(f).collect()
	}
	pub fn units(&self, filter: &UnitFilter) -> Units {
		self.snapshot().selected(filter)
	}
	pub fn positions(&self, filter: &UnitFilter) -> Vec<Position> {
		self.filtered(filter, |u| u.position)
	}
	pub fn health(&self, filter: &UnitFilter) -> Vec<u32> {
		self.filtered(filter, |u| u.hit_points)
	}
	pub fn shields(&self, filter: &UnitFilter) -> Vec<u32> {
		self.filtered(filter, |u| u.shields)
	}
	pub fn unit_ids(&self, filter: &UnitFilter) -> Vec<u32> {
		self.filtered(filter, |u| u.id)
	}
	/// Whether each matching unit is accessible to the agent.
	///
	/// Unlike other queries, a filter that doesn't restrict players only
	/// looks at the agent's own units. Enemy units may exist even when they
	/// aren't visible.
	pub fn visibility(&self, filter: &UnitFilter) -> Vec<bool> {
		if filter.players.is_all() {
			let own = UnitFilter {
				players: Selector::only([self.game.self_id()]),
				..filter.clone()
			};
			self.filtered(&own, |u| u.exists)
		} else {
			self.filtered(filter, |u| u.exists)
		}
	}

	// Distances

	/// Euclidean distances from `position` to every unit matching `filter`, in snapshot order.
	pub fn distances_from_position<P: Into<Position>>(&self, position: P, filter: &UnitFilter) -> Vec<f32> {
		let position = position.into();
		self.snapshot().select(filter).distances(position).collect()
	}
	/// Same as [`distances_from_position`](Self::distances_from_position) with the unit's position.
	pub fn distances_from_unit(&self, unit: &Unit, filter: &UnitFilter) -> Vec<f32> {
		self.distances_from_position(unit.position, filter)
	}

	// Spatial maps

	/// Units matching `filter` strictly inside `rect`.
	pub fn units_in_rect(&self, rect: Rect, filter: &UnitFilter) -> Units {
		self.snapshot().select(filter).in_rect(rect).cloned().collect()
	}
	/// Occupancy grid of units matching `filter` over `rect`, shaped `(height, width)`.
	pub fn units_map(&self, rect: Rect, filter: &UnitFilter) -> PixelMap {
		pixel_map::units_map(self.snapshot().select(filter), rect)
	}
	/// Grid of hit points plus shields of units matching `filter` over `rect`.
	///
	/// When several units fall into the same cell, the last one in snapshot order wins.
	pub fn units_health_map(&self, rect: Rect, filter: &UnitFilter) -> HealthMap {
		pixel_map::health_map(self.snapshot().select(filter), rect)
	}

	// Match control

	/// Connects to the game and waits until a match is running.
	///
	/// Retries the connection every [`connect_retry`](Settings::connect_retry)
	/// and then steps until the match starts. Blocks for as long as it takes.
	pub fn connect(&mut self) -> BwResult<()> {
		let mut attempts = 1;
		while !self.client.connect() {
			trace!("Connection attempt {} failed, retrying", attempts);
			self.clock.sleep(self.settings.connect_retry);
			attempts += 1;
		}
		info!("Connected to the game after {} attempt(s)", attempts);
		self.state.connected();

		self.wait_for_match()?;
		self.set_speed(self.settings.game_speed());
		Ok(())
	}
	/// Steps until a `MatchStart` puts the state in [`InMatch`](MatchState::InMatch)
	/// and the game reports being in game.
	///
	/// A match that already ended, or was left, doesn't count: stepping goes on
	/// until the next one starts.
	pub(crate) fn wait_for_match(&mut self) -> BwResult<()> {
		while self.state.state() != MatchState::InMatch {
			self.update()?;
		}
		info!("Match started");
		if self.settings.complete_map_information {
			self.game.enable_flag(Flag::CompleteMapInformation);
		}
		while !self.game.is_in_game() {
			self.update()?;
		}
		Ok(())
	}
	/// Steps the game by exactly one frame and collects its events.
	///
	/// # Errors
	/// [`InterfaceError::NotConnected`] if the client isn't connected.
	pub fn update(&mut self) -> BwResult<()> {
		if !self.client.is_connected() {
			return Err(InterfaceError::NotConnected.into());
		}
		self.client.update();
		self.state.observe(self.game.events());
		trace!("Frame {}: {} event(s)", self.state.frame, self.events().len());
		Ok(())
	}
	/// Steps the game within the given bound, returns the number of frames stepped.
	pub fn update_for(&mut self, bound: StepBound) -> BwResult<usize> {
		let mut frames = 0;
		match bound {
			StepBound::Frame => {
				self.update()?;
				frames = 1;
			}
			StepBound::Frames(n) => {
				while frames < n {
					self.update()?;
					frames += 1;
					if self.is_end() {
						debug!("Match ended after {} of {} frames", frames, n);
						break;
					}
				}
			}
			StepBound::Duration(duration) => {
				let stop_on = self.clock.now() + duration;
				while self.clock.now() < stop_on {
					self.update()?;
					frames += 1;
				}
			}
		}
		Ok(frames)
	}
	/// Whether the latest step reported the end of the match.
	#[inline]
	pub fn is_end(&self) -> bool {
		self.state.is_end()
	}
	#[inline]
	pub fn is_in_game(&self) -> bool {
		self.game.is_in_game()
	}
	/// Switches to another map and waits until the match on it is running.
	///
	/// `map` goes to the game as is: a path relative to the game directory
	/// (see [`map_path_name`](crate::paths::map_path_name)) or an absolute one.
	/// Applies the speed from settings once the match is running.
	pub fn set_map(&mut self, map: &str) -> BwResult<()> {
		self.game.set_map(map)?;
		info!("Map set to {}", map);
		self.restart();

		self.wait_for_match()?;
		self.update()?;
		self.set_speed(self.settings.game_speed());
		Ok(())
	}
	/// Restarts the current match. Events of the old match are forgotten.
	pub fn restart(&mut self) {
		self.game.restart_game();
		self.state.reset();
		debug!("Restart requested");
	}
	/// Leaves the current match.
	pub fn quit(&mut self) {
		self.game.leave_game();
		self.state.left();
		info!("Left the game");
	}
	/// Path of the current map relative to the game directory.
	pub fn map_name(&self) -> String {
		self.game.map_path_name()
	}
	/// Size of the current map in tiles.
	pub fn map_size(&self) -> Size {
		Size::new(self.game.map_width() as usize, self.game.map_height() as usize)
	}
	/// Size of the current map in pixels.
	pub fn map_pixel_size(&self) -> Size {
		self.game_info().map_pixel_size()
	}
	#[inline]
	pub fn self_id(&self) -> u32 {
		self.game.self_id()
	}
	#[inline]
	pub fn enemy_ids(&self) -> Vec<u32> {
		self.game.enemies()
	}
	/// Moves the game's camera so its top left corner is at `pos`.
	pub fn set_viewbox_position(&mut self, pos: Position) {
		self.game.set_screen_position(pos);
	}
	pub fn set_speed(&mut self, speed: GameSpeed) {
		self.game.set_local_speed(speed.local_speed);
		self.game.set_frame_skip(speed.frame_skip);
		info!(
			"Game speed set to {} ms per frame, frame skip {}",
			speed.local_speed, speed.frame_skip
		);
	}

	// Commands

	/// Issues `command` to the unit with id `unit_id`.
	///
	/// Returns whether the game accepted the command. Nothing is retried.
	///
	/// # Errors
	/// [`InterfaceError::UnitNotFound`] if the game doesn't know the unit,
	/// otherwise whatever the bridge returns.
	pub fn command(&mut self, unit_id: u32, command: UnitCommand) -> BwResult<bool> {
		let unit = self
			.game
			.get_unit(unit_id)
			.ok_or(InterfaceError::UnitNotFound(unit_id))?;
		if let UnitCommand::UseTech(tech) | UnitCommand::UseTechAt(tech, _) = command {
			if !unit.can_use(tech) {
				warn!("{:?} can't use {:?}, sending {:?} anyway", unit.type_id, tech, command);
			}
		}
		let accepted = self.game.issue_command(&unit, command)?;
		debug!("{:?} -> unit {}: accepted = {}", command, unit_id, accepted);
		Ok(accepted)
	}
	pub fn attack_position(&mut self, unit_id: u32, pos: Position) -> BwResult<bool> {
		self.command(unit_id, UnitCommand::Attack(Target::Pos(pos)))
	}
	pub fn move_to_position(&mut self, unit_id: u32, pos: Position) -> BwResult<bool> {
		self.command(unit_id, UnitCommand::Move(pos))
	}
	pub fn use_stim_pack(&mut self, unit_id: u32) -> BwResult<bool> {
		self.command(unit_id, UnitCommand::UseTech(TechTypeId::StimPacks))
	}
}
