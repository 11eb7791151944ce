//! Contract with the external game bridge.
//!
//! The bridge is split the same way the native library is: a [`Client`]
//! that owns the connection and advances frames, and a [`Game`] that exposes
//! the state of the match and accepts orders. Implementations wrap the
//! native bindings; [`sandbox`](crate::sandbox) provides a scripted one.

use crate::{
	action::UnitCommand, client::BwResult, geometry::Position, ids::Flag, unit::Unit, Event,
};

/// Connection to the game process.
pub trait Client {
	/// Tries to connect once, returns `true` on success.
	fn connect(&mut self) -> bool;
	fn is_connected(&self) -> bool;
	/// Advances the game by one frame and refreshes the game's snapshot.
	fn update(&mut self);
}

/// View of the running match.
pub trait Game {
	/// All units known to the agent, in the bridge's order.
	fn all_units(&self) -> Vec<Unit>;
	/// Events of the last frame.
	fn events(&self) -> Vec<Event>;
	fn is_in_game(&self) -> bool;
	/// Id of the agent's own player.
	fn self_id(&self) -> u32;
	fn enemies(&self) -> Vec<u32>;
	fn get_unit(&self, id: u32) -> Option<Unit>;
	/// Issues `command` to `unit`, returns whether the game accepted it.
	fn issue_command(&mut self, unit: &Unit, command: UnitCommand) -> BwResult<bool>;
	/// Map width in tiles.
	fn map_width(&self) -> u32;
	/// Map height in tiles.
	fn map_height(&self) -> u32;
	/// Path of the current map, relative to the game directory (e.g. `maps\name.scm`).
	fn map_path_name(&self) -> String;
	/// Sets the map used by the next restart.
	fn set_map(&mut self, map: &str) -> BwResult<()>;
	fn restart_game(&mut self);
	fn leave_game(&mut self);
	fn set_local_speed(&mut self, speed: i32);
	fn set_frame_skip(&mut self, frame_skip: i32);
	fn enable_flag(&mut self, flag: Flag);
	fn set_screen_position(&mut self, pos: Position);
}
