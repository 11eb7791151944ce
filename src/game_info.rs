//! Constant information about the current map and players.

use crate::{bridge::Game, geometry::Size, paths::map_file_name};

/// Structure where map and player information is stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameInfo {
	/// Map path relative to the game directory, as reported by the game.
	pub map_path_name: String,
	/// Map path without the maps folder prefix.
	pub map_name: String,
	/// Size of the map in tiles.
	pub map_size: Size,
	/// Id of the agent's player.
	pub self_id: u32,
	/// Ids of the enemy players.
	pub enemy_ids: Vec<u32>,
}
impl GameInfo {
	/// Reads everything from the game in one go.
	pub fn from_game<G: Game>(game: &G) -> Self {
		let map_path_name = game.map_path_name();
		Self {
			map_name: map_file_name(&map_path_name).to_string(),
			map_size: Size::new(game.map_width() as usize, game.map_height() as usize),
			self_id: game.self_id(),
			enemy_ids: game.enemies(),
			map_path_name,
		}
	}
	/// Size of the map in pixels.
	pub fn map_pixel_size(&self) -> Size {
		let tile = crate::constants::TILE_SIZE as usize;
		Size::new(self.map_size.width * tile, self.map_size.height * tile)
	}
}
