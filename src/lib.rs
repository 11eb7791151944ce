// #![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Convenience layer over the Brood War bot API.
//!
//! The crate turns the raw bridge exposed by the game into a few higher level
//! tools: unit queries by owner, type and id with derived projections,
//! distance queries, rasterization of units into grids and match control
//! (connecting, stepping, switching maps and game speed).
//!
//! Everything goes through an [`Interface`](interface::Interface), which owns
//! the bridge handles, the clock and the match state.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
pub extern crate bw_macro;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;

/// The most frequent used items and various traits here.
/// Prefered usage: `use rust_bw::prelude::*;`.
pub mod prelude {
	pub use crate::{
		action::{Target, UnitCommand},
		bridge::{Client, Game},
		client::{run_episode, BwResult, InterfaceError, StepBound},
		clock::{Clock, SystemClock},
		constants::SPECIAL_UNITS,
		distance::*,
		filter::{Selector, UnitFilter},
		game_state::MatchState,
		geometry::{Position, Rect, Size, TilePosition},
		ids::*,
		interface::Interface,
		pixel_map::{Pixel, PixelMap},
		player::{GameResult, Race},
		unit::Unit,
		units::{Units, UnitsIterator},
		Agent, Event, EventType, GameSpeed, Settings,
	};
}

mod paths;

pub mod action;
pub mod bridge;
pub mod client;
pub mod clock;
pub mod constants;
pub mod distance;
pub mod filter;
pub mod game_info;
pub mod game_state;
pub mod geometry;
pub mod ids;
pub mod interface;
pub mod pixel_map;
pub mod player;
pub mod sandbox;
pub mod unit;
pub mod units;

use bridge::{Client, Game};
use clock::Clock;
use constants::{FASTEST_LOCAL_SPEED, NORMAL_FRAME_SKIP, NORMAL_LOCAL_SPEED};
use geometry::Position;
use interface::Interface;
use player::GameResult;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use client::{run_episode, BwResult};
pub use paths::{map_file_name, map_path_name};

/// Settings used when connecting to the game.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	/// Run the game as fast as possible instead of at normal speed.
	pub speedup: bool,
	/// Pause between failed connection attempts.
	pub connect_retry: Duration,
	/// Ask the game to reveal the whole map once the match starts.
	pub complete_map_information: bool,
}
impl Settings {
	pub fn new(speedup: bool) -> Self {
		Self {
			speedup,
			..Default::default()
		}
	}
	pub fn configured(speedup: bool, connect_retry: Duration, complete_map_information: bool) -> Self {
		Self {
			speedup,
			connect_retry,
			complete_map_information,
		}
	}
	#[inline]
	pub fn game_speed(&self) -> GameSpeed {
		GameSpeed::from_speedup(self.speedup)
	}
}
impl Default for Settings {
	fn default() -> Self {
		Self {
			speedup: true,
			connect_retry: Duration::from_millis(500),
			complete_map_information: true,
		}
	}
}

/// Local speed and frame skip pair applied to the game.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameSpeed {
	/// Milliseconds per frame, `0` is as fast as possible.
	pub local_speed: i32,
	/// Frames skipped between renders.
	pub frame_skip: i32,
}
impl GameSpeed {
	pub const FASTEST: Self = Self {
		local_speed: FASTEST_LOCAL_SPEED,
		frame_skip: 0,
	};
	pub const NORMAL: Self = Self {
		local_speed: NORMAL_LOCAL_SPEED,
		frame_skip: NORMAL_FRAME_SKIP,
	};

	pub fn from_speedup(speedup: bool) -> Self {
		if speedup {
			Self::FASTEST
		} else {
			Self::NORMAL
		}
	}
}
impl Default for GameSpeed {
	fn default() -> Self {
		Self::FASTEST
	}
}

/// Events reported by the game on each frame.
/// Passed to [`on_event`](Agent::on_event).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	MatchStart,
	/// Match finished, with the outcome for the agent.
	MatchEnd { is_winner: bool },
	MatchFrame,
	MenuFrame,
	/// Text typed by the agent.
	SendText(String),
	/// Text received from a player, given by id.
	ReceiveText(u32, String),
	PlayerLeft(u32),
	/// Nuclear launch detected at the given position.
	NukeDetect(Position),
	UnitDiscover(u32),
	UnitEvade(u32),
	UnitShow(u32),
	UnitHide(u32),
	UnitCreate(u32),
	UnitDestroy(u32),
	UnitMorph(u32),
	/// Unit changed its owner.
	UnitRenegade(u32),
	SaveGame(String),
	UnitComplete(u32),
}
impl Event {
	pub fn event_type(&self) -> EventType {
		match self {
			Event::MatchStart => EventType::MatchStart,
			Event::MatchEnd { .. } => EventType::MatchEnd,
			Event::MatchFrame => EventType::MatchFrame,
			Event::MenuFrame => EventType::MenuFrame,
			Event::SendText(_) => EventType::SendText,
			Event::ReceiveText(..) => EventType::ReceiveText,
			Event::PlayerLeft(_) => EventType::PlayerLeft,
			Event::NukeDetect(_) => EventType::NukeDetect,
			Event::UnitDiscover(_) => EventType::UnitDiscover,
			Event::UnitEvade(_) => EventType::UnitEvade,
			Event::UnitShow(_) => EventType::UnitShow,
			Event::UnitHide(_) => EventType::UnitHide,
			Event::UnitCreate(_) => EventType::UnitCreate,
			Event::UnitDestroy(_) => EventType::UnitDestroy,
			Event::UnitMorph(_) => EventType::UnitMorph,
			Event::UnitRenegade(_) => EventType::UnitRenegade,
			Event::SaveGame(_) => EventType::SaveGame,
			Event::UnitComplete(_) => EventType::UnitComplete,
		}
	}
	/// Id of the unit the event is about, if any.
	pub fn unit_id(&self) -> Option<u32> {
		match self {
			Event::UnitDiscover(id)
			| Event::UnitEvade(id)
			| Event::UnitShow(id)
			| Event::UnitHide(id)
			| Event::UnitCreate(id)
			| Event::UnitDestroy(id)
			| Event::UnitMorph(id)
			| Event::UnitRenegade(id)
			| Event::UnitComplete(id) => Some(*id),
			_ => None,
		}
	}
}

/// Kind of an [`Event`] without its payload, numbered as in the native API.
#[variant_checkers]
#[derive(Debug, FromStr, FromPrimitive, ToPrimitive, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
	MatchStart = 0,
	MatchEnd = 1,
	MatchFrame = 2,
	MenuFrame = 3,
	SendText = 4,
	ReceiveText = 5,
	PlayerLeft = 6,
	NukeDetect = 7,
	UnitDiscover = 8,
	UnitEvade = 9,
	UnitShow = 10,
	UnitHide = 11,
	UnitCreate = 12,
	UnitDestroy = 13,
	UnitMorph = 14,
	UnitRenegade = 15,
	SaveGame = 16,
	UnitComplete = 17,
	None = 18,
}

/// Trait that agents driven by [`run_episode`] must implement.
///
/// Every callback gets the interface, so the agent can query units and issue
/// commands right away.
pub trait Agent {
	/// Called once, after connecting and before the first frame.
	fn on_start<C: Client, G: Game, K: Clock>(&mut self, _interface: &mut Interface<C, G, K>) -> BwResult<()> {
		Ok(())
	}
	/// Called before every frame is stepped. (Main logic of the agent should be here)
	fn on_frame<C: Client, G: Game, K: Clock>(
		&mut self,
		_interface: &mut Interface<C, G, K>,
		_iteration: usize,
	) -> BwResult<()> {
		Ok(())
	}
	/// Called for every event of the frame just stepped.
	fn on_event<C: Client, G: Game, K: Clock>(
		&mut self,
		_interface: &mut Interface<C, G, K>,
		_event: &Event,
	) -> BwResult<()> {
		Ok(())
	}
	/// Called once the match is over, with its outcome.
	fn on_end<C: Client, G: Game, K: Clock>(
		&mut self,
		_interface: &mut Interface<C, G, K>,
		_result: GameResult,
	) -> BwResult<()> {
		Ok(())
	}
}
