//! Errors, step bounds and the episode runner.

use crate::{
	bridge::{Client, Game},
	clock::Clock,
	game_state::MatchState,
	interface::Interface,
	player::GameResult,
	Agent,
};
use std::{error::Error, fmt, time::Duration};

pub type BwResult<T> = Result<T, Box<dyn Error>>;

/// Errors raised by this crate itself; bridge errors are passed through as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError {
	/// Operation needs a live connection to the game.
	NotConnected,
	/// No unit with the given id is known to the game.
	UnitNotFound(u32),
	/// Both a frame count and a duration were given to bound stepping.
	ConflictingStepBounds,
	ZeroDownsampleFactor,
}
impl fmt::Display for InterfaceError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NotConnected => write!(f, "not connected to the game"),
			Self::UnitNotFound(id) => write!(f, "unit {} not found", id),
			Self::ConflictingStepBounds => {
				write!(f, "step bound must be either a frame count or a duration, not both")
			}
			Self::ZeroDownsampleFactor => write!(f, "downsample factor must be positive"),
		}
	}
}
impl Error for InterfaceError {}

/// How long [`update_for`](Interface::update_for) keeps stepping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepBound {
	/// Exactly one frame.
	Frame,
	/// Up to `n` frames, stopping early after the frame in which the match ends.
	Frames(usize),
	/// Frames until the given time has passed. Match end doesn't stop it.
	Duration(Duration),
}
impl StepBound {
	/// Builds a bound from optional frame count and duration, one frame if neither is given.
	///
	/// # Errors
	/// [`InterfaceError::ConflictingStepBounds`] if both are given.
	pub fn from_options(frames: Option<usize>, duration: Option<Duration>) -> BwResult<Self> {
		match (frames, duration) {
			(Some(_), Some(_)) => Err(InterfaceError::ConflictingStepBounds.into()),
			(Some(n), None) => Ok(StepBound::Frames(n)),
			(None, Some(d)) => Ok(StepBound::Duration(d)),
			(None, None) => Ok(StepBound::Frame),
		}
	}
}
impl Default for StepBound {
	fn default() -> Self {
		StepBound::Frame
	}
}

/// Plays a single match with the given agent.
///
/// Connects first if the interface hasn't connected yet. When no match is
/// running (after a restart, or on an interface whose previous match already
/// ended) it steps until the next `MatchStart` before the agent starts. Then
/// it steps one frame at a time until the match ends, feeding the agent every
/// event. Returns the outcome reported by the `MatchEnd` of this match, or
/// [`Undecided`](GameResult::Undecided) if the game was left before it ended.
pub fn run_episode<C, G, K, A>(interface: &mut Interface<C, G, K>, agent: &mut A) -> BwResult<GameResult>
where
	C: Client,
	G: Game,
	K: Clock,
	A: Agent,
{
	if interface.state() == MatchState::Disconnected {
		interface.connect()?;
	} else if interface.state() != MatchState::InMatch {
		debug!("No match running ({:?}), waiting for the next one", interface.state());
		interface.wait_for_match()?;
	}
	info!("Starting episode on {}", interface.map_name());
	agent.on_start(interface)?;

	let mut iteration = 0;
	let result = loop {
		agent.on_frame(interface, iteration)?;
		interface.update()?;
		for event in interface.events().to_vec() {
			agent.on_event(interface, &event)?;
		}
		if interface.is_end() || interface.state() == MatchState::Ended {
			break interface
				.game_state()
				.is_winner
				.map_or(GameResult::Undecided, GameResult::from_winner);
		}
		iteration += 1;
	};
	debug!("Episode finished after {} frames: {:?}", iteration + 1, result);

	agent.on_end(interface, result)?;
	Ok(result)
}
