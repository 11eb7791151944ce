//! Match lifecycle, driven by the events observed on each step.

use crate::Event;

/// Where the agent is in the connect / play / finish cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MatchState {
	/// No connection to the game yet.
	Disconnected,
	/// Connected (or restarted) and waiting for a `MatchStart` event.
	AwaitingMatchStart,
	InMatch,
	/// A `MatchEnd` event was observed or the agent left the game.
	Ended,
}
impl Default for MatchState {
	fn default() -> Self {
		MatchState::Disconnected
	}
}

/// Events of the latest step and the match state derived from them.
///
/// Only stepping writes here; everything else reads.
#[derive(Debug, Default, Clone)]
pub struct GameState {
	state: MatchState,
	events: Vec<Event>,
	/// Frames stepped since the current match was requested.
	pub frame: usize,
	/// Winner flag of the last `MatchEnd`, if one was seen.
	pub is_winner: Option<bool>,
}
impl GameState {
	#[inline]
	pub fn state(&self) -> MatchState {
		self.state
	}
	/// Events of the latest step.
	#[inline]
	pub fn events(&self) -> &[Event] {
		&self.events
	}
	pub(crate) fn connected(&mut self) {
		if self.state == MatchState::Disconnected {
			self.state = MatchState::AwaitingMatchStart;
		}
	}
	/// Replaces the current events with a new batch and advances the state.
	pub(crate) fn observe(&mut self, events: Vec<Event>) {
		self.frame += 1;
		for event in &events {
			match event {
				Event::MatchStart if self.state != MatchState::Disconnected => {
					self.state = MatchState::InMatch;
					self.is_winner = None;
				}
				Event::MatchEnd { is_winner } => {
					self.state = MatchState::Ended;
					self.is_winner = Some(*is_winner);
				}
				_ => {}
			}
		}
		self.events = events;
	}
	/// Forgets the current match, e.g. after a restart or a map change.
	pub(crate) fn reset(&mut self) {
		if self.state != MatchState::Disconnected {
			self.state = MatchState::AwaitingMatchStart;
		}
		self.events.clear();
		self.frame = 0;
		self.is_winner = None;
	}
	pub(crate) fn left(&mut self) {
		self.state = MatchState::Ended;
		self.events.clear();
	}
	/// Whether a `MatchStart` event came with the latest step.
	pub fn has_match_started(&self) -> bool {
		self.events.iter().any(|e| e.event_type().is_match_start())
	}
	/// Whether a `MatchEnd` event came with the latest step.
	pub fn is_end(&self) -> bool {
		self.events.iter().any(|e| e.event_type().is_match_end())
	}
}
