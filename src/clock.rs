//! Time source used by blocking loops.

use std::{
	thread,
	time::{Duration, Instant},
};

/// Monotonic clock which can also block the current thread.
pub trait Clock {
	/// Time elapsed since the clock was created.
	fn now(&self) -> Duration;
	fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
	start: Instant,
}
impl SystemClock {
	pub fn new() -> Self {
		Self { start: Instant::now() }
	}
}
impl Default for SystemClock {
	fn default() -> Self {
		Self::new()
	}
}
impl Clock for SystemClock {
	#[inline]
	fn now(&self) -> Duration {
		self.start.elapsed()
	}
	#[inline]
	fn sleep(&self, duration: Duration) {
		thread::sleep(duration)
	}
}
