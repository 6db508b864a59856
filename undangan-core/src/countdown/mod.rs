//! Remaining-time breakdown until the event starts.
//!
//! `compute_countdown` is the pure engine; `CountdownTimer` re-evaluates it
//! once per second and retires itself when the target passes.

mod timer;

pub use timer::{Clock, CountdownTimer, SystemClock};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// Days, hours, minutes and seconds left. All-zero once the event has started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownState {
    pub const ZERO: CountdownState = CountdownState {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break a positive millisecond delta down, truncating sub-second remainder.
    fn from_millis(delta: u64) -> Self {
        CountdownState {
            days: delta / MILLIS_PER_DAY,
            hours: ((delta % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u32,
            minutes: ((delta % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32,
            seconds: ((delta % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
        }
    }

    /// Milliseconds represented by this breakdown.
    pub fn total_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY
            + u64::from(self.hours) * MILLIS_PER_HOUR
            + u64::from(self.minutes) * MILLIS_PER_MINUTE
            + u64::from(self.seconds) * MILLIS_PER_SECOND
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hari {:02} jam {:02} menit {:02} detik",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Result of one countdown evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running(CountdownState),
    /// Terminal: the target has been reached. Recomputation must stop.
    Expired,
}

impl Countdown {
    pub fn state(&self) -> CountdownState {
        match self {
            Countdown::Running(state) => *state,
            Countdown::Expired => CountdownState::ZERO,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

/// Time left from `now` until `target`.
///
/// Returns `Expired` when `now >= target`.
pub fn compute_countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let delta = (target - now).num_milliseconds();
    if delta <= 0 {
        return Countdown::Expired;
    }

    Countdown::Running(CountdownState::from_millis(delta as u64))
}
