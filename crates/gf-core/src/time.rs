//! Virtual simulation time.
//!
//! # Design
//!
//! The scheduler never reads a wall clock.  Time is a monotonically
//! increasing millisecond counter that the host advances explicitly, either
//! instantly (tests, batch runs) or by sleeping until the next deadline (the
//! real-time demo).  Integer milliseconds keep timer ordering exact.

use std::fmt;

/// An absolute point on the engine's virtual clock, in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The instant `ms` milliseconds after `self`.  Saturates instead of
    /// wrapping so a huge cadence can never schedule into the past.
    #[inline]
    pub fn after_ms(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self` (0 if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.after_ms(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.since(rhs)
    }
}

/// `mm:ss.mmm`: the shape of the timestamps in the demo's event log.
impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.0 / 1_000;
        write!(f, "{:02}:{:02}.{:03}", total_secs / 60, total_secs % 60, self.0 % 1_000)
    }
}
