//! Strongly typed, zero-cost identifier wrappers.
//!
//! Agents and zones are identified by their creation order, so the inner
//! integer doubles as an index into the owning `Vec`.  Prefer the `.index()`
//! helper over `id.0 as usize` at call sites.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Registration index of an agent in the engine.
    pub struct AgentId(u32);
}

typed_id! {
    /// Creation index of a zone.  Zones are never removed individually, so
    /// an id stays valid until the next bulk reset.
    pub struct ZoneId(u32);
}

typed_id! {
    /// Handle of a pending timer in the scheduler's queue.  Ids are never
    /// reused, so a stale handle can never cancel someone else's timer.
    pub struct TimerId(u64);
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent{}", self.0)
    }
}

/// Zones are shown 1-based, matching the labels users see on the map.
impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone{}", self.0 + 1)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}
