//! `gf-tracker`: zone transition detection.
//!
//! Every (agent, zone) pair is a two-state machine, `OUTSIDE` or `INSIDE`,
//! starting `OUTSIDE`.  [`ZoneStates`] holds one flag per zone for a single
//! agent; [`ZoneStates::step`] feeds it the agent's next position and returns
//! the edges that fired:
//!
//! ```text
//! OUTSIDE ──contains──▶ INSIDE     emits Entered(zone)
//! INSIDE  ──!contains─▶ OUTSIDE    emits Exited(zone)
//! ```
//!
//! Transitions come out in zone-index order.  The tracker has no notion of
//! time; the scheduler decides when to call it.

pub mod error;
pub mod states;


pub use error::{TrackerError, TrackerResult};
pub use states::{Transition, ZoneStates};
