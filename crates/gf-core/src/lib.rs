//! `gf-core`: foundational types for the geofence simulation engine.
//!
//! This crate is a dependency of every other `gf-*` crate.  It has no `gf-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ZoneId`, `TimerId`                        |
//! | [`coord`]       | `Coordinate`, haversine distance, destination point   |
//! | [`time`]        | `SimTime` (virtual milliseconds)                      |
//! | [`config`]      | `EngineConfig` and its defaults                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use coord::Coordinate;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, TimerId, ZoneId};
pub use time::SimTime;
