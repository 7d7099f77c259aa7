//! `gf-sim`: the geofence simulation engine.
//!
//! # Object graph
//!
//! One [`Engine`] owns everything a session needs:
//!
//! ```text
//! Engine
//!  ├─ ZoneSet        boundary + zones              (gf-geometry)
//!  ├─ Vec<Agent>     path, cursor, ZoneStates,     (gf-path, gf-tracker)
//!  │                 route, run state
//!  ├─ TimerQueue     cancelable (SimTime, TimerId) deadlines
//!  └─ O: EngineObserver   receives every EngineEvent
//! ```
//!
//! # Playback loop
//!
//! ```text
//! start(agent):
//!   reset cursor + zone flags → Started → first tick now → schedule next
//! each tick (timer fires):
//!   cursor == len  → Finished, nothing scheduled
//!   otherwise      → Moved(path[cursor]) → Entered/Exited… → schedule next
//! stop(agent):
//!   cancel pending TimerId → Stopped
//! ```
//!
//! The fleet variant runs every agent with a path from one shared timer and
//! ends with `AllFinished`.
//!
//! Time is virtual.  The host moves the clock with [`Engine::advance_to`]
//! or [`Engine::run_until_idle`], or sleeps until [`Engine::next_deadline`]
//! for real-time playback.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Fleet containment checks run on Rayon's thread pool.   |
//! | `serde`    | Serialize/Deserialize on events and their payloads.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gf_core::{Coordinate, EngineConfig};
//! use gf_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(EngineConfig::default()).build()?;
//! engine.set_boundary(ring)?;
//! engine.add_zone(Coordinate::new(10.7626, 106.6601), 150.0)?;
//! let car = engine.create_agent("Vehicle1")?;
//! engine.set_agent_path(car, &[a, b], 10)?;
//! engine.start(car)?;
//! engine.run_until_idle();
//! ```

pub mod agent;
pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
pub mod observer;
pub mod timer;

mod playback;


pub use agent::{Agent, RunState};
pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use event::EngineEvent;
pub use observer::{EngineObserver, NoopObserver};
pub use timer::{TimerQueue, TimerTarget};
