//! `gf-path`: turns waypoints into the point sequence an agent plays back.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`interpolate`] | `interpolate`, `validate_waypoints`                    |
//! | [`route`]       | `Route`: start point + ordered destinations            |
//! | [`error`]       | `PathError`, `PathResult<T>`                           |
//!
//! # Leg boundaries
//!
//! Each leg is interpolated on its own, endpoints included, and the legs are
//! concatenated as-is.  A waypoint shared by two legs therefore appears twice
//! in a row: `interpolate(&[a, b, c], n)` yields `2 * n` points.  The repeated
//! point makes the agent dwell on the waypoint for one extra tick, which is
//! how the multi-vehicle demo has always behaved.

pub mod error;
pub mod interpolate;
pub mod route;


pub use error::{PathError, PathResult};
pub use interpolate::{interpolate, validate_waypoints};
pub use route::Route;
