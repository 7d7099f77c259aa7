//! `gf-authoring`: the map-click authoring controller.
//!
//! A UI forwards every map click to [`Authoring::click`]; what the click
//! means depends on the current [`ClickMode`], armed by a `begin_*` call
//! (a toolbar button in the demo):
//!
//! ```text
//!            begin_zone(r)        click inside → add_zone      ─┐
//!          ┌──────────────▶ PlaceZone ─────────────────────────┤
//!          │ begin_endpoints      click → A, click → B          │
//!   Idle ──┼──────────────▶ SetEndpoints ──────────────────────┤──▶ Idle
//!          │ begin_agent_start    click inside → set start      │
//!          ├──────────────▶ SetAgentStart ─────────────────────┤
//!          │ begin_destination    click inside → add destination│
//!          └──────────────▶ AddDestination ────────────────────┘
//! ```
//!
//! A rejected click leaves the mode armed so the user can try again.

pub mod controller;
pub mod error;


pub use controller::{Authoring, ClickMode, ClickOutcome, Endpoints, steps_or_default};
pub use error::{AuthoringError, AuthoringResult};
