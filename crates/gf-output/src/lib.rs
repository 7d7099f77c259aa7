//! `gf-output`: event sinks for the geofence engine.
//!
//! Everything here implements `gf_sim::EngineObserver`:
//!
//! | Type                     | Sink                                                |
//! |--------------------------|-----------------------------------------------------|
//! | [`EventLog`]             | In-memory timeline with human-readable lines        |
//! | [`TracingObserver`]      | `tracing` events ("Vehicle1 ENTERED Zone1")         |
//! | [`EventOutputObserver`]  | Any [`EventWriter`] backend, e.g. [`CsvEventWriter`] |
//! | [`Fanout`]               | Forwards to a dynamic list of the above             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gf_output::{CsvEventWriter, EventOutputObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output"))?;
//! let mut engine = EngineBuilder::new(config)
//!     .observer(EventOutputObserver::new(writer))
//!     .build()?;
//! engine.start_fleet()?;
//! engine.run_until_idle();
//! engine.observer.finish();
//! engine.observer.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod fanout;
pub mod log;
pub mod observer;
pub mod record;
pub mod trace_log;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use fanout::Fanout;
pub use log::{EventLog, LogEntry};
pub use observer::EventOutputObserver;
pub use record::EventRecord;
pub use trace_log::TracingObserver;
pub use writer::EventWriter;
