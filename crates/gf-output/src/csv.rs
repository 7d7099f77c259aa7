//! CSV export backend.
//!
//! Creates `events.csv` in the configured output directory.  Optional
//! columns are left empty when an event has no value for them.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRecord, OutputResult};

pub const EVENTS_FILE: &str = "events.csv";

/// Writes every event as one CSV row.
pub struct CsvEventWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Create (or truncate) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["time_ms", "kind", "agent", "zone", "lat", "lon"])?;
        Ok(Self { events, finished: false })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()> {
        self.events.write_record(&[
            record.time_ms.to_string(),
            record.kind.to_owned(),
            opt(record.agent),
            opt(record.zone),
            opt(record.lat),
            opt(record.lon),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
