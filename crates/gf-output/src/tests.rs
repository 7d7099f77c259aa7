//! Integration tests for gf-output.

#[cfg(test)]
mod helpers {
    use gf_core::{Coordinate, EngineConfig};
    use gf_sim::{Engine, EngineBuilder, EngineObserver};

    pub fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    /// Unit square, one covering zone, "Vehicle1" with a 3-point path.
    pub fn scenario<O: EngineObserver>(observer: O) -> Engine<O> {
        EngineBuilder::new(EngineConfig::default())
            .observer(observer)
            .boundary(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(1.0, 0.0)])
            .zone(c(0.5, 0.5), 50_000.0)
            .agent("Vehicle1", Vec::new())
            .build()
            .unwrap()
    }

    /// Play "Vehicle1" across the zone and then out of it.
    pub fn play<O: EngineObserver>(engine: &mut Engine<O>) {
        let car = engine.agent_id("Vehicle1").unwrap();
        engine.set_agent_path(car, &[c(0.5, 0.5), c(0.5, 0.98)], 3).unwrap();
        engine.start(car).unwrap();
        engine.run_until_idle();
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvEventWriter, EVENTS_FILE};
    use crate::writer::EventWriter;
    use crate::EventRecord;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time_ms", "kind", "agent", "zone", "lat", "lon"]);
    }

    #[test]
    fn missing_columns_are_empty() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        let record = EventRecord {
            time_ms: 2_400,
            kind:    "all_finished",
            agent:   None,
            zone:    None,
            lat:     None,
            lon:     None,
        };
        w.write_event(&record).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2400");
        assert_eq!(&rows[0][1], "all_finished");
        assert_eq!(&rows[0][2], "");
        assert_eq!(&rows[0][5], "");
    }
}

#[cfg(test)]
mod records {
    use gf_core::{AgentId, SimTime, ZoneId};
    use gf_sim::EngineEvent;

    use super::helpers::c;
    use crate::EventRecord;

    #[test]
    fn moved_carries_its_point() {
        let event = EngineEvent::Moved { agent: AgentId(2), step: 4, point: c(10.5, 106.7) };
        let r = EventRecord::new(SimTime(4_800), &event);
        assert_eq!(r.time_ms, 4_800);
        assert_eq!(r.kind, "moved");
        assert_eq!(r.agent, Some(2));
        assert_eq!(r.zone, None);
        assert_eq!((r.lat, r.lon), (Some(10.5), Some(106.7)));
    }

    #[test]
    fn zone_ids_stay_zero_based() {
        let event = EngineEvent::Entered { agent: AgentId(0), zone: ZoneId(1) };
        let r = EventRecord::new(SimTime::ZERO, &event);
        assert_eq!(r.zone, Some(1));
        assert_eq!(r.lat, None);
    }
}

#[cfg(test)]
mod observer {
    use std::io;

    use super::helpers::{play, scenario};
    use crate::{CsvEventWriter, EventOutputObserver, EventRecord, EventWriter, OutputError, OutputResult};

    #[test]
    fn exports_the_whole_timeline() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvEventWriter::new(dir.path()).unwrap();
        let mut engine = scenario(EventOutputObserver::new(writer));
        play(&mut engine);
        engine.observer.finish();
        assert!(engine.observer.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), engine.observer.written());

        let kinds: Vec<&str> = rows.iter().map(|r| r.get(1).unwrap()).collect();
        assert_eq!(
            kinds,
            [
                "boundary_set", "zone_added", "agent_created", "path_set", "started", "moved",
                "entered", "moved", "moved", "exited", "finished",
            ]
        );

        let entered = &rows[6];
        assert_eq!(&entered[0], "0");
        assert_eq!(&entered[2], "0");
        assert_eq!(&entered[3], "0");
        let exited = &rows[9];
        assert_eq!(&exited[0], "2400");
    }

    /// Fails every write.
    struct Broken;

    impl EventWriter for Broken {
        fn write_event(&mut self, _record: &EventRecord) -> OutputResult<()> {
            Err(io::Error::other("disk full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_taken_once() {
        let mut engine = scenario(EventOutputObserver::new(Broken));
        play(&mut engine);

        assert_eq!(engine.observer.written(), 0);
        assert!(matches!(engine.observer.take_error(), Some(OutputError::Io(_))));
        assert!(engine.observer.take_error().is_none());
    }
}

#[cfg(test)]
mod event_log {
    use gf_core::AgentId;

    use super::helpers::{play, scenario};
    use crate::EventLog;

    #[test]
    fn lines_use_agent_names_and_skip_moves() {
        let mut engine = scenario(EventLog::new());
        engine.observer.clear();
        play(&mut engine);

        assert_eq!(
            engine.observer.lines(),
            [
                "00:00.000 Vehicle1 path generated with 3 points.",
                "00:00.000 Vehicle1 simulation started.",
                "00:00.000 Vehicle1 ENTERED Zone1",
                "00:02.400 Vehicle1 EXITED Zone1",
                "00:03.600 Vehicle1 reached the end of its path.",
            ]
        );
    }

    #[test]
    fn with_moves_keeps_every_step() {
        let mut engine = scenario(EventLog::new().with_moves());
        play(&mut engine);
        let moves = engine.observer.lines().iter().filter(|l| l.contains(" step ")).count();
        assert_eq!(moves, 3);
    }

    #[test]
    fn filters() {
        let mut engine = scenario(EventLog::new());
        play(&mut engine);
        let log = &engine.observer;

        assert_eq!(log.transitions().count(), 2);
        assert!(log.for_agent(AgentId(0)).all(|e| e.event.agent() == Some(AgentId(0))));
        assert_eq!(log.for_agent(AgentId(1)).count(), 0);
        assert!(!log.is_empty());
    }
}

#[cfg(test)]
mod fanout {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gf_core::SimTime;
    use gf_sim::{EngineEvent, EngineObserver};

    use super::helpers::{play, scenario};
    use crate::{EventLog, Fanout, TracingObserver};

    struct Counter(Arc<AtomicUsize>);

    impl EngineObserver for Counter {
        fn on_event(&mut self, _at: SimTime, _event: &EngineEvent) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn every_subscriber_sees_every_event() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let fanout = Fanout::new()
            .with(Counter(first.clone()))
            .with(TracingObserver::new())
            .with(Counter(second.clone()));
        assert_eq!(fanout.len(), 3);

        // Pair the fanout with a log to know the expected count.
        let mut engine = scenario((fanout, EventLog::new()));
        play(&mut engine);

        let total = engine.observer.1.len();
        assert!(total > 0);
        assert_eq!(first.load(Ordering::Relaxed), total);
        assert_eq!(second.load(Ordering::Relaxed), total);
    }
}
