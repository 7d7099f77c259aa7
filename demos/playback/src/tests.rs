//! Tests for the playback binary.

#[cfg(test)]
mod args {
    use std::path::PathBuf;

    use crate::Args;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args { scenario: None, out: None, speed: 1.0, instant: false });
    }

    #[test]
    fn everything() {
        let args = parse(&["city.json", "--out", "out", "--speed", "4", "--instant"]).unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("city.json")));
        assert_eq!(args.out, Some(PathBuf::from("out")));
        assert_eq!(args.speed, 4.0);
        assert!(args.instant);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--speed", "0"]).is_err());
        assert!(parse(&["--speed", "fast"]).is_err());
        assert!(parse(&["--out"]).is_err());
        assert!(parse(&["--loud"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}

#[cfg(test)]
mod clock {
    use std::time::Duration;

    use gf_core::SimTime;

    use crate::{virtual_time, wall_offset};

    #[test]
    fn speed_scales_both_ways() {
        assert_eq!(wall_offset(SimTime(3_000), 2.0), Duration::from_millis(1_500));
        assert_eq!(virtual_time(Duration::from_millis(1_500), 2.0), SimTime(3_000));
        assert_eq!(virtual_time(Duration::ZERO, 8.0), SimTime::ZERO);
    }
}

#[cfg(test)]
mod console {
    use std::ops::ControlFlow;

    use gf_output::EventLog;

    use crate::commands::{Command, apply, stop_all};
    use crate::scenario::Scenario;

    #[test]
    fn parses_commands() {
        assert_eq!("start Vehicle1".parse::<Command>().unwrap(), Command::Start("Vehicle1".into()));
        assert_eq!("  stop   Vehicle2 ".parse::<Command>().unwrap(), Command::Stop("Vehicle2".into()));
        assert_eq!("fleet".parse::<Command>().unwrap(), Command::StartFleet);
        assert_eq!("halt".parse::<Command>().unwrap(), Command::StopFleet);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert!("start".parse::<Command>().is_err());
        assert!("fleet now".parse::<Command>().is_err());
        assert!("jump".parse::<Command>().is_err());
    }

    #[test]
    fn commands_drive_the_engine() {
        let scenario = Scenario::embedded().unwrap();
        let mut engine = scenario.build(EventLog::new()).unwrap();
        let car = engine.agent_id("Vehicle1").unwrap();

        assert_eq!(apply(&mut engine, Command::Start("Vehicle1".into())), ControlFlow::Continue(()));
        assert!(engine.agent(car).unwrap().is_running());

        // Rejections are logged, not fatal.
        assert_eq!(apply(&mut engine, Command::Start("Nobody".into())), ControlFlow::Continue(()));
        assert_eq!(apply(&mut engine, Command::Stop("Vehicle2".into())), ControlFlow::Continue(()));
        assert_eq!(apply(&mut engine, Command::Status), ControlFlow::Continue(()));

        assert_eq!(apply(&mut engine, Command::Stop("Vehicle1".into())), ControlFlow::Continue(()));
        assert!(!engine.agent(car).unwrap().is_running());
        assert_eq!(apply(&mut engine, Command::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn stop_all_halts_fleet_and_solo_agents() {
        let scenario = Scenario::embedded().unwrap();
        let mut engine = scenario.build(EventLog::new()).unwrap();
        engine.start_fleet().unwrap();
        stop_all(&mut engine);
        assert!(!engine.fleet_running());
        assert!(engine.agents().iter().all(|a| !a.is_running()));
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn stop_all_stops_solo_agents_once() {
        let scenario = Scenario::embedded().unwrap();
        let mut engine = scenario.build(EventLog::new()).unwrap();
        scenario.start(&mut engine).unwrap();
        engine.observer.clear();

        stop_all(&mut engine);
        let kinds: Vec<&str> = engine.observer.entries().iter().map(|e| e.event.kind()).collect();
        assert_eq!(kinds, ["stopped", "stopped"]);
        assert_eq!(engine.next_deadline(), None);
    }
}

#[cfg(test)]
mod scenarios {
    use gf_core::{AgentId, ZoneId};
    use gf_output::EventLog;
    use gf_sim::{EngineEvent, RunState};

    use crate::scenario::Scenario;

    fn transitions(log: &EventLog, agent: AgentId) -> Vec<(bool, ZoneId)> {
        log.for_agent(agent)
            .filter_map(|e| match e.event {
                EngineEvent::Entered { zone, .. } => Some((true, zone)),
                EngineEvent::Exited { zone, .. } => Some((false, zone)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn embedded_scenario_crosses_both_zones() {
        let scenario = Scenario::embedded().unwrap();
        let mut engine = scenario.build(EventLog::new()).unwrap();
        assert_eq!(engine.zones().len(), 2);
        assert_eq!(engine.agent(AgentId(0)).unwrap().path().len(), 20);
        assert_eq!(engine.agent(AgentId(1)).unwrap().path().len(), 20);
        assert_eq!(engine.agent(AgentId(1)).unwrap().cadence_ms(), Some(800));

        scenario.start(&mut engine).unwrap();
        engine.run_until_idle();

        assert!(engine.agents().iter().all(|a| a.state() == RunState::Finished));
        assert_eq!(
            transitions(&engine.observer, AgentId(0)),
            [(true, ZoneId(0)), (false, ZoneId(0)), (true, ZoneId(1)), (false, ZoneId(1))]
        );
        assert_eq!(transitions(&engine.observer, AgentId(1)), [(true, ZoneId(0)), (false, ZoneId(0))]);
    }

    #[test]
    fn fleet_flag_and_defaults() {
        let json = r#"{
            "boundary": [
                { "lat": 0.0, "lon": 0.0 }, { "lat": 0.0, "lon": 1.0 },
                { "lat": 1.0, "lon": 1.0 }, { "lat": 1.0, "lon": 0.0 }
            ],
            "agents": [
                { "name": "A", "waypoints": [{ "lat": 0.2, "lon": 0.2 }, { "lat": 0.8, "lon": 0.8 }] },
                { "name": "Parked" }
            ],
            "fleet": true
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.config.tick_interval_ms, 1_200);

        let mut engine = scenario.build(EventLog::new()).unwrap();
        scenario.start(&mut engine).unwrap();
        assert!(engine.fleet_running());
        engine.run_until_idle();

        assert_eq!(engine.agent(AgentId(0)).unwrap().state(), RunState::Finished);
        assert_eq!(engine.agent(AgentId(1)).unwrap().state(), RunState::Idle);
        assert!(engine.observer.entries().iter().any(|e| e.event == EngineEvent::AllFinished));
    }

    #[test]
    fn bad_scenarios_fail_with_context() {
        assert!(Scenario::from_json("{ not json").is_err());

        // A waypoint outside the boundary is rejected while building.
        let json = r#"{
            "boundary": [
                { "lat": 0.0, "lon": 0.0 }, { "lat": 0.0, "lon": 1.0 },
                { "lat": 1.0, "lon": 1.0 }, { "lat": 1.0, "lon": 0.0 }
            ],
            "agents": [
                { "name": "A", "waypoints": [{ "lat": 0.2, "lon": 0.2 }, { "lat": 3.0, "lon": 3.0 }] }
            ]
        }"#;
        let err = Scenario::from_json(json).unwrap().build(EventLog::new()).unwrap_err();
        assert!(format!("{err:#}").contains("path for A"));
    }
}
