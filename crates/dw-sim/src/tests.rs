//! Unit tests for dw-sim.

use std::sync::Arc;

use dw_core::{AgentId, Vec2};
use dw_map::{DomainSpec, Plane, Torus, TrajectoryPoint, TrajectoryStore};
use dw_policy::{PolicyKind, ScriptedPolicy};

use crate::{NoopObserver, SimError, Walk, WalkBuilder, WalkConfig, WalkObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(steps: u64) -> WalkConfig {
    WalkConfig { seed: 42, steps, snapshot_interval_steps: 0 }
}

fn mixed_torus(seed: u64) -> Walk<dw_map::Domain> {
    let cfg = WalkConfig { seed, ..config(200) };
    WalkBuilder::from_spec(cfg, DomainSpec::square_torus(15.0))
        .unwrap()
        .agents(PolicyKind::FourDirections, 3)
        .agents(PolicyKind::FourDirectionsBiased, 2)
        .agents(PolicyKind::AnyDirection, 2)
        .agents(PolicyKind::AnyDirectionAndLength, 2)
        .build()
        .unwrap()
}

fn all_trajectories(store: &TrajectoryStore) -> Vec<Vec<TrajectoryPoint>> {
    store.iter().map(|(_, s)| s.trajectory().to_vec()).collect()
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<u64>,
    ends:      Vec<(u64, usize)>,
    snapshots: Vec<(u64, usize)>,
    finished:  Option<u64>,
}

impl WalkObserver for Recorder {
    fn on_step_start(&mut self, step: u64) {
        self.starts.push(step);
    }

    fn on_step_end(&mut self, step: u64, jumps: usize) {
        self.ends.push((step, jumps));
    }

    fn on_snapshot(&mut self, step: u64, store: &TrajectoryStore) {
        self.snapshots.push((step, store.len()));
    }

    fn on_walk_end(&mut self, steps: u64, _store: &TrajectoryStore) {
        self.finished = Some(steps);
    }
}

// ── WalkBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn registers_cohorts_in_order() {
        let walk = WalkBuilder::new(config(1), Plane::new())
            .agents(PolicyKind::FourDirections, 2)
            .named_agents(PolicyKind::AnyDirection, 1, "Stumbler")
            .build()
            .unwrap();
        let names: Vec<_> = walk.map().agents().map(|a| a.display_name).collect();
        assert_eq!(names, ["4 Directions", "4 Directions", "Stumbler"]);
        assert_eq!(walk.map().len(), 3);
        assert_eq!(walk.steps_done(), 0);
    }

    #[test]
    fn bad_spec_is_construction_error() {
        let err = WalkBuilder::from_spec(config(1), DomainSpec::Torus { size: Vec2::new(-1.0, 3.0) })
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Construction(_)));
        assert!(err.to_string().starts_with("invalid map:"));
    }

    #[test]
    fn empty_walk_runs() {
        let mut walk = WalkBuilder::new(config(5), Plane::new()).build().unwrap();
        walk.run(&mut NoopObserver).unwrap();
        assert_eq!(walk.steps_done(), 5);
        assert!(walk.map().is_empty());
    }
}

// ── Walk ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walk {
    use super::*;

    #[test]
    fn run_takes_configured_steps() {
        let mut walk = mixed_torus(1);
        walk.run(&mut NoopObserver).unwrap();
        assert_eq!(walk.steps_done(), 200);
        for (_, state) in walk.map().store().iter() {
            assert_eq!(state.trajectory().len(), 201);
            assert_eq!(state.steps(), 200);
        }
    }

    #[test]
    fn same_seed_identical_trajectories() {
        let mut a = mixed_torus(9);
        let mut b = mixed_torus(9);
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(all_trajectories(a.map().store()), all_trajectories(b.map().store()));
    }

    #[test]
    fn different_seed_differs() {
        let mut a = mixed_torus(9);
        let mut b = mixed_torus(10);
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_ne!(all_trajectories(a.map().store()), all_trajectories(b.map().store()));
    }

    #[test]
    fn incremental_stepping_matches_full_run() {
        let mut full = mixed_torus(3);
        full.run(&mut NoopObserver).unwrap();

        let mut parts = mixed_torus(3);
        parts.run_steps(50, &mut NoopObserver).unwrap();
        parts.run_steps(150, &mut NoopObserver).unwrap();
        assert_eq!(parts.steps_done(), 200);
        assert_eq!(all_trajectories(full.map().store()), all_trajectories(parts.map().store()));
    }

    #[test]
    fn observer_hooks_fire() {
        let cfg = WalkConfig { seed: 1, steps: 10, snapshot_interval_steps: 4 };
        let mut walk = WalkBuilder::new(cfg, Torus::square(3.0).unwrap())
            .agents(PolicyKind::FourDirections, 4)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        walk.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..10).collect::<Vec<_>>());
        assert_eq!(rec.ends.len(), 10);
        assert_eq!(rec.snapshots, [(0, 4), (4, 4), (8, 4)]);
        assert_eq!(rec.finished, Some(10));

        let reported: usize = rec.ends.iter().map(|&(_, j)| j).sum();
        let recorded: usize = walk.map().store().iter().map(|(_, s)| s.jumps()).sum();
        assert_eq!(reported, recorded);
    }

    #[test]
    fn movement_error_stops_walk_and_names_agent() {
        let script = Arc::new(ScriptedPolicy::new("short", vec![Vec2::new(0.0, 1.0)]));
        let mut walk = WalkBuilder::new(config(3), Plane::new())
            .agents(PolicyKind::FourDirections, 1)
            .policy(script, 1, None)
            .build()
            .unwrap();

        let err = walk.run(&mut NoopObserver).unwrap_err();
        match &err {
            SimError::Step { step, source } => {
                assert_eq!(*step, 1);
                assert_eq!(source.agent(), Some(AgentId(1)));
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(err.to_string().contains("agent 1"));
        // step 0 fully applied, step 1 stopped at the broken walker
        assert_eq!(walk.steps_done(), 1);
        assert_eq!(walk.map().trajectory(AgentId(0)).unwrap().len(), 3);
        assert_eq!(walk.map().trajectory(AgentId(1)).unwrap().len(), 2);
    }

    #[test]
    fn walker_added_mid_walk_moves_from_next_step() {
        let mut walk = WalkBuilder::new(config(5), Plane::new())
            .agents(PolicyKind::FourDirections, 1)
            .build()
            .unwrap();
        walk.run_steps(2, &mut NoopObserver).unwrap();

        let late = walk.register(PolicyKind::AnyDirection, Some("Late".into()));
        assert_eq!(late, AgentId(1));
        walk.run(&mut NoopObserver).unwrap();

        assert_eq!(walk.steps_done(), 5);
        assert_eq!(walk.map().trajectory(AgentId(0)).unwrap().len(), 6);
        // start point plus steps 2, 3 and 4
        assert_eq!(walk.map().trajectory(late).unwrap().len(), 4);
    }

    #[test]
    fn into_map_keeps_trajectories() {
        let mut walk = mixed_torus(5);
        walk.run_steps(7, &mut NoopObserver).unwrap();
        let map = walk.into_map();
        assert_eq!(map.trajectory(AgentId(0)).unwrap().len(), 8);
    }
}
