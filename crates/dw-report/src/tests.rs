//! Unit tests for dw-report.

use std::sync::Arc;

use dw_core::{AgentId, Vec2};
use dw_map::{MapEngine, Plane, Portals, Torus, TrajectoryPoint};
use dw_policy::{PolicyKind, ScriptedPolicy};
use dw_sim::{WalkBuilder, WalkConfig};

use crate::{DisplacementSummary, LogObserver, Segment, agent_rows, path_segments};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scripted(name: &str) -> Arc<ScriptedPolicy> {
    Arc::new(ScriptedPolicy::new(name, Vec::new()))
}

/// Two "Ann" walkers at distances 5 and 1, one "Bo" walker at distance 10.
fn plane_three() -> MapEngine<Plane> {
    let mut map = MapEngine::new(Plane::new());
    let a0 = map.register_policy(scripted("Ann"), None);
    let b0 = map.register_policy(scripted("Bo"), None);
    let a1 = map.register_policy(scripted("Ann"), None);
    map.apply_step(a0, Vec2::new(3.0, 4.0)).unwrap();
    map.apply_step(b0, Vec2::new(-6.0, 8.0)).unwrap();
    map.apply_step(a1, Vec2::new(0.0, 1.0)).unwrap();
    map
}

fn pt(x: f64, y: f64, jump: bool) -> TrajectoryPoint {
    TrajectoryPoint { pos: Vec2::new(x, y), jump }
}

// ── DisplacementSummary ───────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn groups_by_name_in_registration_order() {
        let s = DisplacementSummary::from_map(&plane_three());
        let names: Vec<&str> = s.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bo"]);

        let ann = s.group("Ann").unwrap();
        assert_eq!(ann.agents, 2);
        assert!((ann.mean_distance - 3.0).abs() < 1e-12);
        assert!((s.group("Bo").unwrap().mean_distance - 10.0).abs() < 1e-12);
        assert!((s.overall.unwrap() - 16.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn display_name_overrides_policy_name() {
        let mut map = MapEngine::new(Plane::new());
        let a = map.register(PolicyKind::FourDirections, None);
        let b = map.register(PolicyKind::FourDirections, Some("Night shift".into()));
        map.apply_step(a, Vec2::new(1.0, 0.0)).unwrap();
        map.apply_step(b, Vec2::new(0.0, 2.0)).unwrap();

        let s = DisplacementSummary::from_map(&map);
        assert_eq!(s.groups.len(), 2);
        assert_eq!(s.groups[0].name, "4 Directions");
        assert_eq!(s.groups[1].name, "Night shift");
    }

    #[test]
    fn empty_map_has_no_overall_mean() {
        let map = MapEngine::new(Plane::new());
        let s = DisplacementSummary::from_map(&map);
        assert!(s.groups.is_empty());
        assert_eq!(s.overall, None);
        assert!(s.to_string().ends_with("Average distance from starting point: n/a."));
    }

    #[test]
    fn torus_uses_wrapped_position() {
        let mut map = MapEngine::new(Torus::square(10.0).unwrap());
        let a = map.register_policy(scripted("w"), None);
        // (5,5) + (6,0) = (11,5) wraps to (1,5).
        map.apply_step(a, Vec2::new(6.0, 0.0)).unwrap();
        let s = DisplacementSummary::from_map(&map);
        assert!((s.overall.unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(s.start_point, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn display_lists_map_groups_and_means() {
        let text = DisplacementSummary::from_map(&plane_three()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name of the map: Plane.");
        assert_eq!(lines[1], "Names of the drunks in the map: Ann, Bo.");
        assert_eq!(lines[2], "Average distance of Ann: 3.");
        assert_eq!(lines[3], "Average distance of Bo: 10.");
        assert!(lines[4].starts_with("Average distance from starting point: 5.33"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn agent_rows_follow_registration_order() {
        let rows = agent_rows(&plane_three());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].agent_id, AgentId(1));
        assert_eq!(rows[1].name, "Bo");
        assert_eq!(rows[1].position, Vec2::new(-6.0, 8.0));
        assert!((rows[1].distance - 10.0).abs() < 1e-12);
        assert_eq!(rows[0].steps, 1);
        assert_eq!(rows[0].jumps, 0);
    }
}

// ── path_segments ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod segments {
    use super::*;

    #[test]
    fn single_point_has_no_segments() {
        assert!(path_segments(&[pt(0.0, 0.0, false)], false).is_empty());
        assert!(path_segments(&[], true).is_empty());
    }

    #[test]
    fn jump_segments_dropped_unless_requested() {
        let traj = [
            pt(0.0, 0.0, false),
            pt(1.0, 0.0, false),
            pt(9.0, 0.0, true),
            pt(8.0, 0.0, false),
        ];
        let kept = path_segments(&traj, false);
        assert_eq!(
            kept,
            [
                Segment { from: Vec2::new(0.0, 0.0), to: Vec2::new(1.0, 0.0) },
                Segment { from: Vec2::new(9.0, 0.0), to: Vec2::new(8.0, 0.0) },
            ]
        );
        assert_eq!(path_segments(&traj, true).len(), 3);
    }

    #[test]
    fn torus_wrap_breaks_the_path() {
        let mut map = MapEngine::new(Torus::square(10.0).unwrap());
        let a = map.register_policy(scripted("w"), None);
        map.apply_step(a, Vec2::new(1.0, 0.0)).unwrap();
        map.apply_step(a, Vec2::new(5.0, 0.0)).unwrap(); // 6 + 5 = 11 -> 1
        map.apply_step(a, Vec2::new(1.0, 0.0)).unwrap();

        let traj = map.trajectory(a).unwrap();
        assert_eq!(path_segments(traj, true).len(), 3);
        assert_eq!(path_segments(traj, false).len(), 2);
    }

    #[test]
    fn portal_teleport_breaks_the_path() {
        let portals = Portals::new(vec![Vec2::new(0.0, 1.0)], vec![Vec2::new(50.0, 50.0)]).unwrap();
        let mut map = MapEngine::new(portals);
        let a = map.register_policy(scripted("w"), None);
        // (0,0) -> (0,2) passes the entrance on the y axis.
        map.apply_step(a, Vec2::new(0.0, 2.0)).unwrap();
        let traj = map.trajectory(a).unwrap();
        assert!(traj[1].jump);
        assert!(path_segments(traj, false).is_empty());
    }
}

// ── LogObserver ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn counts_steps_and_jumps() {
        let mut walk = WalkBuilder::new(WalkConfig::new(3, 120), Torus::square(4.0).unwrap())
            .agents(PolicyKind::AnyDirectionAndLength, 4)
            .build()
            .unwrap();
        let mut obs = LogObserver::new(50);
        walk.run(&mut obs).unwrap();

        let recorded: usize = walk.map().store().iter().map(|(_, s)| s.jumps()).sum();
        assert_eq!(obs.steps(), 120);
        assert_eq!(obs.total_jumps(), recorded);
        assert!(recorded > 0);
    }

    #[test]
    fn zero_interval_still_tracks_totals() {
        let mut walk = WalkBuilder::new(WalkConfig::new(1, 5), Plane::new())
            .agents(PolicyKind::FourDirections, 2)
            .build()
            .unwrap();
        let mut obs = LogObserver::new(0);
        walk.run(&mut obs).unwrap();
        assert_eq!(obs.steps(), 5);
        assert_eq!(obs.total_jumps(), 0);
    }
}
