//! Travel domain: unit tests for the trip phase machine and fares.

use bevy::prelude::*;

use super::systems::trip_cost;
use super::{TravelPhase, TravelSequencer};
use crate::content::TravelDefaults;
use crate::core::SceneId;
use crate::session::PlayerSession;

#[test]
fn test_begin_from_idle() {
    let mut sequencer = TravelSequencer::default();
    assert!(!sequencer.is_busy());

    assert!(sequencer.begin(SceneId::River, Vec3::new(220.0, -180.0, 2.0), 60.0));
    assert!(sequencer.is_busy());
    assert!(matches!(
        sequencer.phase(),
        TravelPhase::Moving {
            target: SceneId::River,
            ..
        }
    ));
}

#[test]
fn test_reentrancy_rejected() {
    let mut sequencer = TravelSequencer::default();
    assert!(sequencer.begin(SceneId::River, Vec3::ZERO, 60.0));

    // A second trip cannot start in any in-flight phase.
    assert!(!sequencer.begin(SceneId::Home, Vec3::ZERO, 60.0));

    sequencer.advance_move(5.0, 2.0);
    assert!(!sequencer.begin(SceneId::Home, Vec3::ZERO, 60.0));

    sequencer.scene_loaded(SceneId::River);
    assert!(!sequencer.begin(SceneId::Home, Vec3::ZERO, 60.0));
}

#[test]
fn test_move_interpolation() {
    let mut sequencer = TravelSequencer::default();
    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);

    // Halfway through a 2 second move the car is at half the offset.
    let (position, arrived) = sequencer.advance_move(1.0, 2.0).unwrap();
    assert_eq!(position, Vec3::new(30.0, 0.0, 0.0));
    assert!(arrived.is_none());

    // Overshooting the duration clamps to the end point and hands over
    // the target for the scene switch.
    let (position, arrived) = sequencer.advance_move(5.0, 2.0).unwrap();
    assert_eq!(position, Vec3::new(60.0, 0.0, 0.0));
    assert_eq!(arrived, Some(SceneId::River));
    assert!(matches!(
        sequencer.phase(),
        TravelPhase::AwaitingSceneLoad { .. }
    ));
}

#[test]
fn test_full_trip_walkthrough() {
    let mut sequencer = TravelSequencer::default();
    assert!(sequencer.begin(SceneId::River, Vec3::new(10.0, 0.0, 0.0), 60.0));

    while let Some((_, arrived)) = sequencer.advance_move(0.25, 2.0) {
        if arrived.is_some() {
            break;
        }
    }

    assert!(sequencer.scene_loaded(SceneId::River));
    assert!(matches!(sequencer.phase(), TravelPhase::Restoring { .. }));

    assert_eq!(sequencer.finish(), Some(SceneId::River));
    assert!(!sequencer.is_busy());
}

#[test]
fn test_wrong_scene_loaded_ignored() {
    let mut sequencer = TravelSequencer::default();
    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    sequencer.advance_move(5.0, 2.0);

    assert!(!sequencer.scene_loaded(SceneId::Home));
    assert!(matches!(
        sequencer.phase(),
        TravelPhase::AwaitingSceneLoad { .. }
    ));
}

#[test]
fn test_scene_loaded_outside_trip_ignored() {
    let mut sequencer = TravelSequencer::default();
    assert!(!sequencer.scene_loaded(SceneId::Home));
    assert!(!sequencer.is_busy());

    // While still moving, a loaded signal is premature and ignored.
    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    assert!(!sequencer.scene_loaded(SceneId::River));
    assert!(matches!(sequencer.phase(), TravelPhase::Moving { .. }));
}

#[test]
fn test_fail_clears_any_phase() {
    let mut sequencer = TravelSequencer::default();

    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    sequencer.fail();
    assert!(!sequencer.is_busy());

    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    sequencer.advance_move(5.0, 2.0);
    sequencer.fail();
    assert!(!sequencer.is_busy());

    // After a failure a fresh trip can start.
    assert!(sequencer.begin(SceneId::Home, Vec3::ZERO, 60.0));
}

#[test]
fn test_load_timeout_elapses() {
    let mut sequencer = TravelSequencer::default();
    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    sequencer.advance_move(5.0, 2.0);

    assert!(!sequencer.wait_for_load(2.0, 5.0));
    assert!(!sequencer.wait_for_load(2.0, 5.0));
    assert!(sequencer.wait_for_load(2.0, 5.0));
}

#[test]
fn test_finish_requires_restoring_phase() {
    let mut sequencer = TravelSequencer::default();
    assert_eq!(sequencer.finish(), None);

    sequencer.begin(SceneId::River, Vec3::ZERO, 60.0);
    assert_eq!(sequencer.finish(), None);
}

#[test]
fn test_trip_cost_by_origin() {
    let defaults = TravelDefaults::default();
    assert_eq!(trip_cost(SceneId::Home, &defaults), 100);
    assert_eq!(trip_cost(SceneId::River, &defaults), 0);
}

#[test]
fn test_travel_charge_scenarios() {
    let defaults = TravelDefaults::default();
    let mut sequencer = TravelSequencer::default();

    // 150 gold covers the 100 fare: charged, trip starts.
    let mut session = PlayerSession::default();
    session.add_gold(150);
    let cost = trip_cost(SceneId::Home, &defaults);
    assert!(session.can_afford(cost));
    session.deduct_gold(cost);
    assert!(sequencer.begin(SceneId::River, Vec3::ZERO, defaults.move_offset));
    assert_eq!(session.gold, 50);

    // 50 gold does not: wallet untouched, no trip starts.
    let mut broke = PlayerSession::default();
    broke.add_gold(50);
    assert!(!broke.can_afford(trip_cost(SceneId::Home, &defaults)));
    assert_eq!(broke.gold, 50);
}
