//! Travel domain: the scene-transition phase machine.

use bevy::prelude::*;

use crate::core::SceneId;

/// Phases of a car trip. A trip only moves forward through these, and
/// every failure path lands back on `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TravelPhase {
    #[default]
    Idle,
    /// Car is animating toward its departure offset.
    Moving {
        target: SceneId,
        start: Vec3,
        end: Vec3,
        elapsed: f32,
    },
    /// Scene switch requested; waiting for the loaded signal.
    AwaitingSceneLoad { target: SceneId, waited: f32 },
    /// Scene is up; the player still needs repositioning.
    Restoring { target: SceneId },
}

/// Drives the hide-player, move-car, switch-scene, restore-player flow.
/// One trip at a time: `begin` rejects re-entry while a trip is running.
#[derive(Resource, Debug, Default)]
pub struct TravelSequencer {
    phase: TravelPhase,
}

impl TravelSequencer {
    pub fn phase(&self) -> &TravelPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != TravelPhase::Idle
    }

    /// Starts a trip from Idle. Returns false while another trip is in
    /// flight.
    pub fn begin(&mut self, target: SceneId, car_start: Vec3, offset: f32) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = TravelPhase::Moving {
            target,
            start: car_start,
            end: car_start + Vec3::new(offset, 0.0, 0.0),
            elapsed: 0.0,
        };
        true
    }

    /// Advances the car animation by `dt`. Returns the interpolated car
    /// position, plus the target scene once the move completes and the
    /// machine starts waiting for the load.
    pub fn advance_move(&mut self, dt: f32, duration: f32) -> Option<(Vec3, Option<SceneId>)> {
        let TravelPhase::Moving {
            target,
            start,
            end,
            elapsed,
        } = &mut self.phase
        else {
            return None;
        };

        *elapsed += dt;
        let t = (*elapsed / duration.max(f32::EPSILON)).clamp(0.0, 1.0);
        let position = start.lerp(*end, t);

        if t >= 1.0 {
            let target = *target;
            self.phase = TravelPhase::AwaitingSceneLoad {
                target,
                waited: 0.0,
            };
            return Some((position, Some(target)));
        }
        Some((position, None))
    }

    /// Accepts a scene-loaded signal only for the trip's own target while
    /// the machine is waiting for it. Signals for any other scene, or
    /// outside a trip, are ignored.
    pub fn scene_loaded(&mut self, scene: SceneId) -> bool {
        match self.phase {
            TravelPhase::AwaitingSceneLoad { target, .. } if target == scene => {
                self.phase = TravelPhase::Restoring { target };
                true
            }
            _ => false,
        }
    }

    /// Accumulates time spent waiting for the scene load. Returns true
    /// once the wait exceeds `timeout` and the trip should be failed.
    pub fn wait_for_load(&mut self, dt: f32, timeout: f32) -> bool {
        let TravelPhase::AwaitingSceneLoad { waited, .. } = &mut self.phase else {
            return false;
        };
        *waited += dt;
        *waited >= timeout
    }

    /// Completes the restore step, returning the machine to Idle.
    pub fn finish(&mut self) -> Option<SceneId> {
        match self.phase {
            TravelPhase::Restoring { target } => {
                self.phase = TravelPhase::Idle;
                Some(target)
            }
            _ => None,
        }
    }

    /// Aborts the trip from any phase. The machine is never left busy.
    pub fn fail(&mut self) {
        self.phase = TravelPhase::Idle;
    }
}
