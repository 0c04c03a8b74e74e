//! Player domain: actor marker, physics layers, and locomotion tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static scenery edges (walls, water).
    Scenery,
    Player,
    /// Interaction sensors (car, vending machine, tackle shop).
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Top-down locomotion tuning.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning {
    pub max_speed: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self { max_speed: 180.0 }
    }
}
