//! Player domain: the controlled actor and its locomotion.

mod components;
mod systems;

pub use components::{GameLayer, LocomotionTuning, Player};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::systems::{apply_locomotion, spawn_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                apply_locomotion.run_if(in_state(GameState::Playing)),
            );
    }
}
