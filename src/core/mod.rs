//! Core domain: app states, camera, and top-level flow.

mod state;
mod systems;

pub use state::{GameState, SceneId};

use bevy::prelude::*;

use crate::core::systems::{finish_boot, return_to_menu, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_state::<SceneId>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, return_to_menu.run_if(in_state(GameState::Playing)));
    }
}
