//! Scenes domain: scene furniture, spawn markers, and the loaded signal.

mod components;
mod events;
mod spawn;
mod systems;

pub use components::{Car, Scenery, SpawnMarker, TackleShop, VendingMachine};
pub use events::SceneLoadedEvent;

use bevy::prelude::*;

use crate::core::SceneId;
use crate::scenes::spawn::{spawn_home_scene, spawn_river_scene};
use crate::scenes::systems::save_player_position;

pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SceneLoadedEvent>()
            .add_systems(OnEnter(SceneId::Home), spawn_home_scene)
            .add_systems(OnEnter(SceneId::River), spawn_river_scene)
            .add_systems(OnExit(SceneId::Home), save_player_position)
            .add_systems(OnExit(SceneId::River), save_player_position);
    }
}
