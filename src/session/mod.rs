//! Session domain: cross-scene player state, expiry ticks, and change
//! notifications.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{GoldChangedEvent, VolumeChangedEvent};
pub use resources::{FishingBoost, PlayerSession, TransientMessage};

use bevy::prelude::*;

use crate::core::GameState;
use crate::session::systems::{grant_starting_gold, tick_fishing_boost, tick_transient_message};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerSession>()
            .init_resource::<FishingBoost>()
            .init_resource::<TransientMessage>()
            .add_message::<GoldChangedEvent>()
            .add_message::<VolumeChangedEvent>()
            .add_systems(OnEnter(GameState::Playing), grant_starting_gold)
            .add_systems(Update, (tick_fishing_boost, tick_transient_message));
    }
}
