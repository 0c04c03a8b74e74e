//! Scenes domain: scene lifecycle systems.

use bevy::prelude::*;

use crate::player::Player;
use crate::session::PlayerSession;

/// Saves the player's position into the session when a scene is left, so
/// the restore step has a fallback if the next scene lacks a marker.
pub(crate) fn save_player_position(
    player: Query<&Transform, With<Player>>,
    mut session: ResMut<PlayerSession>,
) {
    let Ok(transform) = player.single() else {
        return;
    };
    session.save_position(transform.translation);
    info!("Player position saved: {}", transform.translation);
}
