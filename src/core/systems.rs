//! Core domain: boot and top-level flow systems.

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Leave Boot once the content catalogs have been inserted.
pub(crate) fn finish_boot(
    registry: Option<Res<ContentRegistry>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if registry.is_some() {
        game_state.set(GameState::MainMenu);
    }
}

/// Escape returns to the main menu without resetting the session.
pub(crate) fn return_to_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Returning to main menu");
        game_state.set(GameState::MainMenu);
    }
}
