//! Player domain: spawning and top-down locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::{GameState, SceneId};
use crate::player::components::{GameLayer, LocomotionTuning, Player};
use crate::session::PlayerSession;
use crate::travel::TravelSequencer;

pub(crate) fn spawn_player(
    mut commands: Commands,
    existing: Query<Entity, With<Player>>,
    scene: Res<State<SceneId>>,
    session: Res<PlayerSession>,
) {
    if !existing.is_empty() {
        return;
    }

    // Pick up where the player last stood, or at the scene's spawn point
    // on a fresh session.
    let position = if session.saved_position == Vec3::ZERO {
        session.spawn_point(scene.get().name())
    } else {
        session.saved_position
    };

    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.85, 0.78, 0.55),
            custom_size: Some(Vec2::new(22.0, 30.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 5.0),
        RigidBody::Dynamic,
        Collider::rectangle(22.0, 30.0),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        GravityScale(0.0),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Player, [GameLayer::Scenery, GameLayer::Sensor]),
        DespawnOnExit(GameState::Playing),
    ));
    info!("Player spawned at {}", position);
}

pub(crate) fn apply_locomotion(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<LocomotionTuning>,
    sequencer: Res<TravelSequencer>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut velocity) = query.single_mut() else {
        return;
    };

    // No walking while the car sequence owns the player.
    if sequencer.is_busy() {
        velocity.0 = Vec2::ZERO;
        return;
    }

    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        axis.y += 1.0;
    }

    velocity.0 = axis.normalize_or_zero() * tuning.max_speed;
}
