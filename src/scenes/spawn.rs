//! Scenes domain: scene furniture spawning.
//!
//! Each scene is rebuilt from scratch on entry and torn down by
//! `DespawnOnExit` when the scene switches.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::SceneId;
use crate::interactions::{InteractionKind, InteractionZone};
use crate::player::GameLayer;
use crate::scenes::components::{Car, Scenery, SpawnMarker, TackleShop, VendingMachine};
use crate::scenes::events::SceneLoadedEvent;
use crate::session::PlayerSession;

const HOME_SPAWN: Vec3 = Vec3::new(0.0, -60.0, 0.0);
const RIVER_SPAWN: Vec3 = Vec3::new(-160.0, -100.0, 0.0);

/// Play area half-extents shared by both scenes.
const BOUNDS: Vec2 = Vec2::new(600.0, 340.0);

pub(crate) fn spawn_home_scene(
    mut commands: Commands,
    mut session: ResMut<PlayerSession>,
    mut loaded_events: MessageWriter<SceneLoadedEvent>,
) {
    info!("Spawning home scene");

    let ground_color = Color::srgb(0.42, 0.48, 0.35);
    let road_color = Color::srgb(0.35, 0.33, 0.3);

    // Ground backdrop
    commands.spawn((
        Sprite {
            color: ground_color,
            custom_size: Some(BOUNDS * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -10.0),
        DespawnOnExit(SceneId::Home),
    ));

    // Road strip the car sits on
    commands.spawn((
        Sprite {
            color: road_color,
            custom_size: Some(Vec2::new(BOUNDS.x * 2.0, 90.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -180.0, -9.0),
        DespawnOnExit(SceneId::Home),
    ));

    spawn_bounds(&mut commands, SceneId::Home);
    spawn_marker(&mut commands, &mut session, SceneId::Home, HOME_SPAWN);
    spawn_car(&mut commands, SceneId::Home, Vec3::new(220.0, -180.0, 2.0));

    // Vending machine by the shop wall
    commands.spawn((
        VendingMachine,
        Sprite {
            color: Color::srgb(0.75, 0.2, 0.2),
            custom_size: Some(Vec2::new(34.0, 52.0)),
            ..default()
        },
        Transform::from_xyz(-220.0, 90.0, 1.0),
        DespawnOnExit(SceneId::Home),
    ));
    spawn_zone(
        &mut commands,
        SceneId::Home,
        InteractionKind::VendingMachine,
        Vec3::new(-220.0, 90.0, 0.0),
        Vec2::new(90.0, 110.0),
    );

    // Tackle shop counter
    commands.spawn((
        TackleShop,
        Sprite {
            color: Color::srgb(0.5, 0.35, 0.2),
            custom_size: Some(Vec2::new(90.0, 56.0)),
            ..default()
        },
        Transform::from_xyz(-60.0, 150.0, 1.0),
        DespawnOnExit(SceneId::Home),
    ));
    spawn_zone(
        &mut commands,
        SceneId::Home,
        InteractionKind::TackleShop,
        Vec3::new(-60.0, 150.0, 0.0),
        Vec2::new(150.0, 120.0),
    );

    loaded_events.write(SceneLoadedEvent {
        scene: SceneId::Home,
    });
}

pub(crate) fn spawn_river_scene(
    mut commands: Commands,
    mut session: ResMut<PlayerSession>,
    mut loaded_events: MessageWriter<SceneLoadedEvent>,
) {
    info!("Spawning river scene");

    let bank_color = Color::srgb(0.36, 0.44, 0.3);
    let water_color = Color::srgb(0.2, 0.35, 0.55);

    // Bank backdrop
    commands.spawn((
        Sprite {
            color: bank_color,
            custom_size: Some(BOUNDS * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -10.0),
        DespawnOnExit(SceneId::River),
    ));

    // The river itself, walled off so the player stays on the bank.
    commands.spawn((
        Scenery,
        Sprite {
            color: water_color,
            custom_size: Some(Vec2::new(BOUNDS.x * 2.0, 180.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 220.0, -9.0),
        RigidBody::Static,
        Collider::rectangle(BOUNDS.x * 2.0, 180.0),
        CollisionLayers::new(GameLayer::Scenery, [GameLayer::Player]),
        DespawnOnExit(SceneId::River),
    ));

    spawn_bounds(&mut commands, SceneId::River);
    spawn_marker(&mut commands, &mut session, SceneId::River, RIVER_SPAWN);
    spawn_car(&mut commands, SceneId::River, Vec3::new(-260.0, -200.0, 2.0));

    loaded_events.write(SceneLoadedEvent {
        scene: SceneId::River,
    });
}

fn spawn_car(commands: &mut Commands, scene: SceneId, position: Vec3) {
    commands.spawn((
        Car,
        Sprite {
            color: Color::srgb(0.85, 0.65, 0.2),
            custom_size: Some(Vec2::new(72.0, 36.0)),
            ..default()
        },
        Transform::from_translation(position),
        DespawnOnExit(scene),
    ));
    spawn_zone(
        commands,
        scene,
        InteractionKind::Car,
        position,
        Vec2::new(130.0, 90.0),
    );
}

/// Places the spawn marker and records it in the session's spawn-point
/// map so later lookups for this scene agree with the live marker.
fn spawn_marker(
    commands: &mut Commands,
    session: &mut PlayerSession,
    scene: SceneId,
    position: Vec3,
) {
    session.set_spawn_point(scene.name(), position);
    commands.spawn((
        SpawnMarker,
        Transform::from_translation(position),
        DespawnOnExit(scene),
    ));
}

fn spawn_zone(
    commands: &mut Commands,
    scene: SceneId,
    kind: InteractionKind,
    position: Vec3,
    size: Vec2,
) {
    commands.spawn((
        InteractionZone { kind },
        Transform::from_translation(position),
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        DespawnOnExit(scene),
    ));
}

fn spawn_bounds(commands: &mut Commands, scene: SceneId) {
    let wall_color = Color::srgb(0.2, 0.22, 0.2);
    let walls = [
        (Vec3::new(0.0, BOUNDS.y, 0.0), Vec2::new(BOUNDS.x * 2.0, 20.0)),
        (
            Vec3::new(0.0, -BOUNDS.y, 0.0),
            Vec2::new(BOUNDS.x * 2.0, 20.0),
        ),
        (
            Vec3::new(-BOUNDS.x, 0.0, 0.0),
            Vec2::new(20.0, BOUNDS.y * 2.0),
        ),
        (
            Vec3::new(BOUNDS.x, 0.0, 0.0),
            Vec2::new(20.0, BOUNDS.y * 2.0),
        ),
    ];

    for (position, size) in walls {
        commands.spawn((
            Scenery,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Scenery, [GameLayer::Player]),
            DespawnOnExit(scene),
        ));
    }
}
