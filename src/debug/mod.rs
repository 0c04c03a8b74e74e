//! Dev tools for fast iteration: a session info overlay and cheat keys.
//!
//! Compiled only with the `dev-tools` feature.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::SceneId;
use crate::session::{FishingBoost, GoldChangedEvent, PlayerSession};
use crate::travel::TravelSequencer;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay root
#[derive(Component)]
struct DebugOverlay;

/// Marker for the overlay text
#[derive(Component)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, grant_gold, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            GlobalZIndex(150),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.9, 0.6)),
            ));
        });
}

/// F3 toggles the overlay.
fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    state.overlay_visible = !state.overlay_visible;
    for mut visibility in &mut overlay {
        *visibility = if state.overlay_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// G grants gold through the same wallet path as gameplay.
fn grant_gold(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<PlayerSession>,
    mut gold_events: MessageWriter<GoldChangedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyG) {
        return;
    }
    let balance = session.add_gold(100);
    gold_events.write(GoldChangedEvent { balance });
    info!("[DEBUG] Granted 100 gold, balance {}", balance);
}

fn update_overlay(
    state: Res<DebugState>,
    session: Res<PlayerSession>,
    boost: Res<FishingBoost>,
    registry: Res<ContentRegistry>,
    scene: Res<State<SceneId>>,
    sequencer: Res<TravelSequencer>,
    mut text_query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.overlay_visible {
        return;
    }

    let rod_name = registry
        .rod(session.equipped_rod)
        .map(|rod| rod.name.as_str())
        .unwrap_or("none");
    let boost_line = if boost.is_active() {
        format!(
            "{}x ({:.0}s left)",
            boost.current_multiplier(),
            boost.time_left
        )
    } else {
        "inactive".to_string()
    };

    for mut text in &mut text_query {
        **text = format!(
            "scene: {}\ngold: {}\nrod: {}\nboost: {}\nitems: {}\ntravel: {}",
            scene.get().name(),
            session.gold,
            rod_name,
            boost_line,
            session.inventory.len(),
            if sequencer.is_busy() { "busy" } else { "idle" },
        );
    }
}
