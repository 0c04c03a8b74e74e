//! UI domain: gold and equipped-rod HUD display.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::session::{GoldChangedEvent, PlayerSession};
use crate::ui::{GOLD_COLOR, MUTED_TEXT};

const HUD_PADDING: f32 = 12.0;

/// Marker for the gold display UI container
#[derive(Component)]
pub(crate) struct GoldDisplayUI;

/// Marker for the gold amount text
#[derive(Component)]
pub(crate) struct GoldAmountText;

/// Marker for the equipped rod text
#[derive(Component)]
pub(crate) struct EquippedRodText;

pub(crate) fn spawn_gold_display_ui(mut commands: Commands) {
    commands
        .spawn((
            GoldDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|parent| {
            parent
                .spawn((Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                },))
                .with_children(|row| {
                    // Coin icon (gold square)
                    row.spawn((
                        Node {
                            width: Val::Px(16.0),
                            height: Val::Px(16.0),
                            ..default()
                        },
                        BackgroundColor(GOLD_COLOR),
                    ));
                    row.spawn((
                        GoldAmountText,
                        Text::new("0"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(GOLD_COLOR),
                    ));
                });

            parent.spawn((
                EquippedRodText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));
        });
}

pub(crate) fn update_gold_display(
    mut gold_events: MessageReader<GoldChangedEvent>,
    session: Res<PlayerSession>,
    registry: Res<ContentRegistry>,
    mut gold_query: Query<&mut Text, (With<GoldAmountText>, Without<EquippedRodText>)>,
    mut rod_query: Query<&mut Text, (With<EquippedRodText>, Without<GoldAmountText>)>,
) {
    // The gold line follows wallet notifications.
    for event in gold_events.read() {
        for mut text in &mut gold_query {
            **text = format!("{}", event.balance);
        }
    }

    // The rod line follows the session directly.
    if session.is_changed() {
        let rod_name = registry
            .rod(session.equipped_rod)
            .map(|rod| rod.name.as_str())
            .unwrap_or("none");
        for mut text in &mut rod_query {
            **text = format!("Rod: {}", rod_name);
        }
    }
}
