//! UI domain: the travel confirmation panel.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::core::{GameState, SceneId};
use crate::travel::{CloseTravelMenuEvent, OpenTravelMenuEvent, TravelConfirmedEvent};
use crate::ui::{MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, spawn_button};

/// Marker for the travel menu root
#[derive(Component)]
pub(crate) struct TravelMenuUI;

#[derive(Component)]
pub(crate) struct TravelConfirmButton;

#[derive(Component)]
pub(crate) struct TravelCancelButton;

pub(crate) fn open_travel_menu(
    mut open_events: MessageReader<OpenTravelMenuEvent>,
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    existing: Query<Entity, With<TravelMenuUI>>,
) {
    if open_events.is_empty() {
        return;
    }
    open_events.clear();

    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            TravelMenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            GlobalZIndex(100),
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(14.0),
                        padding: UiRect::all(Val::Px(24.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Drive to the river?"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel.spawn((
                        Text::new(format!("Fare: {} gold", defaults.travel.gold_cost)),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(MUTED_TEXT),
                    ));

                    spawn_button(panel, "Travel", TravelConfirmButton);
                    spawn_button(panel, "Cancel", TravelCancelButton);
                });
        });
}

pub(crate) fn handle_travel_menu_buttons(
    confirm_query: Query<
        &Interaction,
        (With<TravelConfirmButton>, Changed<Interaction>),
    >,
    cancel_query: Query<&Interaction, (With<TravelCancelButton>, Changed<Interaction>)>,
    mut travel_events: MessageWriter<TravelConfirmedEvent>,
    mut close_events: MessageWriter<CloseTravelMenuEvent>,
) {
    for interaction in &confirm_query {
        if *interaction == Interaction::Pressed {
            travel_events.write(TravelConfirmedEvent {
                target: SceneId::River.name().to_string(),
            });
            close_events.write(CloseTravelMenuEvent);
        }
    }

    for interaction in &cancel_query {
        if *interaction == Interaction::Pressed {
            close_events.write(CloseTravelMenuEvent);
        }
    }
}

pub(crate) fn close_travel_menu(
    mut close_events: MessageReader<CloseTravelMenuEvent>,
    mut commands: Commands,
    panels: Query<Entity, With<TravelMenuUI>>,
) {
    if close_events.is_empty() {
        return;
    }
    close_events.clear();

    for entity in &panels {
        commands.entity(entity).despawn();
    }
}
