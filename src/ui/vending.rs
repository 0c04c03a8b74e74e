//! UI domain: the vending machine panel.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::GameState;
use crate::interactions::{CloseVendingPanelEvent, OpenVendingPanelEvent, VendingPurchaseEvent};
use crate::ui::{GOLD_COLOR, MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, spawn_button};

/// Marker for the vending panel root
#[derive(Component)]
pub(crate) struct VendingPanelUI;

#[derive(Component)]
pub(crate) struct VendingBuyButton;

#[derive(Component)]
pub(crate) struct VendingExitButton;

pub(crate) fn open_vending_panel(
    mut open_events: MessageReader<OpenVendingPanelEvent>,
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    registry: Res<ContentRegistry>,
    existing: Query<Entity, With<VendingPanelUI>>,
) {
    if open_events.is_empty() {
        return;
    }
    open_events.clear();

    if !existing.is_empty() {
        return;
    }

    let drink_name = registry.display_name(&defaults.vending.item_id).to_string();

    commands
        .spawn((
            VendingPanelUI,
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
                        Text::new("VENDING MACHINE"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel.spawn((
                        Text::new(format!("{} - {} gold", drink_name, defaults.vending.price)),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(GOLD_COLOR),
                    ));
                    panel.spawn((
                        Text::new(format!(
                            "Doubles your fishing luck for {:.0} minutes.",
                            defaults.vending.boost_duration / 60.0
                        )),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(MUTED_TEXT),
                    ));

                    spawn_button(panel, "Buy", VendingBuyButton);
                    spawn_button(panel, "Exit", VendingExitButton);
                });
        });
}

pub(crate) fn handle_vending_buttons(
    buy_query: Query<&Interaction, (With<VendingBuyButton>, Changed<Interaction>)>,
    exit_query: Query<&Interaction, (With<VendingExitButton>, Changed<Interaction>)>,
    mut purchase_events: MessageWriter<VendingPurchaseEvent>,
    mut close_events: MessageWriter<CloseVendingPanelEvent>,
) {
    for interaction in &buy_query {
        if *interaction == Interaction::Pressed {
            purchase_events.write(VendingPurchaseEvent);
            close_events.write(CloseVendingPanelEvent);
        }
    }

    for interaction in &exit_query {
        if *interaction == Interaction::Pressed {
            close_events.write(CloseVendingPanelEvent);
        }
    }
}

pub(crate) fn close_vending_panel(
    mut close_events: MessageReader<CloseVendingPanelEvent>,
    mut commands: Commands,
    panels: Query<Entity, With<VendingPanelUI>>,
) {
    if close_events.is_empty() {
        return;
    }
    close_events.clear();

    for entity in &panels {
        commands.entity(entity).despawn();
    }
}
