//! UI domain: the tackle shop panel.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::interactions::{BuyRodEvent, CloseTackleShopEvent, OpenTackleShopEvent};
use crate::session::PlayerSession;
use crate::ui::{GOLD_COLOR, MUTED_TEXT, NORMAL_BUTTON, PANEL_COLOR, TEXT_COLOR, spawn_button};

/// Marker for the tackle shop root
#[derive(Component)]
pub(crate) struct TackleShopUI;

/// Buy button for the rod at `index` in the catalog.
#[derive(Component)]
pub(crate) struct RodBuyButton {
    pub index: usize,
}

#[derive(Component)]
pub(crate) struct TackleShopCloseButton;

pub(crate) fn open_tackle_shop(
    mut open_events: MessageReader<OpenTackleShopEvent>,
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    session: Res<PlayerSession>,
    existing: Query<Entity, With<TackleShopUI>>,
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
            TackleShopUI,
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
                        Text::new("TACKLE SHOP"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel.spawn((
                        Text::new(format!("{} gold on hand", session.gold)),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(GOLD_COLOR),
                    ));

                    for (index, rod) in registry.rods.iter().enumerate() {
                        let owned = session.has_item(&rod.id);
                        let equipped = session.equipped_rod == index;
                        spawn_rod_row(panel, index, &rod.name, rod.price, owned, equipped);
                    }

                    spawn_button(panel, "Close", TackleShopCloseButton);
                });
        });
}

fn spawn_rod_row(
    panel: &mut ChildSpawnerCommands,
    index: usize,
    name: &str,
    price: u32,
    owned: bool,
    equipped: bool,
) {
    let status = if equipped {
        " (equipped)"
    } else if owned {
        " (owned)"
    } else {
        ""
    };

    panel
        .spawn((
            RodBuyButton { index },
            Button,
            Node {
                width: Val::Px(320.0),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|row| {
            row.spawn((
                Text::new(format!("{}{}", name, status)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(if owned { MUTED_TEXT } else { TEXT_COLOR }),
            ));
            row.spawn((
                Text::new(format!("{} g", price)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(GOLD_COLOR),
            ));
        });
}

pub(crate) fn handle_tackle_shop_buttons(
    rod_query: Query<(&Interaction, &RodBuyButton), Changed<Interaction>>,
    close_query: Query<
        &Interaction,
        (With<TackleShopCloseButton>, Changed<Interaction>),
    >,
    mut buy_events: MessageWriter<BuyRodEvent>,
    mut close_events: MessageWriter<CloseTackleShopEvent>,
) {
    for (interaction, button) in &rod_query {
        if *interaction == Interaction::Pressed {
            buy_events.write(BuyRodEvent {
                index: button.index,
            });
            close_events.write(CloseTackleShopEvent);
        }
    }

    for interaction in &close_query {
        if *interaction == Interaction::Pressed {
            close_events.write(CloseTackleShopEvent);
        }
    }
}

pub(crate) fn close_tackle_shop(
    mut close_events: MessageReader<CloseTackleShopEvent>,
    mut commands: Commands,
    panels: Query<Entity, With<TackleShopUI>>,
) {
    if close_events.is_empty() {
        return;
    }
    close_events.clear();

    for entity in &panels {
        commands.entity(entity).despawn();
    }
}
