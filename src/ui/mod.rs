//! UI domain: main menu, HUD, transient messages, and purchase panels.

mod hud_gold;
mod main_menu;
mod message;
mod tackle_shop;
mod travel_menu;
mod vending;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_gold::{spawn_gold_display_ui, update_gold_display};
use crate::ui::main_menu::{handle_main_menu_buttons, spawn_main_menu};
use crate::ui::message::{spawn_message_banner, update_message_banner};
use crate::ui::tackle_shop::{close_tackle_shop, handle_tackle_shop_buttons, open_tackle_shop};
use crate::ui::travel_menu::{close_travel_menu, handle_travel_menu_buttons, open_travel_menu};
use crate::ui::vending::{close_vending_panel, handle_vending_buttons, open_vending_panel};

pub(crate) const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub(crate) const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub(crate) const PRESSED_BUTTON: Color = Color::srgb(0.35, 0.35, 0.35);

pub(crate) const PANEL_COLOR: Color = Color::srgb(0.12, 0.12, 0.18);
pub(crate) const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const MUTED_TEXT: Color = Color::srgb(0.6, 0.6, 0.7);
pub(crate) const GOLD_COLOR: Color = Color::srgb(0.9, 0.75, 0.2);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(
                Update,
                handle_main_menu_buttons.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_gold_display_ui, spawn_message_banner),
            )
            .add_systems(
                Update,
                (button_visuals, update_gold_display, update_message_banner),
            )
            .add_systems(
                Update,
                (
                    open_travel_menu,
                    handle_travel_menu_buttons,
                    close_travel_menu,
                    open_vending_panel,
                    handle_vending_buttons,
                    close_vending_panel,
                    open_tackle_shop,
                    handle_tackle_shop_buttons,
                    close_tackle_shop,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Shared hover/press feedback for every button.
fn button_visuals(
    mut query: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut bg) in &mut query {
        *bg = match *interaction {
            Interaction::Pressed => PRESSED_BUTTON.into(),
            Interaction::Hovered => HOVERED_BUTTON.into(),
            Interaction::None => NORMAL_BUTTON.into(),
        };
    }
}

/// Spawns a standard labeled button carrying `marker`.
pub(crate) fn spawn_button(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Component) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                width: Val::Px(180.0),
                height: Val::Px(44.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.3)),
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}
