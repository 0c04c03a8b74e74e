//! UI domain: the main menu.

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::{MUTED_TEXT, TEXT_COLOR, spawn_button};

#[derive(Component, Debug)]
pub(crate) enum MainMenuButton {
    Start,
    Exit,
}

pub(crate) fn spawn_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.9)),
            GlobalZIndex(50),
            DespawnOnExit(GameState::MainMenu),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("RIVERBEND"),
                TextFont {
                    font_size: 52.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent.spawn((
                Text::new("Drive out, cast a line, come home rich."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));

            spawn_button(parent, "Start", MainMenuButton::Start);
            spawn_button(parent, "Exit", MainMenuButton::Exit);
        });
}

pub(crate) fn handle_main_menu_buttons(
    query: Query<(&Interaction, &MainMenuButton), Changed<Interaction>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, button) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            MainMenuButton::Start => {
                info!("Starting game");
                next_state.set(GameState::Playing);
            }
            MainMenuButton::Exit => {
                exit.write(AppExit::Success);
            }
        }
    }
}
