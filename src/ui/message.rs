//! UI domain: the transient message banner.

use bevy::prelude::*;

use crate::core::GameState;
use crate::session::TransientMessage;
use crate::ui::TEXT_COLOR;

/// Marker for the banner root
#[derive(Component)]
pub(crate) struct MessageBanner;

/// Marker for the banner text
#[derive(Component)]
pub(crate) struct MessageText;

pub(crate) fn spawn_message_banner(mut commands: Commands) {
    commands
        .spawn((
            MessageBanner,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(0.0),
                top: Val::Px(60.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            GlobalZIndex(80),
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                ))
                .with_children(|inner| {
                    inner.spawn((
                        MessageText,
                        Text::new(""),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        });
}

/// Mirrors the session's message slot: show while it holds text, hide
/// once its timer clears it.
pub(crate) fn update_message_banner(
    message: Res<TransientMessage>,
    mut banner: Query<&mut Visibility, With<MessageBanner>>,
    mut text_query: Query<&mut Text, With<MessageText>>,
) {
    if !message.is_changed() {
        return;
    }

    let Ok(mut visibility) = banner.single_mut() else {
        return;
    };

    match &message.text {
        Some(contents) => {
            for mut text in &mut text_query {
                **text = contents.clone();
            }
            *visibility = Visibility::Inherited;
        }
        None => {
            *visibility = Visibility::Hidden;
        }
    }
}
