mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod interactions;
mod player;
mod scenes;
mod session;
mod travel;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Riverbend".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        session::SessionPlugin,
        scenes::ScenesPlugin,
        travel::TravelPlugin,
        player::PlayerPlugin,
        interactions::InteractionsPlugin,
        ui::UiPlugin,
        audio::BgmPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
