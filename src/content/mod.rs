//! Content domain: RON-backed catalogs and gameplay defaults.

mod data;
mod loader;
mod registry;

#[cfg(test)]
mod tests;

pub use data::{DataFile, GameplayDefaults, ItemDef, RodDef, TravelDefaults, VendingDefaults};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let (registry, defaults, errors) = load_all_content(Path::new("assets/data"));
    for error in &errors {
        error!("{}", error);
    }
    info!("{}", registry.summary());
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}
