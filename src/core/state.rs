//! Core domain: app and scene state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    Playing,
}

/// The currently loaded gameplay scene.
///
/// Scene names are stable string identifiers; travel requests carry the
/// plain string so an unknown name can be rejected before a trip starts.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum SceneId {
    #[default]
    Home,
    River,
}

impl SceneId {
    pub fn name(self) -> &'static str {
        match self {
            SceneId::Home => "home",
            SceneId::River => "river",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(SceneId::Home),
            "river" => Some(SceneId::River),
            _ => None,
        }
    }
}
