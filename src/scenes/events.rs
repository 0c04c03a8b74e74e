//! Scenes domain: scene lifecycle signals.

use bevy::ecs::message::Message;

use crate::core::SceneId;

/// Written once per scene entry, after that scene's content has spawned.
/// This is the completion signal the travel sequencer waits on.
#[derive(Debug)]
pub struct SceneLoadedEvent {
    pub scene: SceneId,
}

impl Message for SceneLoadedEvent {}
