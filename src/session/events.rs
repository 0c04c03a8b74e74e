//! Session domain: change notifications for UI and audio subscribers.

use bevy::ecs::message::Message;

/// Fired after any wallet mutation, carrying the new balance.
#[derive(Debug)]
pub struct GoldChangedEvent {
    pub balance: u32,
}

impl Message for GoldChangedEvent {}

/// Fired after the master volume changes, already clamped.
#[derive(Debug)]
pub struct VolumeChangedEvent {
    pub volume: f32,
}

impl Message for VolumeChangedEvent {}
