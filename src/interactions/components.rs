//! Interactions domain: proximity zones on scene props.

use bevy::prelude::*;

/// What a given interaction zone triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Car,
    VendingMachine,
    TackleShop,
}

/// Sensor area around a prop the player can interact with.
#[derive(Component, Debug)]
pub struct InteractionZone {
    pub kind: InteractionKind,
}

/// Present on the player while standing in an interaction zone.
#[derive(Component, Debug)]
pub struct NearInteractable {
    pub kind: InteractionKind,
}
