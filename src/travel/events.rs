//! Travel domain: trip requests, confirmations, and outcomes.

use bevy::ecs::message::Message;

use crate::core::SceneId;

/// Asks the travel confirmation menu to open (car interaction at home).
#[derive(Debug)]
pub struct OpenTravelMenuEvent;

impl Message for OpenTravelMenuEvent {}

#[derive(Debug)]
pub struct CloseTravelMenuEvent;

impl Message for CloseTravelMenuEvent {}

/// Confirms a trip to `target`, a scene name resolved when handled so
/// unknown destinations surface as failed trips rather than panics.
#[derive(Debug)]
pub struct TravelConfirmedEvent {
    pub target: String,
}

impl Message for TravelConfirmedEvent {}

#[derive(Debug)]
pub struct TravelCompletedEvent {
    pub scene: SceneId,
}

impl Message for TravelCompletedEvent {}

/// A trip that could not finish. The sequencer has already been reset by
/// the time this is readable.
#[derive(Debug)]
pub struct TravelFailedEvent {
    pub reason: String,
}

impl Message for TravelFailedEvent {}
