//! Travel domain: the car trip sequencer and its events.

mod events;
mod sequencer;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{
    CloseTravelMenuEvent, OpenTravelMenuEvent, TravelCompletedEvent, TravelConfirmedEvent,
    TravelFailedEvent,
};
pub use sequencer::{TravelPhase, TravelSequencer};

use bevy::prelude::*;

use crate::travel::systems::{
    announce_travel_arrival, announce_travel_failure, drive_car, handle_travel_confirmed,
    restore_after_load, watch_load_timeout,
};

pub struct TravelPlugin;

impl Plugin for TravelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TravelSequencer>()
            .add_message::<OpenTravelMenuEvent>()
            .add_message::<CloseTravelMenuEvent>()
            .add_message::<TravelConfirmedEvent>()
            .add_message::<TravelCompletedEvent>()
            .add_message::<TravelFailedEvent>()
            .add_systems(
                Update,
                (
                    handle_travel_confirmed,
                    drive_car,
                    restore_after_load,
                    watch_load_timeout,
                    announce_travel_arrival,
                    announce_travel_failure,
                )
                    .chain(),
            );
    }
}
