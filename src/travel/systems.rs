//! Travel domain: systems driving the trip phase machine.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{GameplayDefaults, TravelDefaults};
use crate::core::SceneId;
use crate::player::Player;
use crate::scenes::{Car, SceneLoadedEvent, SpawnMarker};
use crate::session::{GoldChangedEvent, PlayerSession, TransientMessage};
use crate::travel::events::{TravelCompletedEvent, TravelConfirmedEvent, TravelFailedEvent};
use crate::travel::sequencer::{TravelPhase, TravelSequencer};

/// Fare for a trip that starts in `from`. Leaving home is charged; the
/// ride back from the river is free.
pub(crate) fn trip_cost(from: SceneId, defaults: &TravelDefaults) -> u32 {
    match from {
        SceneId::Home => defaults.gold_cost,
        SceneId::River => 0,
    }
}

/// Charges the fare when required and starts the trip.
pub(crate) fn handle_travel_confirmed(
    mut confirmations: MessageReader<TravelConfirmedEvent>,
    mut stale_loads: MessageReader<SceneLoadedEvent>,
    mut commands: Commands,
    current_scene: Res<State<SceneId>>,
    defaults: Res<GameplayDefaults>,
    mut sequencer: ResMut<TravelSequencer>,
    mut session: ResMut<PlayerSession>,
    mut message: ResMut<TransientMessage>,
    mut gold_events: MessageWriter<GoldChangedEvent>,
    mut failed_events: MessageWriter<TravelFailedEvent>,
    car: Query<&Transform, With<Car>>,
    mut player: Query<(Entity, &mut Visibility), With<Player>>,
) {
    for confirm in confirmations.read() {
        let Some(target) = SceneId::from_name(&confirm.target) else {
            warn!("Rejecting travel to unknown scene '{}'", confirm.target);
            failed_events.write(TravelFailedEvent {
                reason: format!("unknown scene '{}'", confirm.target),
            });
            continue;
        };

        if sequencer.is_busy() {
            info!("Travel already in flight, ignoring request");
            continue;
        }

        let cost = trip_cost(*current_scene.get(), &defaults.travel);
        if !session.can_afford(cost) {
            info!("Not enough gold to travel ({} needed)", cost);
            message.show("Not enough gold to travel.", defaults.message_duration);
            continue;
        }
        if cost > 0 {
            let balance = session.deduct_gold(cost);
            gold_events.write(GoldChangedEvent { balance });
            info!("{} gold fare charged, {} left", cost, balance);
        }

        let car_start = car.single().map(|t| t.translation).unwrap_or(Vec3::ZERO);
        if !sequencer.begin(target, car_start, defaults.travel.move_offset) {
            continue;
        }

        // Loaded signals from before this trip must not satisfy it.
        stale_loads.clear();

        // Hide the player for the ride. A missing player is fine; the
        // scene switch happens regardless.
        if let Ok((entity, mut visibility)) = player.single_mut() {
            *visibility = Visibility::Hidden;
            commands.entity(entity).insert(ColliderDisabled);
        }

        info!("Travel to '{}' started", target.name());
    }
}

/// Interpolates the car toward its departure offset, one sample per
/// frame, then requests the scene switch.
pub(crate) fn drive_car(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut sequencer: ResMut<TravelSequencer>,
    mut car: Query<&mut Transform, With<Car>>,
    mut next_scene: ResMut<NextState<SceneId>>,
) {
    if !matches!(sequencer.phase(), TravelPhase::Moving { .. }) {
        return;
    }
    let Some((position, arrived)) =
        sequencer.advance_move(time.delta_secs(), defaults.travel.move_duration)
    else {
        return;
    };

    if let Ok(mut transform) = car.single_mut() {
        transform.translation = position;
    }

    if let Some(target) = arrived {
        info!("Loading scene '{}'", target.name());
        next_scene.set(target);
    }
}

/// Finishes a trip once the target scene reports in: repositions the
/// player at the spawn marker (or the saved position when the scene has
/// none) and restores visibility and collision.
pub(crate) fn restore_after_load(
    mut loaded_events: MessageReader<SceneLoadedEvent>,
    mut commands: Commands,
    mut sequencer: ResMut<TravelSequencer>,
    session: Res<PlayerSession>,
    marker: Query<&Transform, (With<SpawnMarker>, Without<Player>)>,
    mut player: Query<(Entity, &mut Transform, &mut Visibility), With<Player>>,
    mut completed_events: MessageWriter<TravelCompletedEvent>,
) {
    for event in loaded_events.read() {
        if !sequencer.scene_loaded(event.scene) {
            continue;
        }

        // Live spawn marker first, saved position as the fallback.
        let position = marker
            .single()
            .map(|t| t.translation)
            .unwrap_or(session.saved_position);

        if let Ok((entity, mut transform, mut visibility)) = player.single_mut() {
            transform.translation = Vec3::new(position.x, position.y, transform.translation.z);
            *visibility = Visibility::Inherited;
            commands.entity(entity).remove::<ColliderDisabled>();
        }

        if let Some(scene) = sequencer.finish() {
            info!("Arrived at '{}'", scene.name());
            completed_events.write(TravelCompletedEvent { scene });
        }
    }
}

/// Fails a trip whose scene load never reported in. The player is put
/// back at the saved position and the machine is freed; the sequencer
/// must never be left busy.
pub(crate) fn watch_load_timeout(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut commands: Commands,
    mut sequencer: ResMut<TravelSequencer>,
    session: Res<PlayerSession>,
    mut player: Query<(Entity, &mut Transform, &mut Visibility), With<Player>>,
    mut failed_events: MessageWriter<TravelFailedEvent>,
) {
    if !matches!(sequencer.phase(), TravelPhase::AwaitingSceneLoad { .. }) {
        return;
    }
    if !sequencer.wait_for_load(time.delta_secs(), defaults.travel.load_timeout) {
        return;
    }

    if let Ok((entity, mut transform, mut visibility)) = player.single_mut() {
        transform.translation = session.saved_position;
        *visibility = Visibility::Inherited;
        commands.entity(entity).remove::<ColliderDisabled>();
    }
    sequencer.fail();
    warn!("Scene load timed out, travel aborted");
    failed_events.write(TravelFailedEvent {
        reason: "scene load timed out".to_string(),
    });
}

/// Greets the player once a trip lands.
pub(crate) fn announce_travel_arrival(
    mut completed_events: MessageReader<TravelCompletedEvent>,
    defaults: Res<GameplayDefaults>,
    mut message: ResMut<TransientMessage>,
) {
    for event in completed_events.read() {
        let text = match event.scene {
            SceneId::Home => "Home again.",
            SceneId::River => "The fish are waiting.",
        };
        message.show(text, defaults.message_duration);
    }
}

/// Surfaces failed trips on the message banner.
pub(crate) fn announce_travel_failure(
    mut failed_events: MessageReader<TravelFailedEvent>,
    defaults: Res<GameplayDefaults>,
    mut message: ResMut<TransientMessage>,
) {
    for event in failed_events.read() {
        message.show(
            format!("Travel failed: {}", event.reason),
            defaults.message_duration,
        );
    }
}
