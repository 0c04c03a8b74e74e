//! Session domain: per-frame expiry ticks and session funding.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::session::events::GoldChangedEvent;
use crate::session::resources::{FishingBoost, PlayerSession, TransientMessage};

/// Counts the fishing boost down and announces its expiry once.
pub(crate) fn tick_fishing_boost(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut boost: ResMut<FishingBoost>,
    mut message: ResMut<TransientMessage>,
) {
    if !boost.is_active() {
        return;
    }
    if boost.tick(time.delta_secs()) {
        info!("Fishing boost expired");
        message.show("Fishing boost expired!", defaults.message_duration);
    }
}

/// Hides the transient message once its duration is up.
pub(crate) fn tick_transient_message(time: Res<Time>, mut message: ResMut<TransientMessage>) {
    if !message.is_visible() {
        return;
    }
    message.tick(time.delta_secs());
}

/// Funds the wallet once, the first time play starts.
pub(crate) fn grant_starting_gold(
    defaults: Res<GameplayDefaults>,
    mut session: ResMut<PlayerSession>,
    mut gold_events: MessageWriter<GoldChangedEvent>,
    mut granted: Local<bool>,
) {
    if *granted {
        return;
    }
    *granted = true;
    let balance = session.add_gold(defaults.starting_gold);
    gold_events.write(GoldChangedEvent { balance });
    info!("Session funded with {} gold", defaults.starting_gold);
}
