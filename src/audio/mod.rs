//! Audio domain: background music and master volume plumbing.

use bevy::audio::{GlobalVolume, Volume};
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::session::{GoldChangedEvent, PlayerSession, VolumeChangedEvent};

/// Marker for the looping background music entity.
#[derive(Component)]
struct Bgm;

pub struct BgmPlugin;

impl Plugin for BgmPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_bgm)
            .add_systems(Update, (volume_keys, apply_volume, gold_change_blip));
    }
}

fn start_bgm(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Bgm,
        AudioPlayer::new(asset_server.load("audio/bgm.ogg")),
        PlaybackSettings::LOOP,
    ));
}

/// Comma/period nudge the master volume through the session clamp.
fn volume_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<PlayerSession>,
    mut volume_events: MessageWriter<VolumeChangedEvent>,
) {
    let step = if keyboard.just_pressed(KeyCode::Comma) {
        -0.1
    } else if keyboard.just_pressed(KeyCode::Period) {
        0.1
    } else {
        return;
    };

    let volume = session.set_volume(session.volume + step);
    volume_events.write(VolumeChangedEvent { volume });
    info!("Volume set to {:.1}", volume);
}

/// Applies volume notifications to the global audio output.
fn apply_volume(
    mut volume_events: MessageReader<VolumeChangedEvent>,
    mut global_volume: ResMut<GlobalVolume>,
) {
    for event in volume_events.read() {
        global_volume.volume = Volume::Linear(event.volume);
    }
}

/// Coin blip whenever the wallet balance moves.
fn gold_change_blip(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut gold_events: MessageReader<GoldChangedEvent>,
) {
    for _ in gold_events.read() {
        commands.spawn((
            AudioPlayer::new(asset_server.load("audio/coin.ogg")),
            PlaybackSettings::DESPAWN,
        ));
    }
}
