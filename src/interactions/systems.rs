//! Interactions domain: zone tracking, the confirm key, and purchases.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::SceneId;
use crate::interactions::components::{InteractionKind, InteractionZone, NearInteractable};
use crate::interactions::events::{
    BuyRodEvent, OpenTackleShopEvent, OpenVendingPanelEvent, VendingPurchaseEvent,
};
use crate::player::Player;
use crate::session::{FishingBoost, GoldChangedEvent, PlayerSession, TransientMessage};
use crate::travel::{OpenTravelMenuEvent, TravelConfirmedEvent, TravelSequencer};

/// Tags the player while inside an interaction zone so the confirm key
/// knows what it would act on.
pub(crate) fn track_interaction_zones(
    mut commands: Commands,
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    zones: Query<&InteractionZone>,
    player_query: Query<Entity, With<Player>>,
    near: Query<&NearInteractable, With<Player>>,
) {
    let Ok(player_entity) = player_query.single() else {
        return;
    };

    for event in collision_start.read() {
        let (zone_entity, other) = if zones.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if zones.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }
        if let Ok(zone) = zones.get(zone_entity) {
            if near.is_empty() {
                commands
                    .entity(player_entity)
                    .insert(NearInteractable { kind: zone.kind });
                info!("Player near {:?}", zone.kind);
            }
        }
    }

    for event in collision_end.read() {
        let zone_hit = zones.get(event.collider1).is_ok() || zones.get(event.collider2).is_ok();
        let involves_player = event.collider1 == player_entity || event.collider2 == player_entity;
        if zone_hit && involves_player {
            commands.entity(player_entity).remove::<NearInteractable>();
        }
    }
}

/// E acts on whatever the player is standing next to.
pub(crate) fn confirm_interaction(
    keyboard: Res<ButtonInput<KeyCode>>,
    near: Query<&NearInteractable, With<Player>>,
    scene: Res<State<SceneId>>,
    sequencer: Res<TravelSequencer>,
    mut travel_menu_events: MessageWriter<OpenTravelMenuEvent>,
    mut travel_confirm_events: MessageWriter<TravelConfirmedEvent>,
    mut vending_events: MessageWriter<OpenVendingPanelEvent>,
    mut shop_events: MessageWriter<OpenTackleShopEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Ok(near) = near.single() else {
        return;
    };

    match near.kind {
        InteractionKind::Car => {
            if sequencer.is_busy() {
                return;
            }
            match scene.get() {
                // Leaving home costs a fare, so ask first.
                SceneId::Home => {
                    travel_menu_events.write(OpenTravelMenuEvent);
                }
                // The ride back is free; go straight away.
                SceneId::River => {
                    travel_confirm_events.write(TravelConfirmedEvent {
                        target: SceneId::Home.name().to_string(),
                    });
                }
            }
        }
        InteractionKind::VendingMachine => {
            vending_events.write(OpenVendingPanelEvent);
        }
        InteractionKind::TackleShop => {
            shop_events.write(OpenTackleShopEvent);
        }
    }
}

/// Sells the boost drink: deduct, activate the boost, pocket the can.
pub(crate) fn handle_vending_purchase(
    mut purchases: MessageReader<VendingPurchaseEvent>,
    defaults: Res<GameplayDefaults>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<PlayerSession>,
    mut boost: ResMut<FishingBoost>,
    mut message: ResMut<TransientMessage>,
    mut gold_events: MessageWriter<GoldChangedEvent>,
) {
    for _ in purchases.read() {
        let vending = defaults.vending.clone();
        if !session.can_afford(vending.price) {
            info!("Not enough gold for {}", vending.item_id);
            message.show("Not enough gold for a drink.", defaults.message_duration);
            continue;
        }

        let balance = session.deduct_gold(vending.price);
        gold_events.write(GoldChangedEvent { balance });
        session.add_item(vending.item_id.clone());
        boost.activate(vending.boost_multiplier, vending.boost_duration);

        info!(
            "{} purchased, fishing boost {}x for {}s",
            registry.display_name(&vending.item_id),
            vending.boost_multiplier,
            vending.boost_duration
        );
        message.show(
            format!(
                "Fishing boost activated! {}x for {:.0} minutes",
                vending.boost_multiplier,
                vending.boost_duration / 60.0
            ),
            defaults.message_duration,
        );
    }
}

/// Buys a rod from the catalog, equipping it on success.
pub(crate) fn handle_buy_rod(
    mut purchases: MessageReader<BuyRodEvent>,
    defaults: Res<GameplayDefaults>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<PlayerSession>,
    mut message: ResMut<TransientMessage>,
    mut gold_events: MessageWriter<GoldChangedEvent>,
) {
    for purchase in purchases.read() {
        if !session.buy_rod(&registry.rods, purchase.index) {
            info!("Rod purchase rejected (index {})", purchase.index);
            message.show("Not enough gold for that rod.", defaults.message_duration);
            continue;
        }

        // buy_rod vetted the index, so the lookup cannot miss.
        if let Some(rod) = registry.rod(purchase.index) {
            session.add_item(rod.id.clone());
            gold_events.write(GoldChangedEvent {
                balance: session.gold,
            });
            info!("Bought and equipped {}", rod.name);
            message.show(
                format!("Bought and equipped {}!", rod.name),
                defaults.message_duration,
            );
        }
    }
}
