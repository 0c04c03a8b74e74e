//! Interactions domain: proximity triggers that turn player input into
//! session mutations and travel requests.

mod components;
mod events;
mod systems;

pub use components::{InteractionKind, InteractionZone, NearInteractable};
pub use events::{
    BuyRodEvent, CloseTackleShopEvent, CloseVendingPanelEvent, OpenTackleShopEvent,
    OpenVendingPanelEvent, VendingPurchaseEvent,
};

use bevy::prelude::*;

use crate::core::GameState;
use crate::interactions::systems::{
    confirm_interaction, handle_buy_rod, handle_vending_purchase, track_interaction_zones,
};

pub struct InteractionsPlugin;

impl Plugin for InteractionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<OpenVendingPanelEvent>()
            .add_message::<CloseVendingPanelEvent>()
            .add_message::<VendingPurchaseEvent>()
            .add_message::<OpenTackleShopEvent>()
            .add_message::<CloseTackleShopEvent>()
            .add_message::<BuyRodEvent>()
            .add_systems(
                Update,
                (
                    track_interaction_zones,
                    confirm_interaction,
                    handle_vending_purchase,
                    handle_buy_rod,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
