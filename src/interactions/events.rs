//! Interactions domain: player intents raised from the world.

use bevy::ecs::message::Message;

#[derive(Debug)]
pub struct OpenVendingPanelEvent;

impl Message for OpenVendingPanelEvent {}

#[derive(Debug)]
pub struct CloseVendingPanelEvent;

impl Message for CloseVendingPanelEvent {}

/// Buy the vending machine drink; price and effect come from the
/// gameplay defaults.
#[derive(Debug)]
pub struct VendingPurchaseEvent;

impl Message for VendingPurchaseEvent {}

#[derive(Debug)]
pub struct OpenTackleShopEvent;

impl Message for OpenTackleShopEvent {}

#[derive(Debug)]
pub struct CloseTackleShopEvent;

impl Message for CloseTackleShopEvent {}

/// Buy and equip the rod at `index` in the catalog.
#[derive(Debug)]
pub struct BuyRodEvent {
    pub index: usize,
}

impl Message for BuyRodEvent {}
