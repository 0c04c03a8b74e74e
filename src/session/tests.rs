//! Session domain: unit tests for the wallet, boost, and message timers.

use bevy::prelude::*;

use super::{FishingBoost, PlayerSession, TransientMessage};
use crate::content::RodDef;

fn rod_catalog() -> Vec<RodDef> {
    vec![
        RodDef {
            id: "rod_basic".to_string(),
            name: "Basic Rod".to_string(),
            price: 0,
        },
        RodDef {
            id: "rod_fine".to_string(),
            name: "Fine Rod".to_string(),
            price: 100,
        },
    ]
}

#[test]
fn test_deduct_clamps_at_zero() {
    let mut session = PlayerSession::default();
    session.add_gold(30);
    assert_eq!(session.deduct_gold(50), 0);
    assert_eq!(session.gold, 0);

    // Deducting from an empty wallet stays at zero.
    assert_eq!(session.deduct_gold(10), 0);
}

#[test]
fn test_add_then_deduct() {
    let mut session = PlayerSession::default();
    assert_eq!(session.add_gold(120), 120);
    assert_eq!(session.deduct_gold(45), 75);
    assert_eq!(session.gold, 75);
}

#[test]
fn test_buy_rod_with_exact_funds() {
    let rods = rod_catalog();
    let mut session = PlayerSession::default();
    session.add_gold(100);

    assert!(session.buy_rod(&rods, 1));
    assert_eq!(session.gold, 0);
    assert_eq!(session.equipped_rod, 1);
}

#[test]
fn test_buy_rod_insufficient_funds() {
    let rods = rod_catalog();
    let mut session = PlayerSession::default();
    session.add_gold(50);

    assert!(!session.buy_rod(&rods, 1));
    assert_eq!(session.gold, 50);
    assert_eq!(session.equipped_rod, 0);
}

#[test]
fn test_buy_rod_bad_index() {
    let rods = rod_catalog();
    let mut session = PlayerSession::default();
    session.add_gold(500);

    assert!(!session.buy_rod(&rods, 7));
    assert_eq!(session.gold, 500);
    assert_eq!(session.equipped_rod, 0);
}

#[test]
fn test_inventory_rejects_duplicates() {
    let mut session = PlayerSession::default();
    assert!(session.add_item("lucky_lure_cola"));
    assert!(!session.add_item("lucky_lure_cola"));
    assert!(session.add_item("rod_fine"));
    assert_eq!(session.inventory, vec!["lucky_lure_cola", "rod_fine"]);
    assert!(session.has_item("rod_fine"));
    assert!(!session.has_item("rod_mystery"));
}

#[test]
fn test_spawn_point_upsert_overwrites() {
    let mut session = PlayerSession::default();
    session.set_spawn_point("river", Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(session.spawn_point("river"), Vec3::new(1.0, 2.0, 0.0));

    session.set_spawn_point("river", Vec3::new(-4.0, 8.0, 0.0));
    assert_eq!(session.spawn_point("river"), Vec3::new(-4.0, 8.0, 0.0));
    assert_eq!(session.spawn_points.len(), 1);
}

#[test]
fn test_spawn_point_defaults_to_origin() {
    let session = PlayerSession::default();
    assert_eq!(session.spawn_point("nowhere"), Vec3::ZERO);
}

#[test]
fn test_save_position() {
    let mut session = PlayerSession::default();
    session.save_position(Vec3::new(10.0, -3.0, 5.0));
    assert_eq!(session.saved_position, Vec3::new(10.0, -3.0, 5.0));
}

#[test]
fn test_volume_clamps() {
    let mut session = PlayerSession::default();
    assert_eq!(session.set_volume(1.7), 1.0);
    assert_eq!(session.set_volume(-0.3), 0.0);
    assert_eq!(session.set_volume(0.45), 0.45);
    assert_eq!(session.volume, 0.45);
}

#[test]
fn test_boost_lifecycle() {
    let mut boost = FishingBoost::default();
    assert_eq!(boost.current_multiplier(), 1.0);

    boost.activate(2.0, 120.0);
    assert!(boost.is_active());

    // Partway through the window the multiplier holds.
    assert!(!boost.tick(60.0));
    assert_eq!(boost.current_multiplier(), 2.0);

    // Past the window it resets to 1 and reports the expiry.
    assert!(boost.tick(61.0));
    assert_eq!(boost.current_multiplier(), 1.0);
    assert!(!boost.is_active());
}

#[test]
fn test_boost_expiry_reports_once() {
    let mut boost = FishingBoost::default();
    boost.activate(3.0, 1.0);
    assert!(boost.tick(2.0));
    assert!(!boost.tick(2.0));
    assert!(!boost.tick(2.0));
}

#[test]
fn test_boost_reactivation_overwrites() {
    let mut boost = FishingBoost::default();
    boost.activate(2.0, 100.0);
    boost.tick(90.0);

    // A new purchase replaces the running boost outright.
    boost.activate(1.5, 60.0);
    assert_eq!(boost.current_multiplier(), 1.5);
    assert!(!boost.tick(59.0));
    assert!(boost.tick(2.0));
}

#[test]
fn test_message_hides_after_duration() {
    let mut message = TransientMessage::default();
    message.show("Not enough gold to travel.", 3.0);
    assert!(message.is_visible());

    message.tick(2.0);
    assert!(message.is_visible());

    message.tick(1.5);
    assert!(!message.is_visible());
    assert_eq!(message.text, None);
}

#[test]
fn test_message_timer_independent_of_boost() {
    let mut boost = FishingBoost::default();
    let mut message = TransientMessage::default();

    boost.activate(2.0, 10.0);
    message.show("Fishing boost activated!", 3.0);

    // The message expires while the boost keeps running.
    message.tick(4.0);
    boost.tick(4.0);
    assert!(!message.is_visible());
    assert_eq!(boost.current_multiplier(), 2.0);

    // A fresh message does not disturb the boost countdown either.
    message.show("Hello again", 3.0);
    assert!(boost.tick(7.0));
    assert!(message.is_visible());
}
