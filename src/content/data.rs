//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Common wrapper for RON files with a schema version and an item list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// A purchasable fishing rod. Catalog order is load-bearing: the equipped
/// rod is tracked by index into this list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RodDef {
    pub id: String,
    pub name: String,
    pub price: u32,
}

/// A non-rod inventory item (vending drinks and the like).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
}

/// Tunable gameplay values loaded from gameplay.ron.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub starting_gold: u32,
    /// Seconds a transient HUD message stays visible.
    pub message_duration: f32,
    pub travel: TravelDefaults,
    pub vending: VendingDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TravelDefaults {
    /// Gold charged for the home -> river trip. The return trip is free.
    pub gold_cost: u32,
    /// Seconds the car animates before the scene switch.
    pub move_duration: f32,
    /// Horizontal distance the car covers during the animation.
    pub move_offset: f32,
    /// Seconds to wait for a scene load before the trip is failed.
    pub load_timeout: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VendingDefaults {
    pub item_id: String,
    pub price: u32,
    pub boost_multiplier: f32,
    /// Boost lifetime in seconds.
    pub boost_duration: f32,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            starting_gold: 150,
            message_duration: 3.0,
            travel: TravelDefaults::default(),
            vending: VendingDefaults::default(),
        }
    }
}

impl Default for TravelDefaults {
    fn default() -> Self {
        Self {
            gold_cost: 100,
            move_duration: 2.0,
            move_offset: 60.0,
            load_timeout: 5.0,
        }
    }
}

impl Default for VendingDefaults {
    fn default() -> Self {
        Self {
            item_id: "lucky_lure_cola".to_string(),
            price: 50,
            boost_multiplier: 2.0,
            boost_duration: 120.0,
        }
    }
}
