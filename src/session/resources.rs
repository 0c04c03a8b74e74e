//! Session domain: long-lived player state resources.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::RodDef;

/// Cross-scene player progress: wallet, inventory, equipped rod, spawn
/// points, saved position, and master volume.
///
/// One instance lives for the whole app run; nothing here is persisted.
/// Fields are mutated through the methods below so the invariants (gold
/// never negative, volume clamped, inventory deduplicated) hold.
#[derive(Resource, Debug)]
pub struct PlayerSession {
    pub gold: u32,
    /// Item ids in acquisition order. Item identity is the catalog id:
    /// a second copy of the same id is rejected.
    pub inventory: Vec<String>,
    /// Index into the rod catalog.
    pub equipped_rod: usize,
    pub spawn_points: HashMap<String, Vec3>,
    pub saved_position: Vec3,
    pub volume: f32,
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self {
            gold: 0,
            inventory: Vec::new(),
            equipped_rod: 0,
            spawn_points: HashMap::new(),
            saved_position: Vec3::ZERO,
            volume: 1.0,
        }
    }
}

impl PlayerSession {
    /// Saturating add; returns the new balance for change notifications.
    pub fn add_gold(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }

    /// Clamps at zero rather than failing: an over-deduction empties the
    /// wallet. Returns the new balance.
    pub fn deduct_gold(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_sub(amount);
        self.gold
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.gold >= amount
    }

    /// Buys and equips the rod at `index`. Fails without touching any
    /// state when the index is out of range or the wallet is short.
    pub fn buy_rod(&mut self, rods: &[RodDef], index: usize) -> bool {
        let Some(rod) = rods.get(index) else {
            return false;
        };
        if self.gold < rod.price {
            return false;
        }
        self.deduct_gold(rod.price);
        self.equip_rod(index);
        true
    }

    pub fn equip_rod(&mut self, index: usize) {
        self.equipped_rod = index;
    }

    /// Records an item id once; a second add of the same id is a no-op
    /// and returns false.
    pub fn add_item(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.inventory.iter().any(|have| *have == id) {
            return false;
        }
        self.inventory.push(id);
        true
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.inventory.iter().any(|have| have == id)
    }

    pub fn set_spawn_point(&mut self, scene: impl Into<String>, position: Vec3) {
        self.spawn_points.insert(scene.into(), position);
    }

    /// Mapped spawn point, or the origin when the scene has none yet.
    pub fn spawn_point(&self, scene: &str) -> Vec3 {
        self.spawn_points.get(scene).copied().unwrap_or(Vec3::ZERO)
    }

    pub fn save_position(&mut self, position: Vec3) {
        self.saved_position = position;
    }

    /// Clamps into [0, 1] and returns the stored value.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        self.volume = volume.clamp(0.0, 1.0);
        self.volume
    }
}

/// Timed fishing-yield multiplier. Inactive at multiplier 1; a fresh
/// activation overwrites any running boost (no stacking).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FishingBoost {
    pub multiplier: f32,
    pub time_left: f32,
}

impl Default for FishingBoost {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            time_left: 0.0,
        }
    }
}

impl FishingBoost {
    pub fn activate(&mut self, multiplier: f32, duration: f32) {
        self.multiplier = multiplier.max(1.0);
        self.time_left = duration.max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.multiplier > 1.0 && self.time_left > 0.0
    }

    /// Effective multiplier; an expired boost is never observable here.
    pub fn current_multiplier(&self) -> f32 {
        if self.is_active() { self.multiplier } else { 1.0 }
    }

    /// Counts the boost down. Returns true exactly on the tick the boost
    /// runs out, so the caller can announce the expiry once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.multiplier = 1.0;
            self.time_left = 0.0;
            return true;
        }
        false
    }
}

/// One transient HUD message at a time, hidden when its timer runs out.
/// Runs on its own clock, independent of the fishing boost.
#[derive(Resource, Debug, Default)]
pub struct TransientMessage {
    pub text: Option<String>,
    pub time_left: f32,
}

impl TransientMessage {
    pub fn show(&mut self, text: impl Into<String>, duration: f32) {
        self.text = Some(text.into());
        self.time_left = duration;
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }

    pub fn tick(&mut self, dt: f32) {
        if self.text.is_none() {
            return;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.text = None;
            self.time_left = 0.0;
        }
    }
}
