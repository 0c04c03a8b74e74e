//! ContentRegistry resource holding the loaded catalogs.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{ItemDef, RodDef};

/// Central registry for loaded game content.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    /// Ordered rod catalog; the index identifies a rod for equipping.
    pub rods: Vec<RodDef>,
    pub items: HashMap<String, ItemDef>,
}

impl ContentRegistry {
    pub fn rod(&self, index: usize) -> Option<&RodDef> {
        self.rods.get(index)
    }

    /// Display name for an inventory id, whichever catalog it came from.
    /// Unknown ids fall back to the raw id.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        if let Some(item) = self.items.get(id) {
            return &item.name;
        }
        self.rods
            .iter()
            .find(|rod| rod.id == id)
            .map(|rod| rod.name.as_str())
            .unwrap_or(id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n - Rods: {}\n - Items: {}",
            self.rods.len(),
            self.items.len(),
        )
    }

    /// Built-in catalog used when the RON files cannot be read.
    pub fn fallback() -> Self {
        let rods = vec![
            RodDef {
                id: "rod_driftwood".to_string(),
                name: "Driftwood Rod".to_string(),
                price: 0,
            },
            RodDef {
                id: "rod_willow".to_string(),
                name: "Willow Rod".to_string(),
                price: 120,
            },
            RodDef {
                id: "rod_graphite".to_string(),
                name: "Graphite Rod".to_string(),
                price: 300,
            },
        ];

        let mut items = HashMap::new();
        items.insert(
            "lucky_lure_cola".to_string(),
            ItemDef {
                id: "lucky_lure_cola".to_string(),
                name: "Lucky Lure Cola".to_string(),
            },
        );

        Self { rods, items }
    }
}
