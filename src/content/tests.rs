//! Content domain: unit tests for catalog loading.

use std::path::Path;

use super::loader::load_all_content;
use super::registry::ContentRegistry;

#[test]
fn test_shipped_catalogs_parse() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let (registry, defaults, errors) = load_all_content(&base);
    assert!(errors.is_empty(), "unexpected load errors: {:?}", errors);
    assert_eq!(registry.rods.len(), 3);
    assert!(registry.items.contains_key("lucky_lure_cola"));
    assert_eq!(defaults.travel.gold_cost, 100);
    assert_eq!(defaults.vending.price, 50);
}

#[test]
fn test_missing_directory_falls_back() {
    let (registry, defaults, errors) = load_all_content(Path::new("no/such/dir"));
    assert_eq!(errors.len(), 3);
    assert!(!registry.rods.is_empty());
    assert_eq!(defaults.starting_gold, 150);
}

#[test]
fn test_display_name_lookup() {
    let registry = ContentRegistry::fallback();
    assert_eq!(registry.display_name("lucky_lure_cola"), "Lucky Lure Cola");
    assert_eq!(registry.display_name("rod_willow"), "Willow Rod");
    assert_eq!(registry.display_name("mystery"), "mystery");
}

#[test]
fn test_rod_lookup_by_index() {
    let registry = ContentRegistry::fallback();
    assert_eq!(registry.rod(0).map(|r| r.id.as_str()), Some("rod_driftwood"));
    assert!(registry.rod(99).is_none());
}
