//! Tests for the ore yield table

use crate::app::services::pricing::OreYieldTable;

#[test]
fn test_standard_table_covers_every_family() {
    let table = OreYieldTable::standard();
    assert_eq!(table.len(), 36);
    assert!(!table.is_empty());
    assert_eq!(OreYieldTable::default(), table);

    let veldspar = table
        .families()
        .iter()
        .find(|family| family.base_name == "Veldspar")
        .unwrap();
    assert_eq!(veldspar.suffix, "Veldspar");
    let adjectives: Vec<&str> = veldspar
        .variants
        .iter()
        .map(|variant| variant.adjective.as_str())
        .collect();
    assert_eq!(adjectives, vec!["Concentrated", "Dense", "Stable"]);
}

#[test]
fn test_lookup_quality_variant() {
    let table = OreYieldTable::standard();

    let found = table.lookup("Concentrated Veldspar").unwrap();
    assert_eq!(found.base_type_name, "Veldspar");
    assert_eq!(found.bonus, 5);
    assert_eq!(found.basis(), "Veldspar +5%");

    let found = table.lookup("Jet Ochre").unwrap();
    assert_eq!(found.base_type_name, "Dark Ochre");
    assert_eq!(found.bonus, 15);
    assert!((found.multiplier() - 1.15).abs() < 1e-12);
}

#[test]
fn test_lookup_compressed_variant() {
    let table = OreYieldTable::standard();
    let found = table.lookup("Compressed Dense Veldspar").unwrap();
    assert_eq!(found.base_type_name, "Compressed Veldspar");
    assert_eq!(found.bonus, 10);
    assert_eq!(found.to_string(), "Compressed Veldspar +10%");
}

#[test]
fn test_lookup_moon_ore_variant() {
    let table = OreYieldTable::standard();
    let found = table.lookup("Glistening Zeolites").unwrap();
    assert_eq!(found.base_type_name, "Zeolites");
    assert_eq!(found.bonus, 100);
}

#[test]
fn test_lookup_misses() {
    let table = OreYieldTable::standard();
    assert!(table.lookup("Veldspar").is_none());
    assert!(table.lookup("Compressed Veldspar").is_none());
    assert!(table.lookup("Tritanium").is_none());
    assert!(table.lookup("Concentrated Veldspar Blueprint").is_none());
}
