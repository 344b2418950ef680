//! Shared test utilities and fixtures for type catalog tests
//!
//! The fixture catalog is also used by the parser, pricing and buyback tests.

use crate::app::services::type_catalog::{Component, InMemoryTypeCatalog, TypeRecord};
use crate::constants::{category_ids, group_ids};
use std::fs;
use std::path::{Path, PathBuf};

pub mod catalog_tests;

// Fixture type ids
pub const TRITANIUM: i64 = 34;
pub const PYERITE: i64 = 35;
pub const MEXALLON: i64 = 36;
pub const VELDSPAR: i64 = 1230;
pub const SCORDITE: i64 = 1228;
pub const CONCENTRATED_VELDSPAR: i64 = 17470;
pub const COMPRESSED_VELDSPAR: i64 = 28430;
pub const COMPRESSED_CONCENTRATED_VELDSPAR: i64 = 28432;
pub const RIFTER: i64 = 587;
pub const RIFTER_BLUEPRINT: i64 = 691;
pub const SHIELD_EXTENDER: i64 = 3831;
pub const BLUE_ICE: i64 = 16264;
pub const HEAVY_WATER: i64 = 16272;
pub const HYDROCARBONS: i64 = 16633;
pub const RECURSIVE_WIDGET: i64 = 90001;
pub const LOOPING_GADGET: i64 = 90002;
pub const BROKEN_MODULE: i64 = 90003;
pub const MISSING_MATERIAL: i64 = 99999;

const FRIGATE_GROUP: i64 = 25;
const SHIP_CATEGORY: i64 = 6;
const SHIELD_EXTENDER_GROUP: i64 = 38;
const MODULE_CATEGORY: i64 = 7;
const BLUEPRINT_GROUP: i64 = 105;
const BLUEPRINT_CATEGORY: i64 = 9;
const VELDSPAR_GROUP: i64 = 462;
const SCORDITE_GROUP: i64 = 460;
const MATERIAL_CATEGORY: i64 = 4;

/// Create a type record with materials
pub fn create_test_type(
    id: i64,
    name: &str,
    group_id: i64,
    category_id: i64,
    portion_size: i64,
    materials: &[(i64, i64)],
) -> TypeRecord {
    TypeRecord {
        portion_size,
        volume: 0.01,
        materials: materials
            .iter()
            .map(|&(type_id, quantity)| Component::new(type_id, quantity))
            .collect(),
        ..TypeRecord::new(id, name, group_id, category_id)
    }
}

/// All fixture type records
pub fn create_test_type_records() -> Vec<TypeRecord> {
    let mut rifter = create_test_type(
        RIFTER,
        "Rifter",
        FRIGATE_GROUP,
        SHIP_CATEGORY,
        1,
        &[(TRITANIUM, 32000), (PYERITE, 6000), (MEXALLON, 2500)],
    );
    rifter.volume = 27289.0;
    rifter.packaged_volume = 2500.0;
    rifter.components = vec![Component::new(TRITANIUM, 20000), Component::new(PYERITE, 5000)];

    let mut shield_extender = create_test_type(
        SHIELD_EXTENDER,
        "Medium Shield Extender I",
        SHIELD_EXTENDER_GROUP,
        MODULE_CATEGORY,
        1,
        &[(TRITANIUM, 100), (PYERITE, 50)],
    );
    shield_extender.volume = 10.0;

    let mut veldspar = create_test_type(
        VELDSPAR,
        "Veldspar",
        VELDSPAR_GROUP,
        category_ids::ASTEROID,
        100,
        &[(TRITANIUM, 400)],
    );
    veldspar.volume = 0.1;

    vec![
        create_test_type(TRITANIUM, "Tritanium", group_ids::MINERAL, MATERIAL_CATEGORY, 1, &[]),
        create_test_type(PYERITE, "Pyerite", group_ids::MINERAL, MATERIAL_CATEGORY, 1, &[]),
        create_test_type(MEXALLON, "Mexallon", group_ids::MINERAL, MATERIAL_CATEGORY, 1, &[]),
        veldspar,
        create_test_type(
            SCORDITE,
            "Scordite",
            SCORDITE_GROUP,
            category_ids::ASTEROID,
            100,
            &[(PYERITE, 400), (TRITANIUM, 600)],
        ),
        create_test_type(
            CONCENTRATED_VELDSPAR,
            "Concentrated Veldspar",
            VELDSPAR_GROUP,
            category_ids::ASTEROID,
            100,
            &[(TRITANIUM, 420)],
        ),
        create_test_type(
            COMPRESSED_VELDSPAR,
            "Compressed Veldspar",
            VELDSPAR_GROUP,
            category_ids::ASTEROID,
            1,
            &[(TRITANIUM, 400)],
        ),
        create_test_type(
            COMPRESSED_CONCENTRATED_VELDSPAR,
            "Compressed Concentrated Veldspar",
            VELDSPAR_GROUP,
            category_ids::ASTEROID,
            1,
            &[(TRITANIUM, 420)],
        ),
        rifter,
        create_test_type(
            RIFTER_BLUEPRINT,
            "Rifter Blueprint",
            BLUEPRINT_GROUP,
            BLUEPRINT_CATEGORY,
            1,
            &[],
        ),
        shield_extender,
        create_test_type(
            BLUE_ICE,
            "Blue Ice",
            group_ids::ICE,
            category_ids::ASTEROID,
            1,
            &[(HEAVY_WATER, 69)],
        ),
        create_test_type(HEAVY_WATER, "Heavy Water", group_ids::ICE_PRODUCT, MATERIAL_CATEGORY, 1, &[]),
        create_test_type(
            HYDROCARBONS,
            "Hydrocarbons",
            group_ids::MOON_MATERIALS,
            MATERIAL_CATEGORY,
            1,
            &[],
        ),
        create_test_type(
            RECURSIVE_WIDGET,
            "Recursive Widget",
            SHIELD_EXTENDER_GROUP,
            MODULE_CATEGORY,
            1,
            &[(LOOPING_GADGET, 2)],
        ),
        create_test_type(
            LOOPING_GADGET,
            "Looping Gadget",
            SHIELD_EXTENDER_GROUP,
            MODULE_CATEGORY,
            1,
            &[(RECURSIVE_WIDGET, 2)],
        ),
        create_test_type(
            BROKEN_MODULE,
            "Broken Module",
            SHIELD_EXTENDER_GROUP,
            MODULE_CATEGORY,
            1,
            &[(MISSING_MATERIAL, 5), (TRITANIUM, 10)],
        ),
    ]
}

/// Create the fixture type catalog
pub fn create_test_type_catalog() -> InMemoryTypeCatalog {
    InMemoryTypeCatalog::from_records(create_test_type_records())
}

/// Write the fixture records to a `types.json` file
pub fn create_test_types_file(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("types.json");
    let content = serde_json::to_string_pretty(&create_test_type_records())?;
    fs::write(&path, content)?;
    Ok(path)
}
