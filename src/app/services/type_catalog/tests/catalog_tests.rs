//! Tests for type resolution

use super::*;
use crate::Error;
use crate::app::services::type_catalog::TypeCatalog;

#[test]
fn test_resolve_by_name_ignores_case_and_whitespace() {
    let catalog = create_test_type_catalog();

    let record = catalog.resolve_by_name("tritanium").unwrap();
    assert_eq!(record.id, TRITANIUM);
    assert_eq!(record.name, "Tritanium");

    assert_eq!(catalog.resolve_by_name("  RIFTER ").unwrap().id, RIFTER);
    assert!(catalog.resolve_by_name("Not A Real Item").is_none());
}

#[test]
fn test_resolve_by_id() {
    let catalog = create_test_type_catalog();
    assert_eq!(catalog.resolve_by_id(SCORDITE).unwrap().name, "Scordite");
    assert!(catalog.resolve_by_id(MISSING_MATERIAL).is_none());
}

#[test]
fn test_require_by_name() {
    let catalog = create_test_type_catalog();
    assert!(catalog.require_by_name("Pyerite").is_ok());

    let err = catalog.require_by_name("Unobtainium").unwrap_err();
    assert!(matches!(err, Error::TypeNotFound { ref name } if name == "Unobtainium"));
}

#[test]
fn test_insert_keeps_first_record() {
    let mut catalog = create_test_type_catalog();
    let count = catalog.type_count();

    let inserted = catalog.insert(create_test_type(TRITANIUM, "Fake Tritanium", 1, 1, 1, &[]));
    assert!(!inserted);
    assert_eq!(catalog.type_count(), count);
    assert_eq!(catalog.resolve_by_id(TRITANIUM).unwrap().name, "Tritanium");
    assert!(!catalog.has_type("Fake Tritanium"));
}

#[test]
fn test_unit_volume_prefers_packaged() {
    let catalog = create_test_type_catalog();
    assert_eq!(catalog.resolve_by_id(RIFTER).unwrap().unit_volume(), 2500.0);
    assert_eq!(catalog.resolve_by_id(SHIELD_EXTENDER).unwrap().unit_volume(), 10.0);
}

#[test]
fn test_effective_portion_size() {
    let mut record = create_test_type(1, "Zero Portion", 1, 1, 0, &[]);
    assert_eq!(record.effective_portion_size(), 1);
    record.portion_size = 100;
    assert_eq!(record.effective_portion_size(), 100);
}

#[test]
fn test_metadata() {
    let catalog = create_test_type_catalog();
    let metadata = catalog.metadata();
    assert_eq!(metadata.record_count, catalog.type_count());
    assert!(metadata.source_path.is_none());
}
