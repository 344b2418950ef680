//! Tests for per-format flattening

use crate::app::services::normalizer::{flatten, normalize};
use crate::app::services::parsers::{
    CargoScan, CargoScanItem, Composite, Contract, ContractItem, DScan, DScanItem, Fitting,
    FittingItem, Industry, IndustryItem, Killmail, KillmailItem, Listing, ListingItem,
    LootHistory, LootItem, MiningLedger, MiningLedgerItem, ParseResult, PlanetaryInteraction,
    PlanetaryItem, Wallet, WalletTransaction,
};

fn killmail() -> ParseResult {
    ParseResult::Killmail(Killmail {
        destroyed: vec![KillmailItem {
            name: "EMP S".to_string(),
            quantity: 200,
            location: "Cargo".to_string(),
        }],
        dropped: vec![KillmailItem {
            name: "Tritanium".to_string(),
            quantity: 1000,
            location: "Cargo".to_string(),
        }],
        lines: vec![1, 2],
        ..Killmail::default()
    })
}

#[test]
fn test_killmail_dropped_before_destroyed() {
    let items = flatten(&killmail());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Tritanium");
    assert!(items[0].meta.dropped);
    assert!(!items[0].meta.destroyed);
    assert_eq!(items[1].name, "EMP S");
    assert!(items[1].meta.destroyed);
    assert_eq!(items[1].meta.location, "Cargo");
}

#[test]
fn test_fitting_counts_ship() {
    let result = ParseResult::Fitting(Fitting {
        ship: "Rifter".to_string(),
        name: "Test".to_string(),
        items: vec![
            FittingItem {
                name: "EMP S".to_string(),
                quantity: 1,
            },
            FittingItem {
                name: "EMP S".to_string(),
                quantity: 1,
            },
        ],
        lines: vec![1, 2, 3],
    });

    let items = normalize(&result);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Rifter");
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[1].quantity, 2);
}

#[test]
fn test_blueprint_copy_metadata() {
    let cargo = ParseResult::CargoScan(CargoScan {
        items: vec![CargoScanItem {
            name: "Rifter Blueprint".to_string(),
            quantity: 1,
            bpc: true,
        }],
        lines: vec![1],
    });
    let contract = ParseResult::Contract(Contract {
        items: vec![ContractItem {
            name: "Slasher Blueprint".to_string(),
            quantity: 1,
            item_type: "Frigate Blueprint".to_string(),
            category: "Blueprint".to_string(),
            details: "BLUEPRINT COPY - Runs: 7".to_string(),
            fitted: false,
            bpc: true,
            bpc_runs: 7,
        }],
        lines: vec![1],
    });

    let cargo_items = flatten(&cargo);
    assert!(cargo_items[0].meta.bpc);
    assert_eq!(cargo_items[0].meta.bpc_runs, 1);

    let contract_items = flatten(&contract);
    assert!(contract_items[0].meta.bpc);
    assert_eq!(contract_items[0].meta.bpc_runs, 7);
}

#[test]
fn test_format_specific_metadata() {
    let loot = ParseResult::LootHistory(LootHistory {
        items: vec![LootItem {
            time: "20:00:00".to_string(),
            player_name: "Looter".to_string(),
            quantity: 3,
            name: "Tritanium".to_string(),
        }],
        lines: vec![1],
    });
    let pi = ParseResult::PlanetaryInterfaceRoute(PlanetaryInteraction {
        items: vec![PlanetaryItem {
            name: "Coolant".to_string(),
            quantity: 10,
            routed: true,
            volume: 15.0,
        }],
        lines: vec![1],
    });

    assert_eq!(flatten(&loot)[0].meta.player_name, "Looter");
    let pi_items = flatten(&pi);
    assert!(pi_items[0].meta.routed);
    assert_eq!(pi_items[0].meta.volume, 15.0);
}

#[test]
fn test_dscan_and_wallet_quantities() {
    let dscan = ParseResult::DScan(DScan {
        items: vec![
            DScanItem {
                type_id: None,
                label: "A".to_string(),
                name: "Rifter".to_string(),
                distance: "1 km".to_string(),
            },
            DScanItem {
                type_id: Some(587),
                label: "B".to_string(),
                name: "Rifter".to_string(),
                distance: "-".to_string(),
            },
        ],
        lines: vec![1, 2],
    });
    let wallet = ParseResult::Wallet(Wallet {
        itemized_transactions: vec![WalletTransaction {
            datetime: "2024.05.01 12:00".to_string(),
            quantity: 25,
            name: "Pyerite".to_string(),
            price: 10.0,
            total: 250.0,
            client: "Someone".to_string(),
            location: "Jita".to_string(),
        }],
        journal_entries: Vec::new(),
        lines: vec![1, 2],
    });

    let scanned = normalize(&dscan);
    assert_eq!(scanned.len(), 1);
    assert_eq!(scanned[0].quantity, 2);
    assert_eq!(flatten(&wallet)[0].quantity, 25);
}

#[test]
fn test_composite_flattens_in_order() {
    let listing = ParseResult::Listing(Listing {
        items: vec![
            ListingItem {
                name: "Tritanium".to_string(),
                quantity: 10,
            },
            ListingItem {
                name: "tritanium".to_string(),
                quantity: 5,
            },
        ],
        lines: vec![1, 2],
    });
    let composite = ParseResult::Composite(Composite {
        results: vec![killmail(), listing],
        lines: vec![1, 2, 3, 4],
    });

    let items = normalize(&composite);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Tritanium");
    assert_eq!(items[0].quantity, 1015);
    assert!(items[0].meta.dropped);
    assert_eq!(items[1].name, "EMP S");
}

#[test]
fn test_mining_ledger_and_industry() {
    let ledger = ParseResult::MiningLedger(MiningLedger {
        items: vec![MiningLedgerItem {
            date: "2017.10.25".to_string(),
            name: "Veldspar".to_string(),
            quantity: 6018,
            volume: 601.8,
            estimated_value: 47_152.67,
            solar_system: "Jita".to_string(),
        }],
        lines: vec![1],
    });
    let items = flatten(&ledger);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 6018);
    assert_eq!(items[0].meta.location, "Jita");
    assert_eq!(items[0].meta.volume, 601.8);

    let industry = ParseResult::Industry(Industry {
        items: vec![
            IndustryItem {
                name: "Tritanium".to_string(),
                quantity: 32_000,
            },
            IndustryItem {
                name: "Pyerite".to_string(),
                quantity: 6_000,
            },
        ],
        lines: vec![1, 2],
    });
    let items = flatten(&industry);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].name, "Pyerite");
    assert_eq!(items[1].quantity, 6_000);
    assert_eq!(items[1].meta, Default::default());
}
