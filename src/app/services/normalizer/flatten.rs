//! Per-format copy rules from parser results to canonical items
//!
//! Each format contributes the metadata it knows about: killmail drop state
//! and location, contract fitted and blueprint copy details, routing and
//! volume for planetary lines, and the solar system of mining ledger entries.
//! Composite results are flattened in sub-result order.

use crate::app::models::{CanonicalItem, ItemMeta};
use crate::app::services::parsers::ParseResult;

/// Flatten a parser result into canonical items, duplicates included
pub fn flatten(result: &ParseResult) -> Vec<CanonicalItem> {
    let mut items = Vec::new();
    flatten_into(result, &mut items);
    items
}

fn flatten_into(result: &ParseResult, items: &mut Vec<CanonicalItem>) {
    match result {
        ParseResult::Composite(composite) => {
            for sub_result in &composite.results {
                flatten_into(sub_result, items);
            }
        }
        ParseResult::AssetList(assets) => {
            items.extend(
                assets
                    .items
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
        ParseResult::CargoScan(scan) => {
            items.extend(scan.items.iter().map(|item| {
                let meta = ItemMeta {
                    bpc: item.bpc,
                    bpc_runs: if item.bpc { 1 } else { 0 },
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::Contract(contract) => {
            items.extend(contract.items.iter().map(|item| {
                let meta = ItemMeta {
                    fitted: item.fitted,
                    bpc: item.bpc,
                    bpc_runs: item.bpc_runs,
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::DScan(scan) => {
            items.extend(scan.items.iter().map(|item| CanonicalItem::new(&item.name, 1)));
        }
        ParseResult::Fitting(fitting) => {
            items.push(CanonicalItem::new(&fitting.ship, 1));
            items.extend(
                fitting
                    .items
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
        ParseResult::Industry(industry) => {
            items.extend(
                industry
                    .items
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
        ParseResult::Killmail(killmail) => {
            for item in &killmail.dropped {
                let meta = ItemMeta {
                    dropped: true,
                    location: item.location.clone(),
                    ..ItemMeta::default()
                };
                items.push(CanonicalItem::with_meta(&item.name, item.quantity, meta));
            }
            for item in &killmail.destroyed {
                let meta = ItemMeta {
                    destroyed: true,
                    location: item.location.clone(),
                    ..ItemMeta::default()
                };
                items.push(CanonicalItem::with_meta(&item.name, item.quantity, meta));
            }
        }
        ParseResult::Listing(listing) => {
            items.extend(
                listing
                    .items
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
        ParseResult::LootHistory(loot) => {
            items.extend(loot.items.iter().map(|item| {
                let meta = ItemMeta {
                    player_name: item.player_name.clone(),
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::MiningLedger(ledger) => {
            items.extend(ledger.items.iter().map(|item| {
                let meta = ItemMeta {
                    location: item.solar_system.clone(),
                    volume: item.volume,
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::PlanetaryInterfaceRoute(pi) => {
            items.extend(pi.items.iter().map(|item| {
                let meta = ItemMeta {
                    routed: item.routed,
                    volume: item.volume,
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::SurveyScan(scan) => {
            items.extend(scan.items.iter().map(|item| {
                let meta = ItemMeta {
                    distance: item.distance.clone(),
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::ViewContents(contents) => {
            items.extend(contents.items.iter().map(|item| {
                let meta = ItemMeta {
                    location: item.location.clone(),
                    ..ItemMeta::default()
                };
                CanonicalItem::with_meta(&item.name, item.quantity, meta)
            }));
        }
        ParseResult::Wallet(wallet) => {
            items.extend(
                wallet
                    .itemized_transactions
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
        ParseResult::Heuristic(heuristic) => {
            items.extend(
                heuristic
                    .items
                    .iter()
                    .map(|item| CanonicalItem::new(&item.name, item.quantity)),
            );
        }
    }
}
