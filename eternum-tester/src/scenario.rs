use anyhow::{Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::generate;
use eternum_core::{
    CarrierMode, DONKEY_CAPACITY, DONKEY_RESOURCE, MemoryStore, RealmDirectoryStore,
    RealmSelection, SenderSelection, TransferItem, TransferList, derive_carriers, donkeys_for,
    multiply, run_multiply, run_send_donkeys,
};

pub type Check = fn(&mut ChaCha8Rng) -> Result<()>;

/// A named property checked once per iteration against fresh seeded inputs.
#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: Check,
}

const CATALOG: [TestScenario; 5] = [
    TestScenario {
        key: "smoke",
        name: "Smoke Test",
        check: smoke_check,
    },
    TestScenario {
        key: "multiply",
        name: "Multiply Rounding",
        check: multiply_check,
    },
    TestScenario {
        key: "carriers",
        name: "Donkey Shipments",
        check: carriers_check,
    },
    TestScenario {
        key: "regroup",
        name: "Shipment Regrouping",
        check: regroup_check,
    },
    TestScenario {
        key: "directory",
        name: "Realm Directory Persistence",
        check: directory_check,
    },
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = match name.to_lowercase().as_str() {
        "smoke" => "smoke",
        "multiply" | "scale" => "multiply",
        "carriers" | "donkeys" => "carriers",
        "regroup" => "regroup",
        "directory" | "realms" => "directory",
        _ => return None,
    };
    CATALOG.iter().find(|s| s.key == key).cloned()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.name)).collect()
}

pub fn all_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn expected_product(amount: u64, factor: f64) -> u64 {
    (amount as f64 * factor).round() as u64
}

fn smoke_check(_rng: &mut ChaCha8Rng) -> Result<()> {
    let one = |amount: u64| {
        format!(r#"{{"items":[{{"from":1,"to":2,"resource":"Wood","amount":{amount}}}]}}"#)
    };
    let scaled = run_multiply(&one(100), "1.5")?;
    ensure!(scaled.items[0].amount == 150, "100 x 1.5 should give 150");
    let halved = run_multiply(&one(101), "0.5")?;
    ensure!(halved.items[0].amount == 51, "101 x 0.5 should round up to 51");

    let loads = r#"{"items":[
        {"from":10,"to":1,"resource":"Wood","amount":1000},
        {"from":10,"to":2,"resource":"Wood","amount":200}
    ]}"#;
    let shipments = run_send_donkeys(loads, "99", CarrierMode::AggregateByOrigin)?;
    ensure!(shipments.len() == 1, "one shipment per sending realm");
    let item = &shipments.items[0];
    ensure!(
        item.from == 99 && item.to == 10 && item.resource == DONKEY_RESOURCE && item.amount == 3,
        "unexpected shipment {item:?}"
    );
    ensure!(
        run_multiply("not json", "2").is_err(),
        "malformed transfers must be rejected"
    );
    Ok(())
}

fn multiply_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let list = generate::transfer_list(rng);
    let factor = generate::multiplier(rng);
    let out = multiply(&list, factor);
    ensure!(
        out.len() == list.len(),
        "length changed from {} to {}",
        list.len(),
        out.len()
    );
    for (idx, (before, after)) in list.items.iter().zip(&out.items).enumerate() {
        let expected = expected_product(before.amount, factor);
        ensure!(
            after.amount == expected,
            "item {idx}: {} x {factor} gave {}, expected {expected}",
            before.amount,
            after.amount
        );
        ensure!(
            after.from == before.from && after.to == before.to && after.resource == before.resource,
            "item {idx}: fields other than amount changed"
        );
    }
    Ok(())
}

fn carriers_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let list = generate::transfer_list(rng);
    let source = rng.gen_range(1..10_000);
    for mode in [CarrierMode::AggregateByOrigin, CarrierMode::PerTransfer] {
        let out = derive_carriers(&list, source, mode);
        for item in &out.items {
            ensure!(item.from == source, "{mode:?}: shipment not from {source}");
            ensure!(
                item.resource == DONKEY_RESOURCE,
                "{mode:?}: shipment carries {}",
                item.resource
            );
            ensure!(item.amount > 0, "{mode:?}: empty shipment");
        }
        let needed: u64 = list
            .items
            .iter()
            .map(|i| i.amount.div_ceil(DONKEY_CAPACITY))
            .sum();
        ensure!(
            out.total_amount() == needed,
            "{mode:?}: {} donkeys sent, {needed} needed",
            out.total_amount()
        );
    }
    Ok(())
}

fn regroup_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let list = generate::transfer_list(rng);
    let source = rng.gen_range(1..10_000);
    let first = derive_carriers(&list, source, CarrierMode::AggregateByOrigin);
    check_regrouped(&first, source)
}

/// Shipments all leave `source`, so regrouping them folds into one
/// self-addressed shipment carrying the donkeys each one needs.
fn check_regrouped(first: &TransferList, source: i64) -> Result<()> {
    let again = derive_carriers(first, source, CarrierMode::AggregateByOrigin);
    ensure!(again.len() <= 1, "regrouped shipments share one sender");
    if let Some(item) = again.items.first() {
        ensure!(
            item.from == source && item.to == source,
            "regrouped shipment should run {source} -> {source}, got {item:?}"
        );
        let needed: u64 = first.items.iter().map(|i| donkeys_for(i.amount)).sum();
        ensure!(
            item.amount == needed,
            "regrouped into {} donkeys, {needed} needed",
            item.amount
        );
    } else {
        ensure!(first.is_empty(), "shipments vanished when regrouped");
    }
    Ok(())
}

fn directory_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let directory = generate::directory(rng);
    let text = directory.to_pretty_json();

    let backend = MemoryStore::new();
    let mut store = RealmDirectoryStore::new(backend.clone());
    match store.save(&text) {
        Ok(saved) => ensure!(*saved == directory, "saved directory differs"),
        Err(err) => anyhow::bail!("valid directory rejected: {err}"),
    }

    let mut reloaded = RealmDirectoryStore::new(backend);
    ensure!(
        *reloaded.load() == directory,
        "reloaded directory differs from the saved one"
    );

    let mut sender = SenderSelection::new();
    sender.reconcile(&directory);
    match sender.selection() {
        RealmSelection::Realm(id) => ensure!(
            directory.find(id).is_some_and(eternum_core::Realm::is_carrier_source),
            "auto-selected realm {id} does not produce donkeys"
        ),
        RealmSelection::None => ensure!(
            directory.first_carrier_source().is_none(),
            "donkey realm available but nothing selected"
        ),
        RealmSelection::Custom => anyhow::bail!("reconcile entered custom mode"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn every_catalog_scenario_passes_for_fixed_seeds() {
        for scenario in CATALOG {
            for seed in [1_u64, 1337, 0xC0FFEE] {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (scenario.check)(&mut rng)
                    .unwrap_or_else(|e| panic!("{} seed {seed}: {e}", scenario.name));
            }
        }
    }

    #[test]
    fn aliases_resolve_to_catalog_entries() {
        assert_eq!(get_scenario("DONKEYS").map(|s| s.key), Some("carriers"));
        assert_eq!(get_scenario("realms").map(|s| s.key), Some("directory"));
        assert!(get_scenario("unknown").is_none());
    }

    #[test]
    fn listing_matches_catalog() {
        let listed = list_scenarios();
        assert_eq!(listed.len(), CATALOG.len());
        assert!(listed.iter().any(|(key, _)| *key == "regroup"));
        assert_eq!(all_keys().len(), listed.len());
    }

    #[test]
    fn regrouping_folds_shipments_into_one_self_addressed_load() {
        let shipments = TransferList::new(vec![
            TransferItem::new(7, 10, DONKEY_RESOURCE, 3),
            TransferItem::new(7, 11, DONKEY_RESOURCE, 1),
        ]);
        let again = derive_carriers(&shipments, 7, CarrierMode::AggregateByOrigin);
        assert_eq!(again.items, vec![TransferItem::new(7, 7, DONKEY_RESOURCE, 2)]);
        check_regrouped(&shipments, 7).unwrap();
        check_regrouped(&TransferList::default(), 7).unwrap();
    }

    #[test]
    fn regroup_check_rejects_shipments_from_another_realm() {
        let stray = TransferList::new(vec![TransferItem::new(3, 10, DONKEY_RESOURCE, 1)]);
        let err = check_regrouped(&stray, 7).unwrap_err();
        assert!(err.to_string().contains("7 -> 7"), "{err}");
    }

    #[test]
    fn expected_product_rounds_half_up() {
        assert_eq!(expected_product(101, 0.5), 51);
        assert_eq!(expected_product(100, 1.5), 150);
        assert_eq!(expected_product(1001, 2.0), 2002);
    }
}
