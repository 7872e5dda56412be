//! Whole-table regression tests over the public API.

use std::collections::HashMap;

use nanoq::{nanoaod, registry, Quantity, QuantityError};

#[test]
fn known_mnemonics_resolve() {
    for (mnemonic, column) in [
        ("Tau_pt", "Tau_pt"),
        ("rho", "Pileup_pudensity"),
        ("prefireWeight", "L1PreFiringWeight_Nom"),
        ("MET_phi", "PuppiMET_phi"),
        ("PFMET_phi", "MET_phi"),
        ("GenParticle_motherid", "GenPart_genPartIdxMother"),
        ("BJet_discriminator", "Jet_btagDeepB"),
    ] {
        let q = registry::lookup(mnemonic).unwrap();
        assert_eq!(q.column_name(), column, "mnemonic {mnemonic}");
    }
}

#[test]
fn unknown_mnemonic_is_an_error() {
    let err = registry::lookup("Tau_momentum").unwrap_err();
    assert_eq!(err, QuantityError::UnknownMnemonic("Tau_momentum".to_string()));
    assert_eq!(err.to_string(), "unknown mnemonic: Tau_momentum");
}

#[test]
fn consts_and_registry_agree() {
    assert_eq!(registry::get("Tau_pt"), Some(&nanoaod::TAU_PT));
    assert_eq!(registry::get("Muon_eta"), Some(&nanoaod::MUON_ETA));
    assert_eq!(registry::get("rho"), Some(&nanoaod::RHO));
    assert_eq!(registry::get("genWeight"), Some(&nanoaod::GEN_WEIGHT));
}

#[test]
fn quantities_work_as_map_keys() {
    let mut readers: HashMap<Quantity, usize> = HashMap::new();
    for (i, (_, q)) in nanoaod::MNEMONICS.iter().enumerate() {
        readers.insert(q.clone(), i);
    }
    // Duplicated columns would collapse here; today every column is unique,
    // so the map must cover the whole table.
    assert_eq!(readers.len(), nanoaod::MNEMONICS.len());
    assert_eq!(readers.get(&Quantity::new("Tau_pt").unwrap()), Some(&5));
}

#[test]
fn independently_built_handles_compare_equal() {
    let a = Quantity::new("Muon_pt").unwrap();
    let b = Quantity::new(String::from("Muon_pt")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, nanoaod::MUON_PT);
}

#[test]
fn table_serializes_as_plain_strings() {
    let json = serde_json::to_string(&nanoaod::RHO).unwrap();
    assert_eq!(json, "\"Pileup_pudensity\"");

    let pairs: Vec<(&str, &Quantity)> =
        nanoaod::MNEMONICS.iter().map(|(m, q)| (*m, q)).collect();
    let json = serde_json::to_string(&pairs).unwrap();
    let back: Vec<(String, Quantity)> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), nanoaod::MNEMONICS.len());
    for ((m, q), (m2, q2)) in nanoaod::MNEMONICS.iter().zip(&back) {
        assert_eq!(m, m2);
        assert_eq!(q, q2);
    }
}

#[test]
fn every_collection_prefix_is_known() {
    let collections = registry::collections();
    for (_, q) in nanoaod::MNEMONICS {
        if let Some(c) = q.collection() {
            assert!(collections.contains(&c), "collection {c} missing");
        }
    }
}
