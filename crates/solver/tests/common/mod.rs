//! Shared fixtures and invariant checks for the integration tests.
#![allow(dead_code)]

use boxpack_core::{Bin, Item, PackResult};
use std::collections::HashMap;

/// Coordinate slack for the containment and quota checks.
const EPS: f64 = 1e-9;

/// The standard carrier box list used across the regression scenarios,
/// smallest to largest.
pub fn default_bins() -> Vec<Bin> {
    vec![
        Bin::new("F", 220.0, 185.0, 50.0, 20_000.0),
        Bin::new("E", 165.0, 215.0, 100.0, 20_000.0),
        Bin::new("G", 265.0, 165.0, 190.0, 20_000.0),
        Bin::new("C", 425.0, 165.0, 190.0, 20_000.0),
        Bin::new("B", 425.0, 265.0, 190.0, 20_000.0),
        Bin::new("A", 425.0, 265.0, 380.0, 20_000.0),
        Bin::new("Std", 530.0, 380.0, 265.0, 20_000.0),
        Bin::new("Huge-1", 1000.0, 500.0, 500.0, 20_000.0),
        Bin::new("Huge-2", 1000.0, 1000.0, 1000.0, 20_000.0),
    ]
}

/// Returns the bin with the given id, panicking when it is absent.
pub fn bin_of<'a>(result: &'a PackResult, id: &str) -> &'a Bin {
    result
        .bins
        .iter()
        .find(|bin| bin.id() == id)
        .unwrap_or_else(|| panic!("no bin {id} in result"))
}

/// Asserts the structural invariants every result must satisfy:
/// conservation of items, containment, pairwise non-overlap, and the
/// volume and weight quotas with consistent caches.
pub fn assert_packing_invariants(result: &PackResult, input_items: &[Item]) {
    let mut expected: HashMap<&str, usize> = HashMap::new();
    for item in input_items {
        *expected.entry(item.id()).or_insert(0) += 1;
    }

    let mut actual: HashMap<&str, usize> = HashMap::new();
    for bin in &result.bins {
        for item in bin.items() {
            *actual.entry(item.id()).or_insert(0) += 1;
        }
    }
    for item in &result.unfit_items {
        *actual.entry(item.id()).or_insert(0) += 1;
    }

    assert_eq!(
        expected, actual,
        "every input item must appear exactly once in the result"
    );

    for bin in &result.bins {
        let mut volume = 0.0;
        let mut weight = 0.0;

        for (index, item) in bin.items().iter().enumerate() {
            let dims = item.dimensions();
            let pivot = item.pivot();

            assert!(
                pivot.x >= -EPS
                    && pivot.y >= -EPS
                    && pivot.z >= -EPS
                    && pivot.x + dims.x <= bin.width() + EPS
                    && pivot.y + dims.y <= bin.height() + EPS
                    && pivot.z + dims.z <= bin.depth() + EPS,
                "item {} escapes bin {}",
                item.id(),
                bin.id()
            );

            for other in &bin.items()[index + 1..] {
                assert!(
                    !item.intersects(other),
                    "items {} and {} overlap in bin {}",
                    item.id(),
                    other.id(),
                    bin.id()
                );
            }

            volume += item.volume();
            weight += item.weight();
        }

        assert!(
            weight <= bin.max_weight() + EPS,
            "bin {} exceeds its weight limit",
            bin.id()
        );
        assert!(
            volume <= bin.volume() + EPS,
            "bin {} exceeds its volume",
            bin.id()
        );
        assert!(
            (bin.items_volume() - volume).abs() <= EPS && (bin.items_weight() - weight).abs() <= EPS,
            "bin {} caches disagree with its contents",
            bin.id()
        );
    }
}
