//! Cost table of multiplicative encodings for ASCII values.
//!
//! An entry `a * b = product` means the value can be built with a helper cell
//! counted up to `a` and a loop adding `b` to the target cell `a` times, at a
//! cost of `a + b` increments. Only products that beat every neighbouring
//! entry reached by plain `+`/`-` steps survive.

use std::collections::BTreeMap;
use tracing::debug;

/// Largest value the table covers.
pub const MAX_VALUE: u8 = 127;

/// Values at or below this are always cheaper to build with plain increments.
pub const DIRECT_LIMIT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorEntry {
    pub factor_a: u8,
    pub factor_b: u8,
    pub product: u8,
}

impl FactorEntry {
    pub fn cost(&self) -> u32 {
        self.factor_a as u32 + self.factor_b as u32
    }
}

/// Immutable, ascending-by-product table of non-dominated factor pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorTable {
    entries: BTreeMap<u8, FactorEntry>,
}

impl FactorTable {
    pub fn build() -> Self {
        let candidates: Vec<FactorEntry> = (1..=MAX_VALUE).filter_map(cheapest_pair).collect();

        let forward = prune_forward(candidates);
        let backward = prune_backward(forward);

        let entries: BTreeMap<u8, FactorEntry> = backward
            .into_iter()
            .filter(|e| e.product > DIRECT_LIMIT)
            .map(|e| (e.product, e))
            .collect();

        debug!(entries = entries.len(), "built factor table");
        Self { entries }
    }

    pub fn get(&self, product: u8) -> Option<&FactorEntry> {
        self.entries.get(&product)
    }

    pub fn contains(&self, product: u8) -> bool {
        self.entries.contains_key(&product)
    }

    /// Entries in ascending product order.
    pub fn iter(&self) -> impl Iterator<Item = &FactorEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::build()
    }
}

// Scans `a` ascending; on equal cost the first pair found wins.
fn cheapest_pair(product: u8) -> Option<FactorEntry> {
    let mut best: Option<FactorEntry> = None;
    for factor_a in 2..product {
        if product % factor_a != 0 {
            continue;
        }
        let factor_b = product / factor_a;
        if factor_b < 2 {
            continue;
        }
        let entry = FactorEntry {
            factor_a,
            factor_b,
            product,
        };
        if best.is_none_or(|b| entry.cost() < b.cost()) {
            best = Some(entry);
        }
    }
    best
}

fn prune_forward(entries: Vec<FactorEntry>) -> Vec<FactorEntry> {
    let mut kept: Vec<FactorEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(prev) = kept.last() {
            let gap = (entry.product - prev.product) as u32;
            if entry.cost() >= prev.cost() + gap {
                continue;
            }
        }
        kept.push(entry);
    }
    kept
}

fn prune_backward(entries: Vec<FactorEntry>) -> Vec<FactorEntry> {
    let mut kept: Vec<FactorEntry> = Vec::with_capacity(entries.len());
    for entry in entries.into_iter().rev() {
        if let Some(next) = kept.last() {
            let gap = (next.product - entry.product) as u32;
            if entry.cost() >= next.cost() + gap {
                continue;
            }
        }
        kept.push(entry);
    }
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(factor_a: u8, factor_b: u8) -> FactorEntry {
        FactorEntry {
            factor_a,
            factor_b,
            product: factor_a * factor_b,
        }
    }

    #[test]
    fn test_cheapest_pair() {
        assert_eq!(cheapest_pair(1), None);
        assert_eq!(cheapest_pair(7), None);
        assert_eq!(cheapest_pair(4), Some(entry(2, 2)));
        assert_eq!(cheapest_pair(12), Some(entry(3, 4)));
        assert_eq!(cheapest_pair(36), Some(entry(6, 6)));
        assert_eq!(cheapest_pair(126), Some(entry(9, 14)));
    }

    #[test]
    fn test_table_bounds() {
        let table = FactorTable::build();
        let products: Vec<u8> = table.iter().map(|e| e.product).collect();

        assert_eq!(table.len(), 42);
        assert_eq!(products.first(), Some(&12));
        assert_eq!(products.last(), Some(&126));
        assert!(products.windows(2).all(|w| w[0] < w[1]));
        assert!(table.iter().all(|e| e.product > DIRECT_LIMIT));
        assert!(table
            .iter()
            .all(|e| e.factor_a > 1 && e.factor_b > 1 && e.factor_a * e.factor_b == e.product));
    }

    #[test]
    fn test_table_contents() {
        let table = FactorTable::build();
        assert_eq!(table.get(12), Some(&entry(3, 4)));
        assert_eq!(table.get(32), Some(&entry(4, 8)));
        assert_eq!(table.get(100), Some(&entry(10, 10)));
        assert_eq!(table.get(121), Some(&entry(11, 11)));
        // 14 = 2 * 7 costs 9, reachable from 12 for 7 + 2
        assert!(!table.contains(14));
        // prime
        assert!(!table.contains(97));
    }

    #[test]
    fn test_table_not_dominated() {
        let entries: Vec<FactorEntry> = FactorTable::build().iter().copied().collect();
        for pair in entries.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let gap = (next.product - prev.product) as u32;
            assert!(next.cost() < prev.cost() + gap, "{:?} dominated by {:?}", next, prev);
            assert!(prev.cost() < next.cost() + gap, "{:?} dominated by {:?}", prev, next);
        }
    }

    #[test]
    fn test_prune_backward_drops_entry_dominated_from_above() {
        // 14 (2*7, cost 9) vs 15 (3*5, cost 8): cheaper to build 15 and step down
        let pruned = prune_backward(vec![entry(2, 7), entry(3, 5)]);
        assert_eq!(pruned, vec![entry(3, 5)]);
    }

    #[test]
    fn test_prune_forward_drops_entry_dominated_from_below() {
        let pruned = prune_forward(vec![entry(3, 4), entry(2, 7), entry(3, 5)]);
        assert_eq!(pruned, vec![entry(3, 4), entry(3, 5)]);
    }
}
