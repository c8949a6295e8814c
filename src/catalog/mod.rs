//! Producer and click-upgrade catalogs.
//!
//! A [`Catalog`] pairs a static definition table with owned counts. The
//! engine holds two: one for producers and one for click upgrades.

pub mod data;
pub mod types;

pub use data::{get_upgrade_def, CLICK_UPGRADES, PRODUCERS};
pub use types::{upgrade_cost, UpgradeDef, UpgradeKind};

use serde::{Deserialize, Serialize};

/// Owned count for one upgrade, as stored in a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OwnedEntry {
    pub id: String,
    pub owned_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    defs: &'static [UpgradeDef],
    owned: Vec<u32>,
}

impl Catalog {
    pub fn new(defs: &'static [UpgradeDef]) -> Self {
        Self {
            defs,
            owned: vec![0; defs.len()],
        }
    }

    pub fn producers() -> Self {
        Self::new(PRODUCERS)
    }

    pub fn click_upgrades() -> Self {
        Self::new(CLICK_UPGRADES)
    }

    /// Rebuild from stored entries. Entries may come in any order and
    /// missing ids count as zero owned.
    pub fn from_entries(defs: &'static [UpgradeDef], entries: &[OwnedEntry]) -> Result<Self, String> {
        let mut catalog = Self::new(defs);
        let mut seen = vec![false; defs.len()];
        for entry in entries {
            let index = catalog
                .index_of(&entry.id)
                .ok_or_else(|| format!("unknown upgrade id `{}`", entry.id))?;
            if seen[index] {
                return Err(format!("duplicate upgrade id `{}`", entry.id));
            }
            seen[index] = true;
            catalog.owned[index] = entry.owned_count;
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> Vec<OwnedEntry> {
        self.defs
            .iter()
            .zip(&self.owned)
            .map(|(def, &owned_count)| OwnedEntry {
                id: def.id.to_string(),
                owned_count,
            })
            .collect()
    }

    pub fn defs(&self) -> &'static [UpgradeDef] {
        self.defs
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.defs.iter().position(|def| def.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn owned(&self, id: &str) -> Option<u32> {
        self.index_of(id).map(|i| self.owned[i])
    }

    /// Undiscounted price of the next unit.
    pub fn cost(&self, id: &str) -> Option<f64> {
        self.index_of(id)
            .map(|i| self.defs[i].cost(self.owned[i]))
    }

    pub(crate) fn cost_at(&self, index: usize) -> f64 {
        self.defs[index].cost(self.owned[index])
    }

    pub(crate) fn increment(&mut self, index: usize) {
        self.owned[index] = self.owned[index].saturating_add(1);
    }

    /// Σ per-unit rate × owned count, before any multiplier.
    pub fn base_rate(&self) -> f64 {
        self.defs
            .iter()
            .zip(&self.owned)
            .map(|(def, &owned)| def.per_unit_rate * f64::from(owned))
            .sum()
    }

    pub fn owned_total(&self) -> u64 {
        self.owned.iter().map(|&n| u64::from(n)).sum()
    }

    /// Back to the initial owned-count-0 state.
    pub fn reset(&mut self) {
        self.owned.iter_mut().for_each(|n| *n = 0);
    }

    /// Definitions paired with their owned counts.
    pub fn iter(&self) -> impl Iterator<Item = (&'static UpgradeDef, u32)> + '_ {
        self.defs.iter().zip(self.owned.iter().copied())
    }
}
