//! Upgrade definitions and the cost curve.

use crate::core::constants::COST_GROWTH_FACTOR;

/// What an upgrade contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    /// Adds to automatic per-second production.
    Producer,
    /// Adds to the amount earned per click.
    ClickUpgrade,
}

/// Static definition of a purchasable upgrade.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    /// Per unit: resource per second for producers, resource per click for
    /// click upgrades.
    pub per_unit_rate: f64,
}

impl UpgradeDef {
    /// Price of the next unit when `owned` are already held.
    pub fn cost(&self, owned: u32) -> f64 {
        upgrade_cost(self.base_cost, owned)
    }
}

/// `floor(base × 1.15^owned)`.
pub fn upgrade_cost(base_cost: f64, owned: u32) -> f64 {
    let exponent = i32::try_from(owned).unwrap_or(i32::MAX);
    (base_cost * COST_GROWTH_FACTOR.powi(exponent)).floor()
}
