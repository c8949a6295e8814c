//! Static upgrade tables, cheapest first.

use super::types::{UpgradeDef, UpgradeKind};

pub const PRODUCERS: &[UpgradeDef] = &[
    UpgradeDef {
        id: "corkscrew",
        kind: UpgradeKind::Producer,
        name: "Corkscrew",
        description: "An automatic corkscrew that pops bottles open.",
        icon: "🍾",
        base_cost: 15.0,
        per_unit_rate: 0.1,
    },
    UpgradeDef {
        id: "brewing_grandma",
        kind: UpgradeKind::Producer,
        name: "Brewing Grandma",
        description: "Grandma brews home beer in her cellar.",
        icon: "👵",
        base_cost: 100.0,
        per_unit_rate: 1.0,
    },
    UpgradeDef {
        id: "hop_field",
        kind: UpgradeKind::Producer,
        name: "Hop Field",
        description: "An organic hop field for craft production.",
        icon: "🌾",
        base_cost: 1_100.0,
        per_unit_rate: 8.0,
    },
    UpgradeDef {
        id: "microbrewery",
        kind: UpgradeKind::Producer,
        name: "Microbrewery",
        description: "A microbrewery that fills kegs around the clock.",
        icon: "🍺",
        base_cost: 12_000.0,
        per_unit_rate: 47.0,
    },
    UpgradeDef {
        id: "megabrewery",
        kind: UpgradeKind::Producer,
        name: "Megabrewery",
        description: "An industrial brewery with giant vats.",
        icon: "🏭",
        base_cost: 130_000.0,
        per_unit_rate: 260.0,
    },
    UpgradeDef {
        id: "pub_franchise",
        kind: UpgradeKind::Producer,
        name: "Pub Franchise",
        description: "A pub chain selling your beer worldwide.",
        icon: "🍻",
        base_cost: 1_400_000.0,
        per_unit_rate: 1_400.0,
    },
    UpgradeDef {
        id: "abbey",
        kind: UpgradeKind::Producer,
        name: "Brewing Abbey",
        description: "Trappist monks brewing the sacred ale.",
        icon: "⛪",
        base_cost: 20_000_000.0,
        per_unit_rate: 7_800.0,
    },
    UpgradeDef {
        id: "cosmic_portal",
        kind: UpgradeKind::Producer,
        name: "Cosmic Beer Portal",
        description: "A dimensional portal importing beer from other worlds.",
        icon: "🌀",
        base_cost: 330_000_000.0,
        per_unit_rate: 44_000.0,
    },
];

pub const CLICK_UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        id: "double_tap",
        kind: UpgradeKind::ClickUpgrade,
        name: "Double Tap",
        description: "+1 beer per click",
        icon: "🍺",
        base_cost: 100.0,
        per_unit_rate: 1.0,
    },
    UpgradeDef {
        id: "jitter_click",
        kind: UpgradeKind::ClickUpgrade,
        name: "Jitter Click",
        description: "+5 beers per click",
        icon: "🖱️",
        base_cost: 500.0,
        per_unit_rate: 5.0,
    },
    UpgradeDef {
        id: "turbo_tap",
        kind: UpgradeKind::ClickUpgrade,
        name: "Turbo Tap",
        description: "+25 beers per click",
        icon: "💪",
        base_cost: 5_000.0,
        per_unit_rate: 25.0,
    },
    UpgradeDef {
        id: "hop_cascade",
        kind: UpgradeKind::ClickUpgrade,
        name: "Hop Cascade",
        description: "+100 beers per click",
        icon: "⚡",
        base_cost: 50_000.0,
        per_unit_rate: 100.0,
    },
];

/// Look up a definition in either table.
pub fn get_upgrade_def(id: &str) -> Option<&'static UpgradeDef> {
    PRODUCERS
        .iter()
        .chain(CLICK_UPGRADES.iter())
        .find(|def| def.id == id)
}
