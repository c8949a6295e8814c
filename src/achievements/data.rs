//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // Clicks
    AchievementDef {
        id: AchievementId::FirstSip,
        name: "First Sip",
        description: "Click for the first time",
        category: AchievementCategory::Clicks,
        icon: "🍺",
        condition: |v| v.stats.total_clicks >= 1,
    },
    AchievementDef {
        id: AchievementId::Regular,
        name: "Bar Regular",
        description: "100 clicks",
        category: AchievementCategory::Clicks,
        icon: "🍻",
        condition: |v| v.stats.total_clicks >= 100,
    },
    AchievementDef {
        id: AchievementId::Barman,
        name: "Professional Barman",
        description: "1,000 clicks",
        category: AchievementCategory::Clicks,
        icon: "🎯",
        condition: |v| v.stats.total_clicks >= 1_000,
    },
    AchievementDef {
        id: AchievementId::ClickLegend,
        name: "Click Legend",
        description: "10,000 clicks",
        category: AchievementCategory::Clicks,
        icon: "🏆",
        condition: |v| v.stats.total_clicks >= 10_000,
    },
    // Lifetime earnings
    AchievementDef {
        id: AchievementId::FirstPint,
        name: "First Pint",
        description: "Earn 100 beers",
        category: AchievementCategory::Production,
        icon: "🥇",
        condition: |v| v.stats.total_cookies_ever_earned >= 100.0,
    },
    AchievementDef {
        id: AchievementId::Keg,
        name: "First Keg",
        description: "Earn 1,000 beers",
        category: AchievementCategory::Production,
        icon: "🛢️",
        condition: |v| v.stats.total_cookies_ever_earned >= 1_000.0,
    },
    AchievementDef {
        id: AchievementId::BreweryOwner,
        name: "Brewery Owner",
        description: "Earn 10,000 beers",
        category: AchievementCategory::Production,
        icon: "🏭",
        condition: |v| v.stats.total_cookies_ever_earned >= 10_000.0,
    },
    AchievementDef {
        id: AchievementId::BeerBaron,
        name: "Beer Baron",
        description: "Earn 100,000 beers",
        category: AchievementCategory::Production,
        icon: "👑",
        condition: |v| v.stats.total_cookies_ever_earned >= 100_000.0,
    },
    AchievementDef {
        id: AchievementId::BeerEmperor,
        name: "Beer Emperor",
        description: "Earn 1,000,000 beers",
        category: AchievementCategory::Production,
        icon: "🌟",
        condition: |v| v.stats.total_cookies_ever_earned >= 1_000_000.0,
    },
    // Owned upgrades
    AchievementDef {
        id: AchievementId::FirstBuy,
        name: "First Investment",
        description: "Buy your first upgrade",
        category: AchievementCategory::Upgrades,
        icon: "🛒",
        condition: |v| v.owned_upgrades >= 1,
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Own 10 upgrades",
        category: AchievementCategory::Upgrades,
        icon: "📦",
        condition: |v| v.owned_upgrades >= 10,
    },
    AchievementDef {
        id: AchievementId::Tycoon,
        name: "Beer Tycoon",
        description: "Own 50 upgrades",
        category: AchievementCategory::Upgrades,
        icon: "💎",
        condition: |v| v.owned_upgrades >= 50,
    },
    AchievementDef {
        id: AchievementId::Empire,
        name: "Brewing Empire",
        description: "Own 100 upgrades",
        category: AchievementCategory::Upgrades,
        icon: "🏰",
        condition: |v| v.owned_upgrades >= 100,
    },
    // Special
    AchievementDef {
        id: AchievementId::Combo5,
        name: "Chain Reaction",
        description: "Reach a 5-click combo",
        category: AchievementCategory::Special,
        icon: "🔥",
        condition: |v| v.stats.max_combo_reached >= 5,
    },
    AchievementDef {
        id: AchievementId::Combo10,
        name: "Frenzied",
        description: "Reach a 10-click combo",
        category: AchievementCategory::Special,
        icon: "💥",
        condition: |v| v.stats.max_combo_reached >= 10,
    },
    AchievementDef {
        id: AchievementId::Combo20,
        name: "Hop Rage",
        description: "Reach a 20-click combo",
        category: AchievementCategory::Special,
        icon: "🌋",
        condition: |v| v.stats.max_combo_reached >= 20,
    },
    AchievementDef {
        id: AchievementId::GoldenCatch,
        name: "Golden Beer",
        description: "Catch a golden beer",
        category: AchievementCategory::Special,
        icon: "✨",
        condition: |v| v.stats.golden_bonuses_caught >= 1,
    },
    AchievementDef {
        id: AchievementId::GoldenHunter,
        name: "Golden Hunter",
        description: "Catch 10 golden beers",
        category: AchievementCategory::Special,
        icon: "🥇",
        condition: |v| v.stats.golden_bonuses_caught >= 10,
    },
    AchievementDef {
        id: AchievementId::FestivalFan,
        name: "Festival Fan",
        description: "Take part in a festival",
        category: AchievementCategory::Special,
        icon: "🎪",
        condition: |v| v.stats.festivals_joined >= 1,
    },
    AchievementDef {
        id: AchievementId::Prestige1,
        name: "Rebirth",
        description: "Prestige for the first time",
        category: AchievementCategory::Special,
        icon: "⭐",
        condition: |v| v.stats.prestige_level >= 1,
    },
];

/// Get the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get all achievements in a category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
