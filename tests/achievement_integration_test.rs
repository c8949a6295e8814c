//! Integration test: Achievement unlock system
//!
//! Tests that achievements unlock through ordinary play (clicks, purchases,
//! combos, golden bonuses, festivals, prestige), that each unlock is
//! reported exactly once, and that the unlocked set only ever grows.

use beer_clicker::achievements::{AchievementCategory, AchievementId, ALL_ACHIEVEMENTS};
use beer_clicker::effects::{FestivalId, GoldenReward};
use beer_clicker::{Engine, EngineEvent, ManualClock};

fn unlocked_events(engine: &mut Engine<ManualClock>) -> Vec<AchievementId> {
    engine
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            EngineEvent::AchievementUnlocked(id) => Some(id),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Unlocks through play
// =============================================================================

#[test]
fn test_first_click_unlocks_first_sip() {
    let mut engine = Engine::new(ManualClock::new(0));
    engine.click();
    assert_eq!(unlocked_events(&mut engine), vec![AchievementId::FirstSip]);

    engine.click();
    assert!(unlocked_events(&mut engine).is_empty());
}

#[test]
fn test_combo_achievements_unlock_in_one_burst() {
    let clock = ManualClock::new(0);
    let mut engine = Engine::new(clock.clone());
    for _ in 0..20 {
        engine.click();
        clock.advance_ms(50);
    }
    let unlocked = unlocked_events(&mut engine);
    for id in [
        AchievementId::Combo5,
        AchievementId::Combo10,
        AchievementId::Combo20,
    ] {
        assert_eq!(unlocked.iter().filter(|u| **u == id).count(), 1, "{id:?}");
    }
}

#[test]
fn test_slow_clicks_do_not_unlock_combos() {
    let clock = ManualClock::new(0);
    let mut engine = Engine::new(clock.clone());
    for _ in 0..30 {
        engine.click();
        clock.advance_ms(1_500);
    }
    assert_eq!(engine.stats().max_combo_reached, 1);
    assert!(!engine.achievements().is_unlocked(AchievementId::Combo5));
}

#[test]
fn test_purchases_unlock_upgrade_achievements() {
    let mut engine = Engine::new(ManualClock::new(0));
    engine.grant(10_000.0);
    engine.take_events();

    engine.purchase("corkscrew").unwrap();
    assert_eq!(unlocked_events(&mut engine), vec![AchievementId::FirstBuy]);

    for _ in 0..9 {
        engine.purchase("corkscrew").unwrap();
    }
    assert!(unlocked_events(&mut engine).contains(&AchievementId::Collector));
    assert!(!engine.achievements().is_unlocked(AchievementId::Tycoon));
}

#[test]
fn test_earnings_achievements_follow_total_earned() {
    let mut engine = Engine::new(ManualClock::new(0));
    engine.grant(1_000.0);
    let unlocked = unlocked_events(&mut engine);
    assert!(unlocked.contains(&AchievementId::FirstPint));
    assert!(unlocked.contains(&AchievementId::Keg));
    assert!(!unlocked.contains(&AchievementId::BreweryOwner));

    // Spending does not take earnings back.
    engine.purchase("brewing_grandma").unwrap();
    engine.grant(9_100.0);
    assert!(unlocked_events(&mut engine).contains(&AchievementId::BreweryOwner));
}

#[test]
fn test_special_achievements() {
    let mut engine = Engine::new(ManualClock::new(0));
    engine.catch_golden_bonus(GoldenReward::Frenzy);
    assert!(unlocked_events(&mut engine).contains(&AchievementId::GoldenCatch));

    engine.join_festival(FestivalId::StPatrick);
    assert!(unlocked_events(&mut engine).contains(&AchievementId::FestivalFan));

    for _ in 0..9 {
        engine.catch_golden_bonus(GoldenReward::MiniBonus);
    }
    assert!(unlocked_events(&mut engine).contains(&AchievementId::GoldenHunter));
}

// =============================================================================
// Monotonicity
// =============================================================================

#[test]
fn test_unlocks_survive_prestige() {
    let mut engine = Engine::new(ManualClock::new(0));
    engine.click();
    engine.grant(1_000_000.0);
    engine.purchase("corkscrew").unwrap();
    let before = engine.unlocked_achievements().clone();
    assert!(before.contains(&AchievementId::BeerEmperor));

    assert!(engine.prestige());
    assert!(before.is_subset(engine.unlocked_achievements()));
    assert!(engine.achievements().is_unlocked(AchievementId::Prestige1));

    // Replaying the same milestones after the reset reports nothing new.
    engine.take_events();
    engine.grant(15.0);
    engine.purchase("corkscrew").unwrap();
    engine.click();
    assert!(unlocked_events(&mut engine).is_empty());
}

#[test]
fn test_unlocks_restored_from_export() {
    let clock = ManualClock::new(0);
    let mut engine = Engine::new(clock.clone());
    engine.click();
    engine.join_festival(FestivalId::HappyHour);
    let exported = engine.export_save().unwrap();

    let mut restored = Engine::new(clock);
    restored.import_save(&exported).unwrap();
    assert_eq!(restored.unlocked_achievements(), engine.unlocked_achievements());
    assert!(unlocked_events(&mut restored).is_empty());
}

#[test]
fn test_category_counts_track_progress() {
    let mut engine = Engine::new(ManualClock::new(0));
    let (done, total) = engine.achievements().count_by_category(AchievementCategory::Clicks);
    assert_eq!(done, 0);
    assert_eq!(total, 4);

    engine.click();
    let (done, _) = engine.achievements().count_by_category(AchievementCategory::Clicks);
    assert_eq!(done, 1);
    assert_eq!(engine.achievements().total_count(), ALL_ACHIEVEMENTS.len());
}
