//! Integration test: Engine entry points
//!
//! Drives the engine through clicks, purchases, ticks, effects and timers
//! with a manual clock and checks amounts, rates and emitted events.

use beer_clicker::catalog::UpgradeKind;
use beer_clicker::core::constants::{
    AUTOSAVE_DEBOUNCE_MS, AUTOSAVE_MAX_WAIT_MS, MAX_TICKS_PER_PUMP,
};
use beer_clicker::effects::{Effect, EffectKind, FestivalId, GoldenOutcome, GoldenReward};
use beer_clicker::{Clock, Engine, EngineEvent, ManualClock, PurchaseError};

const START_MS: i64 = 1_700_000_000_000;

fn new_engine() -> (ManualClock, Engine<ManualClock>) {
    let clock = ManualClock::new(START_MS);
    let engine = Engine::new(clock.clone());
    (clock, engine)
}

#[test]
fn test_first_producer_purchase_scenario() {
    let (_clock, mut engine) = new_engine();
    engine.grant(15.0);

    assert!(engine.purchase("corkscrew").is_ok());
    assert_eq!(engine.producers().owned("corkscrew"), Some(1));
    assert_eq!(engine.current_amount(), 0.0);
    assert_eq!(engine.lifetime_amount(), 15.0);
    assert_eq!(engine.price_of("corkscrew"), Some(17.0));
}

#[test]
fn test_sixth_rapid_click_earns_combo_bonus() {
    let (clock, mut engine) = new_engine();
    for _ in 0..5 {
        assert_eq!(engine.click(), 1.0);
        clock.advance_ms(100);
    }
    assert_eq!(engine.combo_count(), 5);
    assert_eq!(engine.combo_multiplier(), 1.5);

    let earned = engine.click();
    assert_eq!(earned, 1.5);
    assert_eq!(engine.current_amount(), 6.5);
    assert_eq!(engine.lifetime_amount(), 6.5);
    assert_eq!(engine.stats().total_clicks, 6);
    assert_eq!(engine.stats().max_combo_reached, 6);
}

#[test]
fn test_combo_decays_after_one_second_idle() {
    let (clock, mut engine) = new_engine();
    for _ in 0..7 {
        engine.click();
        clock.advance_ms(500);
    }
    assert_eq!(engine.combo_count(), 7);

    // Last click was 500ms ago; 500ms more reaches the decay deadline.
    clock.advance_ms(500);
    engine.pump();
    assert_eq!(engine.combo_count(), 0);
    assert_eq!(engine.combo_multiplier(), 1.0);
    assert!(engine
        .take_events()
        .contains(&EngineEvent::ComboReset { reached: 7 }));
    // The record survives the reset.
    assert_eq!(engine.stats().max_combo_reached, 7);
}

#[test]
fn test_click_after_gap_starts_new_combo() {
    let (clock, mut engine) = new_engine();
    for _ in 0..10 {
        engine.click();
    }
    assert_eq!(engine.combo_multiplier(), 2.0);

    clock.advance_ms(1_000);
    // No pump in between: the click itself notices the expired window.
    assert_eq!(engine.click(), 1.0);
    assert_eq!(engine.combo_count(), 1);
}

#[test]
fn test_each_click_restarts_decay_window() {
    let (clock, mut engine) = new_engine();
    for _ in 0..20 {
        engine.click();
        clock.advance_ms(900);
    }
    assert_eq!(engine.combo_count(), 20);
    assert_eq!(engine.combo_multiplier(), 3.0);
}

#[test]
fn test_purchase_insufficient_funds_changes_nothing() {
    let (_clock, mut engine) = new_engine();
    engine.grant(14.0);

    let err = engine.purchase("corkscrew").unwrap_err();
    assert_eq!(
        err,
        PurchaseError::InsufficientFunds {
            price: 15.0,
            available: 14.0
        }
    );
    assert_eq!(engine.current_amount(), 14.0);
    assert_eq!(engine.producers().owned("corkscrew"), Some(0));
}

#[test]
fn test_purchase_unknown_and_wrong_catalog() {
    let (_clock, mut engine) = new_engine();
    engine.grant(1_000.0);

    assert_eq!(
        engine.purchase("time_machine"),
        Err(PurchaseError::UnknownUpgrade("time_machine".into()))
    );
    assert!(matches!(
        engine.purchase_producer("double_tap"),
        Err(PurchaseError::UnknownUpgrade(_))
    ));
    assert!(matches!(
        engine.purchase_click_upgrade("corkscrew"),
        Err(PurchaseError::UnknownUpgrade(_))
    ));
    assert_eq!(engine.current_amount(), 1_000.0);
}

#[test]
fn test_click_upgrade_raises_click_rate() {
    let (clock, mut engine) = new_engine();
    engine.grant(100.0);
    engine.purchase_click_upgrade("double_tap").unwrap();
    assert_eq!(engine.per_click_rate(), 2.0);

    let events = engine.take_events();
    assert!(events.contains(&EngineEvent::Purchased {
        id: "double_tap",
        kind: UpgradeKind::ClickUpgrade,
        price: 100.0,
        owned: 1,
    }));

    clock.advance_ms(10);
    assert_eq!(engine.click(), 2.0);
}

#[test]
fn test_tick_produces_and_counts_play_time() {
    let (_clock, mut engine) = new_engine();
    engine.grant(100.0);
    engine.purchase("brewing_grandma").unwrap();
    assert_eq!(engine.auto_production_rate(), 1.0);

    for _ in 0..10 {
        engine.tick();
    }
    assert!((engine.current_amount() - 10.0).abs() < 1e-9);
    assert_eq!(engine.stats().play_time_seconds, 10);
}

#[test]
fn test_pump_runs_one_tick_per_second() {
    let (clock, mut engine) = new_engine();
    engine.grant(100.0);
    engine.purchase("brewing_grandma").unwrap();

    clock.advance_ms(999);
    assert_eq!(engine.pump(), 0);
    clock.advance_ms(1);
    assert_eq!(engine.pump(), 1);
    clock.advance_ms(2_500);
    assert_eq!(engine.pump(), 2);
    // The leftover 500ms carries over.
    clock.advance_ms(500);
    assert_eq!(engine.pump(), 1);
    assert_eq!(engine.stats().play_time_seconds, 4);
}

#[test]
fn test_manual_ticks_are_not_replayed_by_pump() {
    let (clock, mut engine) = new_engine();
    for _ in 0..10 {
        engine.tick();
    }
    clock.advance_secs(1);
    assert_eq!(engine.pump(), 0);
    assert_eq!(engine.stats().play_time_seconds, 10);

    // Pumping resumes once the clock passes the manually covered seconds.
    clock.advance_secs(10);
    assert_eq!(engine.pump(), 1);
    assert_eq!(engine.stats().play_time_seconds, 11);
}

#[test]
fn test_pump_caps_catch_up() {
    let (clock, mut engine) = new_engine();
    clock.advance_secs(3_600);
    assert_eq!(engine.pump(), MAX_TICKS_PER_PUMP);
    clock.advance_secs(1);
    assert_eq!(engine.pump(), 1);
}

#[test]
fn test_effects_multiply_and_expire() {
    let (_clock, mut engine) = new_engine();
    engine.grant(100.0);
    engine.purchase("brewing_grandma").unwrap();

    assert!(engine.add_effect(Effect::new(
        EffectKind::ProductionMultiplier,
        3.0,
        2,
        "Oktoberfest",
        "#f59e0b"
    )));
    assert!(engine.add_effect(Effect::new(
        EffectKind::ProductionMultiplier,
        2.0,
        1,
        "Beer Festival",
        "#3b82f6"
    )));
    assert_eq!(engine.auto_production_rate(), 6.0);

    engine.tick();
    assert_eq!(engine.auto_production_rate(), 3.0);
    engine.tick();
    assert_eq!(engine.auto_production_rate(), 1.0);
    assert!(engine.effects().is_empty());

    let expired: Vec<_> = engine
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, EngineEvent::EffectExpired { .. }))
        .collect();
    assert_eq!(expired.len(), 2);
}

#[test]
fn test_happy_hour_discounts_purchases() {
    let (_clock, mut engine) = new_engine();
    engine.join_festival(FestivalId::HappyHour);
    assert_eq!(engine.price_of("brewing_grandma"), Some(50.0));

    engine.grant(50.0);
    assert!(engine.purchase("brewing_grandma").is_ok());
    assert_eq!(engine.current_amount(), 0.0);
    assert_eq!(engine.stats().festivals_joined, 1);
}

#[test]
fn test_beer_festival_boosts_clicks_and_production() {
    let (_clock, mut engine) = new_engine();
    engine.grant(100.0);
    engine.purchase("brewing_grandma").unwrap();

    assert_eq!(engine.join_festival(FestivalId::BeerFestival), 2);
    assert_eq!(engine.auto_production_rate(), 2.0);
    assert_eq!(engine.per_click_rate(), 2.0);
    assert!(engine
        .take_events()
        .contains(&EngineEvent::FestivalStarted(FestivalId::BeerFestival)));
}

#[test]
fn test_golden_jackpot_credits_instantly() {
    let (_clock, mut engine) = new_engine();
    let outcome = engine.catch_golden_bonus(GoldenReward::Jackpot);
    assert_eq!(outcome, GoldenOutcome::Instant(100.0));
    assert_eq!(engine.current_amount(), 100.0);
    assert_eq!(engine.stats().golden_bonuses_caught, 1);
    assert!(engine.take_events().contains(&EngineEvent::GoldenBonusCaught {
        reward: GoldenReward::Jackpot,
        instant: 100.0
    }));
}

#[test]
fn test_golden_magic_fingers_boosts_clicks() {
    let (_clock, mut engine) = new_engine();
    engine.catch_golden_bonus(GoldenReward::MagicFingers);
    assert_eq!(engine.per_click_rate(), 10.0);
    assert_eq!(engine.click(), 10.0);
}

#[test]
fn test_set_resource_exact_and_grant() {
    let (_clock, mut engine) = new_engine();
    engine.grant(500.0);
    engine.set_resource_exact(42.0);
    assert_eq!(engine.current_amount(), 42.0);
    assert_eq!(engine.lifetime_amount(), 500.0);

    engine.set_resource_exact(2_000.0);
    assert_eq!(engine.lifetime_amount(), 2_000.0);
}

#[test]
fn test_autosave_is_debounced() {
    let (clock, mut engine) = new_engine();
    engine.click();
    assert!(engine.take_save_request().is_none());

    clock.advance_ms(AUTOSAVE_DEBOUNCE_MS - 1);
    engine.click();
    clock.advance_ms(AUTOSAVE_DEBOUNCE_MS - 1);
    // Second click pushed the deadline back.
    assert!(engine.take_save_request().is_none());

    clock.advance_ms(1);
    let snapshot = engine.take_save_request().expect("autosave due");
    assert_eq!(snapshot.stats.total_clicks, 2);
    assert_eq!(snapshot.last_save_timestamp, clock.now_ms());
    assert!(engine.take_save_request().is_none());
}

#[test]
fn test_autosave_fires_during_continuous_clicking() {
    let (clock, mut engine) = new_engine();
    let mut save_times = Vec::new();
    // Ten minutes of clicking, 200ms apart, never idle long enough to
    // let the debounce settle.
    for _ in 0..3_000 {
        engine.click();
        engine.pump();
        if let Some(snapshot) = engine.take_save_request() {
            assert!(snapshot.stats.total_clicks > 0);
            save_times.push(clock.now_ms());
        }
        clock.advance_ms(200);
    }

    assert!(!save_times.is_empty());
    assert!(save_times[0] - START_MS <= AUTOSAVE_MAX_WAIT_MS);
    for pair in save_times.windows(2) {
        assert!(pair[1] - pair[0] <= AUTOSAVE_MAX_WAIT_MS);
    }
    assert!(save_times.len() >= 15);
}
