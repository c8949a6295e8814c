//! Headless session runner.
//!
//! Drives a real [`Engine`] with a [`ManualClock`], so results match what a
//! player would see. A seeded [`EventDirector`] supplies golden bonuses and
//! festivals.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::catalog::UpgradeKind;
use crate::core::clock::ManualClock;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::engine::Engine;
use crate::effects::{DirectorEvent, EventDirector};
use log::debug;

/// Fixed session start so runs are reproducible.
const SIM_EPOCH_MS: i64 = 1_700_000_000_000;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let director = match config.seed {
            Some(seed) => EventDirector::seeded(seed.wrapping_add(u64::from(run_idx)), SIM_EPOCH_MS),
            None => EventDirector::from_entropy(SIM_EPOCH_MS),
        };
        let run = simulate_single_run(config, director);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - earned {:.0}, rate {:.1}/s, upgrades {}, prestige {}",
                run_idx + 1,
                config.num_runs,
                run.total_earned,
                run.final_rate,
                run.upgrades_owned,
                run.prestige_level
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.duration_seconds)
}

fn simulate_single_run(config: &SimConfig, mut director: EventDirector) -> RunStats {
    let clock = ManualClock::new(SIM_EPOCH_MS);
    let mut engine = Engine::new(clock.clone());
    let mut prestige_seconds = Vec::new();
    let mut golden_missed = 0u64;

    for second in 0..config.duration_seconds {
        // Spread clicks evenly through the second.
        let clicks = config.clicks_per_second;
        let step_ms = if clicks > 0 {
            TICK_INTERVAL_MS / i64::from(clicks)
        } else {
            TICK_INTERVAL_MS
        };
        let mut spent_ms = 0;
        for _ in 0..clicks {
            engine.click();
            clock.advance_ms(step_ms);
            spent_ms += step_ms;
        }
        clock.advance_ms(TICK_INTERVAL_MS - spent_ms);
        engine.pump();

        if config.simulate_events {
            for event in director.poll(&mut engine) {
                if event == DirectorEvent::GoldenMissed {
                    golden_missed += 1;
                }
            }
            if config.catch_golden && director.golden_visible() {
                director.catch_golden(&mut engine);
            }
        }

        if config.auto_buy {
            buy_best_payback(&mut engine, clicks);
        }

        if config.simulate_prestige
            && engine.prestige_level() < config.target_prestige
            && engine.prestige()
        {
            debug!("sim prestige at {second}s");
            prestige_seconds.push(second + 1);
        }

        // Nothing reads the notifications here.
        engine.take_events();
    }

    RunStats {
        total_earned: engine.stats().total_cookies_ever_earned,
        final_amount: engine.current_amount(),
        final_rate: engine.auto_production_rate(),
        total_clicks: engine.stats().total_clicks,
        upgrades_owned: engine.owned_upgrades(),
        prestige_level: engine.prestige_level(),
        prestige_seconds,
        achievements_unlocked: engine.unlocked_achievements().len(),
        golden_caught: engine.stats().golden_bonuses_caught,
        golden_missed,
        festivals_joined: engine.stats().festivals_joined,
        max_combo: engine.stats().max_combo_reached,
    }
}

/// Keep buying the cheapest resource-per-second gain until the best option
/// is unaffordable. Click upgrades are valued at the configured click rate.
fn buy_best_payback(engine: &mut Engine<ManualClock>, clicks_per_second: u32) {
    loop {
        let best = engine
            .producers()
            .defs()
            .iter()
            .chain(engine.click_upgrades().defs().iter())
            .filter_map(|def| {
                let gain = match def.kind {
                    UpgradeKind::Producer => def.per_unit_rate,
                    UpgradeKind::ClickUpgrade => def.per_unit_rate * f64::from(clicks_per_second),
                };
                if gain <= 0.0 {
                    return None;
                }
                let price = engine.price_of(def.id)?;
                Some((def.id, price, price / gain))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));

        match best {
            Some((id, price, _)) if price <= engine.current_amount() => {
                if engine.purchase(id).is_err() {
                    return;
                }
            }
            _ => return,
        }
    }
}
