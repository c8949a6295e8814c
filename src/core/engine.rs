//! The game engine.
//!
//! [`Engine`] is the single writer of all authoritative state. Collaborators
//! call its entry points and read its getters; every entry point runs to
//! completion, fires any due timers first, and re-evaluates achievements
//! before returning.

use super::clock::Clock;
use super::constants::{
    AUTOSAVE_DEBOUNCE_MS, AUTOSAVE_MAX_WAIT_MS, COMBO_DECAY_MS, MAX_TICKS_PER_PUMP, PRESTIGE_THRESHOLD,
    TICK_INTERVAL_MS,
};
use super::events::EngineEvent;
use super::ledger::ResourceLedger;
use super::offline::{self, OfflineReport};
use super::stats::{Stats, StatsView};
use super::timer::{Scheduler, TimerHandle};
use crate::achievements::{AchievementId, AchievementTracker};
use crate::catalog::Catalog;
use crate::combo::ComboTracker;
use crate::effects::{get_festival_def, Effect, EffectStack, FestivalId, GoldenOutcome, GoldenReward};
use crate::error::{PurchaseError, SaveError};
use crate::prestige::{self, PrestigeState};
use crate::save::{codec, Role, SaveSnapshot};
use log::{debug, info, warn};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineTimer {
    ComboDecay,
    Autosave,
}

/// Which catalog a purchase may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogSel {
    Any,
    Producers,
    ClickUpgrades,
}

pub struct Engine<C: Clock> {
    clock: C,
    ledger: ResourceLedger,
    producers: Catalog,
    click_upgrades: Catalog,
    effects: EffectStack,
    combo: ComboTracker,
    prestige: PrestigeState,
    achievements: AchievementTracker,
    stats: Stats,
    role: Role,
    scheduler: Scheduler<EngineTimer>,
    combo_timer: Option<TimerHandle>,
    autosave_timer: Option<TimerHandle>,
    save_requested: bool,
    /// When the oldest change not yet covered by a save request happened.
    unsaved_since: Option<i64>,
    last_tick_ms: i64,
    events: Vec<EngineEvent>,
}

impl<C: Clock> Engine<C> {
    /// A brand-new session.
    pub fn new(clock: C) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            clock,
            ledger: ResourceLedger::new(),
            producers: Catalog::producers(),
            click_upgrades: Catalog::click_upgrades(),
            effects: EffectStack::new(),
            combo: ComboTracker::new(),
            prestige: PrestigeState::default(),
            achievements: AchievementTracker::new(),
            stats: Stats::default(),
            role: Role::Player,
            scheduler: Scheduler::new(),
            combo_timer: None,
            autosave_timer: None,
            save_requested: false,
            unsaved_since: None,
            last_tick_ms,
            events: Vec::new(),
        }
    }

    /// Restore a session from a snapshot without offline catch-up.
    pub fn from_snapshot(snapshot: &SaveSnapshot, clock: C) -> Result<Self, SaveError> {
        let mut engine = Self::new(clock);
        engine.apply_snapshot(snapshot)?;
        Ok(engine)
    }

    /// Session start: restore `saved` (or start fresh) and credit offline
    /// progress once. The report is `None` when there was no usable save.
    pub fn start_session(saved: Option<SaveSnapshot>, clock: C) -> (Self, Option<OfflineReport>) {
        let mut engine = Self::new(clock);
        let Some(snapshot) = saved else {
            return (engine, None);
        };
        if let Err(e) = engine.apply_snapshot(&snapshot) {
            warn!("saved state rejected, starting fresh: {e}");
            return (engine, None);
        }
        engine.evaluate_achievements();

        let now = engine.clock.now_ms();
        let report = offline::estimate(
            engine.auto_production_rate(),
            snapshot.last_save_timestamp,
            now,
        );
        if report.credited() {
            info!(
                "offline for {:.0}s, credited {} at {}% efficiency",
                report.elapsed_seconds, report.earned, report.efficiency_percent
            );
            engine.credit_earned(report.earned);
            engine.events.push(EngineEvent::OfflineCredit(report.clone()));
            engine.after_mutation();
        }
        (engine, Some(report))
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Manual click. Returns the amount credited.
    pub fn click(&mut self) -> f64 {
        let now = self.fire_due_timers();

        // Earned at the combo level reached before this click.
        let earned = self.per_click_rate();
        self.credit_earned(earned);
        self.stats.total_clicks += 1;

        let count = self.combo.register_click(now);
        self.stats.record_combo(count);
        self.scheduler
            .reschedule(&mut self.combo_timer, now + COMBO_DECAY_MS, EngineTimer::ComboDecay);

        self.after_mutation();
        earned
    }

    /// Buy one unit of any producer or click upgrade.
    pub fn purchase(&mut self, id: &str) -> Result<(), PurchaseError> {
        self.purchase_from(CatalogSel::Any, id)
    }

    pub fn purchase_producer(&mut self, id: &str) -> Result<(), PurchaseError> {
        self.purchase_from(CatalogSel::Producers, id)
    }

    pub fn purchase_click_upgrade(&mut self, id: &str) -> Result<(), PurchaseError> {
        self.purchase_from(CatalogSel::ClickUpgrades, id)
    }

    fn purchase_from(&mut self, sel: CatalogSel, id: &str) -> Result<(), PurchaseError> {
        self.fire_due_timers();

        let reduction = self.effects.cost_reduction_factor();
        let in_producers = self.producers.contains(id);
        let catalog = match sel {
            CatalogSel::Producers | CatalogSel::Any if in_producers => &mut self.producers,
            CatalogSel::ClickUpgrades | CatalogSel::Any if self.click_upgrades.contains(id) => {
                &mut self.click_upgrades
            }
            _ => return Err(PurchaseError::UnknownUpgrade(id.to_string())),
        };
        let index = catalog
            .index_of(id)
            .ok_or_else(|| PurchaseError::UnknownUpgrade(id.to_string()))?;

        let price = (catalog.cost_at(index) * reduction).floor();
        self.ledger.debit(price)?;
        catalog.increment(index);

        let def = &catalog.defs()[index];
        let owned = catalog.owned(id).unwrap_or_default();
        debug!("bought {} #{} for {}", def.id, owned, price);
        self.events.push(EngineEvent::Purchased {
            id: def.id,
            kind: def.kind,
            price,
            owned,
        });

        self.after_mutation();
        Ok(())
    }

    /// Reset the run for a permanent bonus. Returns false (and changes
    /// nothing) below the threshold.
    pub fn prestige(&mut self) -> bool {
        self.fire_due_timers();
        if !self.can_prestige() {
            return false;
        }

        let level = self.prestige.advance();
        self.ledger.reset_for_prestige();
        self.producers.reset();
        self.click_upgrades.reset();
        self.stats.prestige_level = level;

        info!(
            "prestige to level {} (+{:.0}% permanent)",
            level,
            self.prestige.bonus_percent()
        );
        self.events.push(EngineEvent::PrestigeGained { level });
        self.after_mutation();
        true
    }

    /// Run one second of game time now. The pump schedule moves forward by
    /// the same second so the two drivers never count it twice.
    pub fn tick(&mut self) {
        self.fire_due_timers();
        self.last_tick_ms += TICK_INTERVAL_MS;
        self.run_tick();
    }

    /// One second of game time: production, effect expiry, play time.
    fn run_tick(&mut self) {
        let produced = self.auto_production_rate();
        self.credit_earned(produced);
        self.stats.play_time_seconds += 1;

        for expired in self.effects.tick() {
            debug!("effect expired: {} ({:?})", expired.label, expired.kind);
            self.events.push(EngineEvent::EffectExpired {
                label: expired.label,
                kind: expired.kind,
            });
        }

        self.after_mutation();
    }

    /// Cooperative driver. Fires due timers, then runs one [`tick`](Self::tick)
    /// per whole second since the last one, at most `MAX_TICKS_PER_PUMP`.
    /// Returns the number of ticks run.
    pub fn pump(&mut self) -> u32 {
        let now = self.fire_due_timers();
        let elapsed = now - self.last_tick_ms;
        if elapsed < TICK_INTERVAL_MS {
            return 0;
        }

        let due = elapsed / TICK_INTERVAL_MS;
        self.last_tick_ms += due * TICK_INTERVAL_MS;
        let run = u32::try_from(due).unwrap_or(u32::MAX).min(MAX_TICKS_PER_PUMP);
        if i64::from(run) < due {
            debug!("dropping {} overdue ticks", due - i64::from(run));
        }
        for _ in 0..run {
            self.run_tick();
        }
        run
    }

    pub fn add_effect(&mut self, effect: Effect) -> bool {
        let label = effect.label.clone();
        let kind = effect.kind;
        let seconds = effect.remaining_seconds;
        if !self.effects.add(effect) {
            return false;
        }
        debug!("effect started: {} ({:?}, {}s)", label, kind, seconds);
        self.events.push(EngineEvent::EffectStarted {
            label,
            kind,
            seconds,
        });
        true
    }

    /// Apply a caught golden bonus.
    pub fn catch_golden_bonus(&mut self, reward: GoldenReward) -> GoldenOutcome {
        self.fire_due_timers();
        self.stats.golden_bonuses_caught += 1;

        let outcome = reward.outcome(self.auto_production_rate());
        let instant = match &outcome {
            GoldenOutcome::Instant(amount) => {
                self.credit_earned(*amount);
                *amount
            }
            GoldenOutcome::Effect(effect) => {
                self.add_effect(effect.clone());
                0.0
            }
        };

        info!("golden bonus caught: {}", reward.label());
        self.events
            .push(EngineEvent::GoldenBonusCaught { reward, instant });
        self.after_mutation();
        outcome
    }

    /// Start a festival. Returns the number of effects it added.
    pub fn join_festival(&mut self, id: FestivalId) -> usize {
        self.fire_due_timers();
        let def = get_festival_def(id);
        let mut added = 0;
        for effect in def.effects() {
            if self.add_effect(effect) {
                added += 1;
            }
        }
        self.stats.festivals_joined += 1;

        info!("festival started: {} ({}s)", def.name, def.duration_seconds);
        self.events.push(EngineEvent::FestivalStarted(id));
        self.after_mutation();
        added
    }

    /// Admin override of the current amount.
    pub fn set_resource_exact(&mut self, amount: f64) {
        self.fire_due_timers();
        self.ledger.set_exact(amount);
        self.after_mutation();
    }

    /// Admin credit.
    pub fn grant(&mut self, amount: f64) {
        self.fire_due_timers();
        self.credit_earned(amount);
        self.after_mutation();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.request_autosave();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub fn snapshot(&self) -> SaveSnapshot {
        SaveSnapshot {
            current_amount: self.ledger.current(),
            lifetime_amount: self.ledger.lifetime(),
            producers: self.producers.entries(),
            click_upgrades: self.click_upgrades.entries(),
            prestige_level: self.prestige.level(),
            unlocked_achievement_ids: self.achievements.unlocked().iter().copied().collect(),
            stats: self.stats.clone(),
            last_save_timestamp: self.clock.now_ms(),
            role: self.role,
        }
    }

    pub fn export_save(&self) -> Result<String, SaveError> {
        codec::export(&self.snapshot())
    }

    /// Replace all persisted state with an exported save. On error nothing
    /// changes. Effects and the combo are cleared; no offline credit is given.
    pub fn import_save(&mut self, text: &str) -> Result<(), SaveError> {
        self.fire_due_timers();
        let snapshot = match codec::import(text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("import rejected: {e}");
                return Err(e);
            }
        };
        self.apply_snapshot(&snapshot)?;
        self.clear_ephemeral();

        info!("save imported");
        self.events.push(EngineEvent::SaveImported);
        self.after_mutation();
        Ok(())
    }

    /// Wipe all progress, including prestige and achievements. The role is
    /// kept.
    pub fn reset_save(&mut self) {
        self.ledger = ResourceLedger::new();
        self.producers.reset();
        self.click_upgrades.reset();
        self.prestige = PrestigeState::default();
        self.achievements = AchievementTracker::new();
        self.stats = Stats::default();
        self.clear_ephemeral();

        info!("save reset");
        self.events.push(EngineEvent::SaveReset);
        self.request_autosave();
    }

    /// Snapshot to persist, if the debounced autosave has fired since the
    /// last call.
    pub fn take_save_request(&mut self) -> Option<SaveSnapshot> {
        self.fire_due_timers();
        if !self.save_requested {
            return None;
        }
        self.save_requested = false;
        Some(self.snapshot())
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Σ(rate × owned) × prestige × production effects, per second.
    pub fn auto_production_rate(&self) -> f64 {
        self.producers.base_rate()
            * self.prestige.bonus_multiplier()
            * self.effects.production_multiplier()
    }

    /// (1 + Σ click bonuses) × prestige × click effects × combo.
    pub fn per_click_rate(&self) -> f64 {
        (1.0 + self.click_upgrades.base_rate())
            * self.prestige.bonus_multiplier()
            * self.effects.click_multiplier()
            * self.combo.multiplier()
    }

    /// Discounted price of the next unit, as charged by `purchase`.
    pub fn price_of(&self, id: &str) -> Option<f64> {
        let cost = self
            .producers
            .cost(id)
            .or_else(|| self.click_upgrades.cost(id))?;
        Some((cost * self.effects.cost_reduction_factor()).floor())
    }

    pub fn can_afford(&self, id: &str) -> bool {
        self.price_of(id)
            .is_some_and(|price| price <= self.ledger.current())
    }

    pub fn current_amount(&self) -> f64 {
        self.ledger.current()
    }

    pub fn lifetime_amount(&self) -> f64 {
        self.ledger.lifetime()
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn producers(&self) -> &Catalog {
        &self.producers
    }

    pub fn click_upgrades(&self) -> &Catalog {
        &self.click_upgrades
    }

    pub fn effects(&self) -> &[Effect] {
        self.effects.as_slice()
    }

    pub fn effect_stack(&self) -> &EffectStack {
        &self.effects
    }

    pub fn combo_multiplier(&self) -> f64 {
        self.combo.multiplier()
    }

    pub fn combo_count(&self) -> u32 {
        self.combo.consecutive_clicks()
    }

    pub fn unlocked_achievements(&self) -> &BTreeSet<AchievementId> {
        self.achievements.unlocked()
    }

    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    pub fn prestige_level(&self) -> u32 {
        self.prestige.level()
    }

    pub fn prestige_state(&self) -> &PrestigeState {
        &self.prestige
    }

    pub fn prestige_threshold(&self) -> f64 {
        PRESTIGE_THRESHOLD
    }

    pub fn prestige_progress(&self) -> f64 {
        prestige::progress_fraction(self.ledger.lifetime())
    }

    pub fn can_prestige(&self) -> bool {
        prestige::can_prestige(self.ledger.lifetime())
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_view(&self) -> StatsView<'_> {
        StatsView {
            stats: &self.stats,
            owned_upgrades: self.owned_upgrades(),
        }
    }

    pub fn owned_upgrades(&self) -> u64 {
        self.producers.owned_total() + self.click_upgrades.owned_total()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn credit_earned(&mut self, amount: f64) {
        self.ledger.credit(amount);
        self.stats.record_earnings(amount);
    }

    /// Runs every timer due by now and returns the time used.
    fn fire_due_timers(&mut self) -> i64 {
        let now = self.clock.now_ms();
        for (handle, timer) in self.scheduler.drain_due(now) {
            match timer {
                EngineTimer::ComboDecay => {
                    if self.combo_timer == Some(handle) {
                        self.combo_timer = None;
                    }
                    let reached = self.combo.consecutive_clicks();
                    if self.combo.reset() {
                        debug!("combo decayed after {reached} clicks");
                        self.events.push(EngineEvent::ComboReset { reached });
                    }
                }
                EngineTimer::Autosave => {
                    if self.autosave_timer == Some(handle) {
                        self.autosave_timer = None;
                    }
                    debug!("autosave due");
                    self.save_requested = true;
                    self.unsaved_since = None;
                }
            }
        }
        now
    }

    fn after_mutation(&mut self) {
        self.evaluate_achievements();
        self.request_autosave();
    }

    fn evaluate_achievements(&mut self) {
        let view = StatsView {
            stats: &self.stats,
            owned_upgrades: self.producers.owned_total() + self.click_upgrades.owned_total(),
        };
        for id in self.achievements.evaluate(&view) {
            info!("achievement unlocked: {id:?}");
            self.events.push(EngineEvent::AchievementUnlocked(id));
        }
    }

    /// Debounced, but never later than `AUTOSAVE_MAX_WAIT_MS` after the
    /// oldest unsaved change.
    fn request_autosave(&mut self) {
        let now = self.clock.now_ms();
        let oldest = *self.unsaved_since.get_or_insert(now);
        let due = (now + AUTOSAVE_DEBOUNCE_MS).min(oldest + AUTOSAVE_MAX_WAIT_MS);
        self.scheduler
            .reschedule(&mut self.autosave_timer, due, EngineTimer::Autosave);
    }

    fn clear_ephemeral(&mut self) {
        self.effects.clear();
        self.combo.reset();
        if let Some(handle) = self.combo_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn apply_snapshot(&mut self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        snapshot.validate()?;
        let producers = snapshot.producer_catalog()?;
        let click_upgrades = snapshot.click_upgrade_catalog()?;

        self.ledger = ResourceLedger::from_parts(snapshot.current_amount, snapshot.lifetime_amount);
        self.producers = producers;
        self.click_upgrades = click_upgrades;
        self.prestige = PrestigeState::new(snapshot.prestige_level);
        self.achievements =
            AchievementTracker::from_unlocked(snapshot.unlocked_achievement_ids.iter().copied());
        self.stats = snapshot.stats.clone();
        self.role = snapshot.role;
        Ok(())
    }
}
