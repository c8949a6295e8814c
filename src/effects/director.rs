//! Random event scheduling for golden bonuses and festivals.
//!
//! The director sits outside the engine. It owns its own RNG and timers and
//! only ever talks to the engine through public entry points.

use super::festival::{get_festival_def, FestivalId, FESTIVALS};
use super::golden::GoldenReward;
use crate::core::clock::Clock;
use crate::core::constants::{
    FESTIVAL_MAX_INTERVAL_MS, FESTIVAL_MIN_INTERVAL_MS, GOLDEN_DISPLAY_MS,
    GOLDEN_MAX_INTERVAL_MS, GOLDEN_MIN_INTERVAL_MS,
};
use crate::core::engine::Engine;
use crate::core::timer::{Scheduler, TimerHandle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What happened during a [`EventDirector::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorEvent {
    GoldenAppeared,
    GoldenMissed,
    FestivalBegan(FestivalId),
    FestivalEnded(FestivalId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectorTimer {
    GoldenSpawn,
    GoldenExpire,
    FestivalStart,
    FestivalEnd,
}

pub struct EventDirector<R: Rng = StdRng> {
    rng: R,
    scheduler: Scheduler<DirectorTimer>,
    golden_timer: Option<TimerHandle>,
    festival_timer: Option<TimerHandle>,
    golden_visible: bool,
    active_festival: Option<FestivalId>,
}

impl EventDirector<StdRng> {
    /// Deterministic director for replays and the simulator.
    pub fn seeded(seed: u64, now_ms: i64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), now_ms)
    }

    pub fn from_entropy(now_ms: i64) -> Self {
        Self::new(StdRng::from_entropy(), now_ms)
    }
}

impl<R: Rng> EventDirector<R> {
    /// Arms the first golden spawn and the first festival.
    pub fn new(rng: R, now_ms: i64) -> Self {
        let mut director = Self {
            rng,
            scheduler: Scheduler::new(),
            golden_timer: None,
            festival_timer: None,
            golden_visible: false,
            active_festival: None,
        };
        director.arm_golden_spawn(now_ms);
        director.arm_festival_start(now_ms);
        director
    }

    pub fn golden_visible(&self) -> bool {
        self.golden_visible
    }

    pub fn active_festival(&self) -> Option<FestivalId> {
        self.active_festival
    }

    /// When the golden bonus next appears or disappears.
    pub fn next_golden_change(&self) -> Option<i64> {
        self.golden_timer.and_then(|h| self.scheduler.due_at(h))
    }

    /// Fire due timers against the engine's clock.
    pub fn poll<C: Clock>(&mut self, engine: &mut Engine<C>) -> Vec<DirectorEvent> {
        let now = engine.now_ms();
        let mut out = Vec::new();

        for (_, timer) in self.scheduler.drain_due(now) {
            match timer {
                DirectorTimer::GoldenSpawn => {
                    self.golden_visible = true;
                    self.scheduler.reschedule(
                        &mut self.golden_timer,
                        now + GOLDEN_DISPLAY_MS,
                        DirectorTimer::GoldenExpire,
                    );
                    debug!("golden bonus visible");
                    out.push(DirectorEvent::GoldenAppeared);
                }
                DirectorTimer::GoldenExpire => {
                    self.golden_visible = false;
                    self.arm_golden_spawn(now);
                    debug!("golden bonus missed");
                    out.push(DirectorEvent::GoldenMissed);
                }
                DirectorTimer::FestivalStart => {
                    let id = FESTIVALS[self.rng.gen_range(0..FESTIVALS.len())].id;
                    engine.join_festival(id);
                    self.active_festival = Some(id);
                    let duration_ms = i64::from(get_festival_def(id).duration_seconds) * 1000;
                    self.scheduler.reschedule(
                        &mut self.festival_timer,
                        now + duration_ms,
                        DirectorTimer::FestivalEnd,
                    );
                    out.push(DirectorEvent::FestivalBegan(id));
                }
                DirectorTimer::FestivalEnd => {
                    if let Some(id) = self.active_festival.take() {
                        info!("festival over: {}", get_festival_def(id).name);
                        out.push(DirectorEvent::FestivalEnded(id));
                    }
                    self.arm_festival_start(now);
                }
            }
        }
        out
    }

    /// Catch the golden bonus if it is on screen. Returns the reward, or
    /// `None` (changing nothing) when there is nothing to catch.
    pub fn catch_golden<C: Clock>(&mut self, engine: &mut Engine<C>) -> Option<GoldenReward> {
        self.poll(engine);
        if !self.golden_visible {
            return None;
        }
        self.golden_visible = false;

        let reward = GoldenReward::ALL[self.rng.gen_range(0..GoldenReward::ALL.len())];
        engine.catch_golden_bonus(reward);
        self.arm_golden_spawn(engine.now_ms());
        Some(reward)
    }

    fn arm_golden_spawn(&mut self, now_ms: i64) {
        let delay = self
            .rng
            .gen_range(GOLDEN_MIN_INTERVAL_MS..=GOLDEN_MAX_INTERVAL_MS);
        self.scheduler
            .reschedule(&mut self.golden_timer, now_ms + delay, DirectorTimer::GoldenSpawn);
    }

    fn arm_festival_start(&mut self, now_ms: i64) {
        let delay = self
            .rng
            .gen_range(FESTIVAL_MIN_INTERVAL_MS..=FESTIVAL_MAX_INTERVAL_MS);
        self.scheduler.reschedule(
            &mut self.festival_timer,
            now_ms + delay,
            DirectorTimer::FestivalStart,
        );
    }
}
