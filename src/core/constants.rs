// Tick and timing
pub const TICK_INTERVAL_MS: i64 = 1000;
/// Upper bound on catch-up ticks run by a single `Engine::pump` call.
pub const MAX_TICKS_PER_PUMP: u32 = 5;
pub const AUTOSAVE_DEBOUNCE_MS: i64 = 1000;
/// Longest an unsaved change may wait while play keeps re-arming the debounce.
pub const AUTOSAVE_MAX_WAIT_MS: i64 = 30_000;

// Costs
pub const COST_GROWTH_FACTOR: f64 = 1.15;

// Combo
pub const COMBO_STEP_SIZE: u32 = 5;
pub const COMBO_STEP_BONUS: f64 = 0.5;
pub const COMBO_MAX_MULTIPLIER: f64 = 5.0;
pub const COMBO_DECAY_MS: i64 = 1000;

// Prestige multiplier formula: 1.0 + level * BONUS_PER_LEVEL
pub const PRESTIGE_THRESHOLD: f64 = 1_000_000.0;
pub const PRESTIGE_BONUS_PER_LEVEL: f64 = 0.05;

// Offline catch-up
pub const OFFLINE_EFFICIENCY: f64 = 0.5;
pub const OFFLINE_MIN_SECONDS: f64 = 10.0;

// Golden bonus
pub const GOLDEN_MIN_INTERVAL_MS: i64 = 30_000;
pub const GOLDEN_MAX_INTERVAL_MS: i64 = 120_000;
pub const GOLDEN_DISPLAY_MS: i64 = 8_000;

// Festivals
pub const FESTIVAL_MIN_INTERVAL_MS: i64 = 60_000;
pub const FESTIVAL_MAX_INTERVAL_MS: i64 = 240_000;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x4245_4552_434C_4B01; // "BEERCLK" v1
pub const SAVE_FILE_EXTENSION: &str = "sav";
