/// Maximum food level a consumer can hold.
pub const MAX_FOOD_LEVEL: u32 = 20;

/// Food level at or above which hunger-based natural regeneration runs.
pub const NATURAL_REGEN_FOOD_LEVEL: u32 = 18;

/// Exhaustion that must accumulate before one point of saturation or food is spent.
pub const EXHAUSTION_PER_CONSUMPTION: f32 = 4.0;

/// Exhaustion cost of one full health point of regeneration.
pub const EXHAUSTION_PER_REGEN: f32 = 6.0;

/// Ticks between heals while saturated at full food.
pub const SATURATED_REGEN_INTERVAL: u32 = 10;

/// Ticks between heals while fed but not saturated.
pub const HUNGER_REGEN_INTERVAL: u32 = 80;

/// Base heal interval of the regeneration effect, halved per amplifier level.
pub const REGENERATION_BASE_PERIOD: u32 = 50;

/// Tick count used for effects that never expire (`i32::MAX`).
pub const INFINITE_DURATION_TICKS: u32 = 2_147_483_647;

/// Default cap on simulated ticks across both regeneration phases.
pub const DEFAULT_MAX_SIMULATED_TICKS: u64 = 1_000_000;
