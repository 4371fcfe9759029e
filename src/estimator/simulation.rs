use tracing::{debug, warn};

use crate::estimator::constants::*;

/// Runtime bounds on the regeneration simulation.
#[derive(Debug, Clone)]
pub struct SimulationLimits {
    /// Total ticks simulated across both phases before giving up.
    pub max_ticks: u64,
}

impl Default for SimulationLimits {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_SIMULATED_TICKS,
        }
    }
}

/// Result of a natural regeneration simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegenOutcome {
    /// Total health restored across both phases.
    pub health: f32,

    /// Health restored while saturated at full food (phase A alone).
    pub saturated_health: f32,

    /// Ticks simulated.
    pub ticks: u64,

    /// True if the tick budget ran out before both phases finished.
    pub budget_exhausted: bool,
}

/// Counters advanced one simulated tick at a time.
struct RegenState {
    food_level: u32,
    saturation_level: f32,
    exhaustion_level: f32,
    health: f32,
    /// Local batch counter, shared by both phases.
    timer: u32,
    ticks: u64,
}

impl RegenState {
    /// Spends exhaustion on saturation; heals from saturation every 10 ticks.
    fn saturated_tick(&mut self) {
        if self.exhaustion_level > EXHAUSTION_PER_CONSUMPTION {
            self.exhaustion_level -= EXHAUSTION_PER_CONSUMPTION;
            self.saturation_level = (self.saturation_level - 1.0).max(0.0);
        }
        self.timer += 1;
        if self.timer < SATURATED_REGEN_INTERVAL {
            return;
        }
        let limited = self.saturation_level.min(EXHAUSTION_PER_REGEN);
        self.health += limited / EXHAUSTION_PER_REGEN;
        self.exhaustion_level += limited;
        self.timer = 0;
    }

    /// Spends exhaustion on food; heals one point every 80 ticks.
    fn hunger_tick(&mut self) {
        if self.exhaustion_level > EXHAUSTION_PER_CONSUMPTION {
            self.exhaustion_level -= EXHAUSTION_PER_CONSUMPTION;
            self.food_level -= 1;
        }
        self.timer += 1;
        if self.timer < HUNGER_REGEN_INTERVAL {
            return;
        }
        self.health += 1.0;
        self.exhaustion_level += EXHAUSTION_PER_REGEN;
        self.timer = 0;
    }
}

/// Health regenerated naturally from the given hunger state.
///
/// See [`simulate_natural_regen_detailed`].
pub fn simulate_natural_regen(
    food_level: u32,
    saturation_level: f32,
    exhaustion_level: f32,
    limits: &SimulationLimits,
) -> f32 {
    simulate_natural_regen_detailed(food_level, saturation_level, exhaustion_level, limits).health
}

/// Replays the game's two natural regeneration regimes tick by tick.
///
/// Phase A runs while food is full and saturation remains, healing from
/// saturation. Phase B then runs while food stays at or above 18, healing a
/// full point every 80 ticks and burning food. Regeneration feeds exhaustion
/// back in, so both phases drain and stop on their own for finite inputs;
/// `limits.max_ticks` covers the rest (denormal saturation, NaN exhaustion).
pub fn simulate_natural_regen_detailed(
    food_level: u32,
    saturation_level: f32,
    exhaustion_level: f32,
    limits: &SimulationLimits,
) -> RegenOutcome {
    let mut state = RegenState {
        food_level,
        saturation_level,
        exhaustion_level,
        health: 0.0,
        timer: 0,
        ticks: 0,
    };

    while state.food_level >= MAX_FOOD_LEVEL && state.saturation_level > 0.0 {
        if state.ticks >= limits.max_ticks {
            return budget_exhausted(&state, state.health);
        }
        state.ticks += 1;
        state.saturated_tick();
    }
    let saturated_health = state.health;

    while state.food_level >= NATURAL_REGEN_FOOD_LEVEL {
        if state.ticks >= limits.max_ticks {
            return budget_exhausted(&state, saturated_health);
        }
        state.ticks += 1;
        state.hunger_tick();
    }

    debug!(
        food_level,
        saturation_level,
        exhaustion_level,
        health = state.health,
        ticks = state.ticks,
        "Simulated natural regeneration"
    );

    RegenOutcome {
        health: state.health,
        saturated_health,
        ticks: state.ticks,
        budget_exhausted: false,
    }
}

fn budget_exhausted(state: &RegenState, saturated_health: f32) -> RegenOutcome {
    warn!(
        ticks = state.ticks,
        food_level = state.food_level,
        saturation_level = state.saturation_level,
        exhaustion_level = state.exhaustion_level,
        "Regeneration simulation hit its tick budget"
    );
    RegenOutcome {
        health: state.health,
        saturated_health,
        ticks: state.ticks,
        budget_exhausted: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn simulate(food: u32, sat: f32, exh: f32) -> RegenOutcome {
        simulate_natural_regen_detailed(food, sat, exh, &SimulationLimits::default())
    }

    #[test]
    fn test_below_threshold_is_noop() {
        let outcome = simulate(17, 5.0, 0.0);
        assert_eq!(outcome.health, 0.0);
        assert_eq!(outcome.ticks, 0);
    }

    #[test]
    fn test_hunger_phase_only() {
        // One point per 80 ticks; each heal adds 6 exhaustion, burning one food.
        assert_eq!(simulate(18, 0.0, 0.0).health, 1.0);
        assert_eq!(simulate(19, 0.0, 0.0).health, 2.0);
        assert_eq!(simulate(20, 0.0, 0.0).health, 3.0);
        assert_eq!(simulate(18, 0.0, 0.0).ticks, 81);
    }

    #[test]
    fn test_saturation_ignored_below_full_food() {
        assert_eq!(simulate(19, 19.0, 0.0), simulate(19, 0.0, 0.0));
    }

    #[test]
    fn test_full_food_full_saturation() {
        let outcome = simulate(20, 20.0, 0.0);
        assert!((outcome.health - 15.5).abs() < 1e-4);
        assert_eq!(outcome.ticks, 352);
        assert!(!outcome.budget_exhausted);
    }

    #[test]
    fn test_saturated_health_is_phase_a_share() {
        let outcome = simulate(20, 5.0, 0.0);
        assert!((outcome.health - 5.5).abs() < 1e-4);
        assert!(outcome.saturated_health > 0.0);
        assert!(outcome.saturated_health <= outcome.health);
    }

    #[test]
    fn test_tiny_saturation_hits_budget() {
        let limits = SimulationLimits { max_ticks: 10_000 };
        let outcome = simulate_natural_regen_detailed(20, 1e-30, 0.0, &limits);
        assert!(outcome.budget_exhausted);
        assert_eq!(outcome.ticks, 10_000);
    }

    fn state(food_level: u32, saturation_level: f32, exhaustion_level: f32) -> RegenState {
        RegenState {
            food_level,
            saturation_level,
            exhaustion_level,
            health: 0.0,
            timer: 0,
            ticks: 0,
        }
    }

    proptest! {
        #[test]
        fn prop_saturated_ticks_keep_floors(sat in 0.5f32..=20.0, exh in 0.0f32..40.0) {
            let mut s = state(MAX_FOOD_LEVEL, sat, exh);
            while s.saturation_level > 0.0 {
                s.saturated_tick();
                s.ticks += 1;
                prop_assert!(s.saturation_level >= 0.0);
                prop_assert!(s.exhaustion_level >= 0.0);
                prop_assert!(s.ticks < 10_000);
            }
        }

        #[test]
        fn prop_hunger_ticks_stop_just_below_threshold(food in 18u32..=20, exh in 0.0f32..40.0) {
            let mut s = state(food, 0.0, exh);
            while s.food_level >= NATURAL_REGEN_FOOD_LEVEL {
                s.hunger_tick();
                s.ticks += 1;
                prop_assert!(s.exhaustion_level >= 0.0);
                prop_assert!(s.ticks < 10_000);
            }
            prop_assert_eq!(s.food_level, NATURAL_REGEN_FOOD_LEVEL - 1);
        }
    }

    #[test]
    fn test_nan_exhaustion_hits_budget() {
        let limits = SimulationLimits { max_ticks: 5_000 };
        let outcome = simulate_natural_regen_detailed(19, 0.0, f32::NAN, &limits);
        assert!(outcome.budget_exhausted);
    }
}
