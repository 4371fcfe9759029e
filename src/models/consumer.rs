use serde::{Deserialize, Serialize};

use crate::estimator::ConsumerQuery;
use crate::estimator::constants::MAX_FOOD_LEVEL;

/// A point-in-time copy of a player's hunger state.
///
/// The estimator only ever reads this; nothing here is written back to the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerSnapshot {
    pub food_level: u32,

    pub saturation_level: f32,

    #[serde(default)]
    pub exhaustion_level: f32,

    #[serde(default = "default_health")]
    pub health: f32,

    #[serde(default = "default_health")]
    pub max_health: f32,

    #[serde(default = "default_true")]
    pub can_heal_from_food: bool,

    #[serde(default = "default_true")]
    pub natural_regeneration: bool,
}

fn default_health() -> f32 {
    20.0
}

fn default_true() -> bool {
    true
}

impl Default for ConsumerSnapshot {
    fn default() -> Self {
        Self {
            food_level: MAX_FOOD_LEVEL,
            saturation_level: 5.0,
            exhaustion_level: 0.0,
            health: default_health(),
            max_health: default_health(),
            can_heal_from_food: true,
            natural_regeneration: true,
        }
    }
}

impl ConsumerSnapshot {
    pub fn new(food_level: u32, saturation_level: f32, exhaustion_level: f32) -> Self {
        Self {
            food_level,
            saturation_level,
            exhaustion_level,
            ..Default::default()
        }
    }

    pub fn with_health(mut self, health: f32, max_health: f32) -> Self {
        self.health = health;
        self.max_health = max_health;
        self
    }

    /// Food level in range, non-negative finite counters, sane health.
    pub fn is_valid(&self) -> bool {
        self.food_level <= MAX_FOOD_LEVEL
            && self.saturation_level.is_finite()
            && self.saturation_level >= 0.0
            && self.exhaustion_level.is_finite()
            && self.exhaustion_level >= 0.0
            && self.max_health.is_finite()
            && self.max_health > 0.0
            && self.health.is_finite()
            && self.health >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "food:{} sat:{} exh:{} hp:{}/{}",
            self.food_level,
            self.saturation_level,
            self.exhaustion_level,
            self.health,
            self.max_health
        )
    }
}

impl ConsumerQuery for ConsumerSnapshot {
    fn food_level(&self) -> u32 {
        self.food_level
    }

    fn saturation_level(&self) -> f32 {
        self.saturation_level
    }

    fn exhaustion_level(&self) -> f32 {
        self.exhaustion_level
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn can_heal_from_food(&self) -> bool {
        self.can_heal_from_food
    }

    fn natural_regeneration(&self) -> bool {
        self.natural_regeneration
    }
}
