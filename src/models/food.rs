use serde::{Deserialize, Serialize};

use crate::estimator::constants::INFINITE_DURATION_TICKS;

/// Nutrition restored by one consumption of a food item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodValues {
    pub hunger: u32,
    pub saturation_modifier: f32,
}

impl FoodValues {
    pub fn new(hunger: u32, saturation_modifier: f32) -> Self {
        Self {
            hunger,
            saturation_modifier,
        }
    }

    /// Saturation gained from eating: `hunger * modifier * 2`.
    ///
    /// Not clamped here; the food level caps it when applied.
    #[inline]
    pub fn saturation_increment(&self) -> f32 {
        self.hunger as f32 * self.saturation_modifier * 2.0
    }
}

/// Broad classification of a status effect, as far as the estimator cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCategory {
    Harmful,
    Regeneration,
    Other,
}

/// How long a status effect lasts once applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectDuration {
    Ticks(u32),
    Infinite,
}

impl EffectDuration {
    /// Duration in ticks, with `Infinite` mapped to the largest signed tick count.
    pub fn ticks(&self) -> u32 {
        match self {
            EffectDuration::Ticks(ticks) => *ticks,
            EffectDuration::Infinite => INFINITE_DURATION_TICKS,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, EffectDuration::Infinite)
    }
}

/// A status effect declared on a food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(default)]
    pub name: String,

    pub category: EffectCategory,

    #[serde(default)]
    pub amplifier: u32,

    pub duration: EffectDuration,

    /// Chance the effect is applied on eating. Carried for display only.
    #[serde(default = "default_probability")]
    pub probability: f32,
}

fn default_probability() -> f32 {
    1.0
}

impl StatusEffect {
    pub fn new(category: EffectCategory, amplifier: u32, duration: EffectDuration) -> Self {
        Self {
            name: String::new(),
            category,
            amplifier,
            duration,
            probability: 1.0,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn is_harmful(&self) -> bool {
        self.category == EffectCategory::Harmful
    }
}

/// A food definition as declared in the item registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub hunger: u32,

    pub saturation_modifier: f32,

    #[serde(default)]
    pub effects: Vec<StatusEffect>,
}

impl FoodItem {
    pub fn new(name: &str, hunger: u32, saturation_modifier: f32) -> Self {
        Self {
            name: name.to_string(),
            hunger,
            saturation_modifier,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Declared (static) nutrition of this item.
    #[inline]
    pub fn food_values(&self) -> FoodValues {
        FoodValues::new(self.hunger, self.saturation_modifier)
    }

    /// Non-negative, finite saturation modifier, sane effect chances, and
    /// finite durations no longer than an infinite one.
    pub fn is_valid(&self) -> bool {
        self.saturation_modifier.is_finite()
            && self.saturation_modifier >= 0.0
            && self.effects.iter().all(|e| {
                (0.0..=1.0).contains(&e.probability) && e.duration.ticks() <= INFINITE_DURATION_TICKS
            })
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_apple() -> FoodItem {
        FoodItem::new("Golden Apple", 4, 1.2)
            .with_effect(StatusEffect::new(
                EffectCategory::Regeneration,
                1,
                EffectDuration::Ticks(100),
            ))
            .with_effect(StatusEffect::new(
                EffectCategory::Other,
                0,
                EffectDuration::Ticks(2400),
            ))
    }

    #[test]
    fn test_saturation_increment() {
        let beef = FoodValues::new(8, 0.8);
        assert!((beef.saturation_increment() - 12.8).abs() < 0.001);

        let nothing = FoodValues::new(0, 0.6);
        assert_eq!(nothing.saturation_increment(), 0.0);
    }

    #[test]
    fn test_infinite_duration_ticks() {
        assert_eq!(EffectDuration::Infinite.ticks(), i32::MAX as u32);
        assert_eq!(EffectDuration::Ticks(600).ticks(), 600);
        assert!(EffectDuration::Infinite.is_infinite());
    }

    #[test]
    fn test_food_item_json() {
        let json = r#"{
            "name": "Spider Eye",
            "hunger": 2,
            "saturation_modifier": 0.8,
            "effects": [
                {"name": "poison", "category": "harmful", "duration": {"ticks": 100}}
            ]
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key(), "spider eye");
        assert_eq!(item.effects.len(), 1);
        assert!(item.effects[0].is_harmful());
        assert_eq!(item.effects[0].amplifier, 0);
        assert_eq!(item.effects[0].probability, 1.0);
    }

    #[test]
    fn test_infinite_duration_json() {
        let json = r#"{"category": "regeneration", "amplifier": 2, "duration": "infinite"}"#;
        let effect: StatusEffect = serde_json::from_str(json).unwrap();
        assert!(effect.duration.is_infinite());
        assert_eq!(effect.amplifier, 2);
    }

    #[test]
    fn test_is_valid() {
        assert!(golden_apple().is_valid());

        let mut invalid = golden_apple();
        invalid.saturation_modifier = f32::NAN;
        assert!(!invalid.is_valid());

        let mut bad_chance = golden_apple();
        bad_chance.effects[0].probability = 1.5;
        assert!(!bad_chance.is_valid());
    }

    #[test]
    fn test_duration_longer_than_infinite_is_invalid() {
        let mut longest = golden_apple();
        longest.effects[0].duration = EffectDuration::Ticks(INFINITE_DURATION_TICKS);
        assert!(longest.is_valid());

        let mut too_long = golden_apple();
        too_long.effects[0].duration = EffectDuration::Ticks(INFINITE_DURATION_TICKS + 1);
        assert!(!too_long.is_valid());

        too_long.effects[0].duration = EffectDuration::Ticks(u32::MAX);
        assert!(!too_long.is_valid());
    }
}
