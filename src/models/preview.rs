use serde::Serialize;

use crate::models::FoodValues;

/// What eating one item would do to a consumer, computed without eating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionPreview {
    /// Nutrition resolved for this consumer.
    pub food_values: FoodValues,

    /// Food level after eating, capped at 20.
    pub food_level: u32,

    /// Saturation after eating, capped at the new food level.
    pub saturation_level: f32,

    /// Estimated health restored over time.
    pub health_increment: f32,

    /// Health after regeneration, capped at max health.
    pub projected_health: f32,

    /// Whether the item declares a harmful effect.
    pub is_rotten: bool,
}

/// One line of the per-food estimate table.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateRow {
    pub food_name: String,
    pub hunger: u32,
    pub saturation_increment: f32,
    pub food_level: u32,
    pub saturation_level: f32,
    pub health_increment: f32,
    pub projected_health: f32,
    pub rotten: bool,
}

impl EstimateRow {
    pub fn new(food_name: String, preview: &ConsumptionPreview) -> Self {
        Self {
            food_name,
            hunger: preview.food_values.hunger,
            saturation_increment: preview.food_values.saturation_increment(),
            food_level: preview.food_level,
            saturation_level: preview.saturation_level,
            health_increment: preview.health_increment,
            projected_health: preview.projected_health,
            rotten: preview.is_rotten,
        }
    }
}
