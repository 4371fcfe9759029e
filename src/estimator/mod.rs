pub mod collaborators;
pub mod constants;
pub mod health;
pub mod resolver;
pub mod simulation;

pub use collaborators::{ConsumerQuery, DynamicFood, EstimationContext, ItemFoodMetadata, Nutrition};
pub use health::{
    estimate_health_increment, is_rotten, preview_consumption, regeneration_effect_health,
    regeneration_period, try_preview_consumption,
};
pub use resolver::{default_food_values, is_food, resolve_food_values, try_resolve_food_values};
pub use simulation::{
    RegenOutcome, SimulationLimits, simulate_natural_regen, simulate_natural_regen_detailed,
};
