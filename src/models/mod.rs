mod consumer;
mod food;
mod preview;

pub use consumer::ConsumerSnapshot;
pub use food::{EffectCategory, EffectDuration, FoodItem, FoodValues, StatusEffect};
pub use preview::{ConsumptionPreview, EstimateRow};
