mod manager;
mod persistence;

pub use manager::{FoodRegistry, SUGGESTION_THRESHOLD};
pub use persistence::{load_consumer, load_food_items, save_food_items, upsert_food_item};
