pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_csv;
pub use prompts::{prompt_consumer_state, prompt_food, prompt_food_level, prompt_yes_no};
pub use render::{display_estimate_table, display_preview};
