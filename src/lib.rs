pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod registry;

pub use error::{RegenError, Result};
pub use estimator::{EstimationContext, SimulationLimits, estimate_health_increment, is_rotten};
pub use models::{ConsumerSnapshot, FoodItem, FoodValues};
pub use registry::FoodRegistry;
