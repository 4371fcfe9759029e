use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::estimator::constants::DEFAULT_MAX_SIMULATED_TICKS;

/// food_regen: predicts how much health a food will restore before you eat it.
#[derive(Parser, Debug)]
#[command(name = "food_regen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food definitions JSON file.
    #[arg(short, long, default_value = "foods.json")]
    pub foods: PathBuf,

    /// Path to the consumer state JSON file.
    #[arg(short, long, default_value = "player.json")]
    pub state: PathBuf,

    /// Maximum ticks to simulate per estimate.
    #[arg(long, default_value_t = DEFAULT_MAX_SIMULATED_TICKS)]
    pub max_ticks: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the effect of eating one food.
    Estimate {
        /// Food name (case-insensitive).
        item: String,
    },

    /// Estimate every known food.
    Table {
        /// Also write the table to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Enter the consumer state and pick a food interactively.
    Interactive,

    /// Add a food to the definitions file, replacing any with the same name.
    Add {
        /// Food name.
        name: String,

        /// Hunger points restored.
        hunger: u32,

        /// Saturation modifier (saturation gained is hunger * modifier * 2).
        saturation_modifier: f32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Table { csv: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["food_regen", "add", "Cookie", "2", "0.1"]).unwrap();
        match cli.command {
            Some(Command::Add {
                name,
                hunger,
                saturation_modifier,
            }) => {
                assert_eq!(name, "Cookie");
                assert_eq!(hunger, 2);
                assert_eq!(saturation_modifier, 0.1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["food_regen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.foods, PathBuf::from("foods.json"));
        assert_eq!(cli.max_ticks, DEFAULT_MAX_SIMULATED_TICKS);
    }
}
