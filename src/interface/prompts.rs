use dialoguer::{Confirm, Input, Select};

use crate::error::{RegenError, Result};
use crate::estimator::constants::MAX_FOOD_LEVEL;
use crate::models::ConsumerSnapshot;
use crate::registry::FoodRegistry;

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| RegenError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for the current food level (0-20).
pub fn prompt_food_level() -> Result<u32> {
    let level: u32 = prompt_number("Current food level (0-20)?", "20")?;
    if level > MAX_FOOD_LEVEL {
        return Err(RegenError::InvalidInput(format!(
            "Food level must be at most {}",
            MAX_FOOD_LEVEL
        )));
    }
    Ok(level)
}

/// Prompt for a non-negative float counter.
fn prompt_counter(prompt: &str, default: &str) -> Result<f32> {
    let value: f32 = prompt_number(prompt, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(RegenError::InvalidInput(format!(
            "{} must be a non-negative number",
            prompt
        )));
    }
    Ok(value)
}

/// Collect a full consumer snapshot interactively.
pub fn prompt_consumer_state() -> Result<ConsumerSnapshot> {
    let food_level = prompt_food_level()?;
    let saturation_level = prompt_counter("Current saturation?", "5")?;
    let exhaustion_level = prompt_counter("Current exhaustion?", "0")?;
    let max_health = prompt_counter("Max health?", "20")?;
    let health = prompt_counter("Current health?", "20")?;
    let natural_regeneration = prompt_yes_no("Is natural regeneration enabled?", true)?;

    let snapshot = ConsumerSnapshot {
        food_level,
        saturation_level,
        exhaustion_level,
        health,
        max_health,
        can_heal_from_food: true,
        natural_regeneration,
    };

    if !snapshot.is_valid() {
        return Err(RegenError::InvalidInput(format!(
            "consumer state out of range: {}",
            snapshot.debug_string()
        )));
    }
    Ok(snapshot)
}

/// Prompt for a food by name, fuzzy matched against the registry.
///
/// Returns `None` if the user gives up.
pub fn prompt_food(registry: &FoodRegistry) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which food? (press Enter to quit)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(food) = registry.get(input) {
            return Ok(Some(food.name.clone()));
        }

        let candidates = registry.fuzzy_matches(input);
        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(food.name.clone()));
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|f| f.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                return Ok(Some(options[selection].clone()));
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
