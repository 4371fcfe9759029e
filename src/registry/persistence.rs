use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RegenError, Result};
use crate::models::{ConsumerSnapshot, FoodItem};

/// Load food definitions from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins) and rejects invalid entries.
pub fn load_food_items<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;

    if let Some(bad) = foods.iter().find(|f| !f.is_valid()) {
        return Err(RegenError::InvalidInput(format!(
            "food {} has an invalid saturation modifier or effect",
            bad.name
        )));
    }

    let mut seen: HashMap<String, FoodItem> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }

    debug!(count = seen.len(), "Loaded food definitions");
    Ok(seen.into_values().collect())
}

/// Save food definitions to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_food_items<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let mut seen: HashMap<String, &FoodItem> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }

    let mut deduped: Vec<&FoodItem> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.name.cmp(&b.name));
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Add or replace one food in a definitions file, creating the file if missing.
///
/// Returns true if a definition with the same name was replaced.
pub fn upsert_food_item<P: AsRef<Path>>(path: P, food: FoodItem) -> Result<bool> {
    let path = path.as_ref();
    if !food.is_valid() {
        return Err(RegenError::InvalidInput(format!(
            "food {} has an invalid saturation modifier or effect",
            food.name
        )));
    }

    let mut foods = if path.exists() {
        load_food_items(path)?
    } else {
        Vec::new()
    };
    let key = food.key();
    let replaced = foods.iter().any(|f| f.key() == key);
    foods.push(food);

    save_food_items(path, &foods)?;
    debug!(name = %key, replaced, "Saved food definition");
    Ok(replaced)
}

/// Load a consumer snapshot from a JSON file.
pub fn load_consumer<P: AsRef<Path>>(path: P) -> Result<ConsumerSnapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot: ConsumerSnapshot = serde_json::from_str(&content)?;

    if !snapshot.is_valid() {
        return Err(RegenError::InvalidInput(format!(
            "consumer state out of range: {}",
            snapshot.debug_string()
        )));
    }

    Ok(snapshot)
}
