use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{RegenError, Result};
use crate::estimator::{DynamicFood, ItemFoodMetadata};
use crate::models::{FoodItem, FoodValues, StatusEffect};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Known foods, looked up by case-insensitive name.
///
/// Items are plain names; a name with no entry is not food.
pub struct FoodRegistry {
    /// All foods keyed by lowercase name.
    foods: HashMap<String, FoodItem>,
    /// Dynamic nutrition overrides keyed by lowercase name.
    dynamic: HashMap<String, Box<dyn DynamicFood<str>>>,
}

impl FoodRegistry {
    /// Create a registry from a list of foods (later duplicates win).
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self {
            foods: map,
            dynamic: HashMap::new(),
        }
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.foods.get(&name.to_lowercase())
    }

    /// Get a food by name, or an error naming the closest match.
    pub fn require(&self, name: &str) -> Result<&FoodItem> {
        self.get(name).ok_or_else(|| {
            let message = match self.suggest(name) {
                Some(suggestion) => format!("{} (did you mean {}?)", name, suggestion),
                None => name.to_string(),
            };
            RegenError::ItemNotFound(message)
        })
    }

    /// Attach context-dependent nutrition to an existing food.
    pub fn register_dynamic(&mut self, name: &str, food: Box<dyn DynamicFood<str>>) -> Result<()> {
        let key = name.to_lowercase();
        if !self.foods.contains_key(&key) {
            return Err(RegenError::ItemNotFound(name.to_string()));
        }
        self.dynamic.insert(key, food);
        Ok(())
    }

    /// Foods whose names resemble `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str) -> Vec<&FoodItem> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|(key, food)| (food, jaro_winkler(&needle, key)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
        scored.into_iter().map(|(food, _)| food).collect()
    }

    /// Closest known food name, if any is similar enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        self.fuzzy_matches(name)
            .into_iter()
            .next()
            .map(|food| food.name.as_str())
    }

    /// All foods, sorted by name.
    pub fn all_foods(&self) -> Vec<&FoodItem> {
        let mut foods: Vec<&FoodItem> = self.foods.values().collect();
        foods.sort_by(|a, b| a.name.cmp(&b.name));
        foods
    }

    /// Count of foods in the registry.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the registry has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl ItemFoodMetadata for FoodRegistry {
    type Item = str;

    fn is_food(&self, item: &str) -> bool {
        self.get(item).is_some()
    }

    fn declared_food_values(&self, item: &str) -> Option<FoodValues> {
        self.get(item).map(FoodItem::food_values)
    }

    fn declared_status_effects(&self, item: &str) -> &[StatusEffect] {
        self.get(item).map(|f| f.effects.as_slice()).unwrap_or(&[])
    }

    fn dynamic_food(&self, item: &str) -> Option<&dyn DynamicFood<str>> {
        self.dynamic.get(&item.to_lowercase()).map(|f| f.as_ref())
    }
}
