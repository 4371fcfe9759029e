//! Interfaces to the game state the estimator reads.
//!
//! The estimator never reaches for global registries: item metadata and the
//! consumer are always passed in, so everything here can be faked in tests.

use crate::models::{FoodValues, StatusEffect};

/// Read-only view of the player who would eat the item.
pub trait ConsumerQuery {
    fn food_level(&self) -> u32;
    fn saturation_level(&self) -> f32;
    fn exhaustion_level(&self) -> f32;
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;

    /// False in modes where eating never heals.
    fn can_heal_from_food(&self) -> bool;

    /// The world's natural regeneration rule.
    fn natural_regeneration(&self) -> bool;
}

/// Food whose nutrition depends on who eats it and in what context.
pub trait DynamicFood<I: ?Sized> {
    fn dynamic_hunger(&self, item: &I, consumer: &dyn ConsumerQuery) -> u32;
    fn dynamic_saturation(&self, item: &I, consumer: &dyn ConsumerQuery) -> f32;
}

/// How an item's nutrition is obtained.
pub enum Nutrition<'a, I: ?Sized> {
    Static(FoodValues),
    Dynamic(&'a dyn DynamicFood<I>),
}

/// Item registry metadata needed to estimate food effects.
pub trait ItemFoodMetadata {
    type Item: ?Sized;

    fn is_food(&self, item: &Self::Item) -> bool;

    /// Registry-declared nutrition, `None` for non-food.
    fn declared_food_values(&self, item: &Self::Item) -> Option<FoodValues>;

    /// Registry-declared status effects; empty for non-food.
    fn declared_status_effects(&self, item: &Self::Item) -> &[StatusEffect];

    /// Context-dependent nutrition, if the item provides it.
    fn dynamic_food(&self, _item: &Self::Item) -> Option<&dyn DynamicFood<Self::Item>> {
        None
    }

    /// Dynamic nutrition wins over the declared values when both exist.
    fn nutrition(&self, item: &Self::Item) -> Option<Nutrition<'_, Self::Item>> {
        if !self.is_food(item) {
            return None;
        }
        match self.dynamic_food(item) {
            Some(dynamic) => Some(Nutrition::Dynamic(dynamic)),
            None => self.declared_food_values(item).map(Nutrition::Static),
        }
    }
}

/// Everything one estimate reads, bundled for a single call.
pub struct EstimationContext<'a, I: ?Sized> {
    pub item: &'a I,
    pub consumer: &'a dyn ConsumerQuery,
    pub natural_regeneration: bool,
}

impl<'a, I: ?Sized> EstimationContext<'a, I> {
    pub fn new(item: &'a I, consumer: &'a dyn ConsumerQuery) -> Self {
        Self {
            item,
            consumer,
            natural_regeneration: consumer.natural_regeneration(),
        }
    }
}
