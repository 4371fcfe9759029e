use tracing::debug;

use crate::error::{RegenError, Result};
use crate::estimator::collaborators::{ConsumerQuery, ItemFoodMetadata, Nutrition};
use crate::models::FoodValues;

/// Whether the registry classifies the item as food.
#[inline]
pub fn is_food<M>(metadata: &M, item: &M::Item) -> bool
where
    M: ItemFoodMetadata + ?Sized,
{
    metadata.is_food(item)
}

/// Registry-declared nutrition, ignoring any dynamic override.
pub fn default_food_values<M>(metadata: &M, item: &M::Item) -> Option<FoodValues>
where
    M: ItemFoodMetadata + ?Sized,
{
    if !metadata.is_food(item) {
        return None;
    }
    metadata.declared_food_values(item)
}

/// Effective nutrition of `item` when eaten by `consumer`.
///
/// # Panics
///
/// Panics if the item is not food. Check with [`is_food`] first, or use
/// [`try_resolve_food_values`].
pub fn resolve_food_values<M>(
    metadata: &M,
    item: &M::Item,
    consumer: &dyn ConsumerQuery,
) -> FoodValues
where
    M: ItemFoodMetadata + ?Sized,
{
    let Some(nutrition) = metadata.nutrition(item) else {
        panic!("resolve_food_values called on a non-food item");
    };
    from_nutrition(nutrition, item, consumer)
}

/// Checked form of [`resolve_food_values`].
pub fn try_resolve_food_values<M>(
    metadata: &M,
    item: &M::Item,
    consumer: &dyn ConsumerQuery,
    item_name: &str,
) -> Result<FoodValues>
where
    M: ItemFoodMetadata + ?Sized,
{
    metadata
        .nutrition(item)
        .map(|nutrition| from_nutrition(nutrition, item, consumer))
        .ok_or_else(|| RegenError::NotFood(item_name.to_string()))
}

fn from_nutrition<I: ?Sized>(
    nutrition: Nutrition<'_, I>,
    item: &I,
    consumer: &dyn ConsumerQuery,
) -> FoodValues {
    match nutrition {
        Nutrition::Static(values) => values,
        Nutrition::Dynamic(food) => {
            let values = FoodValues::new(
                food.dynamic_hunger(item, consumer),
                food.dynamic_saturation(item, consumer),
            );
            debug!(
                hunger = values.hunger,
                saturation_modifier = values.saturation_modifier,
                "Resolved dynamic food values"
            );
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::collaborators::DynamicFood;
    use crate::models::{ConsumerSnapshot, StatusEffect};

    /// Restores one hunger per missing health point.
    struct MissingHealthStew;

    impl DynamicFood<str> for MissingHealthStew {
        fn dynamic_hunger(&self, _item: &str, consumer: &dyn ConsumerQuery) -> u32 {
            (consumer.max_health() - consumer.health()).max(0.0) as u32
        }

        fn dynamic_saturation(&self, _item: &str, _consumer: &dyn ConsumerQuery) -> f32 {
            0.3
        }
    }

    /// "bread" is static, "stew" is dynamic, anything else is not food.
    struct Pantry {
        stew: MissingHealthStew,
    }

    impl ItemFoodMetadata for Pantry {
        type Item = str;

        fn is_food(&self, item: &str) -> bool {
            item == "bread" || item == "stew"
        }

        fn declared_food_values(&self, item: &str) -> Option<FoodValues> {
            match item {
                "bread" => Some(FoodValues::new(5, 0.6)),
                "stew" => Some(FoodValues::new(6, 0.6)),
                _ => None,
            }
        }

        fn declared_status_effects(&self, _item: &str) -> &[StatusEffect] {
            &[]
        }

        fn dynamic_food(&self, item: &str) -> Option<&dyn DynamicFood<str>> {
            (item == "stew").then_some(&self.stew as &dyn DynamicFood<str>)
        }
    }

    fn pantry() -> Pantry {
        Pantry {
            stew: MissingHealthStew,
        }
    }

    #[test]
    fn test_static_food_uses_declared_values() {
        let consumer = ConsumerSnapshot::new(10, 0.0, 0.0);
        let values = resolve_food_values(&pantry(), "bread", &consumer);
        assert_eq!(values, FoodValues::new(5, 0.6));
    }

    #[test]
    fn test_dynamic_food_depends_on_consumer() {
        let hurt = ConsumerSnapshot::new(10, 0.0, 0.0).with_health(12.0, 20.0);
        let healthy = ConsumerSnapshot::new(10, 0.0, 0.0);

        assert_eq!(resolve_food_values(&pantry(), "stew", &hurt).hunger, 8);
        assert_eq!(resolve_food_values(&pantry(), "stew", &healthy).hunger, 0);
    }

    #[test]
    fn test_default_values_ignore_dynamic_override() {
        assert_eq!(
            default_food_values(&pantry(), "stew"),
            Some(FoodValues::new(6, 0.6))
        );
        assert_eq!(default_food_values(&pantry(), "stone"), None);
    }

    #[test]
    fn test_try_resolve_non_food() {
        let consumer = ConsumerSnapshot::default();
        let err = try_resolve_food_values(&pantry(), "stone", &consumer, "stone").unwrap_err();
        assert!(matches!(err, RegenError::NotFood(name) if name == "stone"));
    }

    #[test]
    #[should_panic(expected = "non-food")]
    fn test_resolve_non_food_panics() {
        let consumer = ConsumerSnapshot::default();
        resolve_food_values(&pantry(), "stone", &consumer);
    }
}
