use tracing::debug;

use crate::estimator::collaborators::{EstimationContext, ItemFoodMetadata};
use crate::estimator::constants::*;
use crate::error::Result;
use crate::estimator::resolver::{resolve_food_values, try_resolve_food_values};
use crate::estimator::simulation::{SimulationLimits, simulate_natural_regen};
use crate::models::{ConsumptionPreview, EffectCategory, FoodValues, StatusEffect};

/// True if the item is food and declares any harmful effect.
pub fn is_rotten<M>(metadata: &M, item: &M::Item) -> bool
where
    M: ItemFoodMetadata + ?Sized,
{
    if !metadata.is_food(item) {
        return false;
    }
    metadata
        .declared_status_effects(item)
        .iter()
        .any(StatusEffect::is_harmful)
}

/// Heal interval of the regeneration effect at `amplifier`.
///
/// The shift count wraps at 32 like a 32-bit integer shift, so amplifier 32
/// heals as slowly as amplifier 0. Intervals that shift down to zero heal
/// every tick.
#[inline]
pub fn regeneration_period(amplifier: u32) -> u32 {
    (REGENERATION_BASE_PERIOD >> (amplifier % 32)).max(1)
}

/// Health granted by the first declared regeneration effect, if any.
///
/// Later regeneration effects on the same item are ignored.
pub fn regeneration_effect_health(effects: &[StatusEffect]) -> f32 {
    effects
        .iter()
        .find(|e| e.category == EffectCategory::Regeneration)
        .map(|e| (e.duration.ticks() / regeneration_period(e.amplifier)) as f32)
        .unwrap_or(0.0)
}

/// Food level and saturation after eating food worth `values`.
fn fed_levels<I: ?Sized>(ctx: &EstimationContext<'_, I>, values: &FoodValues) -> (u32, f32) {
    let food_level = ctx
        .consumer
        .food_level()
        .saturating_add(values.hunger)
        .min(MAX_FOOD_LEVEL);
    let saturation_level = (ctx.consumer.saturation_level().max(0.0)
        + values.saturation_increment())
    .min(food_level as f32);
    (food_level, saturation_level)
}

/// Estimated health restored by eating the item in `ctx`.
///
/// Returns 0 for non-food and for consumers that cannot heal from food.
pub fn estimate_health_increment<M>(
    metadata: &M,
    ctx: &EstimationContext<'_, M::Item>,
    limits: &SimulationLimits,
) -> f32
where
    M: ItemFoodMetadata + ?Sized,
{
    if !metadata.is_food(ctx.item) || !ctx.consumer.can_heal_from_food() {
        return 0.0;
    }

    let values = resolve_food_values(metadata, ctx.item, ctx.consumer);
    let (food_level, saturation_level) = fed_levels(ctx, &values);

    let mut health = 0.0;
    if food_level >= NATURAL_REGEN_FOOD_LEVEL && ctx.natural_regeneration {
        let exhaustion_level = ctx.consumer.exhaustion_level().max(0.0);
        health = simulate_natural_regen(food_level, saturation_level, exhaustion_level, limits);
    }
    health += regeneration_effect_health(metadata.declared_status_effects(ctx.item));

    debug!(
        hunger = values.hunger,
        food_level,
        saturation_level,
        health,
        "Estimated health increment"
    );
    health
}

/// Everything a HUD shows while the item is hovered, or `None` for non-food.
pub fn preview_consumption<M>(
    metadata: &M,
    ctx: &EstimationContext<'_, M::Item>,
    limits: &SimulationLimits,
) -> Option<ConsumptionPreview>
where
    M: ItemFoodMetadata + ?Sized,
{
    if !metadata.is_food(ctx.item) {
        return None;
    }
    let food_values = resolve_food_values(metadata, ctx.item, ctx.consumer);
    Some(build_preview(metadata, ctx, limits, food_values))
}

/// Checked form of [`preview_consumption`]; non-food yields `RegenError::NotFood`.
pub fn try_preview_consumption<M>(
    metadata: &M,
    ctx: &EstimationContext<'_, M::Item>,
    limits: &SimulationLimits,
    item_name: &str,
) -> Result<ConsumptionPreview>
where
    M: ItemFoodMetadata + ?Sized,
{
    let food_values = try_resolve_food_values(metadata, ctx.item, ctx.consumer, item_name)?;
    Ok(build_preview(metadata, ctx, limits, food_values))
}

fn build_preview<M>(
    metadata: &M,
    ctx: &EstimationContext<'_, M::Item>,
    limits: &SimulationLimits,
    food_values: FoodValues,
) -> ConsumptionPreview
where
    M: ItemFoodMetadata + ?Sized,
{
    let (food_level, saturation_level) = fed_levels(ctx, &food_values);
    let health_increment = estimate_health_increment(metadata, ctx, limits);
    let health = ctx.consumer.health();
    let projected_health = (health + health_increment).min(ctx.consumer.max_health().max(health));

    ConsumptionPreview {
        food_values,
        food_level,
        saturation_level,
        health_increment,
        projected_health,
        is_rotten: is_rotten(metadata, ctx.item),
    }
}
