use crate::models::{ConsumerSnapshot, ConsumptionPreview, EstimateRow, FoodItem};

/// Display what eating one food would do.
pub fn display_preview(food: &FoodItem, consumer: &ConsumerSnapshot, preview: &ConsumptionPreview) {
    println!();
    println!("=== {} ===", food.name);
    println!();
    println!(
        "Nutrition:   +{} food, +{:.1} saturation (modifier {:.2})",
        preview.food_values.hunger,
        preview.food_values.saturation_increment(),
        preview.food_values.saturation_modifier
    );
    println!(
        "Food:        {} => {}",
        consumer.food_level, preview.food_level
    );
    println!(
        "Saturation:  {:.1} => {:.1}",
        consumer.saturation_level, preview.saturation_level
    );
    println!(
        "Health:      {:.1} => {:.1}  (+{:.2})",
        consumer.health, preview.projected_health, preview.health_increment
    );

    for effect in &food.effects {
        let name = if effect.name.is_empty() {
            format!("{:?}", effect.category).to_lowercase()
        } else {
            effect.name.clone()
        };
        let duration = if effect.duration.is_infinite() {
            "infinite".to_string()
        } else {
            format!("{} ticks", effect.duration.ticks())
        };
        println!(
            "Effect:      {} {} for {} ({:.0}% chance)",
            name,
            effect.amplifier.saturating_add(1),
            duration,
            effect.probability * 100.0
        );
    }

    if preview.is_rotten {
        println!("Warning:     this food has harmful effects");
    }
    println!();
}

/// Display estimates for many foods in a formatted table.
pub fn display_estimate_table(rows: &[EstimateRow]) {
    if rows.is_empty() {
        println!("No foods to estimate.");
        return;
    }

    // Find max food name length for alignment
    let max_name_len = rows.iter().map(|r| r.food_name.len()).max().unwrap_or(10);

    println!();
    println!(
        "{:<width$}  {:>4}  {:>6}  {:>5}  {:>6}  {:>7}",
        "Food",
        "Food",
        "Sat+",
        "=>Fd",
        "=>Sat",
        "Health",
        width = max_name_len
    );

    for row in rows {
        let tag = if row.rotten { "  [rotten]" } else { "" };
        println!(
            "{:<width$}  {:>+4}  {:>+6.1}  {:>5}  {:>6.1}  {:>+7.2}{}",
            row.food_name,
            row.hunger,
            row.saturation_increment,
            row.food_level,
            row.saturation_level,
            row.health_increment,
            tag,
            width = max_name_len
        );
    }
    println!();
}
