use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use food_regen_rs::cli::{Cli, Command};
use food_regen_rs::error::Result;
use food_regen_rs::estimator::{
    EstimationContext, SimulationLimits, preview_consumption, try_preview_consumption,
};
use food_regen_rs::interface::{
    display_estimate_table, display_preview, prompt_consumer_state, prompt_food, write_csv,
};
use food_regen_rs::models::{ConsumerSnapshot, EstimateRow, FoodItem};
use food_regen_rs::registry::{FoodRegistry, load_consumer, load_food_items, upsert_food_item};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let limits = SimulationLimits {
        max_ticks: cli.max_ticks,
    };
    let command = cli.command.unwrap_or_default();

    if let Command::Add {
        name,
        hunger,
        saturation_modifier,
    } = command
    {
        return cmd_add(&cli.foods, FoodItem::new(&name, hunger, saturation_modifier));
    }

    let registry = FoodRegistry::new(load_food_items(&cli.foods)?);
    if registry.is_empty() {
        println!("No foods defined in {}.", cli.foods.display());
        return Ok(());
    }

    match command {
        Command::Estimate { item } => {
            let consumer = load_consumer(&cli.state)?;
            cmd_estimate(&registry, &consumer, &item, &limits)
        }
        Command::Table { csv } => {
            let consumer = load_consumer(&cli.state)?;
            cmd_table(&registry, &consumer, csv.as_deref(), &limits)
        }
        Command::Interactive => cmd_interactive(&registry, &limits),
        Command::Add { .. } => Ok(()),
    }
}

/// Show the preview for a single food.
fn cmd_estimate(
    registry: &FoodRegistry,
    consumer: &ConsumerSnapshot,
    item: &str,
    limits: &SimulationLimits,
) -> Result<()> {
    let food = registry.require(item)?;
    let ctx = EstimationContext::new(food.name.as_str(), consumer);

    let preview = try_preview_consumption(registry, &ctx, limits, &food.name)?;
    display_preview(food, consumer, &preview);
    Ok(())
}

/// Estimate every known food for the same consumer.
fn cmd_table(
    registry: &FoodRegistry,
    consumer: &ConsumerSnapshot,
    csv_path: Option<&Path>,
    limits: &SimulationLimits,
) -> Result<()> {
    println!(
        "Consumer: food {} | saturation {:.1} | exhaustion {:.2} | health {:.1}/{:.1}",
        consumer.food_level,
        consumer.saturation_level,
        consumer.exhaustion_level,
        consumer.health,
        consumer.max_health
    );

    let rows: Vec<EstimateRow> = registry
        .all_foods()
        .into_iter()
        .filter_map(|food| {
            let ctx = EstimationContext::new(food.name.as_str(), consumer);
            preview_consumption(registry, &ctx, limits)
                .map(|preview| EstimateRow::new(food.name.clone(), &preview))
        })
        .collect();

    display_estimate_table(&rows);

    if let Some(path) = csv_path {
        write_csv(&rows, path)?;
        println!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

/// Add or replace one food definition and save the file.
fn cmd_add(path: &Path, food: FoodItem) -> Result<()> {
    let name = food.name.clone();
    let replaced = upsert_food_item(path, food)?;
    let verb = if replaced { "Updated" } else { "Added" };
    println!("{} {} in {}", verb, name, path.display());
    Ok(())
}

/// Prompt for the consumer state, then preview foods until the user quits.
fn cmd_interactive(registry: &FoodRegistry, limits: &SimulationLimits) -> Result<()> {
    let consumer = prompt_consumer_state()?;

    while let Some(name) = prompt_food(registry)? {
        cmd_estimate(registry, &consumer, &name, limits)?;
    }
    Ok(())
}
