use std::path::Path;

use clap::Parser;
use tracing::info;

use ration_planner_rs::cli::{Cli, Command};
use ration_planner_rs::error::Result;
use ration_planner_rs::interface::{
    collect_parameters, display_assessment, display_diet_solution, display_ration_summary,
    display_targets, prompt_yes_no,
};
use ration_planner_rs::logging::init_logging;
use ration_planner_rs::models::{FoodCatalog, Ration};
use ration_planner_rs::optimizer::optimize_diet;
use ration_planner_rs::ration::{assess_intake, summarize_ration};
use ration_planner_rs::state::{
    load_catalog, load_food_records, load_params, load_ration, save_params, save_ranges,
    save_ration, write_diet_csv,
};
use ration_planner_rs::targets::derive_targets;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Ranges { params, out } => cmd_ranges(&params, out.as_deref()),
        Command::Optimize {
            params,
            catalog,
            csv,
            json,
        } => cmd_optimize(&params, &catalog, csv.as_deref(), json.as_deref()),
        Command::Evaluate {
            params,
            catalog,
            ration,
        } => cmd_evaluate(&params, &catalog, &ration),
        Command::InitParams { out } => cmd_init_params(&out),
    }
}

/// Print (and optionally save) the nutrient ranges for a person.
fn cmd_ranges(params_path: &Path, out: Option<&Path>) -> Result<()> {
    let params = load_params(params_path)?;
    let targets = derive_targets(&params)?;

    display_targets(&targets);

    if let Some(path) = out {
        save_ranges(path, &targets.ranges)?;
        println!("Ranges saved to {}", path.display());
    }

    Ok(())
}

/// Solve for the cheapest diet and print it.
fn cmd_optimize(
    params_path: &Path,
    catalog_path: &Path,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let params = load_params(params_path)?;
    let targets = derive_targets(&params)?;
    let catalog = load_catalog(catalog_path, &targets.ranges)?;

    println!(
        "Loaded {} foods with complete nutrient data and price",
        catalog.len()
    );
    println!(
        "Target energy: {:.0} kcal, {} constrained nutrients",
        targets.calories.recommended,
        targets.ranges.len() - 1
    );

    let solution = optimize_diet(&catalog, &targets.ranges)?;
    display_diet_solution(&solution, &catalog);

    let Some(diet) = solution.diet() else {
        return Ok(());
    };

    let report = assess_intake(&diet.nutrient_totals(&catalog), &targets.ranges);
    display_assessment(&report);

    if let Some(path) = csv {
        write_diet_csv(path, diet, &catalog)?;
        println!("Diet written to {}", path.display());
    }

    if let Some(path) = json {
        save_ration(path, &Ration::from(diet.weights.clone()))?;
        println!("Diet written to {}", path.display());
    }

    Ok(())
}

/// Compare an eaten ration with the person's nutrient ranges.
fn cmd_evaluate(params_path: &Path, catalog_path: &Path, ration_path: &Path) -> Result<()> {
    let params = load_params(params_path)?;
    let targets = derive_targets(&params)?;

    let records = load_food_records(catalog_path)?;
    let catalog = FoodCatalog::from_records(records, std::iter::empty::<&str>());
    let ration = load_ration(ration_path)?;
    info!(items = ration.items.len(), "loaded ration");

    let summary = summarize_ration(&ration, &catalog);
    display_ration_summary(&summary);

    let report = assess_intake(&summary.nutrients_total, &targets.ranges);
    display_assessment(&report);

    Ok(())
}

/// Prompt for physiological parameters and save them.
fn cmd_init_params(out: &Path) -> Result<()> {
    if out.exists() {
        let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", out.display()), false)?;
        if !overwrite {
            return Ok(());
        }
    }

    let params = collect_parameters()?;
    save_params(out, &params)?;
    println!("Parameters saved to {}", out.display());

    Ok(())
}
