use crate::models::{Diet, DietSolution, FoodCatalog, IntakeBand, NutrientRangeTable};
use crate::ration::{NutrientAssessment, RationSummary};
use crate::targets::NutrientTargets;

fn band_marker(band: IntakeBand) -> &'static str {
    match band {
        IntakeBand::CriticallyLow | IntakeBand::CriticallyHigh => "!!",
        IntakeBand::Low | IntakeBand::High => "! ",
        IntakeBand::Adequate => "  ",
    }
}

/// Display a range table, one nutrient per line.
pub fn display_ranges(ranges: &NutrientRangeTable) {
    let width = ranges.keys().map(|k| k.chars().count()).max().unwrap_or(10);

    println!();
    println!("=== Nutrient Ranges ===");
    println!();
    println!(
        "{:<width$}  {:>10} {:>10} {:>10} {:>10} {:>10}",
        "nutrient",
        "crit low",
        "low",
        "optimal",
        "high",
        "crit high",
        width = width
    );

    for (key, range) in ranges.iter() {
        let flag = if range.is_ordered() { "" } else { "  (unordered)" };
        println!(
            "{:<width$}  {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}{}",
            key,
            range.critical_low,
            range.low,
            range.optimal,
            range.high,
            range.critical_high,
            flag,
            width = width
        );
    }
    println!();
}

/// Display weights and energy figures followed by the range table.
pub fn display_targets(targets: &NutrientTargets) {
    let w = targets.weight_range;
    let c = &targets.calories;

    println!();
    println!("=== Energy ===");
    println!();
    println!(
        "Healthy weight: {:.1}-{:.1} kg (optimal {:.1}-{:.1}, goal {:.1})",
        w[0], w[4], w[1], w[3], w[2]
    );
    println!("Current maintenance: {:.0} kcal", c.current_maintenance);
    println!("Goal maintenance:    {:.0} kcal", c.goal_maintenance);
    println!("Weight loss:         {:.0} kcal", c.weight_loss);
    println!("Recommended:         {:.0} kcal", c.recommended);

    display_ranges(&targets.ranges);
}

/// Display an optimizer result.
pub fn display_diet_solution(solution: &DietSolution, catalog: &FoodCatalog) {
    match solution {
        DietSolution::Infeasible => {
            println!("No diet satisfies every nutrient range with the given foods.");
            println!("Try widening the catalog or relaxing a range.");
        }
        DietSolution::Feasible(diet) => display_diet(diet, catalog),
    }
}

pub fn display_diet(diet: &Diet, catalog: &FoodCatalog) {
    if diet.weights.is_empty() {
        println!("Optimal diet is empty.");
        return;
    }

    println!();
    println!("=== Optimal Diet ===");
    println!();

    let width = diet.weights.keys().map(|k| k.chars().count()).max().unwrap_or(10);

    for (i, (name, grams)) in diet.weights.iter().enumerate() {
        let price = catalog
            .get(name)
            .map(|f| f.price_per_100g * grams / 100.0)
            .unwrap_or(0.0);
        println!(
            "{:>3}. {:<width$} - {:>7.1} g | {:>8.2}",
            i + 1,
            name,
            grams,
            price,
            width = width
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total foods: {}", diet.weights.len());
    println!("Total weight: {:.0} g", diet.total_weight());
    println!("Total price: {:.2}", diet.total_price);
    println!();
}

/// Display achieved nutrient amounts and their bands.
pub fn display_assessment(report: &[NutrientAssessment]) {
    if report.is_empty() {
        return;
    }

    let width = report.iter().map(|a| a.key.chars().count()).max().unwrap_or(10);

    println!();
    println!("=== Nutrients ===");
    println!();

    for item in report {
        println!(
            "{} {:<width$} {:>10.2}  [{:.1} .. {:.1}]  {}",
            band_marker(item.band),
            item.key,
            item.amount,
            item.range.low,
            item.range.high,
            item.band,
            width = width
        );
    }

    let adequate = report.iter().filter(|a| a.band.is_adequate()).count();
    println!();
    println!("Adequate: {}/{}", adequate, report.len());
    println!();
}

pub fn display_ration_summary(summary: &RationSummary) {
    println!();
    println!("=== Ration ===");
    println!();
    println!("Total weight: {:.0} g", summary.total_weight);
    println!("Total price: {:.2}", summary.total_price);

    for unknown in &summary.unknown {
        match &unknown.suggestion {
            Some(s) => println!("Unknown food '{}' (did you mean '{}'?)", unknown.name, s),
            None => println!("Unknown food '{}'", unknown.name),
        }
    }
}
