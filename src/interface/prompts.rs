use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::{BmrFormula, Gender, PhysiologicalParameters};

/// Activity levels offered when prompting, with their multipliers.
pub const ACTIVITY_LEVELS: [(&str, f64); 5] = [
    ("sedentary", 1.2),
    ("lightly active", 1.375),
    ("moderately active", 1.55),
    ("very active", 1.725),
    ("extra active", 1.9),
];

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Invalid number: {}", input)))
}

pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    options[selection].parse()
}

pub fn prompt_activity_multiplier() -> Result<f64> {
    let options: Vec<String> = ACTIVITY_LEVELS
        .iter()
        .map(|(name, mult)| format!("{} ({})", name, mult))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(ACTIVITY_LEVELS[selection].1)
}

pub fn prompt_formula() -> Result<BmrFormula> {
    let options = [BmrFormula::MifflinStJeor, BmrFormula::HarrisBenedict];
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();

    let selection = Select::new()
        .with_prompt("BMR formula")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect and validate all physiological parameters.
pub fn collect_parameters() -> Result<PhysiologicalParameters> {
    let gender = prompt_gender()?;
    let height = prompt_number("Height (m)", "1.75")?;
    let weight = prompt_number("Weight (kg)", "70")?;
    let age = prompt_number("Age (years)", "30")?;
    let activity = prompt_activity_multiplier()?;
    let breastfeeding = gender == Gender::Female && prompt_yes_no("Breastfeeding?", false)?;
    let formula = prompt_formula()?;

    let params = PhysiologicalParameters::new(gender, height, weight, age, activity)
        .with_breastfeeding(breastfeeding)
        .with_formula(formula);
    params.validate()?;

    Ok(params)
}
