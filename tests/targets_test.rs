use assert_float_eq::*;

use ration_planner_rs::models::nutrients::{CARBOHYDRATE_KEY, ENERGY_KEY, PROTEIN_KEY};
use ration_planner_rs::models::{BmrFormula, Gender, PhysiologicalParameters};
use ration_planner_rs::targets::{calculate_nutrient_ranges, derive_targets};
use ration_planner_rs::DietError;

fn person(gender: Gender, height: f64, weight: f64, age: f64, activity: f64) -> PhysiologicalParameters {
    PhysiologicalParameters::new(gender, height, weight, age, activity)
}

fn typical_people() -> Vec<PhysiologicalParameters> {
    vec![
        person(Gender::Male, 1.8, 80.0, 35.0, 1.55),
        person(Gender::Female, 1.65, 60.0, 30.0, 1.375),
        person(Gender::Female, 1.7, 64.0, 32.0, 1.375).with_breastfeeding(true),
        person(Gender::Male, 1.75, 70.0, 30.0, 1.3).with_formula(BmrFormula::HarrisBenedict),
    ]
}

#[test]
fn test_typical_people_have_ordered_ranges() {
    for params in typical_people() {
        let ranges = calculate_nutrient_ranges(&params).unwrap();
        assert!(
            ranges.disordered_keys().is_empty(),
            "{:?} produced unordered ranges {:?}",
            params,
            ranges.disordered_keys()
        );
    }
}

#[test]
fn test_only_carbohydrate_residual_can_be_unordered() {
    let mut checked = 0;
    for gender in [Gender::Male, Gender::Female] {
        let nursing_options: &[bool] = if gender == Gender::Female { &[false, true] } else { &[false] };
        for &breastfeeding in nursing_options {
            for formula in [BmrFormula::MifflinStJeor, BmrFormula::HarrisBenedict] {
                for height in [1.55, 1.7, 1.85] {
                    for weight in [50.0, 70.0, 95.0] {
                        for age in [20.0, 45.0, 70.0] {
                            for activity in [1.2, 1.55, 1.9] {
                                let params = person(gender, height, weight, age, activity)
                                    .with_breastfeeding(breastfeeding)
                                    .with_formula(formula);
                                let ranges = calculate_nutrient_ranges(&params).unwrap();
                                for key in ranges.disordered_keys() {
                                    assert_eq!(key, CARBOHYDRATE_KEY, "{:?}", params);
                                }
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }
    }
    assert_eq!(checked, 3 * 2 * 81);
}

#[test]
fn test_low_energy_flags_carbohydrate_floor() {
    // Recommended intake is so low that 45% of it is below the 130 g floor.
    let params = person(Gender::Female, 1.5, 45.0, 80.0, 1.2);
    let ranges = calculate_nutrient_ranges(&params).unwrap();

    let carbs = ranges.get(CARBOHYDRATE_KEY).unwrap();
    assert!(carbs.critical_low > carbs.low);
    assert_eq!(ranges.disordered_keys(), vec![CARBOHYDRATE_KEY]);
}

#[test]
fn test_energy_range_centered_on_recommendation() {
    for params in typical_people() {
        let targets = derive_targets(&params).unwrap();
        let rec = targets.calories.recommended;
        let energy = targets.ranges.get(ENERGY_KEY).unwrap();

        assert_eq!(energy.optimal, rec);
        assert_eq!(energy.low, rec - 100.0);
        assert_eq!(energy.high, rec + 100.0);
        assert_eq!(energy.critical_low, rec - 200.0);
        assert_eq!(energy.critical_high, rec + 200.0);
    }
}

#[test]
fn test_protein_scales_with_current_weight() {
    let light = person(Gender::Male, 1.8, 60.0, 35.0, 1.55);
    let heavy = person(Gender::Male, 1.8, 120.0, 35.0, 1.55);

    let p1 = *calculate_nutrient_ranges(&light).unwrap().get(PROTEIN_KEY).unwrap();
    let p2 = *calculate_nutrient_ranges(&heavy).unwrap().get(PROTEIN_KEY).unwrap();

    for (a, b) in p1.to_array().iter().zip(p2.to_array()) {
        assert_float_absolute_eq!(a * 2.0, b, 1e-12);
    }
    assert_float_absolute_eq!(p1.optimal, 84.0, 1e-9);
}

#[test]
fn test_goal_weight_and_maintenance() {
    // Exactly at goal weight: recommendation equals maintenance.
    let height = 1.8;
    let goal = 22.5 * height * height;
    let params = person(Gender::Male, height, goal, 40.0, 1.4);
    let targets = derive_targets(&params).unwrap();

    assert_float_absolute_eq!(targets.goal_weight(), goal, 1e-9);
    assert_float_absolute_eq!(targets.calories.recommended, targets.calories.goal_maintenance, 1e-9);

    let bmr = 10.0 * goal + 6.25 * 180.0 - 5.0 * 40.0 + 5.0;
    assert_float_absolute_eq!(targets.calories.current_maintenance, bmr * 1.4, 1e-9);
}

#[test]
fn test_table_contains_expected_keys() {
    let ranges = calculate_nutrient_ranges(&typical_people()[0]).unwrap();
    for key in [
        "Energ_Kcal",
        "Protein_(g)",
        "Lipid_Tot_(g)",
        "Carbohydrt_(g)",
        "FA_Sat_(g)",
        "Fiber_TD_(g)",
        "vegetables_fruits",
        "Calcium_(mg)",
        "Selenium_(µg)",
        "Vit_K_(µg)",
    ] {
        assert!(ranges.contains(key), "missing {}", key);
    }
    assert_eq!(ranges.len(), 7 + 23);
}

#[test]
fn test_invalid_parameters() {
    let mut params = typical_people()[0].clone();
    params.height = -1.0;
    assert!(matches!(derive_targets(&params), Err(DietError::InvalidParameter(_))));

    let other = person(Gender::Other, 1.7, 70.0, 30.0, 1.3);
    assert!(matches!(derive_targets(&other), Err(DietError::InvalidParameter(_))));
}

#[test]
fn test_deterministic() {
    let params = typical_people()[2].clone();
    assert_eq!(
        calculate_nutrient_ranges(&params).unwrap(),
        calculate_nutrient_ranges(&params).unwrap()
    );
}
