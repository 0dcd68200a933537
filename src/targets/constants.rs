use crate::models::Gender;

/// Optimal BMI by gender; unspecified gender sits between the two.
pub const OPTIMAL_BMI_MALE: f64 = 22.5;
pub const OPTIMAL_BMI_FEMALE: f64 = 21.5;
pub const OPTIMAL_BMI_OTHER: f64 = 22.0;

/// Lower and upper bounds of the healthy BMI interval.
pub const BMI_HEALTHY_MIN: f64 = 18.5;
pub const BMI_HEALTHY_MAX: f64 = 25.0;

/// Half-width of the optimal band around the optimal BMI.
pub const BMI_OPTIMAL_SPREAD: f64 = 1.0;

/// Extra daily energy needed while breastfeeding.
pub const BREASTFEEDING_EXTRA_KCAL: f64 = 500.0;

/// Daily deficit applied for weight loss.
pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = 500.0;
pub const WEIGHT_LOSS_DEFICIT_BREASTFEEDING_KCAL: f64 = 400.0;

/// Excess weight (kg) at which the full weight-loss deficit applies.
pub const MAX_EXCESS_WEIGHT_KG: f64 = 2.0;

/// Offsets of the energy thresholds around the recommended calories.
pub const ENERGY_BAND_OFFSETS: [f64; 5] = [-200.0, -100.0, 0.0, 100.0, 200.0];

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBOHYDRATE: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Protein grams per kg of current body weight.
pub const PROTEIN_G_PER_KG: [f64; 5] = [0.83, 1.2, 1.4, 1.6, 2.0];

/// Share of calories coming from fat.
pub const FAT_ENERGY_SHARE: [f64; 5] = [0.2, 0.25, 0.275, 0.275, 0.3];

/// Carbohydrate floor in grams per day.
pub const CARBOHYDRATE_FLOOR_G: f64 = 130.0;

/// Share of calories from carbohydrate for the low, high and critical-high thresholds.
pub const CARBOHYDRATE_ENERGY_SHARE_LOW: f64 = 0.45;
pub const CARBOHYDRATE_ENERGY_SHARE_HIGH: f64 = 0.6;
pub const CARBOHYDRATE_ENERGY_SHARE_CRITICAL_HIGH: f64 = 0.65;

/// Saturated fat share of calories; the lower three thresholds are zero.
pub const SATURATED_FAT_ENERGY_SHARE: [f64; 5] = [0.0, 0.0, 0.0, 0.05, 0.1];

/// Vegetables and fruits, grams per day, independent of the person.
pub const VEGETABLES_FRUITS_G: [f64; 5] = [400.0, 400.0, 800.0, 1000.0, 1200.0];

pub const FIBER_MALE_G: [f64; 5] = [25.0, 30.0, 38.0, 45.0, 70.0];
pub const FIBER_FEMALE_G: [f64; 5] = [20.0, 21.0, 25.0, 35.0, 65.0];

/// Vitamin D conversion used for the IU column.
pub const VITAMIN_D_IU_PER_UG: f64 = 40.0;

/// Reference daily intakes of vitamins and minerals for men.
pub const MALE_MICRONUTRIENTS: &[(&str, [f64; 5])] = &[
    ("Calcium_(mg)", [800.0, 1000.0, 1200.0, 2000.0, 2500.0]),
    ("Iron_(mg)", [8.0, 10.0, 11.0, 18.0, 45.0]),
    ("Magnesium_(mg)", [400.0, 420.0, 500.0, 600.0, 700.0]),
    ("Phosphorus_(mg)", [800.0, 1000.0, 1200.0, 2500.0, 4000.0]),
    ("Potassium_(mg)", [2500.0, 3000.0, 3400.0, 5000.0, 10000.0]),
    ("Sodium_(mg)", [1300.0, 1500.0, 1750.0, 2000.0, 2300.0]),
    ("Zinc_(mg)", [11.0, 12.0, 15.0, 25.0, 40.0]),
    ("Copper_mg)", [0.9, 1.0, 1.5, 3.0, 10.0]),
    ("Manganese_(mg)", [2.3, 2.3, 2.3, 5.0, 11.0]),
    ("Selenium_(µg)", [70.0, 70.0, 70.0, 300.0, 400.0]),
    ("Vit_C_(mg)", [90.0, 120.0, 150.0, 500.0, 2000.0]),
    ("Thiamin_(mg)", [1.2, 1.6, 2.0, 5.0, 10.0]),
    ("Riboflavin_(mg)", [1.3, 1.8, 2.0, 5.0, 10.0]),
    ("Niacin_(mg)", [16.0, 20.0, 28.0, 35.0, 60.0]),
    ("Panto_Acid_mg)", [5.0, 5.0, 5.0, 10.0, 20.0]),
    ("Vit_B6_(mg)", [1.3, 2.0, 2.0, 25.0, 100.0]),
    ("Folate_Tot_(µg)", [400.0, 400.0, 400.0, 800.0, 1000.0]),
    ("Choline_Tot_ (mg)", [550.0, 550.0, 750.0, 1000.0, 3500.0]),
    ("Vit_B12_(µg)", [2.4, 3.0, 3.0, 10.0, 20.0]),
    ("Vit_A_RAE", [900.0, 1300.0, 1500.0, 2000.0, 3000.0]),
    ("Vit_E_(mg)", [15.0, 15.0, 15.0, 300.0, 1000.0]),
    ("Vit_D_µg", [10.0, 15.0, 40.0, 50.0, 100.0]),
    ("Vit_K_(µg)", [120.0, 200.0, 250.0, 300.0, 500.0]),
];

/// Reference daily intakes of vitamins and minerals for women.
pub const FEMALE_MICRONUTRIENTS: &[(&str, [f64; 5])] = &[
    ("Calcium_(mg)", [800.0, 1000.0, 1200.0, 2000.0, 2500.0]),
    ("Iron_(mg)", [18.0, 18.0, 18.0, 36.0, 45.0]),
    ("Magnesium_(mg)", [310.0, 320.0, 400.0, 500.0, 600.0]),
    ("Phosphorus_(mg)", [800.0, 1000.0, 1200.0, 2500.0, 4000.0]),
    ("Potassium_(mg)", [2500.0, 2600.0, 3000.0, 5000.0, 10000.0]),
    ("Sodium_(mg)", [1300.0, 1500.0, 1750.0, 2000.0, 2300.0]),
    ("Zinc_(mg)", [10.0, 12.0, 15.0, 25.0, 40.0]),
    ("Copper_mg)", [0.9, 1.0, 1.5, 3.0, 10.0]),
    ("Manganese_(mg)", [1.8, 2.0, 2.0, 5.0, 11.0]),
    ("Selenium_(µg)", [55.0, 55.0, 55.0, 300.0, 400.0]),
    ("Vit_C_(mg)", [90.0, 120.0, 150.0, 500.0, 2000.0]),
    ("Thiamin_(mg)", [1.1, 1.5, 1.8, 5.0, 10.0]),
    ("Riboflavin_(mg)", [1.1, 1.8, 2.0, 5.0, 10.0]),
    ("Niacin_(mg)", [14.0, 20.0, 20.0, 35.0, 60.0]),
    ("Panto_Acid_mg)", [5.0, 5.0, 5.0, 10.0, 20.0]),
    ("Vit_B6_(mg)", [1.3, 2.0, 2.0, 25.0, 100.0]),
    ("Folate_Tot_(µg)", [400.0, 400.0, 400.0, 800.0, 1000.0]),
    ("Choline_Tot_ (mg)", [425.0, 425.0, 750.0, 1000.0, 3500.0]),
    ("Vit_B12_(µg)", [2.4, 3.0, 3.0, 10.0, 20.0]),
    ("Vit_A_RAE", [900.0, 1300.0, 1500.0, 2000.0, 3000.0]),
    ("Vit_E_(mg)", [15.0, 15.0, 15.0, 300.0, 1000.0]),
    ("Vit_D_µg", [10.0, 15.0, 40.0, 50.0, 100.0]),
    (
        "Vit_D_IU",
        [
            10.0 * VITAMIN_D_IU_PER_UG,
            15.0 * VITAMIN_D_IU_PER_UG,
            40.0 * VITAMIN_D_IU_PER_UG,
            50.0 * VITAMIN_D_IU_PER_UG,
            100.0 * VITAMIN_D_IU_PER_UG,
        ],
    ),
    ("Vit_K_(µg)", [120.0, 200.0, 250.0, 500.0, 1000.0]),
];

/// Increments added to the female table while breastfeeding.
///
/// Keys not listed here are unchanged.
pub const BREASTFEEDING_INCREMENTS: &[(&str, [f64; 5])] = &[
    ("Calcium_(mg)", [400.0, 400.0, 400.0, 0.0, 0.0]),
    ("Iron_(mg)", [0.0, 9.0, 9.0, 0.0, 0.0]),
    ("Magnesium_(mg)", [50.0, 50.0, 50.0, 50.0, 50.0]),
    ("Phosphorus_(mg)", [200.0, 200.0, 200.0, 0.0, 0.0]),
    ("Zinc_(mg)", [3.0, 3.0, 0.0, 0.0, 0.0]),
    ("Copper_mg)", [0.4, 0.4, 0.4, 0.0, 0.0]),
    ("Manganese_(mg)", [0.8, 0.8, 0.8, 0.0, 0.0]),
    ("Selenium_(µg)", [15.0, 15.0, 15.0, 0.0, 0.0]),
    ("Vit_C_(mg)", [30.0, 30.0, 30.0, 0.0, 0.0]),
    ("Thiamin_(mg)", [0.3, 0.3, 0.3, 0.0, 0.0]),
    ("Riboflavin_(mg)", [0.5, 0.3, 0.3, 0.0, 0.0]),
    ("Niacin_(mg)", [3.0, 3.0, 3.0, 0.0, 0.0]),
    ("Panto_Acid_mg)", [2.0, 2.0, 2.0, 0.0, 0.0]),
    ("Vit_B6_(mg)", [0.6, 0.5, 0.5, 0.0, 0.0]),
    ("Folate_Tot_(µg)", [100.0, 100.0, 100.0, 0.0, 0.0]),
    ("Choline_Tot_ (mg)", [125.0, 125.0, 0.0, 0.0, 0.0]),
    ("Vit_B12_(µg)", [0.4, 0.5, 0.5, 0.0, 0.0]),
    ("Vit_A_RAE", [400.0, 200.0, 200.0, 0.0, 0.0]),
    ("Vit_E_(mg)", [4.0, 4.0, 4.0, 0.0, 0.0]),
];

pub fn optimal_bmi(gender: Gender) -> f64 {
    match gender {
        Gender::Male => OPTIMAL_BMI_MALE,
        Gender::Female => OPTIMAL_BMI_FEMALE,
        Gender::Other => OPTIMAL_BMI_OTHER,
    }
}

pub fn fiber_table(gender: Gender) -> Option<[f64; 5]> {
    match gender {
        Gender::Male => Some(FIBER_MALE_G),
        Gender::Female => Some(FIBER_FEMALE_G),
        Gender::Other => None,
    }
}

pub fn micronutrient_table(gender: Gender) -> Option<&'static [(&'static str, [f64; 5])]> {
    match gender {
        Gender::Male => Some(MALE_MICRONUTRIENTS),
        Gender::Female => Some(FEMALE_MICRONUTRIENTS),
        Gender::Other => None,
    }
}

/// Breastfeeding increment for a nutrient, if any.
pub fn breastfeeding_increment(key: &str) -> Option<[f64; 5]> {
    BREASTFEEDING_INCREMENTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, delta)| *delta)
}
