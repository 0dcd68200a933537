use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// Biological sex used by the energy formulas and the reference tables.
///
/// `Other` is accepted on input so that it can be reported precisely: it has
/// an optimal BMI but no BMR formula or reference intake tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for Gender {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(DietError::InvalidParameter(format!(
                "unrecognized gender '{}', use 'male' or 'female'",
                other
            ))),
        }
    }
}

/// Basal metabolic rate equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmrFormula::MifflinStJeor => "mifflin_st_jeor",
            BmrFormula::HarrisBenedict => "harris_benedict",
        };
        f.write_str(name)
    }
}

impl FromStr for BmrFormula {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mifflin_st_jeor" | "mifflin" => Ok(BmrFormula::MifflinStJeor),
            "harris_benedict" | "harris" => Ok(BmrFormula::HarrisBenedict),
            other => Err(DietError::InvalidParameter(format!(
                "unsupported BMR formula '{}', use 'mifflin_st_jeor' or 'harris_benedict'",
                other
            ))),
        }
    }
}

/// Physiological parameters of a single person.
///
/// Height is in meters, weight in kilograms, age in years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalParameters {
    pub gender: Gender,

    pub height: f64,

    #[serde(rename = "weight")]
    pub current_weight: f64,

    pub age: f64,

    pub activity_multiplier: f64,

    #[serde(default)]
    pub breastfeeding: bool,

    #[serde(default)]
    pub formula: BmrFormula,
}

impl PhysiologicalParameters {
    pub fn new(
        gender: Gender,
        height: f64,
        current_weight: f64,
        age: f64,
        activity_multiplier: f64,
    ) -> Self {
        Self {
            gender,
            height,
            current_weight,
            age,
            activity_multiplier,
            breastfeeding: false,
            formula: BmrFormula::default(),
        }
    }

    pub fn with_breastfeeding(mut self, breastfeeding: bool) -> Self {
        self.breastfeeding = breastfeeding;
        self
    }

    pub fn with_formula(mut self, formula: BmrFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Height in centimeters, as the BMR equations expect.
    #[inline]
    pub fn height_cm(&self) -> f64 {
        self.height * 100.0
    }

    /// Check numeric ranges and field combinations.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("height", self.height, self.height > 0.0),
            ("weight", self.current_weight, self.current_weight > 0.0),
            ("age", self.age, self.age >= 0.0),
            (
                "activity multiplier",
                self.activity_multiplier,
                self.activity_multiplier > 0.0,
            ),
        ];

        for (field, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(DietError::InvalidParameter(format!(
                    "{} out of range: {}",
                    field, value
                )));
            }
        }

        if self.breastfeeding && self.gender != Gender::Female {
            return Err(DietError::InvalidParameter(format!(
                "breastfeeding is only valid for female, got {}",
                self.gender
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> PhysiologicalParameters {
        PhysiologicalParameters::new(Gender::Female, 1.7, 64.0, 32.0, 1.375)
    }

    #[test]
    fn test_validate_accepts_typical_person() {
        assert!(sample_params().validate().is_ok());
        assert!(sample_params().with_breastfeeding(true).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_height() {
        let mut params = sample_params();
        params.height = 0.0;
        assert!(matches!(
            params.validate(),
            Err(DietError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut params = sample_params();
        params.current_weight = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_male_breastfeeding() {
        let mut params = sample_params().with_breastfeeding(true);
        params.gender = Gender::Male;
        assert!(matches!(
            params.validate(),
            Err(DietError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_parse_gender_and_formula() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("robot".parse::<Gender>().is_err());

        assert_eq!(
            "harris-benedict".parse::<BmrFormula>().unwrap(),
            BmrFormula::HarrisBenedict
        );
        assert!(matches!(
            "katch_mcardle".parse::<BmrFormula>(),
            Err(DietError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_deserialize_defaults_formula_and_breastfeeding() {
        let json = r#"{"gender": "male", "height": 1.8, "weight": 80, "age": 40, "activity_multiplier": 1.2}"#;
        let params: PhysiologicalParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.gender, Gender::Male);
        assert_eq!(params.formula, BmrFormula::MifflinStJeor);
        assert!(!params.breastfeeding);
        assert_eq!(params.current_weight, 80.0);
    }
}
