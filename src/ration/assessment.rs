use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{IntakeBand, NutrientRange, NutrientRangeTable};

/// How an achieved amount compares with one nutrient's range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientAssessment {
    pub key: String,
    pub amount: f64,
    pub range: NutrientRange,
    pub band: IntakeBand,
}

/// Classify achieved amounts against every range in the table.
///
/// Nutrients missing from `totals` count as zero.
pub fn assess_intake(totals: &BTreeMap<String, f64>, ranges: &NutrientRangeTable) -> Vec<NutrientAssessment> {
    ranges
        .iter()
        .map(|(key, range)| {
            let amount = totals.get(key).copied().unwrap_or(0.0);
            NutrientAssessment {
                key: key.to_string(),
                amount,
                range: *range,
                band: range.classify(amount),
            }
        })
        .collect()
}
