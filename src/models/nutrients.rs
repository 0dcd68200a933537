use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutrient key of the daily energy target. It is the only equality target.
pub const ENERGY_KEY: &str = "Energ_Kcal";

pub const PROTEIN_KEY: &str = "Protein_(g)";
pub const LIPID_KEY: &str = "Lipid_Tot_(g)";
pub const CARBOHYDRATE_KEY: &str = "Carbohydrt_(g)";
pub const SATURATED_FAT_KEY: &str = "FA_Sat_(g)";
pub const FIBER_KEY: &str = "Fiber_TD_(g)";
pub const VEGETABLES_FRUITS_KEY: &str = "vegetables_fruits";

/// Five non-decreasing thresholds for one nutrient, in its absolute daily unit.
///
/// Serialized as a plain `[critical_low, low, optimal, high, critical_high]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 5]", into = "[f64; 5]")]
pub struct NutrientRange {
    pub critical_low: f64,
    pub low: f64,
    pub optimal: f64,
    pub high: f64,
    pub critical_high: f64,
}

impl NutrientRange {
    pub const fn new(critical_low: f64, low: f64, optimal: f64, high: f64, critical_high: f64) -> Self {
        Self {
            critical_low,
            low,
            optimal,
            high,
            critical_high,
        }
    }

    pub const fn from_array(values: [f64; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    pub const fn to_array(self) -> [f64; 5] {
        [
            self.critical_low,
            self.low,
            self.optimal,
            self.high,
            self.critical_high,
        ]
    }

    /// Multiply every threshold by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Add a per-threshold offset.
    pub fn offset(self, delta: [f64; 5]) -> Self {
        let mut values = self.to_array();
        for (v, d) in values.iter_mut().zip(delta) {
            *v += d;
        }
        Self::from_array(values)
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// `critical_low <= low <= optimal <= high <= critical_high`.
    pub fn is_ordered(&self) -> bool {
        self.to_array().windows(2).all(|w| w[0] <= w[1])
    }

    /// Where `value` falls relative to the thresholds.
    pub fn classify(&self, value: f64) -> IntakeBand {
        if value <= self.critical_low {
            IntakeBand::CriticallyLow
        } else if value <= self.low {
            IntakeBand::Low
        } else if value <= self.high {
            IntakeBand::Adequate
        } else if value <= self.critical_high {
            IntakeBand::High
        } else {
            IntakeBand::CriticallyHigh
        }
    }
}

impl From<[f64; 5]> for NutrientRange {
    fn from(values: [f64; 5]) -> Self {
        Self::from_array(values)
    }
}

impl From<NutrientRange> for [f64; 5] {
    fn from(range: NutrientRange) -> Self {
        range.to_array()
    }
}

/// Intake band of an achieved nutrient amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeBand {
    CriticallyLow,
    Low,
    Adequate,
    High,
    CriticallyHigh,
}

impl IntakeBand {
    pub fn is_adequate(self) -> bool {
        self == IntakeBand::Adequate
    }
}

impl fmt::Display for IntakeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeBand::CriticallyLow => "critically low",
            IntakeBand::Low => "low",
            IntakeBand::Adequate => "adequate",
            IntakeBand::High => "high",
            IntakeBand::CriticallyHigh => "critically high",
        };
        f.write_str(name)
    }
}

/// Per-nutrient target ranges for one person.
///
/// Ordered by key so that rendering and constraint rows are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientRangeTable {
    ranges: BTreeMap<String, NutrientRange>,
}

impl NutrientRangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, range: NutrientRange) {
        self.ranges.insert(key.into(), range);
    }

    pub fn get(&self, key: &str) -> Option<&NutrientRange> {
        self.ranges.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.ranges.contains_key(key)
    }

    /// The energy range, if present.
    pub fn energy(&self) -> Option<&NutrientRange> {
        self.get(ENERGY_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientRange)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + Clone {
        self.ranges.keys().map(String::as_str)
    }

    /// Every range except energy; these become inequality bounds.
    pub fn bounded(&self) -> impl Iterator<Item = (&str, &NutrientRange)> {
        self.iter().filter(|(key, _)| *key != ENERGY_KEY)
    }

    /// Keys whose thresholds are not non-decreasing.
    pub fn disordered_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, range)| !range.is_ordered())
            .map(|(key, _)| key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<(String, NutrientRange)> for NutrientRangeTable {
    fn from_iter<I: IntoIterator<Item = (String, NutrientRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ordered() {
        assert!(NutrientRange::new(0.0, 0.0, 0.0, 5.0, 10.0).is_ordered());
        assert!(!NutrientRange::new(1.1, 1.5, 1.8, 0.0, 10.0).is_ordered());
    }

    #[test]
    fn test_classify_bands() {
        let range = NutrientRange::new(10.0, 20.0, 30.0, 40.0, 50.0);
        assert_eq!(range.classify(5.0), IntakeBand::CriticallyLow);
        assert_eq!(range.classify(10.0), IntakeBand::CriticallyLow);
        assert_eq!(range.classify(15.0), IntakeBand::Low);
        assert_eq!(range.classify(25.0), IntakeBand::Adequate);
        assert_eq!(range.classify(40.0), IntakeBand::Adequate);
        assert_eq!(range.classify(45.0), IntakeBand::High);
        assert_eq!(range.classify(51.0), IntakeBand::CriticallyHigh);
    }

    #[test]
    fn test_table_serializes_as_arrays() {
        let mut table = NutrientRangeTable::new();
        table.insert("Selenium_(µg)", NutrientRange::new(70.0, 70.0, 70.0, 300.0, 400.0));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Selenium_(µg)":[70.0,70.0,70.0,300.0,400.0]}"#);

        let back: NutrientRangeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_bounded_skips_energy() {
        let mut table = NutrientRangeTable::new();
        table.insert(ENERGY_KEY, NutrientRange::new(1800.0, 1900.0, 2000.0, 2100.0, 2200.0));
        table.insert(PROTEIN_KEY, NutrientRange::new(50.0, 70.0, 90.0, 110.0, 140.0));

        let keys: Vec<&str> = table.bounded().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![PROTEIN_KEY]);
        assert!(table.energy().is_some());
    }
}
