use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DietError, Result};

/// Price block of a food record. Only the per-100g price is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(rename = "100g", default, skip_serializing_if = "Option::is_none")]
    pub per_100g: Option<f64>,

    #[serde(rename = "kg", default, skip_serializing_if = "Option::is_none")]
    pub per_kg: Option<f64>,

    #[serde(rename = "item", default, skip_serializing_if = "Option::is_none")]
    pub per_item: Option<f64>,
}

/// A food as stored in a food database document, before filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub nutrients_in_100g: BTreeMap<String, f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
}

impl FoodRecord {
    pub fn price_per_100g(&self) -> Option<f64> {
        self.price.as_ref().and_then(|p| p.per_100g)
    }
}

/// A purchasable food with its composition per 100 g.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub name: String,

    /// Nutrient key -> amount in 100 g of the food.
    pub nutrients: BTreeMap<String, f64>,

    /// Price of 100 g.
    pub price_per_100g: f64,

    /// Maximum grams that can be bought. `None` means unbounded.
    pub max_weight: Option<f64>,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price_per_100g: f64) -> Self {
        Self {
            name: name.into(),
            nutrients: BTreeMap::new(),
            price_per_100g,
            max_weight: None,
        }
    }

    pub fn with_nutrient(mut self, key: impl Into<String>, amount: f64) -> Self {
        self.nutrients.insert(key.into(), amount);
        self
    }

    pub fn with_max_weight(mut self, grams: f64) -> Self {
        self.max_weight = Some(grams);
        self
    }

    /// Amount of `key` in 100 g; a missing nutrient contributes nothing.
    #[inline]
    pub fn nutrient(&self, key: &str) -> f64 {
        self.nutrients.get(key).copied().unwrap_or(0.0)
    }

    /// Purchasable grams, infinite when no cap is known.
    #[inline]
    pub fn max_weight_g(&self) -> f64 {
        self.max_weight.unwrap_or(f64::INFINITY)
    }

    pub fn has_all_nutrients<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> bool {
        keys.into_iter().all(|k| self.nutrients.contains_key(k))
    }

    pub fn to_record(&self) -> FoodRecord {
        FoodRecord {
            category: None,
            nutrients_in_100g: self.nutrients.clone(),
            price: Some(PriceInfo {
                per_100g: Some(self.price_per_100g),
                per_kg: Some(self.price_per_100g * 10.0),
                per_item: None,
            }),
            max_weight: self.max_weight,
        }
    }
}

/// Foods available to the optimizer, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    foods: BTreeMap<String, FoodItem>,
}

impl FoodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a food, replacing any previous food with the same name.
    pub fn insert(&mut self, food: FoodItem) {
        self.foods.insert(food.name.clone(), food);
    }

    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.foods.get(name)
    }

    /// Like [`get`](Self::get), but a missing food is an error.
    pub fn require(&self, name: &str) -> Result<&FoodItem> {
        self.get(name)
            .ok_or_else(|| DietError::FoodNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.foods.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Build a catalog from raw database records.
    ///
    /// Keeps only records with a known per-100g price and with every key in
    /// `required_keys` present in their composition.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = (String, FoodRecord)>,
        required_keys: impl IntoIterator<Item = &'a str> + Clone,
    ) -> Self {
        let mut catalog = Self::new();
        for (name, record) in records {
            let Some(price) = record.price_per_100g() else {
                debug!(food = %name, "skipping food without a per-100g price");
                continue;
            };
            let item = FoodItem {
                name: name.clone(),
                nutrients: record.nutrients_in_100g,
                price_per_100g: price,
                max_weight: record.max_weight,
            };
            if !item.has_all_nutrients(required_keys.clone()) {
                debug!(food = %name, "skipping food with incomplete nutrient profile");
                continue;
            }
            catalog.insert(item);
        }
        catalog
    }

    pub fn to_records(&self) -> BTreeMap<String, FoodRecord> {
        self.foods
            .iter()
            .map(|(name, food)| (name.clone(), food.to_record()))
            .collect()
    }
}

impl FromIterator<FoodItem> for FoodCatalog {
    fn from_iter<I: IntoIterator<Item = FoodItem>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for food in iter {
            catalog.insert(food);
        }
        catalog
    }
}
