use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Diet, FoodCatalog, FoodRecord, NutrientRangeTable, PhysiologicalParameters, Ration};

/// Read a UTF-8 JSON document.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a pretty-printed JSON document. Non-ASCII text is written as-is.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved json");
    Ok(())
}

pub fn load_params<P: AsRef<Path>>(path: P) -> Result<PhysiologicalParameters> {
    load_json(path)
}

pub fn save_params<P: AsRef<Path>>(path: P, params: &PhysiologicalParameters) -> Result<()> {
    save_json(path, params)
}

/// Load a food database document: food name -> record.
pub fn load_food_records<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, FoodRecord>> {
    load_json(path)
}

/// Load a catalog keeping only priced foods that cover every key of `ranges`.
pub fn load_catalog<P: AsRef<Path>>(path: P, ranges: &NutrientRangeTable) -> Result<FoodCatalog> {
    let records = load_food_records(path)?;
    let total = records.len();
    let catalog = FoodCatalog::from_records(records, ranges.keys());
    debug!(total, kept = catalog.len(), "filtered food database");
    Ok(catalog)
}

pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    save_json(path, &catalog.to_records())
}

pub fn load_ration<P: AsRef<Path>>(path: P) -> Result<Ration> {
    load_json(path)
}

pub fn save_ration<P: AsRef<Path>>(path: P, ration: &Ration) -> Result<()> {
    save_json(path, ration)
}

pub fn save_ranges<P: AsRef<Path>>(path: P, ranges: &NutrientRangeTable) -> Result<()> {
    save_json(path, ranges)
}

pub fn load_ranges<P: AsRef<Path>>(path: P) -> Result<NutrientRangeTable> {
    load_json(path)
}

/// Write a diet as `food,grams,price` rows.
pub fn write_diet_csv<P: AsRef<Path>>(path: P, diet: &Diet, catalog: &FoodCatalog) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["food", "grams", "price"])?;

    for (name, grams) in &diet.weights {
        let price = catalog.require(name)?.price_per_100g * grams / 100.0;
        wtr.write_record([name.clone(), format!("{:.1}", grams), format!("{:.2}", price)])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::error::DietError;
    use crate::models::{FoodItem, Gender, NutrientRange};

    #[test]
    fn test_params_roundtrip() {
        let params = PhysiologicalParameters::new(Gender::Female, 1.7, 64.0, 32.0, 1.375)
            .with_breastfeeding(true);

        let file = NamedTempFile::new().unwrap();
        save_params(file.path(), &params).unwrap();
        assert_eq!(load_params(file.path()).unwrap(), params);
    }

    #[test]
    fn test_load_catalog_filters_incomplete() {
        let json = r#"{
            "Творог 5%": {
                "nutrients_in_100g": {"Energ_Kcal": 121, "Protein_(g)": 17.2},
                "price": {"100g": 32.5}
            },
            "Water": {
                "nutrients_in_100g": {"Energ_Kcal": 0},
                "price": {"100g": 1}
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let mut ranges = NutrientRangeTable::new();
        ranges.insert("Energ_Kcal", NutrientRange::new(1800.0, 1900.0, 2000.0, 2100.0, 2200.0));
        ranges.insert("Protein_(g)", NutrientRange::new(50.0, 70.0, 90.0, 110.0, 140.0));

        let catalog = load_catalog(file.path(), &ranges).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Творог 5%").unwrap().price_per_100g, 32.5);
    }

    #[test]
    fn test_write_diet_csv() {
        let catalog: FoodCatalog = [FoodItem::new("Oats", 8.0)].into_iter().collect();
        let mut diet = Diet::default();
        diet.weights.insert("Oats".to_string(), 250.0);
        diet.total_price = 20.0;

        let file = NamedTempFile::new().unwrap();
        write_diet_csv(file.path(), &diet, &catalog).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["food,grams,price", "Oats,250.0,20.00"]);

        diet.weights.insert("Unknown".to_string(), 10.0);
        assert!(matches!(
            write_diet_csv(file.path(), &diet, &catalog),
            Err(DietError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_catalog_roundtrip_keeps_unicode_keys() {
        let catalog: FoodCatalog = [FoodItem::new("Гречка", 9.5)
            .with_nutrient("Selenium_(µg)", 8.3)
            .with_max_weight(900.0)]
        .into_iter()
        .collect();

        let file = NamedTempFile::new().unwrap();
        save_catalog(file.path(), &catalog).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("Гречка"));

        let ranges = NutrientRangeTable::new();
        let reloaded = load_catalog(file.path(), &ranges).unwrap();
        assert_eq!(reloaded, catalog);
    }
}
