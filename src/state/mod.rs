mod persistence;

pub use persistence::{
    load_catalog, load_food_records, load_json, load_params, load_ranges, load_ration,
    save_catalog, save_json, save_params, save_ranges, save_ration, write_diet_csv,
};
