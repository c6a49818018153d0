use serde::{Deserialize, Serialize};

use crate::domain::common::LookupOption;

/// Filament blueprint. Generic materials (`is_generic`) are the base types
/// such as PLA or PETG that branded blueprints point to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub is_generic: bool,
    pub brand: Option<LookupOption>,
    pub base_material: Option<LookupOption>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub color_family: Option<String>,
    #[serde(default)]
    pub features: Vec<LookupOption>,
    pub diameter: Option<String>,
    pub nozzle_temp_min: Option<i64>,
    pub nozzle_temp_max: Option<i64>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Material {
    pub fn nozzle_range(&self) -> String {
        match (self.nozzle_temp_min, self.nozzle_temp_max) {
            (Some(min), Some(max)) => format!("{min}-{max} °C"),
            (Some(t), None) | (None, Some(t)) => format!("{t} °C"),
            (None, None) => String::new(),
        }
    }
}
