use serde::{Deserialize, Serialize};

use crate::domain::common::LookupOption;

/// Part or consumable kept in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub title: String,
    pub brand: Option<LookupOption>,
    pub part_type: Option<LookupOption>,
    pub quantity: i64,
    /// Decimal serialized as a string by the backend, e.g. `"12.50"`.
    pub cost: Option<String>,
    pub location: Option<LookupOption>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub associated_projects: Vec<LookupOption>,
}

impl InventoryItem {
    pub fn brand_name(&self) -> &str {
        self.brand.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }

    pub fn part_type_name(&self) -> &str {
        self.part_type.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn location_name(&self) -> &str {
        self.location.as_ref().map(|l| l.name.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_lookups() {
        let json = r#"{
            "id": 1,
            "title": "M3x8 screw",
            "brand": {"id": 2, "name": "Bossard"},
            "part_type": null,
            "quantity": 150,
            "cost": "4.20",
            "location": {"id": 5, "name": "Drawer A"},
            "photo": null,
            "associated_projects": [{"id": 9, "project_name": "Enclosure"}]
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.brand_name(), "Bossard");
        assert_eq!(item.part_type_name(), "");
        assert_eq!(item.location_name(), "Drawer A");
        assert_eq!(item.associated_projects[0].name, "Enclosure");
    }
}
