use serde::{Deserialize, Serialize};

use crate::domain::common::{Choice, LookupOption};

pub const SPOOL_STATUSES: &[Choice] = &[
    Choice::new("new", "New/Unopened"),
    Choice::new("opened", "Opened"),
    Choice::new("in_use", "In Use (On Printer)"),
    Choice::new("low", "Low Stock"),
    Choice::new("empty", "Empty"),
    Choice::new("archived", "Archived"),
];

/// Physical spool, or a group of identical unopened spools.
///
/// Blueprint-backed spools carry a `filament_type`; quick-add spools leave
/// it empty and fill the `standalone_*` fields instead. The backend resolves
/// both into the `display_*` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilamentSpool {
    pub id: i64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_brand: Option<String>,
    #[serde(default)]
    pub display_material: Option<String>,
    #[serde(default)]
    pub display_color_family: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub quantity: i64,
    pub status: String,
    pub initial_weight: Option<i64>,
    pub current_weight: Option<i64>,
    pub location: Option<LookupOption>,
    pub assigned_printer: Option<LookupOption>,
    pub project: Option<LookupOption>,
    pub date_added: Option<chrono::DateTime<chrono::Utc>>,
    pub date_archived: Option<chrono::DateTime<chrono::Utc>>,
}

impl FilamentSpool {
    /// Remaining filament as a share of the initial weight, 0..=100.
    pub fn remaining_percent(&self) -> Option<u8> {
        let initial = self.initial_weight.filter(|w| *w > 0)?;
        let current = self.current_weight?.clamp(0, initial);
        Some(((current * 100) / initial) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spool(initial: Option<i64>, current: Option<i64>) -> FilamentSpool {
        FilamentSpool {
            id: 1,
            display_name: "Galaxy Black".to_string(),
            display_brand: Some("Prusament".to_string()),
            display_material: Some("PLA".to_string()),
            display_color_family: Some("black".to_string()),
            colors: vec!["#1a1a1a".to_string()],
            quantity: 1,
            status: "opened".to_string(),
            initial_weight: initial,
            current_weight: current,
            location: None,
            assigned_printer: None,
            project: None,
            date_added: None,
            date_archived: None,
        }
    }

    #[test]
    fn test_remaining_percent() {
        assert_eq!(spool(Some(1000), Some(250)).remaining_percent(), Some(25));
        assert_eq!(spool(Some(1000), Some(1200)).remaining_percent(), Some(100));
        assert_eq!(spool(Some(0), Some(10)).remaining_percent(), None);
        assert_eq!(spool(None, Some(10)).remaining_percent(), None);
    }
}
