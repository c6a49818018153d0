use serde::{Deserialize, Serialize};

use crate::domain::common::Choice;

pub const STORAGE_TYPES: &[Choice] = &[
    Choice::new("link", "Store GitHub Links"),
    Choice::new("local", "Download and Store Locally"),
];

pub const CREATION_MODES: &[Choice] = &[
    Choice::new("github", "GitHub Wizard"),
    Choice::new("manual", "Manual Creation"),
];

/// Print tracker: a set of printable files and how many of each are done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: i64,
    pub name: String,
    pub project: Option<i64>,
    #[serde(default)]
    pub project_name: Option<String>,
    pub storage_type: String,
    pub creation_mode: String,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    pub total_quantity: i64,
    pub printed_quantity_total: i64,
    pub progress_percentage: i64,
    pub created_date: chrono::DateTime<chrono::Utc>,
}
