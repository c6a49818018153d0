use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Choice;

pub const PROJECT_STATUSES: &[Choice] = &[
    Choice::new("Planning", "Planning"),
    Choice::new("In Progress", "In Progress"),
    Choice::new("Completed", "Completed"),
    Choice::new("Canceled", "Canceled"),
    Choice::new("On Hold", "On Hold"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Sum of linked inventory costs; the backend sends a number or a decimal string.
    #[serde(default)]
    pub total_cost: Option<serde_json::Value>,
}

impl Project {
    pub fn total_cost_display(&self) -> String {
        match &self.total_cost {
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }
}
