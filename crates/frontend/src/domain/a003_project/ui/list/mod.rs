use contracts::domain::a003_project::{Project, PROJECT_STATUSES};
use leptos::prelude::*;

use crate::shared::components::ListPage;
use crate::shared::list_view::use_list_view;
use crate::shared::view_state::{ColumnDef, FilterField, FilterOptions, PersistScope, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProjectFilter {
    Status,
}

impl FilterField for ProjectFilter {
    const ALL: &'static [Self] = &[ProjectFilter::Status];

    fn key(self) -> &'static str {
        "status"
    }

    fn label(self) -> &'static str {
        "Status"
    }

    fn options(self) -> FilterOptions {
        FilterOptions::Choices(PROJECT_STATUSES)
    }
}

/// Projects remember the search text together with the filters.
pub static PROJECTS_VIEW: ViewConfig = ViewConfig {
    namespace: "projects",
    path: "/projects",
    title: "Projects",
    columns: &[
        ColumnDef::new("name", "Name", true),
        ColumnDef::new("status", "Status", true),
        ColumnDef::new("start_date", "Start", true),
        ColumnDef::new("due_date", "Due", true),
        ColumnDef::new("end_date", "End", false),
        ColumnDef::new("total_cost", "Total Cost", false),
        ColumnDef::new("description", "Description", false),
    ],
    archive_toggle: false,
    persist_scope: PersistScope::FiltersAndSearch,
};

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn project_cell(project: &Project, column: &str) -> AnyView {
    let text = match column {
        "name" => project.project_name.clone(),
        "status" => project.status.clone(),
        "start_date" => format_date(project.start_date),
        "due_date" => format_date(project.due_date),
        "end_date" => format_date(project.end_date),
        "total_cost" => project.total_cost_display(),
        "description" => project.description.clone().unwrap_or_default(),
        _ => String::new(),
    };
    view! { <span>{text}</span> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let (list, data) = use_list_view::<ProjectFilter, Project>(&PROJECTS_VIEW, "projects");

    view! { <ListPage list=list data=data cell=project_cell /> }
}
