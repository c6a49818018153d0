use contracts::domain::a004_tracker::{Tracker, CREATION_MODES, STORAGE_TYPES};
use contracts::domain::common::choice::label_for;
use contracts::domain::common::LookupKind;
use leptos::prelude::*;

use crate::shared::components::ListPage;
use crate::shared::list_view::use_list_view;
use crate::shared::view_state::{ColumnDef, FilterField, FilterOptions, PersistScope, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrackerFilter {
    Project,
    StorageType,
    CreationMode,
}

impl FilterField for TrackerFilter {
    const ALL: &'static [Self] = &[
        TrackerFilter::Project,
        TrackerFilter::StorageType,
        TrackerFilter::CreationMode,
    ];

    fn key(self) -> &'static str {
        match self {
            TrackerFilter::Project => "project",
            TrackerFilter::StorageType => "storage_type",
            TrackerFilter::CreationMode => "creation_mode",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TrackerFilter::Project => "Project",
            TrackerFilter::StorageType => "Storage",
            TrackerFilter::CreationMode => "Created via",
        }
    }

    fn options(self) -> FilterOptions {
        match self {
            TrackerFilter::Project => FilterOptions::Lookup(LookupKind::Project),
            TrackerFilter::StorageType => FilterOptions::Choices(STORAGE_TYPES),
            TrackerFilter::CreationMode => FilterOptions::Choices(CREATION_MODES),
        }
    }
}

pub static TRACKERS_VIEW: ViewConfig = ViewConfig {
    namespace: "trackers",
    path: "/trackers",
    title: "Trackers",
    columns: &[
        ColumnDef::new("name", "Name", true),
        ColumnDef::new("project", "Project", true),
        ColumnDef::new("progress", "Progress", true),
        ColumnDef::new("storage_type", "Storage", false),
        ColumnDef::new("creation_mode", "Created via", false),
        ColumnDef::new("created_date", "Created", true),
    ],
    archive_toggle: false,
    persist_scope: PersistScope::FiltersOnly,
};

fn tracker_cell(tracker: &Tracker, column: &str) -> AnyView {
    let text = match column {
        "name" => tracker.name.clone(),
        "project" => tracker.project_name.clone().unwrap_or_default(),
        "progress" => {
            let percent = tracker.progress_percentage.clamp(0, 100);
            return view! {
                <div class="progress" title=format!("{}/{}", tracker.printed_quantity_total, tracker.total_quantity)>
                    <div class="progress__bar" style=format!("width: {}%;", percent)></div>
                    <span class="progress__label">{format!("{}%", percent)}</span>
                </div>
            }
            .into_any();
        }
        "storage_type" => label_for(STORAGE_TYPES, &tracker.storage_type),
        "creation_mode" => label_for(CREATION_MODES, &tracker.creation_mode),
        "created_date" => tracker.created_date.format("%Y-%m-%d").to_string(),
        _ => String::new(),
    };
    view! { <span>{text}</span> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn TrackerList() -> impl IntoView {
    let (list, data) = use_list_view::<TrackerFilter, Tracker>(&TRACKERS_VIEW, "trackers");

    view! { <ListPage list=list data=data cell=tracker_cell /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options() {
        assert_eq!(TrackerFilter::Project.lookup(), Some(LookupKind::Project));
        assert_eq!(
            TrackerFilter::StorageType.options(),
            FilterOptions::Choices(STORAGE_TYPES)
        );
        assert_eq!(
            TrackerFilter::from_key("creation_mode"),
            Some(TrackerFilter::CreationMode)
        );
    }
}
