use contracts::domain::a002_filament_spool::{FilamentSpool, SPOOL_STATUSES};
use contracts::domain::common::choice::{label_for, COLOR_FAMILIES};
use contracts::domain::common::LookupKind;
use leptos::prelude::*;

use crate::shared::components::ListPage;
use crate::shared::list_view::use_list_view;
use crate::shared::view_state::{ColumnDef, FilterField, FilterOptions, PersistScope, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpoolFilter {
    Status,
    Brand,
    Material,
    ColorFamily,
    Feature,
    Project,
}

impl FilterField for SpoolFilter {
    const ALL: &'static [Self] = &[
        SpoolFilter::Status,
        SpoolFilter::Brand,
        SpoolFilter::Material,
        SpoolFilter::ColorFamily,
        SpoolFilter::Feature,
        SpoolFilter::Project,
    ];

    fn key(self) -> &'static str {
        match self {
            SpoolFilter::Status => "status",
            SpoolFilter::Brand => "brand",
            SpoolFilter::Material => "material",
            SpoolFilter::ColorFamily => "color_family",
            SpoolFilter::Feature => "feature",
            SpoolFilter::Project => "project",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SpoolFilter::Status => "Status",
            SpoolFilter::Brand => "Brand",
            SpoolFilter::Material => "Material",
            SpoolFilter::ColorFamily => "Color family",
            SpoolFilter::Feature => "Feature",
            SpoolFilter::Project => "Project",
        }
    }

    fn options(self) -> FilterOptions {
        match self {
            SpoolFilter::Status => FilterOptions::Choices(SPOOL_STATUSES),
            SpoolFilter::Brand => FilterOptions::Lookup(LookupKind::Brand),
            SpoolFilter::Material => FilterOptions::Lookup(LookupKind::BaseMaterial),
            SpoolFilter::ColorFamily => FilterOptions::Choices(COLOR_FAMILIES),
            SpoolFilter::Feature => FilterOptions::Lookup(LookupKind::Feature),
            SpoolFilter::Project => FilterOptions::Lookup(LookupKind::Project),
        }
    }
}

pub static SPOOLS_VIEW: ViewConfig = ViewConfig {
    namespace: "filament-spools",
    path: "/filament-spools",
    title: "Filament Spools",
    columns: &[
        ColumnDef::new("name", "Name", true),
        ColumnDef::new("brand", "Brand", true),
        ColumnDef::new("material", "Material", true),
        ColumnDef::new("color", "Color", true),
        ColumnDef::new("status", "Status", true),
        ColumnDef::new("remaining", "Remaining", true),
        ColumnDef::new("quantity", "Qty", false),
        ColumnDef::new("location", "Location", false),
        ColumnDef::new("printer", "Printer", false),
        ColumnDef::new("project", "Project", false),
        ColumnDef::new("date_added", "Added", false),
    ],
    archive_toggle: true,
    persist_scope: PersistScope::FiltersOnly,
};

fn spool_cell(spool: &FilamentSpool, column: &str) -> AnyView {
    let text = match column {
        "name" => spool.display_name.clone(),
        "brand" => spool.display_brand.clone().unwrap_or_default(),
        "material" => spool.display_material.clone().unwrap_or_default(),
        "color" => {
            let swatches = spool
                .colors
                .iter()
                .map(|c| view! { <span class="color-swatch" style=format!("background: {};", c)></span> })
                .collect_view();
            let family = spool
                .display_color_family
                .as_deref()
                .map(|f| label_for(COLOR_FAMILIES, f))
                .unwrap_or_default();
            return view! { <span class="color-cell">{swatches}{family}</span> }.into_any();
        }
        "status" => {
            let label = label_for(SPOOL_STATUSES, &spool.status);
            return view! {
                <span class=format!("badge badge--status-{}", spool.status)>{label}</span>
            }
            .into_any();
        }
        "remaining" => match (spool.remaining_percent(), spool.current_weight) {
            (Some(percent), Some(grams)) => format!("{} g ({}%)", grams, percent),
            _ => String::new(),
        },
        "quantity" => spool.quantity.to_string(),
        "location" => spool.location.as_ref().map(|l| l.name.clone()).unwrap_or_default(),
        "printer" => spool
            .assigned_printer
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default(),
        "project" => spool.project.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
        "date_added" => spool
            .date_added
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    view! { <span>{text}</span> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn FilamentSpoolList() -> impl IntoView {
    let (list, data) = use_list_view::<SpoolFilter, FilamentSpool>(&SPOOLS_VIEW, "filament-spools");

    view! { <ListPage list=list data=data cell=spool_cell /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        for field in SpoolFilter::ALL {
            assert_eq!(SpoolFilter::from_key(field.key()), Some(*field));
        }
        assert_eq!(SpoolFilter::from_key("search"), None);
        assert_eq!(SpoolFilter::from_key("is_archived"), None);
    }

    #[test]
    fn test_lookups_needed_by_modal() {
        let kinds: Vec<_> = SpoolFilter::ALL.iter().filter_map(|f| f.lookup()).collect();
        assert_eq!(
            kinds,
            vec![
                LookupKind::Brand,
                LookupKind::BaseMaterial,
                LookupKind::Feature,
                LookupKind::Project
            ]
        );
    }

    #[test]
    fn test_config() {
        assert!(SPOOLS_VIEW.archive_toggle);
        assert!(SPOOLS_VIEW.columns.iter().any(|c| c.default_visible));
    }
}
