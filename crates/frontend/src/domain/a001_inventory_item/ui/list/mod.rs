use contracts::domain::a001_inventory_item::InventoryItem;
use contracts::domain::common::LookupKind;
use leptos::prelude::*;

use crate::shared::components::ListPage;
use crate::shared::list_view::use_list_view;
use crate::shared::view_state::{ColumnDef, FilterField, FilterOptions, PersistScope, ViewConfig};

/// Inventory is filtered by related names, not ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InventoryFilter {
    Brand,
    PartType,
    Location,
}

impl FilterField for InventoryFilter {
    const ALL: &'static [Self] = &[
        InventoryFilter::Brand,
        InventoryFilter::PartType,
        InventoryFilter::Location,
    ];

    fn key(self) -> &'static str {
        match self {
            InventoryFilter::Brand => "brand__name",
            InventoryFilter::PartType => "part_type__name",
            InventoryFilter::Location => "location__name",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InventoryFilter::Brand => "Brand",
            InventoryFilter::PartType => "Part type",
            InventoryFilter::Location => "Location",
        }
    }

    fn options(self) -> FilterOptions {
        match self {
            InventoryFilter::Brand => FilterOptions::LookupName(LookupKind::Brand),
            InventoryFilter::PartType => FilterOptions::LookupName(LookupKind::PartType),
            InventoryFilter::Location => FilterOptions::LookupName(LookupKind::Location),
        }
    }
}

pub static INVENTORY_VIEW: ViewConfig = ViewConfig {
    namespace: "inventory",
    path: "/inventory",
    title: "Inventory",
    columns: &[
        ColumnDef::new("title", "Title", true),
        ColumnDef::new("brand", "Brand", true),
        ColumnDef::new("part_type", "Part Type", true),
        ColumnDef::new("quantity", "Qty", true),
        ColumnDef::new("location", "Location", true),
        ColumnDef::new("cost", "Cost", false),
        ColumnDef::new("projects", "Projects", false),
        ColumnDef::new("notes", "Notes", false),
    ],
    archive_toggle: false,
    persist_scope: PersistScope::FiltersOnly,
};

fn inventory_cell(item: &InventoryItem, column: &str) -> AnyView {
    let text = match column {
        "title" => item.title.clone(),
        "brand" => item.brand_name().to_string(),
        "part_type" => item.part_type_name().to_string(),
        "quantity" => item.quantity.to_string(),
        "location" => item.location_name().to_string(),
        "cost" => item.cost.clone().unwrap_or_default(),
        "projects" => item
            .associated_projects
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        "notes" => item.notes.clone().unwrap_or_default(),
        _ => String::new(),
    };
    view! { <span>{text}</span> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let (list, data) = use_list_view::<InventoryFilter, InventoryItem>(&INVENTORY_VIEW, "inventoryitems");

    view! { <ListPage list=list data=data cell=inventory_cell /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keys_use_related_names() {
        let keys: Vec<_> = InventoryFilter::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["brand__name", "part_type__name", "location__name"]);
        assert_eq!(
            InventoryFilter::from_key("brand__name"),
            Some(InventoryFilter::Brand)
        );
    }

    #[test]
    fn test_no_archive_toggle() {
        assert!(!INVENTORY_VIEW.archive_toggle);
        assert_eq!(INVENTORY_VIEW.persist_scope, PersistScope::FiltersOnly);
    }
}
