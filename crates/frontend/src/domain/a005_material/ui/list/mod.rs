use contracts::domain::a005_material::Material;
use contracts::domain::common::choice::{label_for, COLOR_FAMILIES};
use contracts::domain::common::LookupKind;
use leptos::prelude::*;

use crate::shared::components::ListPage;
use crate::shared::list_view::use_list_view;
use crate::shared::view_state::{ColumnDef, FilterField, FilterOptions, PersistScope, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaterialFilter {
    Brand,
    BaseMaterial,
    ColorFamily,
    Feature,
}

impl FilterField for MaterialFilter {
    const ALL: &'static [Self] = &[
        MaterialFilter::Brand,
        MaterialFilter::BaseMaterial,
        MaterialFilter::ColorFamily,
        MaterialFilter::Feature,
    ];

    fn key(self) -> &'static str {
        match self {
            MaterialFilter::Brand => "brand",
            MaterialFilter::BaseMaterial => "base_material",
            MaterialFilter::ColorFamily => "color_family",
            MaterialFilter::Feature => "feature",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MaterialFilter::Brand => "Brand",
            MaterialFilter::BaseMaterial => "Base material",
            MaterialFilter::ColorFamily => "Color family",
            MaterialFilter::Feature => "Feature",
        }
    }

    fn options(self) -> FilterOptions {
        match self {
            MaterialFilter::Brand => FilterOptions::Lookup(LookupKind::Brand),
            MaterialFilter::BaseMaterial => FilterOptions::Lookup(LookupKind::BaseMaterial),
            MaterialFilter::ColorFamily => FilterOptions::Choices(COLOR_FAMILIES),
            MaterialFilter::Feature => FilterOptions::Lookup(LookupKind::Feature),
        }
    }
}

pub static MATERIALS_VIEW: ViewConfig = ViewConfig {
    namespace: "materials",
    path: "/materials",
    title: "Materials",
    columns: &[
        ColumnDef::new("name", "Name", true),
        ColumnDef::new("brand", "Brand", true),
        ColumnDef::new("base_material", "Base", true),
        ColumnDef::new("color", "Color", true),
        ColumnDef::new("features", "Features", false),
        ColumnDef::new("diameter", "Diameter", false),
        ColumnDef::new("nozzle", "Nozzle", false),
    ],
    archive_toggle: true,
    persist_scope: PersistScope::FiltersAndSearch,
};

fn material_cell(material: &Material, column: &str) -> AnyView {
    let text = match column {
        "name" => {
            let star = if material.is_favorite { "★ " } else { "" };
            format!("{}{}", star, material.name)
        }
        "brand" => material.brand.as_ref().map(|b| b.name.clone()).unwrap_or_default(),
        "base_material" => material
            .base_material
            .as_ref()
            .map(|b| b.name.clone())
            .unwrap_or_else(|| if material.is_generic { "Generic".to_string() } else { String::new() }),
        "color" => {
            let swatches = material
                .colors
                .iter()
                .map(|c| view! { <span class="color-swatch" style=format!("background: {};", c)></span> })
                .collect_view();
            let family = material
                .color_family
                .as_deref()
                .map(|f| label_for(COLOR_FAMILIES, f))
                .unwrap_or_default();
            return view! { <span class="color-cell">{swatches}{family}</span> }.into_any();
        }
        "features" => material
            .features
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        "diameter" => material.diameter.clone().unwrap_or_default(),
        "nozzle" => material.nozzle_range(),
        _ => String::new(),
    };
    view! { <span>{text}</span> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let (list, data) = use_list_view::<MaterialFilter, Material>(&MATERIALS_VIEW, "materials");

    view! { <ListPage list=list data=data cell=material_cell /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_material_lookup_is_scoped_to_generics() {
        let kind = MaterialFilter::BaseMaterial.lookup();
        assert_eq!(kind, Some(LookupKind::BaseMaterial));
        assert_eq!(kind.and_then(|k| k.scope()), Some(("is_generic", "true")));
    }

    #[test]
    fn test_config() {
        assert!(MATERIALS_VIEW.archive_toggle);
        assert_eq!(MATERIALS_VIEW.persist_scope, PersistScope::FiltersAndSearch);
    }
}
