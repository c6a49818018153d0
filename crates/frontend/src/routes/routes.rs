use crate::domain::a001_inventory_item::ui::list::{InventoryList, INVENTORY_VIEW};
use crate::domain::a002_filament_spool::ui::list::{FilamentSpoolList, SPOOLS_VIEW};
use crate::domain::a003_project::ui::list::{ProjectList, PROJECTS_VIEW};
use crate::domain::a004_tracker::ui::list::{TrackerList, TRACKERS_VIEW};
use crate::domain::a005_material::ui::list::{MaterialList, MATERIALS_VIEW};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::view_state::ViewConfig;
use leptos::prelude::*;

/// One list view per path. Switching views is a path change; the query
/// string belongs to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Inventory,
    FilamentSpools,
    Projects,
    Trackers,
    Materials,
}

impl AppRoute {
    pub const ALL: &'static [AppRoute] = &[
        AppRoute::Inventory,
        AppRoute::FilamentSpools,
        AppRoute::Materials,
        AppRoute::Projects,
        AppRoute::Trackers,
    ];

    /// Config of the list mounted for this route.
    pub fn view(self) -> &'static ViewConfig {
        match self {
            AppRoute::Inventory => &INVENTORY_VIEW,
            AppRoute::FilamentSpools => &SPOOLS_VIEW,
            AppRoute::Projects => &PROJECTS_VIEW,
            AppRoute::Trackers => &TRACKERS_VIEW,
            AppRoute::Materials => &MATERIALS_VIEW,
        }
    }

    /// Canonical path; the mounted session rewrites `/` and unknown paths
    /// to it.
    pub fn path(self) -> &'static str {
        self.view().path
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Inventory => "Inventory",
            AppRoute::FilamentSpools => "Filament Spools",
            AppRoute::Projects => "Projects",
            AppRoute::Trackers => "Trackers",
            AppRoute::Materials => "Materials",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppRoute::Inventory => "inventory",
            AppRoute::FilamentSpools => "spool",
            AppRoute::Projects => "projects",
            AppRoute::Trackers => "trackers",
            AppRoute::Materials => "materials",
        }
    }

    /// Unknown paths, including `/`, land on the inventory.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.path() == trimmed)
            .unwrap_or(AppRoute::Inventory)
    }
}

fn route_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Inventory => view! { <InventoryList /> }.into_any(),
        AppRoute::FilamentSpools => view! { <FilamentSpoolList /> }.into_any(),
        AppRoute::Projects => view! { <ProjectList /> }.into_any(),
        AppRoute::Trackers => view! { <TrackerList /> }.into_any(),
        AppRoute::Materials => view! { <MaterialList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Re-setting the same route must not remount the view.
                let route = Memo::new(move |_| ctx.route.get());
                (move || route_view(route.get())).into_any()
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/filament-spools"), AppRoute::FilamentSpools);
        assert_eq!(AppRoute::from_path("/materials/"), AppRoute::Materials);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Inventory);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::Inventory);
    }

    #[test]
    fn test_root_resolves_to_a_canonical_view() {
        let route = AppRoute::from_path("/");
        assert_eq!(route.path(), "/inventory");
        assert_eq!(route.view().namespace, "inventory");
        assert_eq!(AppRoute::from_path("/nope").path(), route.path());
    }

    #[test]
    fn test_paths_are_distinct() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), *route);
        }
    }
}
