use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {AppRoute::ALL.iter().copied().map(|route| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.route.get() == route
                        on:click=move |_| ctx.open_view(route)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(route.icon())}
                            <span>{route.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
