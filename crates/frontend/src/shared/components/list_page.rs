use leptos::prelude::*;

use crate::shared::components::column_picker::ColumnPicker;
use crate::shared::components::filter_modal::FilterModal;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_table::ListTable;
use crate::shared::list_view::{ListData, ListView};
use crate::shared::view_state::FilterField;

/// Page frame shared by the list views: header, toolbar, table and the two
/// modals.
#[component]
pub fn ListPage<F, T>(
    list: ListView<F>,
    data: ListData<T>,
    cell: fn(&T, &str) -> AnyView,
) -> impl IntoView
where
    F: FilterField,
    T: Clone + Send + Sync + 'static,
{
    let show_columns = RwSignal::new(false);
    let count = move || data.items.with(|items| items.len());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{list.config.title}</h1>
                    <span class="header__count">{count}</span>
                </div>
            </div>
            <FilterPanel list=list on_columns=Callback::new(move |_| show_columns.set(true)) />
            <ListTable
                list=list
                data=data
                cell=cell
                empty_text=format!("No {} found.", list.config.title.to_lowercase())
            />
            <Show when=move || list.state.with(|s| s.modal_open)>
                <FilterModal list=list />
            </Show>
            <Show when=move || show_columns.get()>
                <ColumnPicker list=list on_close=Callback::new(move |_| show_columns.set(false)) />
            </Show>
        </div>
    }
}
