use leptos::prelude::*;
use thaw::*;

use crate::shared::components::checkbox::Checkbox;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::shared::view_state::FilterField;

fn has_active_filters(count: usize) -> bool {
    count > 0
}

/// Toolbar above a list: search, filter button with count, archived toggle,
/// column picker button and the chips of the applied filters.
#[component]
pub fn FilterPanel<F: FilterField>(
    list: ListView<F>,
    /// Opens the column picker
    on_columns: Callback<()>,
) -> impl IntoView {
    let state = list.state;
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let active_count = move || state.with(|s| s.active.active_count());

    let chips = move || {
        state.with(|s| {
            s.active
                .iter()
                .map(|(field, value)| {
                    let label = format!("{}: {}", field.label(), s.display_value(field, value));
                    view! {
                        <FilterTag label=label on_remove=Callback::new(move |_| list.remove_filter(field)) />
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="filter-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Space>
                    <SearchInput value=search on_change=Callback::new(move |text| list.search_changed(text)) />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.open_filters()>
                        {icon("filter")}
                        " Filters"
                        {move || {
                            let count = active_count();
                            has_active_filters(count).then(|| view! { <span class="badge badge--primary">{count}</span> })
                        }}
                    </Button>
                    <Show when=move || has_active_filters(active_count())>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| list.clear_filters()>
                            "Clear"
                        </Button>
                    </Show>
                </Space>
                <Space>
                    {list.config.archive_toggle.then(|| view! {
                        <Checkbox
                            label="Show archived"
                            checked=Signal::derive(move || state.with(|s| s.show_archived))
                            on_change=Callback::new(move |show| list.set_show_archived(show))
                        />
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_columns.run(())>
                        {icon("columns")}
                        " Columns"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.refresh()>
                        {icon("refresh")}
                    </Button>
                </Space>
            </Flex>
            <div class="filter-panel__tags">{chips}</div>
        </div>
    }
}

/// Chip for one applied filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_badge_need_an_active_filter() {
        assert!(!has_active_filters(0));
        assert!(has_active_filters(1));
        assert!(has_active_filters(6));
    }
}
