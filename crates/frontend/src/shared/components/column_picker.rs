use leptos::prelude::*;
use thaw::*;

use crate::shared::components::checkbox::Checkbox;
use crate::shared::list_view::ListView;
use crate::shared::modal::Modal;
use crate::shared::view_state::FilterField;

/// Visible-column picker. Each toggle is persisted immediately.
#[component]
pub fn ColumnPicker<F: FilterField>(
    list: ListView<F>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = list.state;

    let rows = list
        .config
        .columns
        .iter()
        .map(|column| {
            let id = column.id;
            view! {
                <Checkbox
                    label=column.label
                    checked=Signal::derive(move || state.with(|s| s.is_visible(id)))
                    on_change=Callback::new(move |_| list.toggle_column(id))
                />
            }
        })
        .collect_view();

    view! {
        <Modal title="Columns" on_close=on_close>
            <div class="column-picker">{rows}</div>
            <Flex justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| list.reset_columns()>
                    "Reset to defaults"
                </Button>
            </Flex>
        </Modal>
    }
}
