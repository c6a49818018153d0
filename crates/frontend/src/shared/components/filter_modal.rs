use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use crate::shared::list_view::ListView;
use crate::shared::modal::Modal;
use crate::shared::view_state::FilterField;

/// Editor for the draft filters. Rendered while the controller reports the
/// modal as open; closing it any other way than Apply discards the draft.
#[component]
pub fn FilterModal<F: FilterField>(list: ListView<F>) -> impl IntoView {
    let state = list.state;

    let fields = F::ALL
        .iter()
        .copied()
        .map(|field| {
            let draft = move || state.with(|s| s.draft.get(field).as_str().to_string());
            let on_input = move |value: String| list.set_draft(field, value);
            let control = match state.with_untracked(|s| s.options_for(field)) {
                Some(_) => view! {
                    <select
                        class="form__select"
                        on:change=move |ev| on_input(event_target_value(&ev))
                    >
                        <option value="" selected=move || draft().is_empty()>"Any"</option>
                        {move || {
                            let current = draft();
                            state
                                .with(|s| s.options_for(field).unwrap_or_default())
                                .into_iter()
                                .map(|(value, label)| {
                                    let selected = value == current;
                                    view! { <option value=value selected=selected>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                }
                .into_any(),
                None => view! {
                    <input
                        type="text"
                        class="form__input"
                        prop:value=draft
                        on:input=move |ev| on_input(event_target_value(&ev))
                    />
                }
                .into_any(),
            };
            view! {
                <div class="form__group">
                    <label class="form__label">{field.label()}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    let footer = move || {
        view! {
            <Flex justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| list.clear_filters()>
                    "Clear all"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.cancel_filters()>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| list.apply_filters()>
                    "Apply"
                </Button>
            </Flex>
        }
        .into_any()
    };

    view! {
        <Modal
            title=format!("Filter {}", list.config.title)
            on_close=Callback::new(move |_| list.cancel_filters())
            footer=Arc::new(footer)
        >
            <div class="filter-modal__fields">{fields}</div>
        </Modal>
    }
}
