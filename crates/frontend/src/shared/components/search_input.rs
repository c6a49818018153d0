use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

const DEBOUNCE_MS: i32 = 300;

/// Debounced search box. Follows `value` when it changes from outside
/// (back/forward navigation) and reports typed text after a pause.
#[component]
pub fn SearchInput(
    /// Search text currently in the URL
    #[prop(into)]
    value: Signal<String>,
    /// Called with the settled text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(timeout_id), Some(window)) = (debounce_timeout.get_value(), web_sys::window()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    Effect::new(move |_| {
        let external = value.get();
        if input_value.get_untracked() != external {
            cancel_pending();
            input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = Closure::once(move || {
            debounce_timeout.set_value(None);
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let clear_search = move |_| {
        cancel_pending();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_search>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
