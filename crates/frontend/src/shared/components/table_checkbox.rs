use leptos::prelude::*;

/// Чекбокс выбора строки в списковых таблицах.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="table-checkbox"
            prop:checked=move || checked.get()
            on:change=move |ev| {
                on_toggle.run(event_target_checked(&ev));
            }
            on:click=move |ev| ev.stop_propagation()
        />
    }
}
