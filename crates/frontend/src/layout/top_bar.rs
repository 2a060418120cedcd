use crate::layout::workspace::AppWorkspace;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Верхняя панель с переключателем сайдбара и заголовком приложения.
#[component]
pub fn TopBar() -> impl IntoView {
    let workspace =
        use_context::<AppWorkspace>().expect("AppWorkspace context not found");

    view! {
        <header class="top-bar">
            <button
                class="top-bar__toggle"
                title="Toggle sidebar"
                on:click=move |_| workspace.toggle_left()
            >
                {icon("menu")}
            </button>
            <span class="top-bar__title">"Retail Admin"</span>
        </header>
    }
}
