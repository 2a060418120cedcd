pub mod sidebar;

use crate::layout::workspace::AppWorkspace;
use leptos::prelude::*;

/// Контейнер сайдбара; сворачивается, когда `left_open` выключен.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let workspace =
        use_context::<AppWorkspace>().expect("AppWorkspace context not found");

    view! {
        <aside
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !workspace.left_open.get()
        >
            {children()}
        </aside>
    }
}
