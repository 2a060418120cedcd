use crate::layout::center::Tabs;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::workspace::AppWorkspace;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let workspace = leptos::context::use_context::<AppWorkspace>()
        .expect("AppWorkspace context not found");

    // Подхватить `?active=` из URL и дальше держать его в синхроне.
    workspace.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ModalHost />
    }
}
