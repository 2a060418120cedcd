use crate::layout::tabs::render_tab_content;
use crate::layout::workspace::{AppWorkspace, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Полоса вкладок плюс содержимое каждой открытой вкладки.
///
/// Содержимое неактивных вкладок остаётся смонтированным и лишь скрывается,
/// поэтому состояние форм переживает переключения туда-сюда.
#[component]
pub fn Tabs() -> impl IntoView {
    let workspace =
        use_context::<AppWorkspace>().expect("AppWorkspace context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || workspace.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabLabel tab=tab workspace=workspace /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || workspace.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab workspace=workspace /> }
                />
                <Show when=move || workspace.opened.get().is_empty()>
                    <div class="tabs__empty">
                        <p>"Choose a section in the sidebar to get started."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TabLabel(tab: TabData, workspace: AppWorkspace) -> impl IntoView {
    let key = tab.key.clone();
    let key_activate = key.clone();
    let key_close = key.clone();
    let key_active_check = key.clone();
    let is_active = move || workspace.active.get().as_deref() == Some(key_active_check.as_str());

    view! {
        <div class="tab" class:tab--active=is_active>
            <button
                class="tab__label"
                on:click=move |_| workspace.activate_tab(&key_activate)
            >
                {tab.title.clone()}
            </button>
            <button
                class="tab__close"
                title="Close tab"
                on:click=move |_| workspace.close_tab(&key_close)
            >
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
fn TabPage(tab: TabData, workspace: AppWorkspace) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active =
        move || workspace.active.get().as_deref() == Some(key_for_active.as_str());

    view! {
        <div
            class="tab-page"
            style:display=move || if is_active() { "block" } else { "none" }
        >
            {render_tab_content(&key, workspace)}
        </div>
    }
}
