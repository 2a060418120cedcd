pub mod center;
pub mod left;
pub mod tabs;
pub mod top_bar;
pub mod workspace;

use leptos::prelude::*;
use top_bar::TopBar;

/// Главный каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopBar />

            <div class="app-body">
                // Видимостью сайдбара управляет AppWorkspace::left_open
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
