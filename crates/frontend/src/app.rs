use crate::layout::workspace::AppWorkspace;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Хранилище вкладок на всё приложение
    provide_context(AppWorkspace::new());

    // Централизованный стек модалок (формы деталей открываются в них)
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes />
    }
}
