use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка ключевого показателя для дашбордов.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] icon_name: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__value">{move || value.get()}</span>
            </div>
        </div>
    }
}
