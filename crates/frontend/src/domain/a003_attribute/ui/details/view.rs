use super::model::{self, AttributeDto};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Форма определения характеристики. Значения вводятся по одному на строку;
/// пустые строки и дубликаты отбрасываются при сохранении.
#[component]
pub fn AttributeDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let stored_id = RwSignal::new(id.clone());
    let name = RwSignal::new(String::new());
    let values_text = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    if let Some(existing_id) = id {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(item) => {
                    stored_id.set(Some(item.base.id.as_string()));
                    name.set(item.base.description.clone());
                    values_text.set(item.values.join("\n"));
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    }

    let parse_values = move || -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for line in values_text.get().lines() {
            let v = line.trim();
            if !v.is_empty() && !out.iter().any(|x| x == v) {
                out.push(v.to_string());
            }
        }
        out
    };

    let handle_save = move |_| {
        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            error.set(Some("Attribute name is required".into()));
            return;
        }
        let values = parse_values();
        if values.is_empty() {
            error.set(Some("At least one value is required".into()));
            return;
        }
        saving.set(true);
        error.set(None);
        let dto = AttributeDto {
            id: stored_id.get(),
            name: trimmed,
            values,
        };
        spawn_local(async move {
            match model::save_form(dto).await {
                Ok(_) => {
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container attribute-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || if stored_id.get().is_some() { "Edit attribute" } else { "New attribute" }}
                </h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="details-loading">
                                <Spinner size=SpinnerSize::Small />
                            </div>
                        }
                    }
                >
                    <div class="form">
                        <Input
                            label="Name *"
                            value=name
                            placeholder="Color, Size, Material..."
                            on_input=Callback::new(move |v| name.set(v))
                        />
                        <Textarea
                            label="Values (one per line) *"
                            value=values_text
                            rows=8u32
                            placeholder="Red\nBlue\nGreen"
                            on_input=Callback::new(move |v| values_text.set(v))
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
