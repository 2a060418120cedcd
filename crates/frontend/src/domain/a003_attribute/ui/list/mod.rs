use super::details::{model, AttributeDetails};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_attribute::aggregate::ProductAttribute;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, PartialEq)]
struct AttributeRow {
    id: String,
    name: String,
    values: Vec<String>,
}

impl From<ProductAttribute> for AttributeRow {
    fn from(item: ProductAttribute) -> Self {
        Self {
            id: item.base.id.as_string(),
            name: item.base.description,
            values: item.values,
        }
    }
}

impl Searchable for AttributeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.name.to_lowercase().contains(&f)
            || self.values.iter().any(|v| v.to_lowercase().contains(&f))
    }
}

#[component]
pub fn AttributeList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<AttributeRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(String::new());

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(AttributeRow::from).collect());
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };
    load();

    let visible_rows = Memo::new(move |_| filter_list(items.get(), &filter.get()));

    let open_details = move |id: Option<String>| {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 520px; max-width: 95vw;".to_string()),
            move |handle| {
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_saved = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| {
                        handle.close();
                        load();
                    })
                };
                view! {
                    <AttributeDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete attribute \"{}\"?", name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="list-container attribute-list">
            <div class="list-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_details(None)
                >
                    {icon("plus")}
                    " New attribute"
                </Button>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v| set_filter.set(v))
                    placeholder="Search attributes..."
                />
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="list-loading">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Values"</th>
                            <th class="data-table__actions-col"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible_rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let id_for_open = row.id.clone();
                                let id_for_delete = row.id.clone();
                                let name_for_delete = row.name.clone();
                                view! {
                                    <tr class="data-table__row">
                                        <td>
                                            <a
                                                class="data-table__link"
                                                on:click=move |_| open_details(Some(id_for_open.clone()))
                                            >
                                                {row.name.clone()}
                                            </a>
                                        </td>
                                        <td>{row.values.join(", ")}</td>
                                        <td class="data-table__actions-col">
                                            <button
                                                class="icon-button"
                                                title="Delete"
                                                on:click=move |_| {
                                                    delete_row(
                                                        id_for_delete.clone(),
                                                        name_for_delete.clone(),
                                                    )
                                                }
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if visible_rows.get().is_empty() {
                        Some(view! { <div class="list-empty">"No attributes defined"</div> })
                    } else {
                        None
                    }
                }}
            </Show>
        </div>
    }
}
