use super::details::{model, DiscountDetails};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, sort_list, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_discount::aggregate::Discount;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, PartialEq)]
struct DiscountRow {
    id: String,
    name: String,
    percent_value: i32,
    starts_at: String,
    ends_at: String,
    product_count: usize,
    is_active: bool,
}

impl From<Discount> for DiscountRow {
    fn from(item: Discount) -> Self {
        Self {
            id: item.base.id.as_string(),
            name: item.base.description,
            percent_value: item.percent_value,
            starts_at: item.starts_at.to_rfc3339(),
            ends_at: item.ends_at.to_rfc3339(),
            product_count: item.product_ids.len(),
            is_active: item.is_active,
        }
    }
}

impl Searchable for DiscountRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for DiscountRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "percent" => self.percent_value.cmp(&other.percent_value),
            "starts" => self.starts_at.cmp(&other.starts_at),
            "ends" => self.ends_at.cmp(&other.ends_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn DiscountList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<DiscountRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("starts".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(DiscountRow::from).collect());
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

    let visible_rows = Memo::new(move |_| {
        let mut rows = filter_list(items.get(), &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let open_details = move |id: Option<String>| {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 760px; max-width: 95vw;".to_string()),
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
                    <DiscountDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete discount \"{}\"?", name))
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
        <div class="list-container discount-list">
            <div class="list-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_details(None)
                >
                    {icon("plus")}
                    " New discount"
                </Button>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v| set_filter.set(v))
                    placeholder="Search discounts..."
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
                            <SortableHeader
                                field="name"
                                label="Name"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <SortableHeader
                                field="percent"
                                label="Percent"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                                class="data-table__num"
                            />
                            <SortableHeader
                                field="starts"
                                label="Starts"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <SortableHeader
                                field="ends"
                                label="Ends"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <th class="data-table__num">"Products"</th>
                            <th>"Active"</th>
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
                                        <td class="data-table__num">
                                            {format!("{}%", row.percent_value)}
                                        </td>
                                        <td>{format_datetime(&row.starts_at)}</td>
                                        <td>{format_datetime(&row.ends_at)}</td>
                                        <td class="data-table__num">{row.product_count}</td>
                                        <td>{if row.is_active { "Yes" } else { "No" }}</td>
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
                        Some(view! { <div class="list-empty">"No discounts found"</div> })
                    } else {
                        None
                    }
                }}
            </Show>
        </div>
    }
}
