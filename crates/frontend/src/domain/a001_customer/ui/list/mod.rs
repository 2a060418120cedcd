use super::details::model;
use super::details::CustomerDetails;
use crate::shared::components::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

// ============================================================================
// Row model
// ============================================================================

#[derive(Clone, PartialEq)]
struct CustomerRow {
    id: String,
    code: String,
    name: String,
    phone: String,
    email: String,
    order_count: i32,
    is_active: bool,
}

impl From<Customer> for CustomerRow {
    fn from(item: Customer) -> Self {
        Self {
            id: item.base.id.as_string(),
            code: item.base.code,
            name: item.base.description,
            phone: item.phone,
            email: item.email,
            order_count: item.order_count,
            is_active: item.is_active,
        }
    }
}

impl Searchable for CustomerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.name.to_lowercase().contains(&f)
            || self.code.to_lowercase().contains(&f)
            || self.phone.to_lowercase().contains(&f)
            || self.email.to_lowercase().contains(&f)
    }
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "name" => self.name.cmp(&other.name),
            "phone" => self.phone.cmp(&other.phone),
            "email" => self.email.cmp(&other.email),
            "orders" => self.order_count.cmp(&other.order_count),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// List component
// ============================================================================

#[component]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<CustomerRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (selected_ids, set_selected_ids) = signal(Vec::<String>::new());

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(CustomerRow::from).collect());
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
            Some("width: 640px; max-width: 95vw;".to_string()),
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
                    <CustomerDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let toggle_selected = move |id: String, checked: bool| {
        set_selected_ids.update(|ids| {
            if checked {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            } else {
                ids.retain(|x| x != &id);
            }
        });
    };

    let all_visible_selected = Signal::derive(move || {
        let rows = visible_rows.get();
        let selected = selected_ids.get();
        !rows.is_empty() && rows.iter().all(|r| selected.contains(&r.id))
    });

    let toggle_all = move |checked: bool| {
        if checked {
            set_selected_ids.set(visible_rows.get().iter().map(|r| r.id.clone()).collect());
        } else {
            set_selected_ids.set(Vec::new());
        }
    };

    let delete_selected = move |_| {
        let ids = selected_ids.get();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} customer(s)?", ids.len()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            for id in ids {
                if let Err(e) = model::delete_by_id(&id).await {
                    set_error.set(Some(e));
                    break;
                }
            }
            set_selected_ids.set(Vec::new());
            load();
        });
    };

    view! {
        <div class="list-container customer-list">
            <div class="list-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_details(None)
                >
                    {icon("plus")}
                    " New customer"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=delete_selected
                    disabled=Signal::derive(move || selected_ids.get().is_empty())
                >
                    {icon("trash")}
                    " Delete"
                </Button>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v| set_filter.set(v))
                    placeholder="Search by name, code, phone or email..."
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
                            <span>"Loading customers..."</span>
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="data-table__checkbox-col">
                                <TableCheckbox
                                    checked=all_visible_selected
                                    on_toggle=Callback::new(toggle_all)
                                />
                            </th>
                            <th
                                class="data-table__sortable"
                                on:click=create_sort_toggle(
                                    "code",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "Code{}",
                                    get_sort_indicator(&sort_field.get(), "code", sort_ascending.get()),
                                )}
                            </th>
                            <th
                                class="data-table__sortable"
                                on:click=create_sort_toggle(
                                    "name",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "Name{}",
                                    get_sort_indicator(&sort_field.get(), "name", sort_ascending.get()),
                                )}
                            </th>
                            <th
                                class="data-table__sortable"
                                on:click=create_sort_toggle(
                                    "phone",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "Phone{}",
                                    get_sort_indicator(&sort_field.get(), "phone", sort_ascending.get()),
                                )}
                            </th>
                            <th
                                class="data-table__sortable"
                                on:click=create_sort_toggle(
                                    "email",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "Email{}",
                                    get_sort_indicator(&sort_field.get(), "email", sort_ascending.get()),
                                )}
                            </th>
                            <th
                                class="data-table__sortable data-table__num"
                                on:click=create_sort_toggle(
                                    "orders",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "Orders{}",
                                    get_sort_indicator(&sort_field.get(), "orders", sort_ascending.get()),
                                )}
                            </th>
                            <th>"Active"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible_rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let row_id = row.id.clone();
                                let row_id_for_check = row.id.clone();
                                let is_checked = Signal::derive(move || {
                                    selected_ids.get().contains(&row_id_for_check)
                                });
                                let row_id_for_toggle = row.id.clone();
                                let open_id = row.id.clone();
                                view! {
                                    <tr
                                        class="data-table__row"
                                        on:dblclick=move |_| open_details(Some(open_id.clone()))
                                    >
                                        <td class="data-table__checkbox-col">
                                            <TableCheckbox
                                                checked=is_checked
                                                on_toggle=Callback::new(move |checked| {
                                                    toggle_selected(row_id_for_toggle.clone(), checked)
                                                })
                                            />
                                        </td>
                                        <td>{row.code.clone()}</td>
                                        <td>
                                            <a
                                                class="data-table__link"
                                                on:click=move |_| open_details(Some(row_id.clone()))
                                            >
                                                {row.name.clone()}
                                            </a>
                                        </td>
                                        <td>{row.phone.clone()}</td>
                                        <td>{row.email.clone()}</td>
                                        <td class="data-table__num">{row.order_count}</td>
                                        <td>{if row.is_active { "Yes" } else { "No" }}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if visible_rows.get().is_empty() {
                        Some(view! { <div class="list-empty">"No customers found"</div> })
                    } else {
                        None
                    }
                }}
            </Show>
        </div>
    }
}
