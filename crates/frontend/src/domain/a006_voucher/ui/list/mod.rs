use super::details::{model, VoucherDetails};
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, sort_list, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_voucher::aggregate::{Voucher, VoucherKind};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, PartialEq)]
struct VoucherRow {
    id: String,
    code: String,
    name: String,
    kind: VoucherKind,
    value: f64,
    ends_at: String,
    remaining_uses: i32,
    is_active: bool,
}

impl From<Voucher> for VoucherRow {
    fn from(item: Voucher) -> Self {
        Self {
            id: item.base.id.as_string(),
            code: item.base.code,
            name: item.base.description,
            kind: item.kind,
            value: item.value,
            ends_at: item.ends_at.to_rfc3339(),
            remaining_uses: item.remaining_uses,
            is_active: item.is_active,
        }
    }
}

impl VoucherRow {
    fn value_label(&self) -> String {
        match self.kind {
            VoucherKind::Percent => format!("{}%", self.value as i32),
            VoucherKind::Amount => format_money(self.value),
        }
    }
}

impl Searchable for VoucherRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.code.to_lowercase().contains(&f) || self.name.to_lowercase().contains(&f)
    }
}

impl Sortable for VoucherRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "name" => self.name.cmp(&other.name),
            "ends" => self.ends_at.cmp(&other.ends_at),
            "uses" => self.remaining_uses.cmp(&other.remaining_uses),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn VoucherList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<VoucherRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("ends".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(VoucherRow::from).collect());
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
                    <VoucherDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete voucher \"{}\"?", code))
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
        <div class="list-container voucher-list">
            <div class="list-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_details(None)
                >
                    {icon("plus")}
                    " New voucher"
                </Button>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v| set_filter.set(v))
                    placeholder="Search by code or name..."
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
                                field="code"
                                label="Code"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <SortableHeader
                                field="name"
                                label="Name"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <th>"Type"</th>
                            <th class="data-table__num">"Value"</th>
                            <SortableHeader
                                field="ends"
                                label="Ends"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                            />
                            <SortableHeader
                                field="uses"
                                label="Uses left"
                                sort_field=sort_field
                                set_sort_field=set_sort_field
                                sort_ascending=sort_ascending
                                set_sort_ascending=set_sort_ascending
                                class="data-table__num"
                            />
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
                                let code_for_delete = row.code.clone();
                                let value_label = row.value_label();
                                view! {
                                    <tr class="data-table__row">
                                        <td>
                                            <a
                                                class="data-table__link"
                                                on:click=move |_| open_details(Some(id_for_open.clone()))
                                            >
                                                {row.code.clone()}
                                            </a>
                                        </td>
                                        <td>{row.name.clone()}</td>
                                        <td>{row.kind.label()}</td>
                                        <td class="data-table__num">{value_label}</td>
                                        <td>{format_datetime(&row.ends_at)}</td>
                                        <td class="data-table__num">{row.remaining_uses}</td>
                                        <td>{if row.is_active { "Yes" } else { "No" }}</td>
                                        <td class="data-table__actions-col">
                                            <button
                                                class="icon-button"
                                                title="Delete"
                                                on:click=move |_| {
                                                    delete_row(
                                                        id_for_delete.clone(),
                                                        code_for_delete.clone(),
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
                        Some(view! { <div class="list-empty">"No vouchers found"</div> })
                    } else {
                        None
                    }
                }}
            </Show>
        </div>
    }
}
