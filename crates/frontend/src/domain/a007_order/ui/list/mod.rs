use super::details::{model, OrderDetails};
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a007_order::aggregate::Order;
use contracts::domain::common::AggregateId;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const STATUS_FILTERS: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Shipping,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

/// Список заказов; фильтр по статусу и пагинация на сервере.
#[component]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Order>::new());
    let (total_count, set_total_count) = signal(0usize);
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(20usize);
    let (status_filter, set_status_filter) = signal(None::<OrderStatus>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let page = page.get_untracked();
        let size = page_size.get_untracked();
        let status = status_filter.get_untracked();
        spawn_local(async move {
            match model::fetch_page(page, size, status).await {
                Ok(resp) => {
                    set_items.set(resp.items);
                    set_total_count.set(resp.total_count);
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

    let total_pages = Signal::derive(move || {
        total_count.get().div_ceil(page_size.get().max(1))
    });

    let change_filter = move |status: Option<OrderStatus>| {
        set_status_filter.set(status);
        set_page.set(0);
        load();
    };

    let open_details = move |id: String| {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 860px; max-width: 96vw;".to_string()),
            move |handle| {
                let on_close = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_changed = Callback::new(move |_: ()| load());
                view! {
                    <OrderDetails id=id.clone() on_changed=on_changed on_cancel=on_close />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="list-container order-list">
            <div class="list-toolbar order-list__filters">
                <button
                    class="filter-chip"
                    class:filter-chip--active=move || status_filter.get().is_none()
                    on:click=move |_| change_filter(None)
                >
                    "All"
                </button>
                {STATUS_FILTERS
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="filter-chip"
                                class:filter-chip--active=move || {
                                    status_filter.get() == Some(status)
                                }
                                on:click=move |_| change_filter(Some(status))
                            >
                                {status.label()}
                            </button>
                        }
                    })
                    .collect_view()}
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
                            <span>"Loading orders..."</span>
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Customer"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th class="data-table__num">"Items"</th>
                            <th class="data-table__num">"Grand total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.base.id.as_string()
                            children=move |item| {
                                let id = item.base.id.as_string();
                                let created = format_datetime(
                                    &item.base.metadata.created_at.to_rfc3339(),
                                );
                                view! {
                                    <tr
                                        class="data-table__row"
                                        on:click=move |_| open_details(id.clone())
                                    >
                                        <td>{item.base.code.clone()}</td>
                                        <td>{item.customer_name.clone()}</td>
                                        <td>
                                            <span class=format!(
                                                "status-badge status-badge--{}",
                                                item.status.as_str(),
                                            )>
                                                {item.status.label()}
                                            </span>
                                        </td>
                                        <td>{created}</td>
                                        <td class="data-table__num">{item.lines.len()}</td>
                                        <td class="data-table__num">
                                            {format_money(item.grand_total)}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if items.get().is_empty() {
                        Some(view! { <div class="list-empty">"No orders found"</div> })
                    } else {
                        None
                    }
                }}

                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(move |p| {
                        set_page.set(p);
                        load();
                    })
                    on_page_size_change=Callback::new(move |s| {
                        set_page_size.set(s);
                        set_page.set(0);
                        load();
                    })
                />
            </Show>
        </div>
    }
}
