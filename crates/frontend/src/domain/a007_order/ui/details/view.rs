use super::model;
use crate::domain::a008_return_request::ui::details::ReturnRequestCreate;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a007_order::aggregate::{Order, StatusTransitionRequest};
use contracts::domain::common::AggregateId;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Детали заказа: строки, итоги, лента статусов и допустимые действия
/// перехода. Таблица переходов — только отсечка в UI; последнее слово за
/// сервисом заказов, его отказ показывается блоком ошибки.
#[component]
pub fn OrderDetails(
    id: String,
    #[prop(into)] on_changed: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(true);
    let transitioning = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let modal_stack = use_context::<ModalStackService>();

    let order_id = id.clone();
    spawn_local(async move {
        match model::fetch_by_id(order_id).await {
            Ok(item) => {
                order.set(Some(item));
                loading.set(false);
            }
            Err(e) => {
                error.set(Some(e));
                loading.set(false);
            }
        }
    });

    let transition_to = move |next: OrderStatus| {
        let Some(current) = order.get_untracked() else {
            return;
        };
        if !current.status.can_transition_to(next) {
            return;
        }
        if next == OrderStatus::Cancelled {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Cancel this order?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }
        transitioning.set(true);
        error.set(None);
        let req = StatusTransitionRequest {
            order_id: current.base.id.as_string(),
            next_status: next,
            note: String::new(),
        };
        spawn_local(async move {
            match model::request_transition(&req).await {
                Ok(updated) => {
                    order.set(Some(updated));
                    transitioning.set(false);
                    on_changed.run(());
                }
                Err(e) => {
                    error.set(Some(e));
                    transitioning.set(false);
                }
            }
        });
    };

    let open_return = move || {
        let Some(stack) = modal_stack else {
            return;
        };
        let Some(current) = order.get_untracked() else {
            return;
        };
        let order_id = current.base.id.as_string();
        stack.push_with_style(
            Some("width: 720px; max-width: 95vw;".to_string()),
            move |handle| {
                let on_close = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_created = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                view! {
                    <ReturnRequestCreate
                        order_id=order_id.clone()
                        on_saved=on_created
                        on_cancel=on_close
                    />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="details-container order-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || {
                        order
                            .get()
                            .map(|o| format!("Order {}", o.base.code))
                            .unwrap_or_else(|| "Order".to_string())
                    }}
                </h3>
                <div class="modal-header-actions">
                    {move || {
                        let Some(current) = order.get() else {
                            return ().into_any();
                        };
                        let actions = current
                            .status
                            .legal_next()
                            .into_iter()
                            .map(|next| {
                                let appearance = if next == OrderStatus::Cancelled {
                                    ButtonAppearance::Secondary
                                } else {
                                    ButtonAppearance::Primary
                                };
                                view! {
                                    <Button
                                        appearance=appearance
                                        on_click=move |_| transition_to(next)
                                        disabled=Signal::derive(move || transitioning.get())
                                    >
                                        {next.label()}
                                    </Button>
                                }
                            })
                            .collect_view();
                        let return_button = (current.status == OrderStatus::Delivered)
                            .then(|| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| open_return()
                                    >
                                        {icon("package-x")}
                                        " Open return"
                                    </Button>
                                }
                            });
                        (actions, return_button).into_any()
                    }}
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
                                <span>"Loading order..."</span>
                            </div>
                        }
                    }
                >
                    {move || {
                        order.get().map(|o| view! { <OrderBody order=o /> })
                    }}
                </Show>
            </div>
        </div>
    }
}

#[component]
fn OrderBody(order: Order) -> impl IntoView {
    let history = order.status_history.clone();

    view! {
        <div class="order-body">
            <div class="order-body__meta">
                <span class=format!("status-badge status-badge--{}", order.status.as_str())>
                    {order.status.label()}
                </span>
                <span class="order-body__customer">{order.customer_name.clone()}</span>
                {(!order.payment_method.is_empty()).then(|| view! {
                    <span class="order-body__payment">{order.payment_method.clone()}</span>
                })}
            </div>

            <table class="data-table order-lines">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"SKU"</th>
                        <th class="data-table__num">"Price"</th>
                        <th class="data-table__num">"Qty"</th>
                        <th class="data-table__num">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {order
                        .lines
                        .iter()
                        .map(|line| {
                            let name = if line.variant_name.is_empty() {
                                line.product_name.clone()
                            } else {
                                format!("{} ({})", line.product_name, line.variant_name)
                            };
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{line.sku.clone()}</td>
                                    <td class="data-table__num">
                                        {format_money(line.unit_price)}
                                    </td>
                                    <td class="data-table__num">{line.quantity}</td>
                                    <td class="data-table__num">
                                        {format_money(line.line_total)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <div class="order-totals">
                <div class="order-totals__row">
                    <span>"Subtotal"</span>
                    <span>{format_money(order.sub_total)}</span>
                </div>
                <div class="order-totals__row">
                    <span>"Discount"</span>
                    <span>{format!("-{}", format_money(order.discount_total))}</span>
                </div>
                <div class="order-totals__row">
                    <span>"Shipping"</span>
                    <span>{format_money(order.shipping_fee)}</span>
                </div>
                <div class="order-totals__row order-totals__row--grand">
                    <span>"Grand total"</span>
                    <span>{format_money(order.grand_total)}</span>
                </div>
            </div>

            <div class="status-timeline">
                <h4>"Status history"</h4>
                {history
                    .iter()
                    .map(|entry| {
                        let when = crate::shared::date_utils::format_datetime(
                            &entry.changed_at.to_rfc3339(),
                        );
                        view! {
                            <div class="status-timeline__entry">
                                <span class="status-timeline__when">{when}</span>
                                <span class="status-timeline__status">
                                    {entry.status.label()}
                                </span>
                                {(!entry.changed_by.is_empty()).then(|| view! {
                                    <span class="status-timeline__who">
                                        {entry.changed_by.clone()}
                                    </span>
                                })}
                                {(!entry.note.is_empty()).then(|| view! {
                                    <span class="status-timeline__note">{entry.note.clone()}</span>
                                })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
