use super::model;
use crate::shared::components::ui::Textarea;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use contracts::domain::a008_return_request::aggregate::{
    ReturnDecisionRequest, ReturnLine, ReturnRequest,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::HtmlInputElement;

// ============================================================================
// Create (opened from a delivered order)
// ============================================================================

#[derive(Clone, PartialEq)]
struct ReturnLineDraft {
    product_id: String,
    product_name: String,
    sku: String,
    ordered_quantity: i64,
    unit_price: f64,
    included: bool,
    quantity: i64,
    reason: String,
}

#[component]
pub fn ReturnRequestCreate(
    order_id: String,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let drafts = RwSignal::new(Vec::<ReturnLineDraft>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fetch_order_id = order_id.clone();
    spawn_local(async move {
        match crate::domain::a007_order::ui::details::model::fetch_by_id(fetch_order_id).await {
            Ok(order) => {
                drafts.set(
                    order
                        .lines
                        .into_iter()
                        .map(|line| ReturnLineDraft {
                            product_id: line.product_id,
                            product_name: line.product_name,
                            sku: line.sku,
                            ordered_quantity: line.quantity,
                            unit_price: line.unit_price,
                            included: false,
                            quantity: line.quantity,
                            reason: String::new(),
                        })
                        .collect(),
                );
                loading.set(false);
            }
            Err(e) => {
                error.set(Some(e));
                loading.set(false);
            }
        }
    });

    let refund_total = Memo::new(move |_| {
        drafts
            .get()
            .iter()
            .filter(|d| d.included)
            .map(|d| d.unit_price * d.quantity as f64)
            .sum::<f64>()
    });

    let submit_order_id = order_id;
    let handle_save = move |_| {
        let selected: Vec<ReturnLine> = drafts
            .get_untracked()
            .into_iter()
            .filter(|d| d.included)
            .map(|d| ReturnLine {
                product_id: d.product_id,
                product_name: d.product_name,
                sku: d.sku,
                quantity: d.quantity,
                unit_price: d.unit_price,
                reason: d.reason.trim().to_string(),
            })
            .collect();

        if selected.is_empty() {
            error.set(Some("Pick at least one item to return".into()));
            return;
        }
        if selected.iter().any(|l| l.reason.is_empty()) {
            error.set(Some("Every returned item needs a reason".into()));
            return;
        }

        saving.set(true);
        error.set(None);
        let dto = model::ReturnCreateDto {
            order_id: submit_order_id.clone(),
            lines: selected,
        };
        spawn_local(async move {
            match model::create_return(&dto).await {
                Ok(()) => {
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
        <div class="details-container return-create">
            <div class="modal-header">
                <h3 class="modal-title">"New return request"</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        " Submit"
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
                    <table class="data-table return-lines">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Product"</th>
                                <th class="data-table__num">"Ordered"</th>
                                <th class="data-table__num">"Return qty"</th>
                                <th>"Reason"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each={move || (0..drafts.get().len()).collect::<Vec<usize>>()}
                                key=|index| *index
                                children=move |index| {
                                    view! { <ReturnDraftRow drafts=drafts index=index /> }
                                }
                            />
                        </tbody>
                    </table>

                    <div class="order-totals">
                        <div class="order-totals__row order-totals__row--grand">
                            <span>"Refund total"</span>
                            <span>{move || format_money(refund_total.get())}</span>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ReturnDraftRow(drafts: RwSignal<Vec<ReturnLineDraft>>, index: usize) -> impl IntoView {
    let draft = Memo::new(move |_| drafts.get().get(index).cloned());

    view! {
        {move || {
            draft.get().map(|d| {
                let max_quantity = d.ordered_quantity;
                let included = d.included;
                view! {
                    <tr class="data-table__row">
                        <td>
                            <input
                                type="checkbox"
                                prop:checked=included
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    drafts.update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.included = checked;
                                        }
                                    });
                                }
                            />
                        </td>
                        <td>{format!("{} ({})", d.product_name, d.sku)}</td>
                        <td class="data-table__num">{d.ordered_quantity}</td>
                        <td class="data-table__num">
                            <input
                                class="cell-input cell-input--num"
                                type="number"
                                min="1"
                                max=max_quantity.to_string()
                                prop:value=d.quantity.to_string()
                                on:change=move |ev| {
                                    let input = event_target::<HtmlInputElement>(&ev);
                                    let qty = input
                                        .value()
                                        .parse::<i64>()
                                        .unwrap_or(1)
                                        .clamp(1, max_quantity);
                                    input.set_value(&qty.to_string());
                                    drafts.update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.quantity = qty;
                                        }
                                    });
                                }
                            />
                        </td>
                        <td>
                            <input
                                class="cell-input"
                                placeholder="Reason..."
                                prop:value=d.reason.clone()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    drafts.update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.reason = value.clone();
                                        }
                                    });
                                }
                            />
                        </td>
                    </tr>
                }
            })
        }}
    }
}

// ============================================================================
// Details + decision
// ============================================================================

#[component]
pub fn ReturnRequestDetails(
    id: String,
    #[prop(into)] on_changed: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let request = RwSignal::new(None::<ReturnRequest>);
    let note = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let deciding = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fetch_id = id.clone();
    spawn_local(async move {
        match model::fetch_by_id(fetch_id).await {
            Ok(item) => {
                note.set(item.decision_note.clone());
                request.set(Some(item));
                loading.set(false);
            }
            Err(e) => {
                error.set(Some(e));
                loading.set(false);
            }
        }
    });

    let decide = move |approve: bool| {
        let Some(current) = request.get_untracked() else {
            return;
        };
        if !current.status.is_open() {
            return;
        }
        deciding.set(true);
        error.set(None);
        let req = ReturnDecisionRequest {
            return_id: current.base.id.as_string(),
            approve,
            note: note.get_untracked().trim().to_string(),
        };
        spawn_local(async move {
            match model::submit_decision(&req).await {
                Ok(updated) => {
                    request.set(Some(updated));
                    deciding.set(false);
                    on_changed.run(());
                }
                Err(e) => {
                    error.set(Some(e));
                    deciding.set(false);
                }
            }
        });
    };

    let is_open = Signal::derive(move || {
        request.get().map(|r| r.status.is_open()).unwrap_or(false)
    });

    view! {
        <div class="details-container return-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || {
                        request
                            .get()
                            .map(|r| format!("Return for order {}", r.order_code))
                            .unwrap_or_else(|| "Return request".to_string())
                    }}
                </h3>
                <div class="modal-header-actions">
                    <Show when=move || is_open.get()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| decide(true)
                            disabled=Signal::derive(move || deciding.get())
                        >
                            {icon("check")}
                            " Approve"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| decide(false)
                            disabled=Signal::derive(move || deciding.get())
                        >
                            {icon("x")}
                            " Reject"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Close"
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
                    {move || {
                        request.get().map(|r| {
                            view! {
                                <div class="return-body">
                                    <div class="return-body__meta">
                                        <span class="status-badge">
                                            {r.status.label()}
                                        </span>
                                        <span>{r.customer_name.clone()}</span>
                                    </div>

                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Product"</th>
                                                <th>"SKU"</th>
                                                <th class="data-table__num">"Qty"</th>
                                                <th class="data-table__num">"Unit price"</th>
                                                <th>"Reason"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {r.lines
                                                .iter()
                                                .map(|line| view! {
                                                    <tr>
                                                        <td>{line.product_name.clone()}</td>
                                                        <td>{line.sku.clone()}</td>
                                                        <td class="data-table__num">
                                                            {line.quantity}
                                                        </td>
                                                        <td class="data-table__num">
                                                            {format_money(line.unit_price)}
                                                        </td>
                                                        <td>{line.reason.clone()}</td>
                                                    </tr>
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>

                                    <div class="order-totals">
                                        <div class="order-totals__row order-totals__row--grand">
                                            <span>"Refund total"</span>
                                            <span>{format_money(r.refund_total)}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }}

                    <Show
                        when=move || is_open.get()
                        fallback=move || {
                            view! {
                                {move || {
                                    request
                                        .get()
                                        .filter(|r| !r.decision_note.is_empty())
                                        .map(|r| view! {
                                            <div class="return-body__note">
                                                <strong>"Decision note: "</strong>
                                                {r.decision_note.clone()}
                                            </div>
                                        })
                                }}
                            }
                        }
                    >
                        <Textarea
                            label="Decision note"
                            value=note
                            rows=2u32
                            on_input=Callback::new(move |v| note.set(v))
                        />
                    </Show>
                </Show>
            </div>
        </div>
    }
}
