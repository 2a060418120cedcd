use super::view_model::CheckoutVm;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::AggregateId;
use contracts::usecases::u101_retail_checkout::request::TenderKind;
use leptos::prelude::*;
use serde::Deserialize;
use thaw::*;
use web_sys::HtmlInputElement;

/// Query-параметры, которые платёжный провайдер добавляет при возврате.
#[derive(Deserialize, Default)]
struct PaymentReturnQuery {
    #[serde(rename = "checkoutStatus")]
    checkout_status: Option<String>,
    #[serde(rename = "orderCode")]
    order_code: Option<String>,
}

fn payment_return() -> Option<PaymentReturnQuery> {
    let search = web_sys::window()?.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(&search);
    serde_qs::from_str::<PaymentReturnQuery>(query).ok()
}

/// Кассовое место: вкладки чеков, поиск товаров, корзина, купон, оплата.
#[component]
pub fn RetailCheckoutPage() -> impl IntoView {
    let vm = CheckoutVm::new();

    // Оплаты картой возвращаются сюда с результатом в URL
    if let Some(ret) = payment_return() {
        match ret.checkout_status.as_deref() {
            Some("paid") => vm.last_order_code.set(ret.order_code),
            Some("failed") => vm
                .error
                .set(Some("Card payment failed; the order was not completed".into())),
            _ => {}
        }
    }

    let vm_tabs = vm.clone();
    let vm_search = vm.clone();
    let vm_cart = vm.clone();
    let vm_pay = vm.clone();
    let error = vm.error;
    let last_order_code = vm.last_order_code;
    let last_change_due = vm.last_change_due;

    view! {
        <div class="checkout-page">
            <BillTabs vm=vm_tabs />

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || last_order_code.get().map(|code| view! {
                <div class="warning-box warning-box--success">
                    <span class="warning-box__text">
                        {format!("Order {} completed", code)}
                        {last_change_due
                            .get()
                            .filter(|c| *c > 0.0)
                            .map(|c| format!(" — change due {}", format_money(c)))
                            .unwrap_or_default()}
                    </span>
                    <button
                        class="icon-button"
                        on:click=move |_| last_order_code.set(None)
                    >
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="checkout-layout">
                <ProductSearchPanel vm=vm_search />
                <div class="checkout-main">
                    <CartTable vm=vm_cart />
                    <PaymentPanel vm=vm_pay />
                </div>
            </div>
        </div>
    }
}

#[component]
fn BillTabs(vm: CheckoutVm) -> impl IntoView {
    let bills = vm.bills;
    let active = vm.active;

    let vm_new = vm.clone();
    let vm_tabs = vm.clone();

    view! {
        <div class="bill-tabs">
            <For
                each=move || {
                    bills
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, b)| (i, b.label))
                        .collect::<Vec<_>>()
                }
                // Позиция — часть ключа: обработчики кликов её захватывают
                key=|(index, label)| (*index, label.clone())
                children={
                    move |(index, label)| {
                        let vm_activate = vm_tabs.clone();
                        let vm_close = vm_tabs.clone();
                        view! {
                            <div
                                class="bill-tab"
                                class:bill-tab--active=move || active.get() == index
                                on:click=move |_| vm_activate.activate_bill(index)
                            >
                                <span>{label}</span>
                                <button
                                    class="bill-tab__close"
                                    title="Close bill"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        vm_close.close_bill(index);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                }
            />
            <button
                class="bill-tabs__add"
                title="New bill"
                on:click=move |_| vm_new.new_bill()
            >
                {icon("plus")}
            </button>
        </div>
    }
}

#[component]
fn ProductSearchPanel(vm: CheckoutVm) -> impl IntoView {
    let results = vm.search_results;
    let query = vm.search_query;

    let vm_search = vm.clone();
    let vm_add = vm.clone();

    view! {
        <div class="checkout-search">
            <SearchInput
                value=query
                on_change=Callback::new(move |q| vm_search.search(q))
                placeholder="Scan or search product..."
            />
            <div class="checkout-search__results">
                <For
                    each=move || results.get()
                    key=|p| p.base.id.as_string()
                    children={
                        move |p| {
                            let vm = vm_add.clone();
                            let product = p.clone();
                            let name = if p.variant_name.is_empty() {
                                p.base.description.clone()
                            } else {
                                format!("{} ({})", p.base.description, p.variant_name)
                            };
                            let out_of_stock = p.quantity <= 0;
                            view! {
                                <button
                                    class="checkout-search__item"
                                    class:checkout-search__item--disabled=out_of_stock
                                    on:click=move |_| vm.add_product(&product)
                                >
                                    <span class="checkout-search__name">{name}</span>
                                    <span class="checkout-search__price">
                                        {format_money(p.unit_price)}
                                    </span>
                                    <span class="checkout-search__stock">
                                        {format!("{} in stock", p.quantity)}
                                    </span>
                                </button>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn CartTable(vm: CheckoutVm) -> impl IntoView {
    let bills = vm.bills;
    let active = vm.active;

    let lines = Memo::new(move |_| {
        bills
            .get()
            .get(active.get())
            .map(|b| b.lines.clone())
            .unwrap_or_default()
    });

    let vm_qty = vm.clone();
    let vm_remove = vm.clone();

    view! {
        <div class="checkout-cart">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th class="data-table__num">"Price"</th>
                        <th class="data-table__num">"Qty"</th>
                        <th class="data-table__num">"Total"</th>
                        <th class="data-table__actions-col"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            lines.get().into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(index, line)| (*index, line.product_id.clone())
                        children={
                            move |(index, line)| {
                                let vm_qty = vm_qty.clone();
                                let vm_remove = vm_remove.clone();
                                let name = if line.variant_name.is_empty() {
                                    line.product_name.clone()
                                } else {
                                    format!("{} ({})", line.product_name, line.variant_name)
                                };
                                let stock = line.stock_on_hand;
                                view! {
                                    <tr class="data-table__row">
                                        <td>{name}</td>
                                        <td class="data-table__num">
                                            {format_money(line.unit_price)}
                                        </td>
                                        <td class="data-table__num">
                                            <input
                                                class="cell-input cell-input--num"
                                                type="number"
                                                min="1"
                                                max=stock.to_string()
                                                prop:value=line.quantity.to_string()
                                                on:change=move |ev| {
                                                    let input =
                                                        event_target::<HtmlInputElement>(&ev);
                                                    let qty = input
                                                        .value()
                                                        .parse::<i64>()
                                                        .unwrap_or(1)
                                                        .clamp(1, stock);
                                                    input.set_value(&qty.to_string());
                                                    vm_qty.set_quantity(index, qty);
                                                }
                                            />
                                        </td>
                                        <td class="data-table__num">
                                            {format_money(line.line_total())}
                                        </td>
                                        <td class="data-table__actions-col">
                                            <button
                                                class="icon-button"
                                                title="Remove"
                                                on:click=move |_| vm_remove.remove_line(index)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                if lines.get().is_empty() {
                    Some(view! {
                        <div class="checkout-cart__empty">
                            {icon("cart")}
                            <span>"Scan or search to add items"</span>
                        </div>
                    })
                } else {
                    None
                }
            }}
        </div>
    }
}

#[component]
fn PaymentPanel(vm: CheckoutVm) -> impl IntoView {
    let bills = vm.bills;
    let active = vm.active;
    let voucher_input = vm.voucher_input;
    let submitting = vm.submitting;

    let active_bill = Signal::derive(move || bills.get().get(active.get()).cloned());
    let totals = Memo::new(move |_| active_bill.get().map(|b| b.totals()));
    let tender = Memo::new(move |_| {
        active_bill
            .get()
            .map(|b| b.tender)
            .unwrap_or(TenderKind::Cash)
    });

    let vm_apply = vm.clone();
    let vm_clear = vm.clone();
    let vm_tender_cash = vm.clone();
    let vm_tender_card = vm.clone();
    let vm_given = vm.clone();
    let vm_change = vm.clone();
    let vm_submit = vm.clone();

    view! {
        <div class="checkout-payment">
            <div class="checkout-payment__voucher">
                {move || {
                    match active_bill.get().and_then(|b| b.voucher) {
                        Some(voucher) => {
                            let vm = vm_clear.clone();
                            view! {
                                <div class="voucher-applied">
                                    <span>
                                        {format!(
                                            "Voucher {} ({})",
                                            voucher.base.code,
                                            voucher.kind.label(),
                                        )}
                                    </span>
                                    <button
                                        class="icon-button"
                                        title="Remove voucher"
                                        on:click=move |_| vm.clear_voucher()
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            let vm = vm_apply.clone();
                            view! {
                                <div class="voucher-entry">
                                    <input
                                        class="form__input"
                                        placeholder="Voucher code"
                                        prop:value=move || voucher_input.get()
                                        on:input=move |ev| {
                                            voucher_input.set(event_target_value(&ev))
                                        }
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| vm.apply_voucher()
                                    >
                                        "Apply"
                                    </Button>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>

            {move || totals.get().map(|t| view! {
                <div class="order-totals">
                    <div class="order-totals__row">
                        <span>"Subtotal"</span>
                        <span>{format_money(t.sub_total)}</span>
                    </div>
                    <div class="order-totals__row">
                        <span>"Discount"</span>
                        <span>{format!("-{}", format_money(t.discount_total))}</span>
                    </div>
                    <div class="order-totals__row">
                        <span>"Shipping"</span>
                        <span>{format_money(t.shipping_fee)}</span>
                    </div>
                    <div class="order-totals__row order-totals__row--grand">
                        <span>"Total"</span>
                        <span>{format_money(t.grand_total)}</span>
                    </div>
                </div>
            })}

            <div class="checkout-payment__tender">
                <button
                    class="tender-option"
                    class:tender-option--active=move || tender.get() == TenderKind::Cash
                    on:click=move |_| vm_tender_cash.set_tender(TenderKind::Cash)
                >
                    "Cash"
                </button>
                <button
                    class="tender-option"
                    class:tender-option--active=move || tender.get() == TenderKind::Card
                    on:click=move |_| vm_tender_card.set_tender(TenderKind::Card)
                >
                    "Card"
                </button>
            </div>

            <Show when=move || tender.get() == TenderKind::Cash>
                <div class="checkout-payment__cash">
                    <input
                        class="form__input"
                        type="number"
                        placeholder="Amount given"
                        prop:value=move || {
                            active_bill
                                .get()
                                .map(|b| b.amount_given)
                                .unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_given.clone();
                            move |ev| vm.set_amount_given(event_target_value(&ev))
                        }
                    />
                    <span class="checkout-payment__change">
                        {
                            let vm = vm_change.clone();
                            move || {
                                // Перечитывается при любой правке чека
                                let _ = bills.get();
                                match vm.change_due() {
                                    Some(change) => {
                                        format!("Change: {}", format_money(change))
                                    }
                                    None => "Insufficient cash".to_string(),
                                }
                            }
                        }
                    </span>
                </div>
            </Show>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm_submit.submit()
                disabled=Signal::derive(move || submitting.get())
            >
                {move || {
                    if tender.get() == TenderKind::Card {
                        "Pay by card"
                    } else {
                        "Complete sale"
                    }
                }}
            </Button>
        </div>
    }
}
