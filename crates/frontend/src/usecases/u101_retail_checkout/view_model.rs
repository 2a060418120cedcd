//! ViewModel кассового места.
//!
//! Одновременно может быть открыто несколько чеков; каждый — обычная
//! структура внутри одного `RwSignal<Vec<Bill>>`, активный индекс выбирает
//! тот, что на экране. Итоги считает чистая `compute_totals` из contracts.

use super::model;
use chrono::Utc;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a006_voucher::aggregate::Voucher;
use contracts::domain::common::AggregateId;
use contracts::usecases::u101_retail_checkout::request::{CheckoutRequest, TenderKind};
use contracts::usecases::u101_retail_checkout::{cash_change, compute_totals, BillTotals, CartLine};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone)]
pub struct Bill {
    /// Ключ идемпотентности, отправляемый вместе с чеком
    pub bill_id: String,
    pub label: String,
    pub customer_id: Option<String>,
    pub lines: Vec<CartLine>,
    pub voucher: Option<Voucher>,
    pub tender: TenderKind,
    pub amount_given: String,
    pub shipping_fee: f64,
}

impl Bill {
    fn new(number: usize) -> Self {
        Self {
            bill_id: Uuid::new_v4().to_string(),
            label: format!("Bill {}", number),
            customer_id: None,
            lines: Vec::new(),
            voucher: None,
            tender: TenderKind::Cash,
            amount_given: String::new(),
            shipping_fee: 0.0,
        }
    }

    pub fn totals(&self) -> BillTotals {
        let sub_total: f64 = self.lines.iter().map(|l| l.line_total()).sum();
        let discount = self
            .voucher
            .as_ref()
            .map(|v| v.discount_amount(sub_total))
            .unwrap_or(0.0);
        compute_totals(&self.lines, discount, self.shipping_fee)
    }
}

#[derive(Clone)]
pub struct CheckoutVm {
    pub bills: RwSignal<Vec<Bill>>,
    pub active: RwSignal<usize>,
    /// Монотонный счётчик, чтобы номера закрытых чеков не переиспользовались
    next_number: RwSignal<usize>,

    pub search_results: RwSignal<Vec<Product>>,
    pub search_query: RwSignal<String>,

    pub voucher_input: RwSignal<String>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Код заказа последней завершённой продажи за наличные
    pub last_order_code: RwSignal<Option<String>>,
    pub last_change_due: RwSignal<Option<f64>>,
}

impl CheckoutVm {
    pub fn new() -> Self {
        Self {
            bills: RwSignal::new(vec![Bill::new(1)]),
            active: RwSignal::new(0),
            next_number: RwSignal::new(2),
            search_results: RwSignal::new(Vec::new()),
            search_query: RwSignal::new(String::new()),
            voucher_input: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            last_order_code: RwSignal::new(None),
            last_change_due: RwSignal::new(None),
        }
    }

    // === Bill tabs ===

    pub fn new_bill(&self) {
        let number = self.next_number.get_untracked();
        self.next_number.set(number + 1);
        self.bills.update(|bills| bills.push(Bill::new(number)));
        self.active.set(self.bills.get_untracked().len() - 1);
        self.voucher_input.set(String::new());
    }

    pub fn close_bill(&self, index: usize) {
        let mut bills = self.bills.get_untracked();
        if bills.len() <= 1 || index >= bills.len() {
            return;
        }
        bills.remove(index);
        let active = self.active.get_untracked().min(bills.len() - 1);
        self.bills.set(bills);
        self.active.set(active);
    }

    pub fn activate_bill(&self, index: usize) {
        if index < self.bills.get_untracked().len() {
            self.active.set(index);
            self.voucher_input.set(String::new());
        }
    }

    pub fn active_bill(&self) -> Option<Bill> {
        let bills = self.bills.get();
        bills.get(self.active.get()).cloned()
    }

    fn update_active(&self, f: impl FnOnce(&mut Bill)) {
        let index = self.active.get_untracked();
        self.bills.update(|bills| {
            if let Some(bill) = bills.get_mut(index) {
                f(bill);
            }
        });
    }

    // === Product search ===

    pub fn search(&self, query: String) {
        self.search_query.set(query.clone());
        if query.trim().len() < 2 {
            self.search_results.set(Vec::new());
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            match model::search_products(&query).await {
                Ok(items) => this.search_results.set(items),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    // === Cart lines ===

    pub fn add_product(&self, product: &Product) {
        let id = product.base.id.as_string();
        let stock = product.quantity;
        if stock <= 0 {
            self.error.set(Some("Product is out of stock".into()));
            return;
        }
        self.error.set(None);
        let line = CartLine {
            product_id: id.clone(),
            product_name: product.base.description.clone(),
            variant_name: product.variant_name.clone(),
            sku: product.sku.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            stock_on_hand: stock,
        };
        self.update_active(|bill| {
            match bill.lines.iter_mut().find(|l| l.product_id == id) {
                Some(existing) => {
                    if existing.quantity < existing.stock_on_hand {
                        existing.quantity += 1;
                    }
                }
                None => bill.lines.push(line),
            }
        });
    }

    /// Правки количества зажимаются в `1..=stock_on_hand`.
    pub fn set_quantity(&self, line_index: usize, quantity: i64) {
        self.update_active(|bill| {
            if let Some(line) = bill.lines.get_mut(line_index) {
                line.quantity = quantity.clamp(1, line.stock_on_hand);
            }
        });
    }

    pub fn remove_line(&self, line_index: usize) {
        self.update_active(|bill| {
            if line_index < bill.lines.len() {
                bill.lines.remove(line_index);
            }
        });
    }

    // === Voucher ===

    pub fn apply_voucher(&self) {
        let code = self.voucher_input.get_untracked().trim().to_uppercase();
        if code.is_empty() {
            return;
        }
        let Some(bill) = self.active_bill() else {
            return;
        };
        let sub_total: f64 = bill.lines.iter().map(|l| l.line_total()).sum();

        let this = self.clone();
        spawn_local(async move {
            match crate::domain::a006_voucher::ui::details::model::fetch_by_code(&code).await {
                Ok(voucher) => match voucher.check_eligibility(sub_total, Utc::now()) {
                    Ok(()) => {
                        this.error.set(None);
                        this.update_active(|bill| bill.voucher = Some(voucher));
                    }
                    Err(e) => this.error.set(Some(e)),
                },
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn clear_voucher(&self) {
        self.update_active(|bill| bill.voucher = None);
        self.voucher_input.set(String::new());
    }

    // === Tender ===

    pub fn set_tender(&self, tender: TenderKind) {
        self.update_active(|bill| bill.tender = tender);
    }

    pub fn set_amount_given(&self, raw: String) {
        self.update_active(|bill| bill.amount_given = raw);
    }

    /// Сдача по активному чеку; `None`, пока наличные не покрывают итог.
    pub fn change_due(&self) -> Option<f64> {
        let bill = self.active_bill()?;
        if bill.tender != TenderKind::Cash {
            return None;
        }
        let given = bill.amount_given.trim().parse::<f64>().ok()?;
        cash_change(bill.totals().grand_total, given)
    }

    // === Submission ===

    pub fn submit(&self) {
        let Some(bill) = self.active_bill() else {
            return;
        };
        if bill.lines.is_empty() {
            self.error.set(Some("The bill is empty".into()));
            return;
        }

        let totals = bill.totals();
        let amount_given = match bill.tender {
            TenderKind::Cash => {
                let given = match bill.amount_given.trim().parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => {
                        self.error.set(Some("Enter the cash amount given".into()));
                        return;
                    }
                };
                if cash_change(totals.grand_total, given).is_none() {
                    self.error
                        .set(Some("Cash given does not cover the total".into()));
                    return;
                }
                Some(given)
            }
            TenderKind::Card => None,
        };

        let req = CheckoutRequest {
            bill_id: bill.bill_id.clone(),
            customer_id: bill.customer_id.clone(),
            lines: bill.lines.clone(),
            voucher_code: bill.voucher.as_ref().map(|v| v.base.code.clone()),
            tender: bill.tender,
            amount_given,
        };

        let this = self.clone();
        let closed_index = self.active.get_untracked();
        this.submitting.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::submit_checkout(&req).await {
                Ok(resp) => {
                    this.submitting.set(false);
                    if let Some(url) = resp.payment_url {
                        // Оплата картой: передаём управление платёжной
                        // странице; подтверждение вернётся в query-параметрах.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                        return;
                    }
                    this.last_order_code.set(Some(resp.order_code));
                    this.last_change_due.set(resp.change_due);
                    this.remove_or_reset_bill(closed_index);
                }
                Err(e) => {
                    // Чек остаётся нетронутым для повторной попытки
                    this.error.set(Some(e));
                    this.submitting.set(false);
                }
            }
        });
    }

    fn remove_or_reset_bill(&self, index: usize) {
        let mut bills = self.bills.get_untracked();
        if bills.len() > 1 && index < bills.len() {
            bills.remove(index);
            let active = self.active.get_untracked().min(bills.len() - 1);
            self.bills.set(bills);
            self.active.set(active);
        } else {
            let number = self.next_number.get_untracked();
            self.next_number.set(number + 1);
            self.bills.set(vec![Bill::new(number)]);
            self.active.set(0);
        }
        self.voucher_input.set(String::new());
    }
}
