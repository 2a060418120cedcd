//! Реестр содержимого вкладок: единственный источник истины tab.key → view.

use crate::dashboards::d400_sales_summary::SalesSummaryDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a003_attribute::ui::AttributeList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_discount::ui::list::DiscountList;
use crate::domain::a006_voucher::ui::list::VoucherList;
use crate::domain::a007_order::ui::list::OrderList;
use crate::domain::a008_return_request::ui::list::ReturnRequestList;
use crate::layout::workspace::AppWorkspace;
use crate::usecases::u101_retail_checkout::RetailCheckoutPage;
use leptos::prelude::*;

/// Человекочитаемый заголовок вкладки по ключу.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_sales_summary" => "Sales summary",
        "a001_customer" => "Customers",
        "a003_attribute" => "Attributes",
        "a004_product" => "Products",
        "a005_discount" => "Discounts",
        "a006_voucher" => "Vouchers",
        "a007_order" => "Orders",
        "a008_return_request" => "Returns",
        "u101_retail_checkout" => "Retail checkout",
        _ => "Unknown",
    }
}

/// Отрисовать содержимое вкладки по её ключу.
pub fn render_tab_content(key: &str, _workspace: AppWorkspace) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════
        "d400_sales_summary" => view! { <SalesSummaryDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════
        // Domain aggregates
        // ═══════════════════════════════════════════════════════════════
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a003_attribute" => view! { <AttributeList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_discount" => view! { <DiscountList /> }.into_any(),
        "a006_voucher" => view! { <VoucherList /> }.into_any(),
        "a007_order" => view! { <OrderList /> }.into_any(),
        "a008_return_request" => view! { <ReturnRequestList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════
        // Usecases
        // ═══════════════════════════════════════════════════════════════
        "u101_retail_checkout" => view! { <RetailCheckoutPage /> }.into_any(),

        _ => view! {
            <div class="tab-page__placeholder">
                <p>"Unknown tab: " {key.to_string()}</p>
            </div>
        }
        .into_any(),
    }
}
