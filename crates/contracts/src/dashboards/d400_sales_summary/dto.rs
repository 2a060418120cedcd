use serde::{Deserialize, Serialize};

/// Верхние карточки дашборда продаж.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "ordersToday")]
    pub orders_today: i64,
    #[serde(rename = "revenueToday")]
    pub revenue_today: f64,
    #[serde(rename = "pendingReturns")]
    pub pending_returns: i64,
    #[serde(rename = "activeCustomers")]
    pub active_customers: i64,
}

/// Один месяц выручки для таблицы дашборда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenueRow {
    /// "2026-08"
    pub month: String,
    #[serde(rename = "orderCount")]
    pub order_count: i64,
    pub revenue: f64,
    #[serde(rename = "returnCount")]
    pub return_count: i64,
}
