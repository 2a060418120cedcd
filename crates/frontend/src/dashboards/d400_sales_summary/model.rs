use crate::shared::http;
use contracts::dashboards::d400_sales_summary::dto::{MonthlyRevenueRow, SalesSummary};

pub async fn fetch_summary() -> Result<SalesSummary, String> {
    http::get_json("/api/stats/summary").await
}

pub async fn fetch_monthly_revenue() -> Result<Vec<MonthlyRevenueRow>, String> {
    http::get_json("/api/stats/monthly-revenue").await
}
