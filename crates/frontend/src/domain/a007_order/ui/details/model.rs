use crate::shared::http;
use contracts::domain::a007_order::aggregate::{Order, StatusTransitionRequest};
use contracts::enums::OrderStatus;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OrderListResponse {
    pub items: Vec<Order>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

pub async fn fetch_page(
    page: usize,
    page_size: usize,
    status: Option<OrderStatus>,
) -> Result<OrderListResponse, String> {
    let mut url = format!(
        "/api/orders?offset={}&limit={}",
        page * page_size,
        page_size
    );
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }
    http::get_json(&url).await
}

pub async fn fetch_by_id(id: String) -> Result<Order, String> {
    http::get_json(&format!("/api/orders/{}", id)).await
}

/// Бэкенд проверяет переход повторно; UI предлагает только допустимые.
pub async fn request_transition(req: &StatusTransitionRequest) -> Result<Order, String> {
    http::post_json(&format!("/api/orders/{}/status", req.order_id), req).await
}
