use crate::shared::http;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CustomerListResponse {
    pub items: Vec<Customer>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

pub async fn fetch_all() -> Result<Vec<Customer>, String> {
    let resp: CustomerListResponse = http::get_json("/api/customers?limit=500").await?;
    Ok(resp.items)
}

pub async fn fetch_by_id(id: String) -> Result<Customer, String> {
    http::get_json(&format!("/api/customers/{}", id)).await
}

#[derive(Deserialize)]
struct SaveResponse {
    id: String,
}

pub async fn save_form(dto: CustomerDto) -> Result<String, String> {
    let resp: SaveResponse = match &dto.id {
        Some(id) => http::put_json(&format!("/api/customers/{}", id), &dto).await?,
        None => http::post_json("/api/customers", &dto).await?,
    };
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/customers/{}", id)).await
}
