use crate::shared::http;
use contracts::domain::a005_discount::aggregate::{Discount, DiscountDto};
use serde::Deserialize;

pub async fn fetch_all() -> Result<Vec<Discount>, String> {
    http::get_json("/api/discounts").await
}

pub async fn fetch_by_id(id: String) -> Result<Discount, String> {
    http::get_json(&format!("/api/discounts/{}", id)).await
}

#[derive(Deserialize)]
struct SaveResponse {
    id: String,
}

pub async fn save_form(dto: DiscountDto) -> Result<String, String> {
    let resp: SaveResponse = match &dto.id {
        Some(id) => http::put_json(&format!("/api/discounts/{}", id), &dto).await?,
        None => http::post_json("/api/discounts", &dto).await?,
    };
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/discounts/{}", id)).await
}
