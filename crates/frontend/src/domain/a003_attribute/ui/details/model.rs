use crate::shared::http;
use contracts::domain::a003_attribute::aggregate::ProductAttribute;
use serde::{Deserialize, Serialize};

pub async fn fetch_all() -> Result<Vec<ProductAttribute>, String> {
    http::get_json("/api/attributes").await
}

pub async fn fetch_by_id(id: String) -> Result<ProductAttribute, String> {
    http::get_json(&format!("/api/attributes/{}", id)).await
}

#[derive(Serialize)]
pub struct AttributeDto {
    pub id: Option<String>,
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Deserialize)]
struct SaveResponse {
    id: String,
}

pub async fn save_form(dto: AttributeDto) -> Result<String, String> {
    let resp: SaveResponse = match &dto.id {
        Some(id) => http::put_json(&format!("/api/attributes/{}", id), &dto).await?,
        None => http::post_json("/api/attributes", &dto).await?,
    };
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/attributes/{}", id)).await
}
