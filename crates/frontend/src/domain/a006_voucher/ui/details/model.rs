use crate::shared::http;
use contracts::domain::a006_voucher::aggregate::{Voucher, VoucherDto};
use serde::Deserialize;

pub async fn fetch_all() -> Result<Vec<Voucher>, String> {
    http::get_json("/api/vouchers").await
}

pub async fn fetch_by_id(id: String) -> Result<Voucher, String> {
    http::get_json(&format!("/api/vouchers/{}", id)).await
}

/// Поиск купона по коду погашения; используется кассой.
pub async fn fetch_by_code(code: &str) -> Result<Voucher, String> {
    http::get_json(&format!(
        "/api/vouchers/by-code/{}",
        urlencoding::encode(code)
    ))
    .await
}

#[derive(Deserialize)]
struct SaveResponse {
    id: String,
}

pub async fn save_form(dto: VoucherDto) -> Result<String, String> {
    let resp: SaveResponse = match &dto.id {
        Some(id) => http::put_json(&format!("/api/vouchers/{}", id), &dto).await?,
        None => http::post_json("/api/vouchers", &dto).await?,
    };
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/vouchers/{}", id)).await
}
