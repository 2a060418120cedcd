use crate::shared::http;
use contracts::domain::a002_address::aggregate::{Address, AddressDto, District, Province, Ward};
use serde::Deserialize;

// === Reference data for the cascading selects ===

pub async fn fetch_provinces() -> Result<Vec<Province>, String> {
    http::get_json("/api/geo/provinces").await
}

pub async fn fetch_districts(province_id: &str) -> Result<Vec<District>, String> {
    http::get_json(&format!("/api/geo/provinces/{}/districts", province_id)).await
}

pub async fn fetch_wards(district_id: &str) -> Result<Vec<Ward>, String> {
    http::get_json(&format!("/api/geo/districts/{}/wards", district_id)).await
}

// === Addresses ===

pub async fn fetch_for_customer(customer_id: &str) -> Result<Vec<Address>, String> {
    http::get_json(&format!("/api/customers/{}/addresses", customer_id)).await
}

pub async fn fetch_by_id(id: String) -> Result<Address, String> {
    http::get_json(&format!("/api/addresses/{}", id)).await
}

#[derive(Deserialize)]
struct SaveResponse {
    id: String,
}

pub async fn save_form(dto: AddressDto) -> Result<String, String> {
    let resp: SaveResponse = match &dto.id {
        Some(id) => http::put_json(&format!("/api/addresses/{}", id), &dto).await?,
        None => http::post_json("/api/addresses", &dto).await?,
    };
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/addresses/{}", id)).await
}
