use crate::shared::http;
use contracts::domain::a004_product::aggregate::{
    Category, Manufacturer, Product, ProductCreateRequest,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

pub async fn fetch_page(
    page: usize,
    page_size: usize,
    query: &str,
) -> Result<ProductListResponse, String> {
    let mut url = format!(
        "/api/products?offset={}&limit={}",
        page * page_size,
        page_size
    );
    if !query.trim().is_empty() {
        url.push_str(&format!("&q={}", urlencoding::encode(query.trim())));
    }
    http::get_json(&url).await
}

pub async fn fetch_by_id(id: String) -> Result<Product, String> {
    http::get_json(&format!("/api/products/{}", id)).await
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    http::get_json("/api/categories").await
}

pub async fn fetch_manufacturers() -> Result<Vec<Manufacturer>, String> {
    http::get_json("/api/manufacturers").await
}

#[derive(Deserialize)]
pub struct CreateResponse {
    #[serde(rename = "createdIds")]
    pub created_ids: Vec<String>,
}

/// Один запрос на строку варианта; бэкенд сохраняет их пакетом.
///
/// Отложенные файлы изображений загружаются следом: `createdIds` приходит
/// в порядке запросов, поэтому object URL каждой строки разворачиваются в
/// блобы и отправляются против товара, созданного для этой строки.
pub async fn create_products(
    requests: &[ProductCreateRequest],
) -> Result<CreateResponse, String> {
    let resp: CreateResponse = http::post_json("/api/products/batch", &requests).await?;

    for (product_id, request) in resp.created_ids.iter().zip(requests) {
        upload_row_images(product_id, &request.images).await?;
    }

    Ok(resp)
}

async fn upload_row_images(product_id: &str, object_urls: &[String]) -> Result<(), String> {
    for url in object_urls {
        let bytes = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| format!("{e}"))?
            .binary()
            .await
            .map_err(|e| format!("{e}"))?;
        http::post_bytes(&format!("/api/products/{}/images", product_id), bytes).await?;
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ProductUpdateDto {
    pub sku: String,
    pub gtin: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(rename = "productCost")]
    pub product_cost: f64,
    pub quantity: i64,
    pub weight: f64,
    pub description: String,
}

#[derive(Deserialize)]
struct SaveResponse {
    #[allow(dead_code)]
    id: String,
}

pub async fn update_product(id: &str, dto: &ProductUpdateDto) -> Result<(), String> {
    let _: SaveResponse = http::put_json(&format!("/api/products/{}", id), dto).await?;
    Ok(())
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/products/{}", id)).await
}
