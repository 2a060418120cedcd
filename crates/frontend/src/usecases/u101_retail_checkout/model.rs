use crate::shared::http;
use contracts::domain::a004_product::aggregate::Product;
use contracts::usecases::u101_retail_checkout::request::CheckoutRequest;
use contracts::usecases::u101_retail_checkout::response::CheckoutResponse;
use serde::Deserialize;

#[derive(Deserialize)]
struct ProductSearchResponse {
    items: Vec<Product>,
}

/// Поиск товаров со стороны кассы; только позиции в наличии.
pub async fn search_products(query: &str) -> Result<Vec<Product>, String> {
    let resp: ProductSearchResponse = http::get_json(&format!(
        "/api/products?offset=0&limit=20&inStock=true&q={}",
        urlencoding::encode(query.trim())
    ))
    .await?;
    Ok(resp.items)
}

pub async fn submit_checkout(req: &CheckoutRequest) -> Result<CheckoutResponse, String> {
    http::post_json("/api/checkout", req).await
}
