use crate::shared::http;
use contracts::domain::a008_return_request::aggregate::{
    ReturnDecisionRequest, ReturnLine, ReturnRequest,
};
use serde::{Deserialize, Serialize};

pub async fn fetch_all() -> Result<Vec<ReturnRequest>, String> {
    http::get_json("/api/returns").await
}

pub async fn fetch_by_id(id: String) -> Result<ReturnRequest, String> {
    http::get_json(&format!("/api/returns/{}", id)).await
}

#[derive(Serialize)]
pub struct ReturnCreateDto {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub lines: Vec<ReturnLine>,
}

#[derive(Deserialize)]
struct SaveResponse {
    #[allow(dead_code)]
    id: String,
}

/// Сервис заказов отклоняет возвраты по недоставленным заказам.
pub async fn create_return(dto: &ReturnCreateDto) -> Result<(), String> {
    let _: SaveResponse = http::post_json("/api/returns", dto).await?;
    Ok(())
}

pub async fn submit_decision(req: &ReturnDecisionRequest) -> Result<ReturnRequest, String> {
    http::post_json(&format!("/api/returns/{}/decision", req.return_id), req).await
}
