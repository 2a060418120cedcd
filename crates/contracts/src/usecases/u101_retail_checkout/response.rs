use serde::{Deserialize, Serialize};

/// Результат отправки чека.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,

    #[serde(rename = "orderCode")]
    pub order_code: String,

    /// Задан при оплате картой: платёжная страница для редиректа
    #[serde(rename = "paymentUrl")]
    pub payment_url: Option<String>,

    /// Сдача, возвращаемая при оплате наличными
    #[serde(rename = "changeDue")]
    pub change_due: Option<f64>,
}
