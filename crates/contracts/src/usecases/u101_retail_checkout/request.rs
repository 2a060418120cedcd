use super::CartLine;
use serde::{Deserialize, Serialize};

/// Способ оплаты, выбранный на кассе.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenderKind {
    Cash,
    /// Внешняя платёжная страница + редирект
    Card,
}

/// Отправка одного POS-чека.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Локальный для кассы идентификатор чека, ключ идемпотентности
    #[serde(rename = "billId")]
    pub bill_id: String,

    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,

    pub lines: Vec<CartLine>,

    #[serde(rename = "voucherCode")]
    pub voucher_code: Option<String>,

    pub tender: TenderKind,

    /// Принятые наличные; присутствует только при оплате наличными
    #[serde(rename = "amountGiven")]
    pub amount_given: Option<f64>,
}
