use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnRequestId(pub Uuid);

impl ReturnRequestId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ReturnRequestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReturnRequestId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Requested,
    Approved,
    Rejected,
    Refunded,
}

impl ReturnStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "Requested",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Rejected => "Rejected",
            ReturnStatus::Refunded => "Refunded",
        }
    }

    /// Решение выносится только по свежезапрошенному возврату.
    pub fn is_open(&self) -> bool {
        matches!(self, ReturnStatus::Requested)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnLine {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub reason: String,
}

/// Заявка на возврат товара по доставленному заказу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRequest {
    #[serde(flatten)]
    pub base: BaseAggregate<ReturnRequestId>,

    #[serde(rename = "orderId")]
    pub order_id: String,

    #[serde(rename = "orderCode", default)]
    pub order_code: String,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    pub status: ReturnStatus,

    pub lines: Vec<ReturnLine>,

    #[serde(rename = "refundTotal")]
    pub refund_total: f64,

    #[serde(rename = "requestedAt")]
    pub requested_at: DateTime<Utc>,

    /// Заметка проверяющего, записанная вместе с решением
    #[serde(rename = "decisionNote", default)]
    pub decision_note: String,
}

/// Тело решения одобрить/отклонить.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnDecisionRequest {
    #[serde(rename = "returnId")]
    pub return_id: String,
    pub approve: bool,
    #[serde(default)]
    pub note: String,
}
