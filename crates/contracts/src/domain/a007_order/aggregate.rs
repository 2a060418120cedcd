use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Line items and history
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "variantName", default)]
    pub variant_name: String,
    pub sku: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub quantity: i64,
    #[serde(rename = "lineTotal")]
    pub line_total: f64,
}

/// Одна запись в хронологии статусов заказа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: OrderStatus,
    #[serde(rename = "changedAt")]
    pub changed_at: DateTime<Utc>,
    #[serde(rename = "changedBy", default)]
    pub changed_by: String,
    #[serde(default)]
    pub note: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    #[serde(rename = "customerId", default)]
    pub customer_id: String,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    pub status: OrderStatus,

    pub lines: Vec<OrderLine>,

    #[serde(rename = "subTotal")]
    pub sub_total: f64,

    #[serde(rename = "discountTotal", default)]
    pub discount_total: f64,

    #[serde(rename = "shippingFee", default)]
    pub shipping_fee: f64,

    #[serde(rename = "grandTotal")]
    pub grand_total: f64,

    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,

    #[serde(rename = "statusHistory", default)]
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Тело запроса на смену статуса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTransitionRequest {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "nextStatus")]
    pub next_status: OrderStatus,
    #[serde(default)]
    pub note: String,
}
