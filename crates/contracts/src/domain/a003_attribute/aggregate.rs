use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeId(pub Uuid);

impl AttributeId {
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

impl AggregateId for AttributeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AttributeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Именованный атрибут товара ("Color", "Size") с каталогом меток значений.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    #[serde(flatten)]
    pub base: BaseAggregate<AttributeId>,

    /// Различные метки значений, доступные этому атрибуту
    #[serde(rename = "values", default)]
    pub values: Vec<String>,
}

impl ProductAttribute {
    pub fn new_for_insert(code: String, name: String, values: Vec<String>) -> Self {
        Self {
            base: BaseAggregate::new(AttributeId::new_v4(), code, name),
            values,
        }
    }
}
