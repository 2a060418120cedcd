use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
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

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    #[serde(rename = "phone", default)]
    pub phone: String,

    #[serde(rename = "email", default)]
    pub email: String,

    #[serde(rename = "birthDate")]
    pub birth_date: Option<chrono::NaiveDate>,

    /// "male" / "female" / "" (не указан)
    #[serde(rename = "gender", default)]
    pub gender: String,

    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,

    #[serde(rename = "orderCount", default)]
    pub order_count: i32,
}

fn default_true() -> bool {
    true
}

impl Customer {
    pub fn new_for_insert(code: String, name: String, phone: String, email: String) -> Self {
        Self {
            base: BaseAggregate::new(CustomerId::new_v4(), code, name),
            phone,
            email,
            birth_date: None,
            gender: String::new(),
            is_active: true,
            order_count: 0,
        }
    }
}

// ============================================================================
// DTO (create/update payload)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub code: String,
    #[serde(rename = "name")]
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
    pub gender: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub comment: Option<String>,
}
