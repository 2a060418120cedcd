use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Uuid);

impl AddressId {
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

impl AggregateId for AddressId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AddressId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Administrative units (cascading select reference data)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    #[serde(rename = "provinceId")]
    pub province_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub id: String,
    pub name: String,
    #[serde(rename = "districtId")]
    pub district_id: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(flatten)]
    pub base: BaseAggregate<AddressId>,

    #[serde(rename = "customerId")]
    pub customer_id: String,

    #[serde(rename = "recipientName")]
    pub recipient_name: String,

    #[serde(rename = "recipientPhone")]
    pub recipient_phone: String,

    #[serde(rename = "provinceId")]
    pub province_id: String,

    #[serde(rename = "districtId")]
    pub district_id: String,

    #[serde(rename = "wardId")]
    pub ward_id: String,

    /// Улица и дом, свободная текстовая часть адреса
    #[serde(rename = "streetLine")]
    pub street_line: String,

    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

// ============================================================================
// DTO (create/update payload)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub id: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "recipientName")]
    pub recipient_name: String,
    #[serde(rename = "recipientPhone")]
    pub recipient_phone: String,
    #[serde(rename = "provinceId")]
    pub province_id: String,
    #[serde(rename = "districtId")]
    pub district_id: String,
    #[serde(rename = "wardId")]
    pub ward_id: String,
    #[serde(rename = "streetLine")]
    pub street_line: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}
