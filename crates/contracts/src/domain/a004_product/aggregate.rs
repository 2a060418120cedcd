use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Один продаваемый вариант товара в том виде, в каком его хранит каталог.
///
/// «Товар» на бекенде уже имеет гранулярность варианта: общие поля
/// (категория, производитель, ...) повторяются на каждый вариант, а в
/// `variant_name` лежит комбинация значений атрибутов, из которой он был
/// сгенерирован.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    #[serde(rename = "categoryId", default)]
    pub category_id: String,

    #[serde(rename = "manufacturerId", default)]
    pub manufacturer_id: String,

    /// "Red - S" у варианта, пусто у обычного товара
    #[serde(rename = "variantName", default)]
    pub variant_name: String,

    #[serde(rename = "sku", default)]
    pub sku: String,

    #[serde(rename = "gtin", default)]
    pub gtin: String,

    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,

    #[serde(rename = "productCost", default)]
    pub product_cost: f64,

    #[serde(rename = "quantity", default)]
    pub quantity: i64,

    /// Вес в граммах, общий для вариантов товара
    #[serde(rename = "weight", default)]
    pub weight: f64,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Create payload — one request per variant row
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    /// Общие поля уровня товара
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: String,
    #[serde(rename = "description")]
    pub description: String,
    #[serde(rename = "weight")]
    pub weight: f64,

    /// Поля конкретного варианта
    #[serde(rename = "variantName")]
    pub variant_name: String,
    #[serde(rename = "sku")]
    pub sku: String,
    #[serde(rename = "gtin")]
    pub gtin: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(rename = "productCost")]
    pub product_cost: f64,
    #[serde(rename = "quantity")]
    pub quantity: i64,

    /// Разрешённые пары (атрибут, значение) этой комбинации
    #[serde(rename = "attributeValues")]
    pub attribute_values: Vec<AttributeValuePair>,

    /// Отложенные ссылки на изображения из формы, в порядке строк; сами
    /// файлы загружаются сразу после пакетного создания
    #[serde(rename = "images", default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValuePair {
    #[serde(rename = "attributeId")]
    pub attribute_id: String,
    #[serde(rename = "value")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_product::variant_matrix::VariantRow;

    #[test]
    fn create_payload_carries_row_images() {
        let mut row = VariantRow::new("Red - S".to_string());
        row.images = vec!["blob:a".to_string(), "blob:b".to_string()];

        let request = ProductCreateRequest {
            name: "Shirt".to_string(),
            category_id: "cat-1".to_string(),
            manufacturer_id: "man-1".to_string(),
            description: String::new(),
            weight: 150.0,
            variant_name: row.name.clone(),
            sku: row.sku.clone(),
            gtin: row.gtin.clone(),
            unit_price: row.unit_price,
            product_cost: row.product_cost,
            quantity: row.quantity,
            attribute_values: Vec::new(),
            images: row.images.clone(),
        };

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(payload["images"], serde_json::json!(["blob:a", "blob:b"]));
        assert_eq!(payload["variantName"], "Red - S");
    }

    #[test]
    fn create_payload_images_default_to_empty_on_decode() {
        let json = r#"{
            "name": "Shirt", "categoryId": "c", "manufacturerId": "m",
            "description": "", "weight": 1.0, "variantName": "Red",
            "sku": "", "gtin": "", "unitPrice": 0.0, "productCost": 0.0,
            "quantity": 0, "attributeValues": []
        }"#;
        let request: ProductCreateRequest = serde_json::from_str(json).unwrap();
        assert!(request.images.is_empty());
    }
}
