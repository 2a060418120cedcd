use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscountId(pub Uuid);

impl DiscountId {
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

impl AggregateId for DiscountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DiscountId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Процентная скидка на набор товаров в заданном интервале дат.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(flatten)]
    pub base: BaseAggregate<DiscountId>,

    /// Процент скидки, 1..=100
    #[serde(rename = "percentValue")]
    pub percent_value: i32,

    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,

    #[serde(rename = "endsAt")]
    pub ends_at: DateTime<Utc>,

    /// Товары, к которым применяется скидка
    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    #[serde(rename = "percentValue")]
    pub percent_value: i32,
    #[serde(rename = "startsAt")]
    pub starts_at: String,
    #[serde(rename = "endsAt")]
    pub ends_at: String,
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

// ============================================================================
// Validation (shared with vouchers)
// ============================================================================

pub fn validate_percent(percent: i32) -> Result<(), String> {
    if !(1..=100).contains(&percent) {
        return Err("Percent value must be between 1 and 100".to_string());
    }
    Ok(())
}

/// Начало должно предшествовать концу; при создании конец ещё в будущем.
pub fn validate_date_range(
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    now: DateTime<Utc>,
    is_create: bool,
) -> Result<(), String> {
    if starts_at >= ends_at {
        return Err("Start date must be before the end date".to_string());
    }
    if is_create && ends_at <= now {
        return Err("End date must be in the future".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn percent_bounds() {
        assert!(validate_percent(0).is_err());
        assert!(validate_percent(1).is_ok());
        assert!(validate_percent(100).is_ok());
        assert!(validate_percent(101).is_err());
    }

    #[test]
    fn date_range_ordering() {
        let now = ts("2026-08-30 12:00:00");
        assert!(validate_date_range(
            ts("2026-09-01 00:00:00"),
            ts("2026-09-10 00:00:00"),
            now,
            true
        )
        .is_ok());
        assert!(validate_date_range(
            ts("2026-09-10 00:00:00"),
            ts("2026-09-01 00:00:00"),
            now,
            true
        )
        .is_err());
    }

    #[test]
    fn create_requires_future_end() {
        let now = ts("2026-08-30 12:00:00");
        let past = validate_date_range(
            ts("2026-08-01 00:00:00"),
            ts("2026-08-15 00:00:00"),
            now,
            true,
        );
        assert!(past.is_err());

        // Редактирование исторической скидки остаётся разрешённым
        let edit = validate_date_range(
            ts("2026-08-01 00:00:00"),
            ts("2026-08-15 00:00:00"),
            now,
            false,
        );
        assert!(edit.is_ok());
    }
}
