use crate::domain::a005_discount::aggregate::{validate_date_range, validate_percent};
use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoucherId(pub Uuid);

impl VoucherId {
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

impl AggregateId for VoucherId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VoucherId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Voucher kind
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherKind {
    /// Процент от суммы заказа (value в 1..=100)
    Percent,
    /// Фиксированная сумма от суммы заказа
    Amount,
}

impl VoucherKind {
    pub fn label(&self) -> &'static str {
        match self {
            VoucherKind::Percent => "Percent",
            VoucherKind::Amount => "Fixed amount",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Погашаемый код купона с лимитом применений и порогом суммы заказа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    #[serde(flatten)]
    pub base: BaseAggregate<VoucherId>,

    #[serde(rename = "kind")]
    pub kind: VoucherKind,

    /// Процент (1..=100) или сумма, в зависимости от `kind`
    #[serde(rename = "value")]
    pub value: f64,

    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,

    #[serde(rename = "endsAt")]
    pub ends_at: DateTime<Utc>,

    /// Сколько раз код ещё может быть погашен
    #[serde(rename = "remainingUses")]
    pub remaining_uses: i32,

    /// Минимальная сумма заказа для погашения
    #[serde(rename = "minOrderTotal", default)]
    pub min_order_total: f64,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl Voucher {
    /// Клиентская проверка применимости, зеркалящая правила сервиса
    /// купонов; при погашении последнее слово остаётся за бекендом.
    pub fn check_eligibility(&self, subtotal: f64, now: DateTime<Utc>) -> Result<(), String> {
        if !self.is_active {
            return Err("Voucher is not active".to_string());
        }
        if now < self.starts_at {
            return Err("Voucher is not valid yet".to_string());
        }
        if now > self.ends_at {
            return Err("Voucher has expired".to_string());
        }
        if self.remaining_uses <= 0 {
            return Err("Voucher has no uses left".to_string());
        }
        if subtotal < self.min_order_total {
            return Err(format!(
                "Order total must be at least {:.0} to use this voucher",
                self.min_order_total
            ));
        }
        Ok(())
    }

    /// Сумма скидки, которую купон даёт при данной сумме заказа.
    pub fn discount_amount(&self, subtotal: f64) -> f64 {
        let raw = match self.kind {
            VoucherKind::Percent => subtotal * self.value / 100.0,
            VoucherKind::Amount => self.value,
        };
        raw.min(subtotal)
    }
}

// ============================================================================
// DTO + validation
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub kind: VoucherKind,
    pub value: f64,
    #[serde(rename = "startsAt")]
    pub starts_at: String,
    #[serde(rename = "endsAt")]
    pub ends_at: String,
    #[serde(rename = "remainingUses")]
    pub remaining_uses: i32,
    #[serde(rename = "minOrderTotal")]
    pub min_order_total: f64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Валидация уровня формы, общая для view model деталей купона.
pub fn validate_voucher(
    kind: VoucherKind,
    value: f64,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    now: DateTime<Utc>,
    is_create: bool,
) -> Result<(), String> {
    match kind {
        VoucherKind::Percent => validate_percent(value as i32)?,
        VoucherKind::Amount => {
            if value <= 0.0 {
                return Err("Amount must be positive".to_string());
            }
        }
    }
    validate_date_range(starts_at, ends_at, now, is_create)
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

    fn voucher(kind: VoucherKind, value: f64) -> Voucher {
        Voucher {
            base: BaseAggregate::new(VoucherId::new_v4(), "VCH-1".into(), "Test".into()),
            kind,
            value,
            starts_at: ts("2026-08-01 00:00:00"),
            ends_at: ts("2026-09-01 00:00:00"),
            remaining_uses: 10,
            min_order_total: 100.0,
            is_active: true,
        }
    }

    #[test]
    fn eligibility_window_and_threshold() {
        let v = voucher(VoucherKind::Percent, 10.0);
        let now = ts("2026-08-15 12:00:00");

        assert!(v.check_eligibility(150.0, now).is_ok());
        assert!(v.check_eligibility(50.0, now).is_err());
        assert!(v.check_eligibility(150.0, ts("2026-07-01 00:00:00")).is_err());
        assert!(v.check_eligibility(150.0, ts("2026-10-01 00:00:00")).is_err());

        let mut spent = v.clone();
        spent.remaining_uses = 0;
        assert!(spent.check_eligibility(150.0, now).is_err());
    }

    #[test]
    fn discount_amounts() {
        let percent = voucher(VoucherKind::Percent, 10.0);
        assert_eq!(percent.discount_amount(200.0), 20.0);

        let amount = voucher(VoucherKind::Amount, 50.0);
        assert_eq!(amount.discount_amount(200.0), 50.0);
        // Никогда не превышает сумму заказа
        assert_eq!(amount.discount_amount(30.0), 30.0);
    }

    #[test]
    fn voucher_validation_by_kind() {
        let now = ts("2026-08-30 12:00:00");
        let start = ts("2026-09-01 00:00:00");
        let end = ts("2026-09-30 00:00:00");

        assert!(validate_voucher(VoucherKind::Percent, 150.0, start, end, now, true).is_err());
        assert!(validate_voucher(VoucherKind::Percent, 15.0, start, end, now, true).is_ok());
        assert!(validate_voucher(VoucherKind::Amount, -5.0, start, end, now, true).is_err());
        assert!(validate_voucher(VoucherKind::Amount, 50.0, end, start, now, true).is_err());
    }
}
