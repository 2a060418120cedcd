//! Розничный чек на кассе: строки корзины, итоги, способ оплаты.

pub mod request;
pub mod response;

use serde::{Deserialize, Serialize};

/// Одна строка POS-чека.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
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
    /// Остаток на момент добавления строки; правки количества режутся по
    /// нему на клиенте
    #[serde(rename = "stockOnHand")]
    pub stock_on_hand: i64,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Итоги чека: подытог, скидка купона, доставка, общий итог.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillTotals {
    #[serde(rename = "subTotal")]
    pub sub_total: f64,
    #[serde(rename = "discountTotal")]
    pub discount_total: f64,
    #[serde(rename = "shippingFee")]
    pub shipping_fee: f64,
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,
}

/// Посчитать итоги чека. Скидка зажимается подытогом, чтобы общий итог
/// не ушёл в минус.
pub fn compute_totals(lines: &[CartLine], discount: f64, shipping_fee: f64) -> BillTotals {
    let sub_total: f64 = lines.iter().map(|l| l.line_total()).sum();
    let discount_total = discount.clamp(0.0, sub_total);
    BillTotals {
        sub_total,
        discount_total,
        shipping_fee,
        grand_total: sub_total - discount_total + shipping_fee,
    }
}

/// Сдача при оплате наличными; `None`, пока внесённая сумма не покрывает
/// чек.
pub fn cash_change(grand_total: f64, amount_given: f64) -> Option<f64> {
    if amount_given + f64::EPSILON < grand_total {
        return None;
    }
    Some(amount_given - grand_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, qty: i64) -> CartLine {
        CartLine {
            product_id: "p1".into(),
            product_name: "Shirt".into(),
            variant_name: "Red - S".into(),
            sku: "SH-RS".into(),
            unit_price: price,
            quantity: qty,
            stock_on_hand: 100,
        }
    }

    #[test]
    fn totals_sum_lines() {
        let totals = compute_totals(&[line(100.0, 2), line(50.0, 1)], 0.0, 0.0);
        assert_eq!(totals.sub_total, 250.0);
        assert_eq!(totals.grand_total, 250.0);
    }

    #[test]
    fn discount_is_clamped_to_subtotal() {
        let totals = compute_totals(&[line(40.0, 1)], 100.0, 0.0);
        assert_eq!(totals.discount_total, 40.0);
        assert_eq!(totals.grand_total, 0.0);

        let negative = compute_totals(&[line(40.0, 1)], -10.0, 0.0);
        assert_eq!(negative.discount_total, 0.0);
    }

    #[test]
    fn shipping_is_added_after_discount() {
        let totals = compute_totals(&[line(100.0, 1)], 20.0, 15.0);
        assert_eq!(totals.grand_total, 95.0);
    }

    #[test]
    fn cash_change_requires_cover() {
        assert_eq!(cash_change(95.0, 100.0), Some(5.0));
        assert_eq!(cash_change(95.0, 95.0), Some(0.0));
        assert_eq!(cash_change(95.0, 90.0), None);
    }
}
