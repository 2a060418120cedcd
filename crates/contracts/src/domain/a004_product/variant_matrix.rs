//! Матрица комбинаций вариантов для формы добавления товара.
//!
//! Матрица — производное состояние: она пересчитывается из выбранных
//! атрибутов при каждом структурном изменении и никогда не правится
//! построчно вручную. Строка идентифицируется своим `name` (ключом
//! комбинации), пока бекенд не присвоит настоящие id при отправке.

use crate::domain::a003_attribute::aggregate::ProductAttribute;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Разделитель значений атрибутов в имени комбинации ("Red - S").
pub const NAME_SEPARATOR: &str = " - ";

/// Потолок числа строк атрибутов в одной сессии редактирования.
pub const MAX_ATTRIBUTE_ROWS: usize = 5;

/// Верхняя граница количества у варианта.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Допустимый диапазон цены.
pub const MIN_UNIT_PRICE: f64 = 0.0;
pub const MAX_UNIT_PRICE: f64 = 1_000_000_000.0;

// ============================================================================
// Types
// ============================================================================

/// Одна пара (атрибут, выбранные значения) в форме добавления товара.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSelection {
    #[serde(rename = "attributeId")]
    pub attribute_id: String,
    /// Порядок вставки сохраняется для отображения
    #[serde(rename = "selectedValues")]
    pub selected_values: Vec<String>,
}

impl AttributeSelection {
    pub fn empty() -> Self {
        Self {
            attribute_id: String::new(),
            selected_values: Vec::new(),
        }
    }

    /// Строка участвует в генерации комбинаций, только когда выбраны и
    /// атрибут, и хотя бы одно значение.
    pub fn is_active(&self) -> bool {
        !self.attribute_id.is_empty() && !self.selected_values.is_empty()
    }
}

/// Один кортеж декартова произведения значений атрибутов: один
/// продаваемый SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRow {
    pub name: String,
    /// Кортеж комбинации, слот на каждый активный выбор. Отображаемое имя
    /// склеивает их через [`NAME_SEPARATOR`], что неоднозначно, если
    /// значение само содержит разделитель; сверка читает это поле, а не
    /// разобранное обратно имя.
    #[serde(default)]
    pub values: Vec<String>,
    pub sku: String,
    pub gtin: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(rename = "productCost")]
    pub product_cost: f64,
    pub quantity: i64,
    /// Отложенные ссылки на изображения (object URL), загружаются при
    /// отправке
    pub images: Vec<String>,
}

impl VariantRow {
    /// Свежая строка для комбинации, которую пользователь ещё не
    /// редактировал; все редактируемые поля начинаются с нуля / пустые.
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Vec::new(),
            sku: String::new(),
            gtin: String::new(),
            unit_price: 0.0,
            product_cost: 0.0,
            quantity: 0,
            images: Vec::new(),
        }
    }
}

// ============================================================================
// Recompute
// ============================================================================

/// Пересчитать матрицу из текущих выборов.
///
/// Строки без атрибута или без значений игнорируются; если активных не
/// осталось, матрица пуста независимо от `previous`. Имена комбинаций
/// следуют обходу в глубину: строки выбора снаружи внутрь в порядке
/// массива, значения в порядке массива. Редактируемые поля комбинаций,
/// уже существовавших в `previous`, переносятся, включая изображения.
pub fn recompute(selections: &[AttributeSelection], previous: &[VariantRow]) -> Vec<VariantRow> {
    let active: Vec<&AttributeSelection> =
        selections.iter().filter(|s| s.is_active()).collect();
    if active.is_empty() {
        return Vec::new();
    }

    let mut combos: Vec<(String, Vec<String>)> = Vec::new();
    let mut acc: Vec<&str> = Vec::with_capacity(active.len());
    expand(&active, 0, &mut acc, &mut combos);

    let by_name: HashMap<&str, &VariantRow> =
        previous.iter().map(|r| (r.name.as_str(), r)).collect();

    combos
        .into_iter()
        .map(|(name, values)| {
            let mut row = match by_name.get(name.as_str()) {
                Some(prev) => (*prev).clone(),
                None => VariantRow::new(name),
            };
            row.values = values;
            row
        })
        .collect()
}

/// Обход в глубину по спискам значений активных выборов.
fn expand<'a>(
    active: &[&'a AttributeSelection],
    depth: usize,
    acc: &mut Vec<&'a str>,
    out: &mut Vec<(String, Vec<String>)>,
) {
    if depth == active.len() {
        out.push((
            acc.join(NAME_SEPARATOR),
            acc.iter().map(|v| v.to_string()).collect(),
        ));
        return;
    }
    for value in &active[depth].selected_values {
        acc.push(value);
        expand(active, depth + 1, acc, out);
        acc.pop();
    }
}

// ============================================================================
// Structural edits
// ============================================================================

/// Удалить одну строку комбинации и вычистить значения выбора, на которые
/// больше не ссылается ни одна комбинация.
///
/// Сверка позиционная, по сохранённому кортежу значений каждой выжившей
/// строки: значение выбора остаётся, только если встречается в слоте
/// своего выбора. Проверка на вхождение подстроки ошибалась бы, когда одна
/// метка — подстрока другой ("Red" и "Dark Red"), а повторный разбор
/// отображаемого имени путал бы слоты у меток, содержащих разделитель.
pub fn remove_combination(
    selections: &[AttributeSelection],
    matrix: &[VariantRow],
    index: usize,
) -> (Vec<VariantRow>, Vec<AttributeSelection>) {
    if index >= matrix.len() {
        return (matrix.to_vec(), selections.to_vec());
    }

    let mut remaining = matrix.to_vec();
    remaining.remove(index);

    // Позиция слота -> множество значений, ещё присутствующих в ней
    let active_count = selections.iter().filter(|s| s.is_active()).count();
    let mut surviving: Vec<HashSet<&str>> = vec![HashSet::new(); active_count];
    for row in &remaining {
        for (slot, value) in row.values.iter().enumerate() {
            if slot < active_count {
                surviving[slot].insert(value.as_str());
            }
        }
    }

    let mut slot = 0;
    let reconciled = selections
        .iter()
        .map(|sel| {
            if !sel.is_active() {
                return sel.clone();
            }
            let kept = &surviving[slot];
            slot += 1;
            AttributeSelection {
                attribute_id: sel.attribute_id.clone(),
                selected_values: sel
                    .selected_values
                    .iter()
                    .filter(|v| kept.contains(v.as_str()))
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    (remaining, reconciled)
}

/// Убрать строку атрибута `index`; пересчёт делает вызывающий.
pub fn remove_attribute_row(
    selections: &[AttributeSelection],
    index: usize,
) -> Vec<AttributeSelection> {
    let mut out = selections.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}

/// Можно ли ещё добавить строку атрибута.
pub fn can_add_attribute_row(selections: &[AttributeSelection]) -> bool {
    selections.len() < MAX_ATTRIBUTE_ROWS
}

/// Атрибуты, предлагаемые строке `current`: все минус занятые другими
/// строками; собственный выбор строки остаётся виден в её селекте.
pub fn available_attributes(
    all: &[ProductAttribute],
    selections: &[AttributeSelection],
    current: usize,
) -> Vec<ProductAttribute> {
    let taken: HashSet<&str> = selections
        .iter()
        .enumerate()
        .filter(|(i, s)| *i != current && !s.attribute_id.is_empty())
        .map(|(_, s)| s.attribute_id.as_str())
        .collect();

    all.iter()
        .filter(|a| {
            use crate::domain::common::AggregateId;
            !taken.contains(a.base.id.as_string().as_str())
        })
        .cloned()
        .collect()
}

// ============================================================================
// Cell-edit commit checks
// ============================================================================

/// Зафиксировать предложенный SKU у строки `index`; отклоняется, когда
/// другая строка уже несёт то же непустое значение. При отказе строка
/// сохраняет прежний SKU.
pub fn commit_sku(matrix: &mut [VariantRow], index: usize, proposed: &str) -> Result<(), String> {
    if index >= matrix.len() {
        return Err("Row no longer exists".to_string());
    }
    if !proposed.is_empty()
        && matrix
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.sku == proposed)
    {
        return Err(format!("SKU '{}' is already used by another variant", proposed));
    }
    matrix[index].sku = proposed.to_string();
    Ok(())
}

pub fn commit_gtin(matrix: &mut [VariantRow], index: usize, proposed: &str) -> Result<(), String> {
    if index >= matrix.len() {
        return Err("Row no longer exists".to_string());
    }
    matrix[index].gtin = proposed.to_string();
    Ok(())
}

pub fn commit_quantity(
    matrix: &mut [VariantRow],
    index: usize,
    quantity: i64,
) -> Result<(), String> {
    if index >= matrix.len() {
        return Err("Row no longer exists".to_string());
    }
    if quantity < 0 {
        return Err("Quantity cannot be negative".to_string());
    }
    if quantity > MAX_QUANTITY {
        return Err(format!("Quantity cannot exceed {}", MAX_QUANTITY));
    }
    matrix[index].quantity = quantity;
    Ok(())
}

pub fn commit_unit_price(
    matrix: &mut [VariantRow],
    index: usize,
    price: f64,
) -> Result<(), String> {
    if index >= matrix.len() {
        return Err("Row no longer exists".to_string());
    }
    if !(MIN_UNIT_PRICE..=MAX_UNIT_PRICE).contains(&price) {
        return Err(format!(
            "Price must be between {} and {}",
            MIN_UNIT_PRICE, MAX_UNIT_PRICE
        ));
    }
    if price < matrix[index].product_cost {
        return Err("Price cannot be below the product cost".to_string());
    }
    matrix[index].unit_price = price;
    Ok(())
}

pub fn commit_product_cost(
    matrix: &mut [VariantRow],
    index: usize,
    cost: f64,
) -> Result<(), String> {
    if index >= matrix.len() {
        return Err("Row no longer exists".to_string());
    }
    if cost < 0.0 {
        return Err("Cost cannot be negative".to_string());
    }
    let price = matrix[index].unit_price;
    if price > 0.0 && cost > price {
        return Err("Cost cannot exceed the unit price".to_string());
    }
    matrix[index].product_cost = cost;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(id: &str, values: &[&str]) -> AttributeSelection {
        AttributeSelection {
            attribute_id: id.to_string(),
            selected_values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn names(matrix: &[VariantRow]) -> Vec<&str> {
        matrix.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn cartesian_completeness_and_order() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S", "M"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(
            names(&matrix),
            vec!["Red - S", "Red - M", "Blue - S", "Blue - M"]
        );
    }

    #[test]
    fn cartesian_count_three_rows() {
        let selections = vec![
            sel("color", &["Red", "Blue", "Green"]),
            sel("size", &["S", "M"]),
            sel("material", &["Cotton", "Wool"]),
        ];
        let matrix = recompute(&selections, &[]);
        assert_eq!(matrix.len(), 3 * 2 * 2);
        let distinct: std::collections::HashSet<&str> = names(&matrix).into_iter().collect();
        assert_eq!(distinct.len(), matrix.len());
    }

    #[test]
    fn ordering_is_deterministic() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S", "M", "L"])];
        let a = recompute(&selections, &[]);
        let b = recompute(&selections, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn preserves_edited_fields_across_regeneration() {
        let selections = vec![sel("color", &["Red"]), sel("size", &["Small"])];
        let mut matrix = recompute(&selections, &[]);
        matrix[0].sku = "SKU1".to_string();
        matrix[0].unit_price = 100.0;
        matrix[0].images = vec!["blob:a".to_string()];

        // Добавляем постороннее значение во вторую строку атрибутов
        let selections = vec![sel("color", &["Red"]), sel("size", &["Small", "Large"])];
        let matrix = recompute(&selections, &matrix);

        assert_eq!(names(&matrix), vec!["Red - Small", "Red - Large"]);
        assert_eq!(matrix[0].sku, "SKU1");
        assert_eq!(matrix[0].unit_price, 100.0);
        assert_eq!(matrix[0].images, vec!["blob:a".to_string()]);
        // Новая комбинация начинается со значений по умолчанию
        assert_eq!(matrix[1].sku, "");
        assert_eq!(matrix[1].unit_price, 0.0);
    }

    #[test]
    fn deselected_value_drops_its_combinations() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(matrix.len(), 2);

        let selections = vec![sel("color", &["Red"]), sel("size", &["S"])];
        let matrix = recompute(&selections, &matrix);
        assert_eq!(names(&matrix), vec!["Red - S"]);
    }

    #[test]
    fn empty_selection_empties_matrix() {
        let selections = vec![sel("color", &["Red", "Blue"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(matrix.len(), 2);

        let selections = vec![sel("color", &[])];
        let matrix = recompute(&selections, &matrix);
        assert!(matrix.is_empty());
    }

    #[test]
    fn rows_without_attribute_are_ignored() {
        let selections = vec![AttributeSelection::empty(), sel("size", &["S", "M"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(names(&matrix), vec!["S", "M"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S", "M"])];
        let mut once = recompute(&selections, &[]);
        once[2].sku = "B-S".to_string();
        once[2].quantity = 7;
        let twice = recompute(&selections, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_combination_prunes_unreferenced_values() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S"])];
        let matrix = recompute(&selections, &[]);

        // Убираем "Blue - S"; "Blue" больше нигде не встречается
        let (matrix, selections) = remove_combination(&selections, &matrix, 1);
        assert_eq!(names(&matrix), vec!["Red - S"]);
        assert_eq!(selections[0].selected_values, vec!["Red"]);
        assert_eq!(selections[1].selected_values, vec!["S"]);
    }

    #[test]
    fn remove_combination_keeps_values_still_referenced() {
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S", "M"])];
        let matrix = recompute(&selections, &[]);

        // Убираем "Red - S"; Red выживает через "Red - M", S через "Blue - S"
        let (matrix, selections) = remove_combination(&selections, &matrix, 0);
        assert_eq!(matrix.len(), 3);
        assert_eq!(selections[0].selected_values, vec!["Red", "Blue"]);
        assert_eq!(selections[1].selected_values, vec!["S", "M"]);
    }

    #[test]
    fn remove_combination_is_not_fooled_by_substring_labels() {
        // "Red" — подстрока "Dark Red"; позиционная сверка всё равно должна
        // убрать его, когда его собственных комбинаций не осталось.
        let selections = vec![sel("color", &["Red", "Dark Red"]), sel("size", &["S"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(names(&matrix), vec!["Red - S", "Dark Red - S"]);

        let (matrix, selections) = remove_combination(&selections, &matrix, 0);
        assert_eq!(names(&matrix), vec!["Dark Red - S"]);
        assert_eq!(selections[0].selected_values, vec!["Dark Red"]);
    }

    #[test]
    fn rows_carry_their_value_tuples() {
        let selections = vec![sel("color", &["Red"]), sel("size", &["S", "M"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(matrix[0].values, vec!["Red", "S"]);
        assert_eq!(matrix[1].values, vec!["Red", "M"]);

        // Перенесённые строки сохраняют правки и всё равно получают кортеж
        let mut edited = matrix;
        edited[0].sku = "R-S".to_string();
        let selections = vec![sel("color", &["Red", "Blue"]), sel("size", &["S", "M"])];
        let matrix = recompute(&selections, &edited);
        assert_eq!(matrix[0].sku, "R-S");
        assert_eq!(matrix[0].values, vec!["Red", "S"]);
    }

    #[test]
    fn remove_combination_with_separator_inside_a_label() {
        // "A - B" содержит разделитель; склеенное имя "A - B - S" разобралось
        // бы на три слота и вычистило бы выбор лишнего.
        let selections = vec![sel("color", &["A - B", "C"]), sel("size", &["S"])];
        let matrix = recompute(&selections, &[]);
        assert_eq!(names(&matrix), vec!["A - B - S", "C - S"]);

        let (matrix, selections) = remove_combination(&selections, &matrix, 1);
        assert_eq!(names(&matrix), vec!["A - B - S"]);
        assert_eq!(selections[0].selected_values, vec!["A - B"]);
        assert_eq!(selections[1].selected_values, vec!["S"]);
    }

    #[test]
    fn remove_combination_out_of_bounds_is_a_noop() {
        let selections = vec![sel("color", &["Red"])];
        let matrix = recompute(&selections, &[]);
        let (m, s) = remove_combination(&selections, &matrix, 5);
        assert_eq!(m, matrix);
        assert_eq!(s, selections);
    }

    #[test]
    fn remove_attribute_row_drops_the_row() {
        let selections = vec![sel("color", &["Red"]), sel("size", &["S"])];
        let remaining = remove_attribute_row(&selections, 0);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].attribute_id, "size");

        let matrix = recompute(&remaining, &[]);
        assert_eq!(names(&matrix), vec!["S"]);
    }

    #[test]
    fn attribute_row_ceiling() {
        let selections: Vec<AttributeSelection> = (0..MAX_ATTRIBUTE_ROWS)
            .map(|i| sel(&format!("attr{}", i), &["v"]))
            .collect();
        assert!(!can_add_attribute_row(&selections));
        assert!(can_add_attribute_row(&selections[..MAX_ATTRIBUTE_ROWS - 1].to_vec()));
    }

    #[test]
    fn sku_commit_rejects_duplicates() {
        let selections = vec![sel("color", &["Red", "Blue"])];
        let mut matrix = recompute(&selections, &[]);
        commit_sku(&mut matrix, 0, "A1").unwrap();

        let err = commit_sku(&mut matrix, 1, "A1").unwrap_err();
        assert!(err.contains("A1"));
        assert_eq!(matrix[1].sku, "");

        // Другое значение допустимо, повторная фиксация своего — тоже
        commit_sku(&mut matrix, 1, "A2").unwrap();
        commit_sku(&mut matrix, 0, "A1").unwrap();
    }

    #[test]
    fn quantity_commit_is_range_checked() {
        let mut matrix = vec![VariantRow::new("Red".to_string())];
        commit_quantity(&mut matrix, 0, 42).unwrap();
        assert_eq!(matrix[0].quantity, 42);

        assert!(commit_quantity(&mut matrix, 0, -1).is_err());
        assert!(commit_quantity(&mut matrix, 0, MAX_QUANTITY + 1).is_err());
        // Отклонённая правка оставляет прежнее значение
        assert_eq!(matrix[0].quantity, 42);
    }

    #[test]
    fn price_commit_enforces_bounds_and_cost_floor() {
        let mut matrix = vec![VariantRow::new("Red".to_string())];
        commit_product_cost(&mut matrix, 0, 80.0).unwrap();
        assert!(commit_unit_price(&mut matrix, 0, 50.0).is_err());
        commit_unit_price(&mut matrix, 0, 120.0).unwrap();

        assert!(commit_unit_price(&mut matrix, 0, -1.0).is_err());
        assert!(commit_unit_price(&mut matrix, 0, MAX_UNIT_PRICE * 2.0).is_err());
        assert_eq!(matrix[0].unit_price, 120.0);

        // Себестоимость выше зафиксированной цены тоже отклоняется
        assert!(commit_product_cost(&mut matrix, 0, 200.0).is_err());
        assert_eq!(matrix[0].product_cost, 80.0);
    }

    #[test]
    fn available_attributes_excludes_other_rows_choices() {
        use crate::domain::a003_attribute::aggregate::ProductAttribute;
        use crate::domain::common::AggregateId;

        let attrs: Vec<ProductAttribute> = ["Color", "Size", "Material"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                ProductAttribute::new_for_insert(format!("ATT-{}", i), name.to_string(), vec![])
            })
            .collect();

        let selections = vec![
            AttributeSelection {
                attribute_id: attrs[0].base.id.as_string(),
                selected_values: vec!["Red".to_string()],
            },
            AttributeSelection {
                attribute_id: attrs[1].base.id.as_string(),
                selected_values: vec![],
            },
        ];

        // Строке 1 нельзя предлагать Color (занят строкой 0), Size остаётся
        let avail = available_attributes(&attrs, &selections, 1);
        let names: Vec<&str> = avail.iter().map(|a| a.base.description.as_str()).collect();
        assert_eq!(names, vec!["Size", "Material"]);
    }
}
