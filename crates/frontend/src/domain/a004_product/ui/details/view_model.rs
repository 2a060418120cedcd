//! ViewModel формы добавления товара.
//!
//! Сама матрица вариантов — чистая логика в
//! `contracts::domain::a004_product::variant_matrix`; эта VM владеет
//! сигналами и пропускает каждое структурное изменение через `recompute`,
//! чтобы таблица не могла разойтись с выбором характеристик.

use super::model;
use contracts::domain::a003_attribute::aggregate::ProductAttribute;
use contracts::domain::a004_product::aggregate::{
    AttributeValuePair, Category, Manufacturer, ProductCreateRequest,
};
use contracts::domain::a004_product::variant_matrix::{
    self, AttributeSelection, VariantRow,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
pub struct ProductCreateVm {
    // === Shared product fields ===
    pub name: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub manufacturer_id: RwSignal<String>,
    pub description: RwSignal<String>,
    pub weight: RwSignal<String>,

    // === Matrix state ===
    pub selections: RwSignal<Vec<AttributeSelection>>,
    pub matrix: RwSignal<Vec<VariantRow>>,

    // === Reference data ===
    pub attributes: RwSignal<Vec<ProductAttribute>>,
    pub categories: RwSignal<Vec<Category>>,
    pub manufacturers: RwSignal<Vec<Manufacturer>>,

    // === UI state ===
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Отклонённые правки ячеек всплывают здесь, не трогая `error`
    pub cell_error: RwSignal<Option<String>>,
}

impl ProductCreateVm {
    pub fn new() -> Self {
        let vm = Self {
            name: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            manufacturer_id: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            selections: RwSignal::new(Vec::new()),
            matrix: RwSignal::new(Vec::new()),
            attributes: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            manufacturers: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            cell_error: RwSignal::new(None),
        };
        vm.load_references();
        vm
    }

    fn load_references(&self) {
        let this = self.clone();
        spawn_local(async move {
            match crate::domain::a003_attribute::ui::details::model::fetch_all().await {
                Ok(list) => this.attributes.set(list),
                Err(e) => this.error.set(Some(e)),
            }
            match model::fetch_categories().await {
                Ok(list) => this.categories.set(list),
                Err(e) => this.error.set(Some(e)),
            }
            match model::fetch_manufacturers().await {
                Ok(list) => this.manufacturers.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    // === Attribute rows ===

    pub fn can_add_row(&self) -> Signal<bool> {
        let selections = self.selections;
        Signal::derive(move || variant_matrix::can_add_attribute_row(&selections.get()))
    }

    pub fn add_attribute_row(&self) {
        if !variant_matrix::can_add_attribute_row(&self.selections.get_untracked()) {
            return;
        }
        self.selections
            .update(|s| s.push(AttributeSelection::empty()));
        // Свежая строка неактивна; матрица не меняется, пока не выбрано
        // значение, так что recompute здесь не нужен.
    }

    pub fn remove_attribute_row(&self, index: usize) {
        let next = variant_matrix::remove_attribute_row(&self.selections.get_untracked(), index);
        self.apply_selections(next);
    }

    pub fn set_row_attribute(&self, index: usize, attribute_id: String) {
        let mut next = self.selections.get_untracked();
        if let Some(row) = next.get_mut(index) {
            if row.attribute_id != attribute_id {
                row.attribute_id = attribute_id;
                // Характеристика сменилась, старые значения бессмысленны
                row.selected_values.clear();
            }
        }
        self.apply_selections(next);
    }

    pub fn toggle_row_value(&self, index: usize, value: String) {
        let mut next = self.selections.get_untracked();
        if let Some(row) = next.get_mut(index) {
            if let Some(pos) = row.selected_values.iter().position(|v| *v == value) {
                row.selected_values.remove(pos);
            } else {
                row.selected_values.push(value);
            }
        }
        self.apply_selections(next);
    }

    /// Характеристики, предлагаемые в селекте строки `index`.
    pub fn available_for_row(&self, index: usize) -> Vec<ProductAttribute> {
        variant_matrix::available_attributes(
            &self.attributes.get(),
            &self.selections.get(),
            index,
        )
    }

    fn apply_selections(&self, next: Vec<AttributeSelection>) {
        let recomputed = variant_matrix::recompute(&next, &self.matrix.get_untracked());
        self.selections.set(next);
        self.matrix.set(recomputed);
        self.cell_error.set(None);
    }

    // === Combination rows ===

    pub fn remove_combination(&self, index: usize) {
        let (matrix, selections) = variant_matrix::remove_combination(
            &self.selections.get_untracked(),
            &self.matrix.get_untracked(),
            index,
        );
        self.selections.set(selections);
        self.matrix.set(matrix);
        self.cell_error.set(None);
    }

    // === Cell edits ===

    fn commit_cell(&self, f: impl FnOnce(&mut Vec<VariantRow>) -> Result<(), String>) {
        let mut matrix = self.matrix.get_untracked();
        match f(&mut matrix) {
            Ok(()) => {
                self.matrix.set(matrix);
                self.cell_error.set(None);
            }
            // Отклонено: состояние матрицы остаётся прежним, view сбрасывает
            // поле ввода из него
            Err(msg) => self.cell_error.set(Some(msg)),
        }
    }

    pub fn commit_sku(&self, index: usize, proposed: String) {
        self.commit_cell(|m| variant_matrix::commit_sku(m, index, proposed.trim()));
    }

    pub fn commit_gtin(&self, index: usize, proposed: String) {
        self.commit_cell(|m| variant_matrix::commit_gtin(m, index, proposed.trim()));
    }

    pub fn commit_quantity(&self, index: usize, raw: String) {
        match raw.trim().parse::<i64>() {
            Ok(q) => self.commit_cell(|m| variant_matrix::commit_quantity(m, index, q)),
            Err(_) => self
                .cell_error
                .set(Some("Quantity must be a whole number".into())),
        }
    }

    pub fn commit_unit_price(&self, index: usize, raw: String) {
        match raw.trim().parse::<f64>() {
            Ok(p) => self.commit_cell(|m| variant_matrix::commit_unit_price(m, index, p)),
            Err(_) => self.cell_error.set(Some("Price must be a number".into())),
        }
    }

    pub fn commit_product_cost(&self, index: usize, raw: String) {
        match raw.trim().parse::<f64>() {
            Ok(c) => self.commit_cell(|m| variant_matrix::commit_product_cost(m, index, c)),
            Err(_) => self.cell_error.set(Some("Cost must be a number".into())),
        }
    }

    // === Images ===

    pub fn add_image(&self, index: usize, url: String) {
        self.matrix.update(|m| {
            if let Some(row) = m.get_mut(index) {
                row.images.push(url);
            }
        });
    }

    pub fn remove_image(&self, index: usize, image_index: usize) {
        self.matrix.update(|m| {
            if let Some(row) = m.get_mut(index) {
                if image_index < row.images.len() {
                    row.images.remove(image_index);
                }
            }
        });
    }

    // === Submission ===

    /// Проверка перед любым сетевым вызовом; побеждает первое нарушение.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.get_untracked().trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.category_id.get_untracked().is_empty() {
            return Err("Category is required".into());
        }
        if self.manufacturer_id.get_untracked().is_empty() {
            return Err("Manufacturer is required".into());
        }
        let weight = self
            .weight
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(-1.0);
        if weight <= 0.0 {
            return Err("Weight must be a positive number".into());
        }
        if !self
            .selections
            .get_untracked()
            .iter()
            .any(|s| s.is_active())
        {
            return Err("Pick at least one attribute with values".into());
        }
        if self.matrix.get_untracked().is_empty() {
            return Err("The variant table is empty".into());
        }
        Ok(())
    }

    fn build_requests(&self) -> Vec<ProductCreateRequest> {
        let name = self.name.get_untracked().trim().to_string();
        let category_id = self.category_id.get_untracked();
        let manufacturer_id = self.manufacturer_id.get_untracked();
        let description = self.description.get_untracked();
        let weight = self
            .weight
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);

        let active: Vec<AttributeSelection> = self
            .selections
            .get_untracked()
            .into_iter()
            .filter(|s| s.is_active())
            .collect();

        self.matrix
            .get_untracked()
            .iter()
            .map(|row| {
                // Слот i кортежа строки принадлежит активному выбору i
                let attribute_values = row
                    .values
                    .iter()
                    .zip(active.iter())
                    .map(|(value, sel)| AttributeValuePair {
                        attribute_id: sel.attribute_id.clone(),
                        value: value.clone(),
                    })
                    .collect();

                ProductCreateRequest {
                    name: name.clone(),
                    category_id: category_id.clone(),
                    manufacturer_id: manufacturer_id.clone(),
                    description: description.clone(),
                    weight,
                    variant_name: row.name.clone(),
                    sku: row.sku.clone(),
                    gtin: row.gtin.clone(),
                    unit_price: row.unit_price,
                    product_cost: row.product_cost,
                    quantity: row.quantity,
                    attribute_values,
                    images: row.images.clone(),
                }
            })
            .collect()
    }

    pub fn submit(&self, on_saved: Callback<()>) {
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        let requests = self.build_requests();
        spawn_local(async move {
            match model::create_products(&requests).await {
                Ok(_) => {
                    this.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    // Состояние матрицы не тронуто; можно повторить попытку
                    this.error.set(Some(e));
                    this.saving.set(false);
                }
            }
        });
    }

    /// Отображаемое имя характеристики по id в редакторе выбора.
    pub fn attribute_name(&self, attribute_id: &str) -> String {
        self.attributes
            .get()
            .iter()
            .find(|a| a.base.id.as_string() == attribute_id)
            .map(|a| a.base.description.clone())
            .unwrap_or_default()
    }

    /// Список значений характеристики, выбранной в строке `index`.
    pub fn values_for_row(&self, index: usize) -> Vec<String> {
        let selections = self.selections.get();
        let Some(sel) = selections.get(index) else {
            return Vec::new();
        };
        if sel.attribute_id.is_empty() {
            return Vec::new();
        }
        self.attributes
            .get()
            .iter()
            .find(|a| a.base.id.as_string() == sel.attribute_id)
            .map(|a| a.values.clone())
            .unwrap_or_default()
    }
}
