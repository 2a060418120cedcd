//! ViewModel формы скидки. Даты редактируются строками `datetime-local`
//! и перед сохранением проходят общие проверки диапазона.

use super::model;
use crate::domain::a004_product::ui::details::model as product_model;
use chrono::{DateTime, NaiveDateTime, Utc};
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_discount::aggregate::{
    validate_date_range, validate_percent, Discount, DiscountDto,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_local(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value, LOCAL_FORMAT)
        .map(|d| d.and_utc())
        .map_err(|_| "Invalid date".to_string())
}

#[derive(Clone)]
pub struct DiscountDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub percent_value: RwSignal<String>,
    pub starts_at: RwSignal<String>,
    pub ends_at: RwSignal<String>,
    pub product_ids: RwSignal<Vec<String>>,
    pub is_active: RwSignal<bool>,

    /// Товары, предлагаемые в выборе «действует на»
    pub products: RwSignal<Vec<Product>>,
    pub product_filter: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DiscountDetailsVm {
    pub fn new() -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            percent_value: RwSignal::new(String::new()),
            starts_at: RwSignal::new(String::new()),
            ends_at: RwSignal::new(String::new()),
            product_ids: RwSignal::new(Vec::new()),
            is_active: RwSignal::new(true),
            products: RwSignal::new(Vec::new()),
            product_filter: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        vm.load_products(String::new());
        vm
    }

    pub fn load_products(&self, query: String) {
        let this = self.clone();
        spawn_local(async move {
            match product_model::fetch_page(0, 100, &query).await {
                Ok(resp) => this.products.set(resp.items),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn toggle_product(&self, id: String) {
        self.product_ids.update(|ids| {
            if let Some(pos) = ids.iter().position(|x| *x == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);
        this.id.set(Some(id.clone()));

        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(item) => {
                    this.from_aggregate(&item);
                    this.loading.set(false);
                }
                Err(e) => {
                    this.error.set(Some(e));
                    this.loading.set(false);
                }
            }
        });
    }

    fn from_aggregate(&self, item: &Discount) {
        self.code.set(item.base.code.clone());
        self.name.set(item.base.description.clone());
        self.percent_value.set(item.percent_value.to_string());
        self.starts_at
            .set(item.starts_at.format(LOCAL_FORMAT).to_string());
        self.ends_at
            .set(item.ends_at.format(LOCAL_FORMAT).to_string());
        self.product_ids.set(item.product_ids.clone());
        self.is_active.set(item.is_active);
        self.id.set(Some(item.base.id.as_string()));
    }

    pub fn validate(&self) -> Result<DiscountDto, String> {
        let name = self.name.get_untracked();
        if name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let percent = self
            .percent_value
            .get_untracked()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Percent value must be a number".to_string())?;
        validate_percent(percent)?;

        let starts = parse_local(&self.starts_at.get_untracked())?;
        let ends = parse_local(&self.ends_at.get_untracked())?;
        let is_create = self.id.get_untracked().is_none();
        validate_date_range(starts, ends, Utc::now(), is_create)?;

        if self.product_ids.get_untracked().is_empty() {
            return Err("Pick at least one product".into());
        }

        Ok(DiscountDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            name: name.trim().to_string(),
            percent_value: percent,
            starts_at: starts.to_rfc3339(),
            ends_at: ends.to_rfc3339(),
            product_ids: self.product_ids.get_untracked(),
            is_active: self.is_active.get_untracked(),
        })
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = match self.validate() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::save_form(dto).await {
                Ok(_) => {
                    this.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    this.error.set(Some(e));
                    this.saving.set(false);
                }
            }
        });
    }
}
