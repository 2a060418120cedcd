use super::model;
use crate::domain::a005_discount::ui::details::view_model::parse_local;
use chrono::Utc;
use contracts::domain::a006_voucher::aggregate::{
    validate_voucher, Voucher, VoucherDto, VoucherKind,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone)]
pub struct VoucherDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    /// "percent" или "amount", зеркалит serde-теги
    pub kind: RwSignal<String>,
    pub value: RwSignal<String>,
    pub starts_at: RwSignal<String>,
    pub ends_at: RwSignal<String>,
    pub remaining_uses: RwSignal<String>,
    pub min_order_total: RwSignal<String>,
    pub is_active: RwSignal<bool>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl VoucherDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            kind: RwSignal::new("percent".to_string()),
            value: RwSignal::new(String::new()),
            starts_at: RwSignal::new(String::new()),
            ends_at: RwSignal::new(String::new()),
            remaining_uses: RwSignal::new(String::new()),
            min_order_total: RwSignal::new("0".to_string()),
            is_active: RwSignal::new(true),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
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

    fn from_aggregate(&self, item: &Voucher) {
        self.code.set(item.base.code.clone());
        self.name.set(item.base.description.clone());
        self.kind.set(match item.kind {
            VoucherKind::Percent => "percent".to_string(),
            VoucherKind::Amount => "amount".to_string(),
        });
        self.value.set(item.value.to_string());
        self.starts_at
            .set(item.starts_at.format(LOCAL_FORMAT).to_string());
        self.ends_at
            .set(item.ends_at.format(LOCAL_FORMAT).to_string());
        self.remaining_uses.set(item.remaining_uses.to_string());
        self.min_order_total.set(item.min_order_total.to_string());
        self.is_active.set(item.is_active);
        self.id.set(Some(item.base.id.as_string()));
    }

    pub fn validate(&self) -> Result<VoucherDto, String> {
        let code = self.code.get_untracked().trim().to_uppercase();
        if code.is_empty() {
            return Err("Voucher code is required".into());
        }
        let name = self.name.get_untracked();
        if name.trim().is_empty() {
            return Err("Name is required".into());
        }

        let kind = match self.kind.get_untracked().as_str() {
            "amount" => VoucherKind::Amount,
            _ => VoucherKind::Percent,
        };
        let value = self
            .value
            .get_untracked()
            .trim()
            .parse::<f64>()
            .map_err(|_| "Value must be a number".to_string())?;

        let starts = parse_local(&self.starts_at.get_untracked())?;
        let ends = parse_local(&self.ends_at.get_untracked())?;
        let is_create = self.id.get_untracked().is_none();
        validate_voucher(kind, value, starts, ends, Utc::now(), is_create)?;

        let remaining_uses = self
            .remaining_uses
            .get_untracked()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Usage limit must be a whole number".to_string())?;
        if remaining_uses < 0 {
            return Err("Usage limit cannot be negative".into());
        }
        let min_order_total = self
            .min_order_total
            .get_untracked()
            .trim()
            .parse::<f64>()
            .map_err(|_| "Minimum order total must be a number".to_string())?;
        if min_order_total < 0.0 {
            return Err("Minimum order total cannot be negative".into());
        }

        Ok(VoucherDto {
            id: self.id.get_untracked(),
            code,
            name: name.trim().to_string(),
            kind,
            value,
            starts_at: starts.to_rfc3339(),
            ends_at: ends.to_rfc3339(),
            remaining_uses,
            min_order_total,
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
