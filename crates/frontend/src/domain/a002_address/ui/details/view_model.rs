//! ViewModel формы адреса.
//!
//! Правило каскада живёт в `set_province` / `set_district`: выбор нового
//! родителя очищает все дочерние выборы и перезагружает их списки опций.

use super::model;
use contracts::domain::a002_address::aggregate::{Address, AddressDto, District, Province, Ward};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
pub struct AddressDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub customer_id: String,

    // === Form fields ===
    pub recipient_name: RwSignal<String>,
    pub recipient_phone: RwSignal<String>,
    pub province_id: RwSignal<String>,
    pub district_id: RwSignal<String>,
    pub ward_id: RwSignal<String>,
    pub street_line: RwSignal<String>,
    pub is_default: RwSignal<bool>,

    // === Reference data ===
    pub provinces: RwSignal<Vec<Province>>,
    pub districts: RwSignal<Vec<District>>,
    pub wards: RwSignal<Vec<Ward>>,

    // === UI state ===
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AddressDetailsVm {
    pub fn new(customer_id: String) -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            customer_id,
            recipient_name: RwSignal::new(String::new()),
            recipient_phone: RwSignal::new(String::new()),
            province_id: RwSignal::new(String::new()),
            district_id: RwSignal::new(String::new()),
            ward_id: RwSignal::new(String::new()),
            street_line: RwSignal::new(String::new()),
            is_default: RwSignal::new(false),
            provinces: RwSignal::new(Vec::new()),
            districts: RwSignal::new(Vec::new()),
            wards: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        vm.load_provinces();
        vm
    }

    fn load_provinces(&self) {
        let this = self.clone();
        spawn_local(async move {
            match model::fetch_provinces().await {
                Ok(list) => this.provinces.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    fn load_districts(&self, province_id: String) {
        let this = self.clone();
        spawn_local(async move {
            match model::fetch_districts(&province_id).await {
                Ok(list) => this.districts.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    fn load_wards(&self, district_id: String) {
        let this = self.clone();
        spawn_local(async move {
            match model::fetch_wards(&district_id).await {
                Ok(list) => this.wards.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    // === Cascading selects ===

    pub fn set_province(&self, province_id: String) {
        self.province_id.set(province_id.clone());
        self.district_id.set(String::new());
        self.ward_id.set(String::new());
        self.districts.set(Vec::new());
        self.wards.set(Vec::new());
        if !province_id.is_empty() {
            self.load_districts(province_id);
        }
    }

    pub fn set_district(&self, district_id: String) {
        self.district_id.set(district_id.clone());
        self.ward_id.set(String::new());
        self.wards.set(Vec::new());
        if !district_id.is_empty() {
            self.load_wards(district_id);
        }
    }

    // === Data loading ===

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);
        this.id.set(Some(id.clone()));

        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(item) => {
                    this.from_aggregate(&item);
                    // Списки опций для сохранённых родительских значений,
                    // не очищая только что загруженных детей.
                    if !item.province_id.is_empty() {
                        this.load_districts(item.province_id.clone());
                    }
                    if !item.district_id.is_empty() {
                        this.load_wards(item.district_id.clone());
                    }
                    this.loading.set(false);
                }
                Err(e) => {
                    this.error.set(Some(e));
                    this.loading.set(false);
                }
            }
        });
    }

    fn from_aggregate(&self, item: &Address) {
        self.recipient_name.set(item.recipient_name.clone());
        self.recipient_phone.set(item.recipient_phone.clone());
        self.province_id.set(item.province_id.clone());
        self.district_id.set(item.district_id.clone());
        self.ward_id.set(item.ward_id.clone());
        self.street_line.set(item.street_line.clone());
        self.is_default.set(item.is_default);
        self.id.set(Some(item.base.id.as_string()));
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.recipient_name.get().trim().is_empty() {
            return Err("Recipient name is required".into());
        }
        if self.province_id.get().is_empty() {
            return Err("Province is required".into());
        }
        if self.district_id.get().is_empty() {
            return Err("District is required".into());
        }
        if self.ward_id.get().is_empty() {
            return Err("Ward is required".into());
        }
        if self.street_line.get().trim().is_empty() {
            return Err("Street line is required".into());
        }
        Ok(())
    }

    fn to_dto(&self) -> AddressDto {
        AddressDto {
            id: self.id.get(),
            customer_id: self.customer_id.clone(),
            recipient_name: self.recipient_name.get().trim().to_string(),
            recipient_phone: self.recipient_phone.get().trim().to_string(),
            province_id: self.province_id.get(),
            district_id: self.district_id.get(),
            ward_id: self.ward_id.get(),
            street_line: self.street_line.get().trim().to_string(),
            is_default: self.is_default.get(),
        }
    }

    // === Commands ===

    pub fn save(&self, on_saved: Callback<()>) {
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::save_form(this.to_dto()).await {
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
