//! ViewModel формы деталей покупателя.
//!
//! Каждое поле формы — отдельный `RwSignal` для двусторонней привязки;
//! все команды (load, save) живут здесь, чтобы view оставался тонким.

use super::model;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone)]
pub struct CustomerDetailsVm {
    // === Form fields ===
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub birth_date: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    // === UI state ===
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CustomerDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            birth_date: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
            is_active: RwSignal::new(true),
            comment: RwSignal::new(String::new()),

            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let name = self.name;
        Signal::derive(move || saving.get() || name.get().trim().is_empty())
    }

    // === Validation ===

    pub fn validate(&self) -> Result<(), String> {
        if self.name.get().trim().is_empty() {
            return Err("Name is required".into());
        }
        let phone = self.phone.get();
        let phone = phone.trim();
        if !phone.is_empty() {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < 9 || digits > 11 || phone.chars().any(|c| !c.is_ascii_digit() && c != '+')
            {
                return Err("Phone must be 9-11 digits".into());
            }
        }
        let email = self.email.get();
        let email = email.trim();
        if !email.is_empty() && (!email.contains('@') || email.starts_with('@') || email.ends_with('@'))
        {
            return Err("Email address is not valid".into());
        }
        Ok(())
    }

    // === Data loading ===

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);
        this.id.set(Some(id.clone()));

        leptos::task::spawn_local(async move {
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

    fn from_aggregate(&self, item: &Customer) {
        self.code.set(item.base.code.clone());
        self.name.set(item.base.description.clone());
        self.phone.set(item.phone.clone());
        self.email.set(item.email.clone());
        self.birth_date.set(
            item.birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        self.gender.set(item.gender.clone());
        self.is_active.set(item.is_active);
        self.comment
            .set(item.base.comment.clone().unwrap_or_default());
        self.id.set(Some(item.base.id.as_string()));
    }

    fn to_dto(&self) -> CustomerDto {
        let comment = self.comment.get();
        CustomerDto {
            id: self.id.get(),
            code: self.code.get(),
            name: self.name.get().trim().to_string(),
            phone: self.phone.get().trim().to_string(),
            email: self.email.get().trim().to_string(),
            birth_date: {
                let d = self.birth_date.get();
                if d.is_empty() {
                    None
                } else {
                    Some(d)
                }
            },
            gender: self.gender.get(),
            is_active: self.is_active.get(),
            comment: if comment.trim().is_empty() {
                None
            } else {
                Some(comment)
            },
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

        leptos::task::spawn_local(async move {
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
