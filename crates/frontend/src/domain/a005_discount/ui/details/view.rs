use super::view_model::DiscountDetailsVm;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DiscountDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DiscountDetailsVm::new();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = {
        let id = vm.id;
        Signal::derive(move || id.get().is_some())
    };

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    let error = vm.error;
    let loading = vm.loading;
    let saving = vm.saving;
    let vm_form = vm.clone();
    let vm_picker = vm.clone();

    view! {
        <div class="details-container discount-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || if is_edit_mode.get() { "Edit discount" } else { "New discount" }}
                </h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="details-loading">
                                <Spinner size=SpinnerSize::Small />
                            </div>
                        }
                    }
                >
                    <div class="form form--two-columns">
                        <Input
                            label="Name *"
                            value=vm_form.name
                            on_input=Callback::new({
                                let s = vm_form.name;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Percent off (1-100) *"
                            input_type="number"
                            value=vm_form.percent_value
                            on_input=Callback::new({
                                let s = vm_form.percent_value;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Starts *"
                            input_type="datetime-local"
                            value=vm_form.starts_at
                            on_input=Callback::new({
                                let s = vm_form.starts_at;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Ends *"
                            input_type="datetime-local"
                            value=vm_form.ends_at
                            on_input=Callback::new({
                                let s = vm_form.ends_at;
                                move |v| s.set(v)
                            })
                        />
                        <Checkbox
                            label="Active"
                            checked=vm_form.is_active
                            on_change=Callback::new({
                                let s = vm_form.is_active;
                                move |v| s.set(v)
                            })
                        />
                    </div>

                    <AppliedProductsPicker vm=vm_picker.clone() />
                </Show>
            </div>
        </div>
    }
}

/// Выбор чекбоксами по каталогу товаров; поиск на сервере.
#[component]
fn AppliedProductsPicker(vm: DiscountDetailsVm) -> impl IntoView {
    let products = vm.products;
    let product_ids = vm.product_ids;
    let product_filter = vm.product_filter;

    let vm_search = vm.clone();
    let vm_toggle = vm.clone();

    view! {
        <div class="product-picker">
            <div class="product-picker__header">
                <h4>
                    {move || format!("Applies to ({} selected)", product_ids.get().len())}
                </h4>
                <SearchInput
                    value=product_filter
                    on_change=Callback::new(move |q: String| {
                        vm_search.product_filter.set(q.clone());
                        vm_search.load_products(q);
                    })
                    placeholder="Search products..."
                />
            </div>

            <div class="product-picker__list">
                <For
                    each=move || products.get()
                    key=|p| p.base.id.as_string()
                    children={
                        move |p| {
                            let id = p.base.id.as_string();
                            let id_for_check = id.clone();
                            let checked = Signal::derive(move || {
                                product_ids.get().contains(&id_for_check)
                            });
                            let vm = vm_toggle.clone();
                            let label = if p.variant_name.is_empty() {
                                p.base.description.clone()
                            } else {
                                format!("{} ({})", p.base.description, p.variant_name)
                            };
                            view! {
                                <label class="product-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || checked.get()
                                        on:change=move |_| vm.toggle_product(id.clone())
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}
