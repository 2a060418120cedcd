use super::view_model::AddressDetailsVm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Форма адреса; каскад провинция/район/квартал идёт сверху вниз.
#[component]
pub fn AddressDetails(
    customer_id: String,
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AddressDetailsVm::new(customer_id);

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = {
        let id = vm.id;
        Signal::derive(move || id.get().is_some())
    };
    let is_save_disabled = {
        let saving = vm.saving;
        Signal::derive(move || saving.get())
    };

    let handle_save = {
        let vm = vm.clone();
        move |_| {
            let vm = vm.clone();
            let cb = on_saved;
            vm.save(cb);
        }
    };

    let province_options = {
        let provinces = vm.provinces;
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select province...".to_string())];
            opts.extend(provinces.get().into_iter().map(|p| (p.id, p.name)));
            opts
        })
    };
    let district_options = {
        let districts = vm.districts;
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select district...".to_string())];
            opts.extend(districts.get().into_iter().map(|d| (d.id, d.name)));
            opts
        })
    };
    let ward_options = {
        let wards = vm.wards;
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select ward...".to_string())];
            opts.extend(wards.get().into_iter().map(|w| (w.id, w.name)));
            opts
        })
    };

    let vm_form = vm.clone();
    let error = vm.error;
    let loading = vm.loading;

    view! {
        <div class="details-container address-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || if is_edit_mode.get() { "Edit address" } else { "New address" }}
                </h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=is_save_disabled
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
                            label="Recipient name *"
                            value=vm_form.recipient_name
                            on_input=Callback::new({
                                let s = vm_form.recipient_name;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Recipient phone"
                            value=vm_form.recipient_phone
                            on_input=Callback::new({
                                let s = vm_form.recipient_phone;
                                move |v| s.set(v)
                            })
                        />
                        <Select
                            label="Province *"
                            value=vm_form.province_id
                            options=province_options
                            on_change=Callback::new({
                                let vm = vm_form.clone();
                                move |v| vm.set_province(v)
                            })
                        />
                        <Select
                            label="District *"
                            value=vm_form.district_id
                            options=district_options
                            on_change=Callback::new({
                                let vm = vm_form.clone();
                                move |v| vm.set_district(v)
                            })
                        />
                        <Select
                            label="Ward *"
                            value=vm_form.ward_id
                            options=ward_options
                            on_change=Callback::new({
                                let s = vm_form.ward_id;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Street and number *"
                            value=vm_form.street_line
                            on_input=Callback::new({
                                let s = vm_form.street_line;
                                move |v| s.set(v)
                            })
                        />
                        <Checkbox
                            label="Default shipping address"
                            checked=vm_form.is_default
                            on_change=Callback::new({
                                let s = vm_form.is_default;
                                move |v| s.set(v)
                            })
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
