use super::view_model::VoucherDetailsVm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn VoucherDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = VoucherDetailsVm::new();

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

    let kind_options = Signal::derive(|| {
        vec![
            ("percent".to_string(), "Percent off".to_string()),
            ("amount".to_string(), "Fixed amount off".to_string()),
        ]
    });

    let value_label = {
        let kind = vm.kind;
        move || {
            if kind.get() == "amount" {
                "Amount off *"
            } else {
                "Percent off (1-100) *"
            }
        }
    };

    let error = vm.error;
    let loading = vm.loading;
    let saving = vm.saving;
    let vm_form = vm.clone();

    view! {
        <div class="details-container voucher-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || if is_edit_mode.get() { "Edit voucher" } else { "New voucher" }}
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
                            label="Code *"
                            value=vm_form.code
                            placeholder="SUMMER10"
                            on_input=Callback::new({
                                let s = vm_form.code;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Name *"
                            value=vm_form.name
                            on_input=Callback::new({
                                let s = vm_form.name;
                                move |v| s.set(v)
                            })
                        />
                        <Select
                            label="Type"
                            value=vm_form.kind
                            options=kind_options
                            on_change=Callback::new({
                                let s = vm_form.kind;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label=Signal::derive(move || value_label().to_string())
                            input_type="number"
                            value=vm_form.value
                            on_input=Callback::new({
                                let s = vm_form.value;
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
                        <Input
                            label="Usage limit *"
                            input_type="number"
                            value=vm_form.remaining_uses
                            on_input=Callback::new({
                                let s = vm_form.remaining_uses;
                                move |v| s.set(v)
                            })
                        />
                        <Input
                            label="Minimum order total"
                            input_type="number"
                            value=vm_form.min_order_total
                            on_input=Callback::new({
                                let s = vm_form.min_order_total;
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
                </Show>
            </div>
        </div>
    }
}
