use super::view_model::CustomerDetailsVm;
use crate::domain::a002_address::ui::list::CustomerAddresses;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Форма деталей покупателя (открывается в модалке из списка).
#[component]
pub fn CustomerDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsVm::new();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let vm_header = vm.clone();
    let vm_body = vm.clone();

    view! {
        <div class="details-container customer-details">
            <Header vm=vm_header on_saved=on_saved on_cancel=on_cancel />

            <div class="modal-body">
                <ErrorNotice vm=vm.clone() />

                <Show
                    when={
                        let loading = vm_body.loading;
                        move || !loading.get()
                    }
                    fallback=|| {
                        view! {
                            <div class="details-loading">
                                <Spinner size=SpinnerSize::Small />
                                <span>"Loading customer..."</span>
                            </div>
                        }
                    }
                >
                    <FormFields vm=vm_body.clone() />
                    {
                        let id = vm_body.id;
                        move || {
                            id.get().map(|customer_id| view! {
                                <CustomerAddresses customer_id=customer_id />
                            })
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Header(
    vm: CustomerDetailsVm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();

    let handle_save = {
        let vm = vm.clone();
        move |_| {
            vm.save(on_saved);
        }
    };

    view! {
        <div class="modal-header">
            <h3 class="modal-title">
                {move || if is_edit_mode.get() { "Edit customer" } else { "New customer" }}
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
    }
}

#[component]
fn ErrorNotice(vm: CustomerDetailsVm) -> impl IntoView {
    let error = vm.error;

    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

#[component]
fn FormFields(vm: CustomerDetailsVm) -> impl IntoView {
    let gender_options = Signal::derive(|| {
        vec![
            (String::new(), "Not disclosed".to_string()),
            ("male".to_string(), "Male".to_string()),
            ("female".to_string(), "Female".to_string()),
        ]
    });

    view! {
        <div class="form form--two-columns">
            <Input
                label="Code"
                value=vm.code
                placeholder="Assigned automatically"
                disabled=true
            />
            <Input
                label="Name *"
                value=vm.name
                on_input=Callback::new({
                    let name = vm.name;
                    move |v| name.set(v)
                })
            />
            <Input
                label="Phone"
                value=vm.phone
                on_input=Callback::new({
                    let phone = vm.phone;
                    move |v| phone.set(v)
                })
            />
            <Input
                label="Email"
                value=vm.email
                on_input=Callback::new({
                    let email = vm.email;
                    move |v| email.set(v)
                })
            />
            <Input
                label="Birth date"
                input_type="date"
                value=vm.birth_date
                on_input=Callback::new({
                    let birth_date = vm.birth_date;
                    move |v| birth_date.set(v)
                })
            />
            <Select
                label="Gender"
                value=vm.gender
                options=gender_options
                on_change=Callback::new({
                    let gender = vm.gender;
                    move |v| gender.set(v)
                })
            />
            <Checkbox
                label="Active"
                checked=vm.is_active
                on_change=Callback::new({
                    let is_active = vm.is_active;
                    move |v| is_active.set(v)
                })
            />
            <Textarea
                label="Comment"
                value=vm.comment
                on_input=Callback::new({
                    let comment = vm.comment;
                    move |v| comment.set(v)
                })
            />
        </div>
    }
}
