use super::details::{model, AddressDetails};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_address::aggregate::Address;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Блок адресов внутри формы покупателя (только в режиме правки).
#[component]
pub fn CustomerAddresses(customer_id: String) -> impl IntoView {
    let (items, set_items) = signal(Vec::<Address>::new());
    let (error, set_error) = signal(None::<String>);

    let modal_stack = use_context::<ModalStackService>();

    let customer_id_for_load = customer_id.clone();
    let load = move || {
        let customer_id = customer_id_for_load.clone();
        spawn_local(async move {
            match model::fetch_for_customer(&customer_id).await {
                Ok(list) => set_items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    load();

    let customer_id_for_open = customer_id.clone();
    let load_for_open = load.clone();
    let open_details = move |id: Option<String>| {
        let Some(stack) = modal_stack else {
            return;
        };
        let customer_id = customer_id_for_open.clone();
        let load = load_for_open.clone();
        stack.push_with_style(
            Some("width: 560px; max-width: 95vw;".to_string()),
            move |handle| {
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_saved = {
                    let handle = handle.clone();
                    let load = load.clone();
                    Callback::new(move |_: ()| {
                        handle.close();
                        load();
                    })
                };
                view! {
                    <AddressDetails
                        customer_id=customer_id.clone()
                        id=id.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let load_for_delete = load.clone();
    let delete_address = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this address?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let load = load_for_delete.clone();
        spawn_local(async move {
            match model::delete_by_id(&id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_for_new = open_details.clone();

    view! {
        <div class="address-block">
            <div class="address-block__header">
                <h4>"Addresses"</h4>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open_for_new(None)
                >
                    {icon("plus")}
                    " Add address"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <For
                each=move || items.get()
                key=|item| item.base.id.as_string()
                children={
                    let open_details = open_details.clone();
                    let delete_address = delete_address.clone();
                    move |item: Address| {
                        let id = item.base.id.as_string();
                        let id_for_open = id.clone();
                        let id_for_delete = id;
                        let open_details = open_details.clone();
                        let delete_address = delete_address.clone();
                        view! {
                            <div class="address-block__item">
                                <div class="address-block__summary">
                                    <strong>{item.recipient_name.clone()}</strong>
                                    {if item.is_default {
                                        Some(view! { <span class="badge badge--default">"Default"</span> })
                                    } else {
                                        None
                                    }}
                                    <div class="address-block__phone">{item.recipient_phone.clone()}</div>
                                    <div class="address-block__street">{item.street_line.clone()}</div>
                                </div>
                                <div class="address-block__actions">
                                    <button
                                        class="icon-button"
                                        title="Edit"
                                        on:click=move |_| open_details(Some(id_for_open.clone()))
                                    >
                                        {icon("list")}
                                    </button>
                                    <button
                                        class="icon-button"
                                        title="Delete"
                                        on:click=move |_| delete_address(id_for_delete.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                }
            />

            {move || {
                if items.get().is_empty() {
                    Some(view! { <div class="address-block__empty">"No addresses yet"</div> })
                } else {
                    None
                }
            }}
        </div>
    }
}
