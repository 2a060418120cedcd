use super::details::{model, ReturnRequestDetails};
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a008_return_request::aggregate::ReturnRequest;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReturnRequestList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ReturnRequest>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (open_only, set_open_only) = signal(false);

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };
    load();

    let visible_rows = Memo::new(move |_| {
        let rows = items.get();
        if open_only.get() {
            rows.into_iter().filter(|r| r.status.is_open()).collect()
        } else {
            rows
        }
    });

    let open_details = move |id: String| {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 760px; max-width: 95vw;".to_string()),
            move |handle| {
                let on_close = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_changed = Callback::new(move |_: ()| load());
                view! {
                    <ReturnRequestDetails
                        id=id.clone()
                        on_changed=on_changed
                        on_cancel=on_close
                    />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="list-container return-list">
            <div class="list-toolbar">
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || open_only.get()
                        on:change=move |ev| set_open_only.set(event_target_checked(&ev))
                    />
                    <span>"Open requests only"</span>
                </label>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="list-loading">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Status"</th>
                            <th>"Requested"</th>
                            <th class="data-table__num">"Items"</th>
                            <th class="data-table__num">"Refund"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible_rows.get()
                            key=|item| item.base.id.as_string()
                            children=move |item| {
                                let id = item.base.id.as_string();
                                let requested =
                                    format_datetime(&item.requested_at.to_rfc3339());
                                view! {
                                    <tr
                                        class="data-table__row"
                                        on:click=move |_| open_details(id.clone())
                                    >
                                        <td>{item.base.code.clone()}</td>
                                        <td>{item.order_code.clone()}</td>
                                        <td>{item.customer_name.clone()}</td>
                                        <td>
                                            <span class="status-badge">
                                                {item.status.label()}
                                            </span>
                                        </td>
                                        <td>{requested}</td>
                                        <td class="data-table__num">{item.lines.len()}</td>
                                        <td class="data-table__num">
                                            {format_money(item.refund_total)}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if visible_rows.get().is_empty() {
                        Some(view! { <div class="list-empty">"No return requests"</div> })
                    } else {
                        None
                    }
                }}
            </Show>
        </div>
    }
}
