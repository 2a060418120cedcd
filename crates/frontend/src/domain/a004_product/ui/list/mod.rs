use super::details::{model, ProductCreate, ProductEdit};
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Список каталога товаров. Пагинация и поиск на сервере; строка поиска
/// передаётся query-параметром `q`.
#[component]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Product>::new());
    let (total_count, set_total_count) = signal(0usize);
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(20usize);
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let modal_stack = use_context::<ModalStackService>();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let page = page.get_untracked();
        let size = page_size.get_untracked();
        let q = query.get_untracked();
        spawn_local(async move {
            match model::fetch_page(page, size, &q).await {
                Ok(resp) => {
                    set_items.set(resp.items);
                    set_total_count.set(resp.total_count);
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

    let total_pages = Signal::derive(move || {
        let size = page_size.get().max(1);
        total_count.get().div_ceil(size)
    });

    let change_page = move |new_page: usize| {
        set_page.set(new_page);
        load();
    };
    let change_page_size = move |new_size: usize| {
        set_page_size.set(new_size);
        set_page.set(0);
        load();
    };
    let change_query = move |q: String| {
        set_query.set(q);
        set_page.set(0);
        load();
    };

    let open_create = move || {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 1080px; max-width: 98vw;".to_string()),
            move |handle| {
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_saved = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| {
                        handle.close();
                        load();
                    })
                };
                view! { <ProductCreate on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let open_edit = move |id: String| {
        let Some(stack) = modal_stack else {
            return;
        };
        stack.push_with_style(
            Some("width: 640px; max-width: 95vw;".to_string()),
            move |handle| {
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| handle.close())
                };
                let on_saved = {
                    let handle = handle.clone();
                    Callback::new(move |_: ()| {
                        handle.close();
                        load();
                    })
                };
                view! {
                    <ProductEdit id=id.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, label: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete \"{}\"?", label)).ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="list-container product-list">
            <div class="list-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_create()
                >
                    {icon("plus")}
                    " New product"
                </Button>
                <SearchInput
                    value=query
                    on_change=Callback::new(change_query)
                    placeholder="Search products..."
                />
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
                            <span>"Loading products..."</span>
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Variant"</th>
                            <th>"SKU"</th>
                            <th class="data-table__num">"Price"</th>
                            <th class="data-table__num">"Stock"</th>
                            <th class="data-table__actions-col"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.base.id.as_string()
                            children=move |item| {
                                let id = item.base.id.as_string();
                                let id_for_open = id.clone();
                                let id_for_delete = id;
                                let label_for_delete = item.base.description.clone();
                                view! {
                                    <tr class="data-table__row">
                                        <td>{item.base.code.clone()}</td>
                                        <td>
                                            <a
                                                class="data-table__link"
                                                on:click=move |_| open_edit(id_for_open.clone())
                                            >
                                                {item.base.description.clone()}
                                            </a>
                                        </td>
                                        <td>{item.variant_name.clone()}</td>
                                        <td>{item.sku.clone()}</td>
                                        <td class="data-table__num">
                                            {format_money(item.unit_price)}
                                        </td>
                                        <td class="data-table__num">{item.quantity}</td>
                                        <td class="data-table__actions-col">
                                            <button
                                                class="icon-button"
                                                title="Delete"
                                                on:click=move |_| {
                                                    delete_row(
                                                        id_for_delete.clone(),
                                                        label_for_delete.clone(),
                                                    )
                                                }
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if items.get().is_empty() {
                        Some(view! { <div class="list-empty">"No products found"</div> })
                    } else {
                        None
                    }
                }}

                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(change_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </Show>
        </div>
    }
}
