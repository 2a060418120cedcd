use super::model;
use super::view_model::ProductCreateVm;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use contracts::domain::a004_product::variant_matrix::{MAX_QUANTITY, MAX_UNIT_PRICE};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::HtmlInputElement;

// ============================================================================
// Product create (attribute rows -> variant matrix -> batch submit)
// ============================================================================

#[component]
pub fn ProductCreate(
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductCreateVm::new();

    let is_save_disabled = {
        let saving = vm.saving;
        Signal::derive(move || saving.get())
    };

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.submit(on_saved)
    };

    let category_options = {
        let categories = vm.categories;
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select category...".to_string())];
            opts.extend(categories.get().into_iter().map(|c| (c.id, c.name)));
            opts
        })
    };
    let manufacturer_options = {
        let manufacturers = vm.manufacturers;
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select manufacturer...".to_string())];
            opts.extend(manufacturers.get().into_iter().map(|m| (m.id, m.name)));
            opts
        })
    };

    let error = vm.error;
    let cell_error = vm.cell_error;
    let vm_shared = vm.clone();
    let vm_rows = vm.clone();
    let vm_table = vm.clone();

    view! {
        <div class="details-container product-create">
            <div class="modal-header">
                <h3 class="modal-title">"New product"</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=is_save_disabled
                    >
                        {icon("save")}
                        " Create variants"
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

                <div class="form form--two-columns">
                    <Input
                        label="Name *"
                        value=vm_shared.name
                        on_input=Callback::new({
                            let s = vm_shared.name;
                            move |v| s.set(v)
                        })
                    />
                    <Input
                        label="Weight, g *"
                        input_type="number"
                        value=vm_shared.weight
                        on_input=Callback::new({
                            let s = vm_shared.weight;
                            move |v| s.set(v)
                        })
                    />
                    <Select
                        label="Category *"
                        value=vm_shared.category_id
                        options=category_options
                        on_change=Callback::new({
                            let s = vm_shared.category_id;
                            move |v| s.set(v)
                        })
                    />
                    <Select
                        label="Manufacturer *"
                        value=vm_shared.manufacturer_id
                        options=manufacturer_options
                        on_change=Callback::new({
                            let s = vm_shared.manufacturer_id;
                            move |v| s.set(v)
                        })
                    />
                    <Textarea
                        label="Description"
                        value=vm_shared.description
                        rows=3u32
                        on_input=Callback::new({
                            let s = vm_shared.description;
                            move |v| s.set(v)
                        })
                    />
                </div>

                <AttributeRowsEditor vm=vm_rows />

                {move || cell_error.get().map(|e| view! {
                    <div class="warning-box warning-box--warning">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <VariantTable vm=vm_table />
            </div>
        </div>
    }
}

// ============================================================================
// Attribute row editor
// ============================================================================

#[component]
fn AttributeRowsEditor(vm: ProductCreateVm) -> impl IntoView {
    let can_add = vm.can_add_row();
    let selections = vm.selections;

    let vm_add = vm.clone();
    let vm_rows = vm.clone();

    view! {
        <div class="attribute-rows">
            <div class="attribute-rows__header">
                <h4>"Variant attributes"</h4>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm_add.add_attribute_row()
                    disabled=Signal::derive(move || !can_add.get())
                >
                    {icon("plus")}
                    " Add attribute"
                </Button>
            </div>

            <For
                each={move || (0..selections.get().len()).collect::<Vec<usize>>()}
                key=|index| *index
                children={
                    let vm = vm_rows.clone();
                    move |index| {
                        view! { <AttributeRow vm=vm.clone() index=index /> }
                    }
                }
            />

            {move || {
                if selections.get().is_empty() {
                    Some(view! {
                        <div class="attribute-rows__empty">
                            "Add an attribute to generate variants"
                        </div>
                    })
                } else {
                    None
                }
            }}
        </div>
    }
}

#[component]
fn AttributeRow(vm: ProductCreateVm, index: usize) -> impl IntoView {
    let selections = vm.selections;

    let selected_attribute = Signal::derive(move || {
        selections
            .get()
            .get(index)
            .map(|s| s.attribute_id.clone())
            .unwrap_or_default()
    });

    let attribute_options = {
        let vm = vm.clone();
        Signal::derive(move || {
            let mut opts = vec![(String::new(), "Select attribute...".to_string())];
            opts.extend(
                vm.available_for_row(index)
                    .into_iter()
                    .map(|a| (a.base.id.as_string(), a.base.description)),
            );
            opts
        })
    };

    let vm_select = vm.clone();
    let vm_values = vm.clone();
    let vm_remove = vm.clone();

    view! {
        <div class="attribute-row">
            <Select
                value=selected_attribute
                options=attribute_options
                on_change=Callback::new(move |v| vm_select.set_row_attribute(index, v))
            />

            <div class="attribute-row__values">
                <For
                    each={
                        let vm = vm_values.clone();
                        move || vm.values_for_row(index)
                    }
                    key=|value| value.clone()
                    children={
                        let vm = vm_values.clone();
                        move |value: String| {
                            let is_selected = {
                                let value = value.clone();
                                Signal::derive(move || {
                                    selections
                                        .get()
                                        .get(index)
                                        .map(|s| s.selected_values.contains(&value))
                                        .unwrap_or(false)
                                })
                            };
                            let vm = vm.clone();
                            let value_for_toggle = value.clone();
                            view! {
                                <button
                                    type="button"
                                    class="value-chip"
                                    class:value-chip--selected=move || is_selected.get()
                                    on:click=move |_| {
                                        vm.toggle_row_value(index, value_for_toggle.clone())
                                    }
                                >
                                    {value.clone()}
                                </button>
                            }
                        }
                    }
                />
            </div>

            <button
                class="icon-button"
                title="Remove attribute row"
                on:click=move |_| vm_remove.remove_attribute_row(index)
            >
                {icon("trash")}
            </button>
        </div>
    }
}

// ============================================================================
// Variant matrix table
// ============================================================================

#[component]
fn VariantTable(vm: ProductCreateVm) -> impl IntoView {
    let matrix = vm.matrix;

    let vm_rows = vm.clone();

    view! {
        <div class="variant-table">
            <h4>
                {move || format!("Variants ({})", matrix.get().len())}
            </h4>

            <Show
                when=move || !matrix.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="variant-table__empty">
                            "No combinations yet"
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Variant"</th>
                            <th>"SKU"</th>
                            <th>"GTIN"</th>
                            <th class="data-table__num">"Price"</th>
                            <th class="data-table__num">"Cost"</th>
                            <th class="data-table__num">"Quantity"</th>
                            <th>"Images"</th>
                            <th class="data-table__actions-col"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                matrix
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .collect::<Vec<_>>()
                            }
                            // Позиция — часть ключа: обработчики захватывают
                            // индекс, сместившаяся строка должна пересоздаться
                            key=|(index, row)| (*index, row.name.clone())
                            children={
                                let vm = vm_rows.clone();
                                move |(index, row)| {
                                    view! { <VariantRowView vm=vm.clone() index=index row=row /> }
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn VariantRowView(
    vm: ProductCreateVm,
    index: usize,
    row: contracts::domain::a004_product::variant_matrix::VariantRow,
) -> impl IntoView {
    let vm_sku = vm.clone();
    let vm_gtin = vm.clone();
    let vm_price = vm.clone();
    let vm_cost = vm.clone();
    let vm_qty = vm.clone();
    let vm_img_add = vm.clone();
    let vm_img_remove = vm.clone();
    let vm_remove = vm.clone();

    let matrix = vm.matrix;
    let images = Memo::new(move |_| {
        matrix
            .get()
            .get(index)
            .map(|r| r.images.clone())
            .unwrap_or_default()
    });

    let handle_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                        vm_img_add.add_image(index, url);
                    }
                }
            }
        }
        input.set_value("");
    };

    view! {
        <tr class="data-table__row variant-row">
            <td class="variant-row__name">{row.name.clone()}</td>
            <td>
                <input
                    class="cell-input"
                    prop:value=row.sku.clone()
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        vm_sku.commit_sku(index, input.value());
                        // При отказе матрица сохранила старое значение
                        if let Some(r) = vm_sku.matrix.get_untracked().get(index) {
                            input.set_value(&r.sku);
                        }
                    }
                />
            </td>
            <td>
                <input
                    class="cell-input"
                    prop:value=row.gtin.clone()
                    on:change=move |ev| vm_gtin.commit_gtin(index, event_target_value(&ev))
                />
            </td>
            <td class="data-table__num">
                <input
                    class="cell-input cell-input--num"
                    type="number"
                    min="0"
                    max=MAX_UNIT_PRICE.to_string()
                    prop:value=row.unit_price.to_string()
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        vm_price.commit_unit_price(index, input.value());
                        if let Some(r) = vm_price.matrix.get_untracked().get(index) {
                            input.set_value(&r.unit_price.to_string());
                        }
                    }
                />
            </td>
            <td class="data-table__num">
                <input
                    class="cell-input cell-input--num"
                    type="number"
                    min="0"
                    prop:value=row.product_cost.to_string()
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        vm_cost.commit_product_cost(index, input.value());
                        if let Some(r) = vm_cost.matrix.get_untracked().get(index) {
                            input.set_value(&r.product_cost.to_string());
                        }
                    }
                />
            </td>
            <td class="data-table__num">
                <input
                    class="cell-input cell-input--num"
                    type="number"
                    min="0"
                    max=MAX_QUANTITY.to_string()
                    prop:value=row.quantity.to_string()
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        vm_qty.commit_quantity(index, input.value());
                        if let Some(r) = vm_qty.matrix.get_untracked().get(index) {
                            input.set_value(&r.quantity.to_string());
                        }
                    }
                />
            </td>
            <td class="variant-row__images">
                {move || {
                    images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(img_index, url)| {
                            let vm = vm_img_remove.clone();
                            view! {
                                <span class="image-slot">
                                    <img class="image-slot__thumb" src=url />
                                    <button
                                        class="image-slot__remove"
                                        title="Remove image"
                                        on:click=move |_| vm.remove_image(index, img_index)
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
                <label class="image-slot image-slot--add" title="Add images">
                    {icon("image")}
                    <input
                        type="file"
                        accept="image/*"
                        multiple=true
                        style="display: none;"
                        on:change=handle_files
                    />
                </label>
            </td>
            <td class="data-table__actions-col">
                <button
                    class="icon-button"
                    title="Remove combination"
                    on:click=move |_| vm_remove.remove_combination(index)
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}

// ============================================================================
// Product edit (one existing variant record)
// ============================================================================

#[component]
pub fn ProductEdit(
    id: String,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let gtin = RwSignal::new(String::new());
    let unit_price = RwSignal::new(String::new());
    let product_cost = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let product_id = id.clone();
    spawn_local(async move {
        match model::fetch_by_id(product_id).await {
            Ok(item) => {
                let display = if item.variant_name.is_empty() {
                    item.base.description.clone()
                } else {
                    format!("{} ({})", item.base.description, item.variant_name)
                };
                title.set(display);
                sku.set(item.sku);
                gtin.set(item.gtin);
                unit_price.set(item.unit_price.to_string());
                product_cost.set(item.product_cost.to_string());
                quantity.set(item.quantity.to_string());
                weight.set(item.weight.to_string());
                description.set(item.base.comment.unwrap_or_default());
                loading.set(false);
            }
            Err(e) => {
                error.set(Some(e));
                loading.set(false);
            }
        }
    });

    let validate = move || -> Result<model::ProductUpdateDto, String> {
        let price = unit_price
            .get()
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        let cost = product_cost
            .get()
            .trim()
            .parse::<f64>()
            .map_err(|_| "Cost must be a number".to_string())?;
        let qty = quantity
            .get()
            .trim()
            .parse::<i64>()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        let w = weight
            .get()
            .trim()
            .parse::<f64>()
            .map_err(|_| "Weight must be a number".to_string())?;

        if !(0.0..=MAX_UNIT_PRICE).contains(&price) {
            return Err(format!("Price must be between 0 and {}", format_money(MAX_UNIT_PRICE)));
        }
        if cost < 0.0 || (price > 0.0 && cost > price) {
            return Err("Cost must be non-negative and not above the price".into());
        }
        if !(0..=MAX_QUANTITY).contains(&qty) {
            return Err(format!("Quantity must be between 0 and {}", MAX_QUANTITY));
        }
        if w <= 0.0 {
            return Err("Weight must be a positive number".into());
        }

        Ok(model::ProductUpdateDto {
            sku: sku.get().trim().to_string(),
            gtin: gtin.get().trim().to_string(),
            unit_price: price,
            product_cost: cost,
            quantity: qty,
            weight: w,
            description: description.get(),
        })
    };

    let save_id = id;
    let handle_save = move |_| {
        let dto = match validate() {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        let id = save_id.clone();
        spawn_local(async move {
            match model::update_product(&id, &dto).await {
                Ok(()) => {
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container product-edit">
            <div class="modal-header">
                <h3 class="modal-title">{move || title.get()}</h3>
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
                            label="SKU"
                            value=sku
                            on_input=Callback::new(move |v| sku.set(v))
                        />
                        <Input
                            label="GTIN"
                            value=gtin
                            on_input=Callback::new(move |v| gtin.set(v))
                        />
                        <Input
                            label="Price"
                            input_type="number"
                            value=unit_price
                            on_input=Callback::new(move |v| unit_price.set(v))
                        />
                        <Input
                            label="Cost"
                            input_type="number"
                            value=product_cost
                            on_input=Callback::new(move |v| product_cost.set(v))
                        />
                        <Input
                            label="Quantity"
                            input_type="number"
                            value=quantity
                            on_input=Callback::new(move |v| quantity.set(v))
                        />
                        <Input
                            label="Weight, g"
                            input_type="number"
                            value=weight
                            on_input=Callback::new(move |v| weight.set(v))
                        />
                        <Textarea
                            label="Description"
                            value=description
                            rows=3u32
                            on_input=Callback::new(move |v| description.set(v))
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
