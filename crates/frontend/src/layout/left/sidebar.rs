//! Сайдбар со сворачиваемыми группами меню; пункты открывают вкладки.

use crate::layout::tabs::tab_label_for_key;
use crate::layout::workspace::AppWorkspace;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![(
                "d400_sales_summary",
                tab_label_for_key("d400_sales_summary"),
                "bar-chart",
            )],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![
                ("a004_product", tab_label_for_key("a004_product"), "package"),
                ("a003_attribute", tab_label_for_key("a003_attribute"), "list"),
            ],
        },
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "customers",
            items: vec![(
                "a001_customer",
                tab_label_for_key("a001_customer"),
                "customers",
            )],
        },
        MenuGroup {
            id: "marketing",
            label: "Marketing",
            icon: "tag",
            items: vec![
                ("a005_discount", tab_label_for_key("a005_discount"), "tag"),
                ("a006_voucher", tab_label_for_key("a006_voucher"), "ticket"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "cart",
            items: vec![
                (
                    "u101_retail_checkout",
                    tab_label_for_key("u101_retail_checkout"),
                    "cart",
                ),
                ("a007_order", tab_label_for_key("a007_order"), "orders"),
                (
                    "a008_return_request",
                    tab_label_for_key("a008_return_request"),
                    "package-x",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let workspace =
        use_context::<AppWorkspace>().expect("AppWorkspace context not found");
    let (collapsed, set_collapsed) = signal::<Vec<&'static str>>(Vec::new());

    let toggle_group = move |id: &'static str| {
        set_collapsed.update(|c| {
            if let Some(pos) = c.iter().position(|g| *g == id) {
                c.remove(pos);
            } else {
                c.push(id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            <For
                each=menu_groups
                key=|group| group.id
                children=move |group| {
                    let group_id = group.id;
                    let is_collapsed = move || collapsed.get().contains(&group_id);

                    view! {
                        <div class="sidebar__group">
                            <button
                                class="sidebar__group-header"
                                on:click=move |_| toggle_group(group_id)
                            >
                                {icon(group.icon)}
                                <span class="sidebar__group-label">{group.label}</span>
                                <span class="sidebar__group-chevron">
                                    {move || if is_collapsed() { icon("chevron-right") } else { icon("chevron-down") }}
                                </span>
                            </button>
                            <Show when=move || !is_collapsed()>
                                {group
                                    .items
                                    .iter()
                                    .map(|(key, label, item_icon)| {
                                        let key = *key;
                                        let label = *label;
                                        let item_icon = *item_icon;
                                        let is_active = move || {
                                            workspace.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <button
                                                class="sidebar__item"
                                                class:sidebar__item--active=is_active
                                                on:click=move |_| workspace.open_tab(key, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </Show>
                        </div>
                    }
                }
            />
        </nav>
    }
}
