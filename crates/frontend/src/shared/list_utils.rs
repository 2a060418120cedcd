//! Утилиты, общие для всех списковых виджетов: поиск, сортировка,
//! поле поиска с дебаунсом.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Типы, по которым список умеет искать.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Типы, которые список умеет сортировать по имени колонки.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтр включается с 3 символов; более короткий ввод показывает всё.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < 3 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Индикатор сортировки для заголовка колонки.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Обработчик переключения сортировки для заголовка колонки.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

/// Кликабельный заголовок колонки с индикатором сортировки.
#[component]
pub fn SortableHeader(
    field: &'static str,
    label: &'static str,
    #[prop(into)] sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    set_sort_ascending: WriteSignal<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let extra = move || class.get().unwrap_or_default();
    view! {
        <th
            class=move || format!("data-table__sortable {}", extra())
            on:click=create_sort_toggle(field, sort_field, set_sort_field, set_sort_ascending)
        >
            {move || {
                format!(
                    "{}{}",
                    label,
                    get_sort_indicator(&sort_field.get(), field, sort_ascending.get()),
                )
            }}
        </th>
    }
}

/// Поле поиска с дебаунсом 300 мс и кнопкой очистки.
#[component]
pub fn SearchInput(
    /// Текущее применённое значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается по истечении окна дебаунса
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_filter_active = move || value.get().trim().len() >= 3;

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            class="search-input__clear"
                            title="Clear"
                            on:click=clear_filter
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        total: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                "total" => self.total.cmp(&other.total),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Banana".into(), total: 3 },
            Row { name: "Apple".into(), total: 7 },
            Row { name: "Cherry".into(), total: 1 },
        ]
    }

    #[test]
    fn sorts_by_field_in_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Apple");
        sort_list(&mut items, "total", false);
        assert_eq!(items[0].total, 7);
    }

    #[test]
    fn short_filters_are_ignored() {
        assert_eq!(filter_list(rows(), "ap").len(), 3);
        assert_eq!(filter_list(rows(), "app").len(), 1);
    }

    #[test]
    fn sort_indicator_tracks_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "total", true), " ⇅");
    }
}
