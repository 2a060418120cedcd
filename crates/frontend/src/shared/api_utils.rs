//! Построение URL к REST-бэкенду.

/// Базовый URL бэкенда.
///
/// Строится от текущего window.location, бэкенд слушает порт 3000.
/// Вне браузера возвращает пустую строку.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL API по пути (путь должен начинаться с "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
