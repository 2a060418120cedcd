//! Тонкие JSON-обёртки над `gloo_net`, используемые каждым `model.rs`.
//!
//! Все функции возвращают `Result<_, String>`; сообщение попадает в сигнал
//! `error` формы, поэтому должно быть пригодно для показа как есть.

use crate::shared::api_utils::api_url;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Формат тела ошибки, который бэкенд отдаёт при отказе.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

async fn read_error(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(text) => {
            if let Ok(data) = serde_json::from_str::<ErrorResponse>(&text) {
                if let Some(msg) = data.error {
                    return msg;
                }
            }
            format!("HTTP {}: {}", status, text)
        }
        Err(_) => format!("HTTP {}", status),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| format!("{e}"))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| format!("{e}"))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::put(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| format!("{e}"))
}

/// Загрузка сырых байтов (файлы изображений и т.п.).
pub async fn post_bytes(path: &str, bytes: Vec<u8>) -> Result<(), String> {
    let body = js_sys::Uint8Array::from(bytes.as_slice());
    let resp = gloo_net::http::Request::post(&api_url(path))
        .header("Content-Type", "application/octet-stream")
        .body(body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    Ok(())
}
