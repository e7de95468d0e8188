//! HTTP client for the task service.
//!
//! Thin fetch wrappers returning `Result<T, String>`. The caller does not
//! care which stage failed (transport, non-2xx status, or decoding) — every
//! failure collapses into the same error string.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Task;

/// Base URL of the tasks collection. The service is expected on a fixed
/// local address; there is no discovery or configuration.
const API_URL: &str = "http://localhost:8081/api/tasks";

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let response = send("GET", API_URL, None).await?;
    read_json(response).await
}

pub async fn create_task(task: &Task) -> Result<Task, String> {
    let body = serde_json::to_string(task).map_err(|e| e.to_string())?;
    let response = send("POST", API_URL, Some(body)).await?;
    read_json(response).await
}

pub async fn update_task(task: &Task) -> Result<Task, String> {
    let id = task.id.ok_or_else(|| String::from("task has no id"))?;
    let body = serde_json::to_string(task).map_err(|e| e.to_string())?;
    let response = send("PUT", &format!("{}/{}", API_URL, id), Some(body)).await?;
    read_json(response).await
}

pub async fn delete_task(id: i64) -> Result<(), String> {
    let _ = send("DELETE", &format!("{}/{}", API_URL, id), None).await?;
    Ok(())
}

/// Issue one request and check the status. A non-2xx response is an error
/// here so callers only ever see the single "request failed" shape.
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = &body {
        opts.set_body(&JsValue::from_str(json));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| js_error("invalid request", e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| js_error("invalid request header", e))?;
    }

    let window = web_sys::window().ok_or_else(|| String::from("no window available"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("request failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| String::from("unexpected fetch result"))?;

    if !response.ok() {
        return Err(format!("server responded with status {}", response.status()));
    }
    Ok(response)
}

async fn read_json<T>(response: Response) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let promise = response
        .json()
        .map_err(|e| js_error("unreadable response body", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("failed to read response body", e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

fn js_error(context: &str, value: JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{}: {}", context, String::from(err.message())),
        None => format!("{}: {:?}", context, value),
    }
}
