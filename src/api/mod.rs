//! Admin API Client
//!
//! Frontend bindings to the blog backend's JSON API, organized by domain.

mod items;
mod users;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use items::*;
pub use users::*;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Issue a request and return the response body as text
async fn send(method: &str, url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let window = web_sys::window().ok_or("no window")?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{} {} failed: {:?}", method, url, e))?;
    let response: Response = value.dyn_into().map_err(|e| format!("{:?}", e))?;

    let text_promise = response.text().map_err(|e| format!("{:?}", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("{:?}", e))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(error_message(response.status(), &body));
    }
    Ok(body)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let body = send("GET", url).await?;
    serde_json::from_str(&body).map_err(|e| e.to_string())
}

async fn delete(url: &str) -> Result<(), String> {
    send("DELETE", url).await.map(|_| ())
}

/// `HTTP 404: Not found`, using the backend's `error` field when present
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => format!("HTTP {}: {}", status, b.error),
        Err(_) => format!("HTTP {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(404, r#"{"error":"Not found"}"#), "HTTP 404: Not found");
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(500, ""), "HTTP 500");
    }
}
