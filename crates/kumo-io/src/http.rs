//! HTTP requests to the drive backend.
//!
//! Thin wrappers over `gloo-net` that issue one request and hand back
//! a [`JsonResponse`]. Non-JSON and empty bodies are tolerated -- the
//! status code stays authoritative. Transport-level failures (no
//! response at all) surface as [`HttpError`] and are the caller's
//! responsibility to convert into user-facing feedback.
//!
//! All functions require a browser environment
//! (`wasm32-unknown-unknown` target).

use gloo_net::http::Request;
use kumo_core::response::JsonResponse;
use wasm_bindgen::JsValue;
use web_sys::RequestCredentials;

/// Errors that can occur while issuing a request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("{0}")]
    Transport(#[from] gloo_net::Error),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for HttpError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// `GET` a JSON endpoint with same-origin credentials.
///
/// # Errors
///
/// Returns [`HttpError::Transport`] when no response is received.
/// Non-2xx responses are not errors -- they come back as a
/// [`JsonResponse`] with `ok == false`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn get_json(url: &str) -> Result<JsonResponse, HttpError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::SameOrigin)
        .send()
        .await?;
    Ok(into_json_response(response).await)
}

/// `POST` a single file as a multipart form with same-origin
/// credentials.
///
/// The file travels in one form field named `field`, carrying
/// `filename` and `mime` so the server sees the same metadata a native
/// form submission would send.
///
/// # Errors
///
/// Returns [`HttpError::JsError`] if the multipart body cannot be
/// built, or [`HttpError::Transport`] when no response is received.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn post_multipart(
    url: &str,
    field: &str,
    bytes: &[u8],
    filename: &str,
    mime: &str,
) -> Result<JsonResponse, HttpError> {
    let form = multipart_form(field, bytes, filename, mime)?;
    let response = Request::post(url)
        .credentials(RequestCredentials::SameOrigin)
        .body(form)?
        .send()
        .await?;
    Ok(into_json_response(response).await)
}

/// Parse a response into status + optional JSON body.
///
/// The body is read as text first so that empty or non-JSON payloads
/// never raise a fault; they simply yield `body: None`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn into_json_response(response: gloo_net::http::Response) -> JsonResponse {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    JsonResponse::from_parts(status, &text)
}

/// Build a `FormData` body holding `bytes` as a named file field.
fn multipart_form(
    field: &str,
    bytes: &[u8],
    filename: &str,
    mime: &str,
) -> Result<web_sys::FormData, HttpError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)?;

    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(field, &blob, filename)?;
    Ok(form)
}
