//! Blob object URLs for local file previews.
//!
//! Binary previews (`<img>`, `<iframe>`) need a URL the browser can
//! display. This module wraps the selected file's bytes in a `Blob`
//! and hands out an object URL, without any network access.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use kumo_core::preview::PreviewPayload;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating a Blob object URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap raw bytes in a `Blob` and return an object URL for it.
///
/// The returned URL must be revoked (see [`revoke_preview`]) once the
/// preview is replaced, or the Blob leaks for the page lifetime.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if `Blob` or URL creation fails.
pub fn bytes_to_object_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Release the object URL behind a preview payload, if it has one.
///
/// Text and placeholder previews hold no browser resource; image and
/// document previews hold a Blob URL that should be revoked when the
/// preview is replaced or cleared. Revocation is best-effort.
pub fn revoke_preview(payload: &PreviewPayload) {
    match payload {
        PreviewPayload::Image { src } | PreviewPayload::Document { src } => {
            let _ = web_sys::Url::revoke_object_url(src);
        }
        PreviewPayload::Text { .. } | PreviewPayload::Unsupported { .. } => {}
    }
}
