//! Bridge to page-level collaborator functions.
//!
//! The hosting page may define `showUploadSuccess`, `showUploadError`,
//! `previewCid`, and `deleteFile` as global functions (toasts, modals,
//! confirm dialogs -- their implementations are not this crate's
//! concern). Each slot is capability-probed once at construction and
//! silently no-ops when the page does not provide it, the same way an
//! absent analytics script is tolerated.

use wasm_bindgen::prelude::*;

/// Optional callback slots resolved from the global scope.
///
/// Construct once at app startup with [`Collaborators::from_window`]
/// and share by reference; probing is not repeated per call.
#[derive(Debug, Default, Clone)]
pub struct Collaborators {
    show_upload_success: Option<js_sys::Function>,
    show_upload_error: Option<js_sys::Function>,
    preview_cid: Option<js_sys::Function>,
    delete_file: Option<js_sys::Function>,
}

impl Collaborators {
    /// Probe the window for each collaborator function by name.
    ///
    /// Missing or non-function globals leave the slot empty; in a
    /// non-browser environment every slot is empty.
    #[must_use]
    pub fn from_window() -> Self {
        Self {
            show_upload_success: global_function("showUploadSuccess"),
            show_upload_error: global_function("showUploadError"),
            preview_cid: global_function("previewCid"),
            delete_file: global_function("deleteFile"),
        }
    }

    /// Notify the page of a successful upload with the returned CID.
    pub fn upload_succeeded(&self, cid: &str) {
        call1(self.show_upload_success.as_ref(), cid);
    }

    /// Surface an upload failure message to the page.
    pub fn upload_failed(&self, message: &str) {
        call1(self.show_upload_error.as_ref(), message);
    }

    /// Ask the page to preview a CID, optionally with its filename.
    pub fn preview(&self, cid: &str, filename: Option<&str>) {
        match filename {
            Some(name) => call2(self.preview_cid.as_ref(), cid, name),
            None => call1(self.preview_cid.as_ref(), cid),
        }
    }

    /// Ask the page to delete a stored file by record id.
    pub fn delete(&self, file_id: u64, filename: &str) {
        call2(self.delete_file.as_ref(), &file_id.to_string(), filename);
    }
}

/// Look up a global function by name, or `None` if absent.
fn global_function(name: &str) -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if !value.is_function() {
        return None;
    }
    Some(value.unchecked_into())
}

/// Invoke a slot with one string argument; absent slots no-op.
fn call1(slot: Option<&js_sys::Function>, arg: &str) {
    if let Some(func) = slot {
        let _ = func.call1(&JsValue::NULL, &JsValue::from_str(arg));
    }
}

/// Invoke a slot with two string arguments; absent slots no-op.
fn call2(slot: Option<&js_sys::Function>, a: &str, b: &str) {
    if let Some(func) = slot {
        let _ = func.call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b));
    }
}
