//! kumo-core: Pure upload/preview orchestration logic (sans-IO).
//!
//! Owns the upload state machine, filename-based preview
//! classification, HTML escaping, and server-response interpretation.
//!
//! This crate has **no browser dependencies** -- it operates on plain
//! strings and in-memory values and is fully testable on the host.
//! All DOM, network, and timer interaction lives in `kumo-io`.

pub mod escape;
pub mod files;
pub mod preview;
pub mod response;
pub mod upload;

pub use escape::escape_html;
pub use files::StoredFile;
pub use preview::{DecodeMode, PreviewClass, PreviewPayload};
pub use response::{JsonResponse, UploadOutcome};
pub use upload::{SelectedFile, UploadPhase, UploadState};
