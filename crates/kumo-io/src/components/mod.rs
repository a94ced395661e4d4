//! Dioxus UI components for kumo.
//!
//! Provides the drop-zone/file-picker selection component, the local
//! preview pane, the blocking upload overlay, the stored-file list
//! with its typed actions, and the manual CID-lookup form.

mod actions;
mod overlay;
mod preview;
mod upload;

pub use actions::CidLookup;
pub use actions::FileAction;
pub use actions::StoredFileList;
pub use overlay::LoadingOverlay;
pub use preview::PreviewPane;
pub use upload::Selection;
pub use upload::UploadZone;
