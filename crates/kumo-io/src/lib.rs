//! kumo-io: Browser I/O and Dioxus component library.
//!
//! Handles the HTTP requests to the drive backend, Blob object URLs
//! for local previews, the bridge to page-level collaborator
//! functions, and provides the UI components for the kumo web
//! application.

pub mod blob;
pub mod collaborators;
pub mod components;
pub mod http;
pub mod page;

pub use collaborators::Collaborators;
pub use components::{
    CidLookup, FileAction, LoadingOverlay, PreviewPane, Selection, StoredFileList, UploadZone,
};
