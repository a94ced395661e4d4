//! Stored-file rows and the manual CID-lookup form.
//!
//! Actions on existing content are dispatched as explicit
//! [`FileAction`] values through a single handler -- each button knows
//! which action it emits, so no DOM ancestry probing is involved.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdTrash2};
use dioxus_free_icons::Icon;
use kumo_core::files::{validate_cid_input, StoredFile};

use crate::page;

/// An action requested on already-stored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// Preview stored content by CID.
    Preview {
        /// Content identifier to preview.
        cid: String,
        /// Original filename, for display.
        filename: String,
    },
    /// Delete a stored file by record id.
    Delete {
        /// Database record identifier.
        id: u64,
        /// Original filename, for the confirmation prompt.
        filename: String,
    },
}

/// Props for the [`StoredFileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StoredFileListProps {
    /// Files to render, newest first (server order).
    files: Vec<StoredFile>,
    /// Receives the action chosen on any row.
    on_action: EventHandler<FileAction>,
}

/// List of previously uploaded files with preview/delete buttons.
#[component]
pub fn StoredFileList(props: StoredFileListProps) -> Element {
    if props.files.is_empty() {
        return rsx! {
            p { class: "file-list-empty", "No files uploaded yet" }
        };
    }

    rsx! {
        ul { class: "file-list",
            for file in props.files.iter() {
                {render_row(file, &props.on_action)}
            }
        }
    }
}

/// Render a single stored-file row.
fn render_row(file: &StoredFile, on_action: &EventHandler<FileAction>) -> Element {
    let preview = {
        let on_action = *on_action;
        let cid = file.cid.clone();
        let filename = file.filename.clone();
        move |_| {
            on_action.call(FileAction::Preview {
                cid: cid.clone(),
                filename: filename.clone(),
            })
        }
    };

    let delete = {
        let on_action = *on_action;
        let id = file.id;
        let filename = file.filename.clone();
        move |_| {
            on_action.call(FileAction::Delete {
                id,
                filename: filename.clone(),
            })
        }
    };

    rsx! {
        li { class: "file-row", key: "{file.id}",
            span { class: "file-name", title: "{file.filename}", "{file.filename}" }
            span { class: "file-cid", title: "{file.cid}", "{file.cid}" }
            button {
                class: "icon-button",
                onclick: preview,
                aria_label: "Preview {file.filename}",
                Icon { icon: LdEye, width: 16, height: 16 }
            }
            button {
                class: "icon-button danger",
                onclick: delete,
                aria_label: "Delete {file.filename}",
                Icon { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}

/// Props for the [`CidLookup`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CidLookupProps {
    /// Called with the trimmed, non-empty CID.
    on_lookup: EventHandler<String>,
}

/// Manual CID-lookup form.
///
/// Trims the input before use; an empty value raises a blocking
/// validation notice and fires nothing.
#[component]
pub fn CidLookup(props: CidLookupProps) -> Element {
    let mut cid = use_signal(String::new);

    let submit = move |_| {
        let Some(trimmed) = validate_cid_input(&cid()) else {
            page::alert("Please enter a CID");
            return;
        };
        props.on_lookup.call(trimmed);
    };

    rsx! {
        div { class: "cid-lookup",
            input {
                r#type: "text",
                placeholder: "Paste a CID to preview",
                value: "{cid}",
                oninput: move |evt| cid.set(evt.value()),
            }
            button { onclick: submit, "Preview CID" }
        }
    }
}
