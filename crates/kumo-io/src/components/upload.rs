//! File selection component with drag-and-drop and file picker.

use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCloudUpload;
use dioxus_free_icons::Icon;
use kumo_core::preview::{DecodeMode, PreviewClass, PreviewPayload};
use kumo_core::upload::SelectedFile;

use crate::blob;

/// A fully decoded selection, delivered by [`UploadZone`].
///
/// Carries the file metadata, the raw bytes for the eventual upload,
/// and the already-built local preview. Bytes are shared via `Rc` so
/// the selection is cheap to clone into signals and async tasks.
#[derive(Clone, PartialEq)]
pub struct Selection {
    /// Metadata for the upload state machine.
    pub file: SelectedFile,
    /// Raw file bytes for the multipart body.
    pub bytes: Rc<Vec<u8>>,
    /// Local preview, derived from the filename and (where the class
    /// requires it) the bytes -- never from the network.
    pub preview: PreviewPayload,
}

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Called with the decoded selection once a file is chosen, via
    /// either the picker or drag-and-drop.
    on_select: EventHandler<Selection>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Both entry points converge on one `process_files` path, so exactly
/// one selection event and one preview render occur per chosen file.
/// Any file type is accepted; unsupported types simply get a
/// placeholder preview.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    // Bumped on every selection so a decode that finishes late can
    // tell it lost the race to a newer file and discard itself.
    let mut generation = use_signal(|| 0u64);

    // Read the first file from a list, classify it, build its local
    // preview, and forward the decoded selection.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths. An empty list is a silent no-op.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();

        generation += 1;
        let my_generation = *generation.peek();

        let bytes = match file.read_bytes().await {
            Ok(bytes) => Rc::new(bytes.to_vec()),
            Err(e) => {
                error.set(Some(format!("Failed to read file: {e}")));
                return;
            }
        };

        // A newer selection arrived while we were reading.
        if *generation.peek() != my_generation {
            return;
        }

        let selected = SelectedFile::new(name.clone());
        let class = PreviewClass::of(&name);
        let preview = match class.decode_mode() {
            DecodeMode::Binary => match blob::bytes_to_object_url(&bytes, selected.mime_hint) {
                Ok(src) => {
                    if class == PreviewClass::Image {
                        PreviewPayload::Image { src }
                    } else {
                        PreviewPayload::Document { src }
                    }
                }
                Err(e) => {
                    error.set(Some(format!("Failed to build preview: {e}")));
                    return;
                }
            },
            DecodeMode::Text => PreviewPayload::Text {
                content: String::from_utf8_lossy(&bytes).into_owned(),
            },
            DecodeMode::None => PreviewPayload::Unsupported { filename: name },
        };

        error.set(None);
        props.on_select.call(Selection {
            file: selected,
            bytes,
            preview,
        });
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        // Without this the browser navigates to the dropped file.
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            Icon { icon: LdCloudUpload, width: 32, height: 32 }

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            p { class: "upload-hint", "Drop a file here or" }

            label { class: "upload-picker",
                input {
                    r#type: "file",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }
        }
    }
}
