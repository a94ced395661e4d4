use dioxus::prelude::*;
use kumo_core::files::{parse_listing, StoredFile};
use kumo_core::response::UploadOutcome;
use kumo_core::upload::UploadState;
use kumo_io::{blob, http, page};
use kumo_io::{
    CidLookup, Collaborators, FileAction, LoadingOverlay, PreviewPane, Selection, StoredFileList,
    UploadZone,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the upload state machine and the current selection via Dioxus
/// signals and wires them to the upload zone, preview pane, stored
/// file list, CID lookup, and blocking overlay.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut state = use_signal(UploadState::new);
    let mut selection = use_signal(|| Option::<Selection>::None);
    let mut overlay_active = use_signal(|| false);
    let mut files = use_signal(Vec::<StoredFile>::new);

    // Collaborator slots are probed once at construction, not per call.
    let collaborators = use_hook(Collaborators::from_window);

    // --- Initial stored-file listing ---
    // The listing is auxiliary: if it cannot be fetched the upload
    // path still works, so failure only logs.
    use_future(move || async move {
        match http::get_json("/my_uploads").await {
            Ok(response) => files.set(parse_listing(response.body.as_ref())),
            Err(e) => {
                web_sys::console::warn_1(&format!("file listing unavailable: {e}").into());
            }
        }
    });

    // --- Selection handler ---
    // Selecting a new file replaces the previous one wholesale; the
    // old preview's Blob URL is released before it becomes unreachable.
    let on_select = move |new_selection: Selection| {
        if let Some(old) = selection.peek().as_ref() {
            blob::revoke_preview(&old.preview);
        }
        state.write().select(new_selection.file.clone());
        selection.set(Some(new_selection));
    };

    // --- Submit handler ---
    let on_submit = {
        let collaborators = collaborators.clone();
        move |_| {
            let Some(current) = selection.peek().as_ref().cloned() else {
                return;
            };
            // Admission control: only an armed machine may start a
            // request, and arming is impossible while one is in flight.
            let Some(file) = state.write().begin_upload() else {
                return;
            };

            overlay_active.set(true);
            let collaborators = collaborators.clone();
            spawn(async move {
                let outcome = match http::post_multipart(
                    "/upload",
                    "file",
                    &current.bytes,
                    &file.name,
                    file.mime_hint,
                )
                .await
                {
                    Ok(response) => UploadOutcome::from_response(&response),
                    Err(fault) => UploadOutcome::from_transport_fault(fault.to_string()),
                };
                state.write().settle(&outcome);

                match &outcome {
                    UploadOutcome::Accepted { cid } => {
                        collaborators.upload_succeeded(cid);
                        if let Some(old) = selection.peek().as_ref() {
                            blob::revoke_preview(&old.preview);
                        }
                        selection.set(None);
                        page::schedule_reload(page::RELOAD_DELAY_MS);
                    }
                    UploadOutcome::Rejected { message } => {
                        // The selection is kept so the user can retry.
                        collaborators.upload_failed(message);
                    }
                }
                state.write().acknowledge();
                // The overlay comes down whichever branch ran.
                overlay_active.set(false);
            });
        }
    };

    // --- Stored-content action handler ---
    let on_action = {
        let collaborators = collaborators.clone();
        move |action: FileAction| match action {
            FileAction::Preview { cid, filename } => {
                collaborators.preview(&cid, Some(&filename));
            }
            FileAction::Delete { id, filename } => collaborators.delete(id, &filename),
        }
    };

    // --- CID lookup handler ---
    let on_lookup = move |cid: String| collaborators.preview(&cid, None);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { "kumo" }
                p { "Content-addressed file drive" }
            }

            main { class: "app-main",
                section { class: "upload-section",
                    h2 { "Upload" }
                    UploadZone { on_select: on_select }

                    if let Some(ref current) = selection() {
                        PreviewPane { payload: current.preview.clone() }
                    }

                    button {
                        class: "submit-button",
                        disabled: !state().submit_enabled(),
                        onclick: on_submit,
                        "Upload"
                    }
                }

                section { class: "lookup-section",
                    h2 { "Preview by CID" }
                    CidLookup { on_lookup: on_lookup }
                }

                section { class: "files-section",
                    h2 { "Your files" }
                    StoredFileList { files: files(), on_action: on_action }
                }
            }

            LoadingOverlay { active: overlay_active(), message: "Uploading..." }
        }
    }
}
