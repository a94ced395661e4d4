//! Local preview pane for the selected file.

use dioxus::prelude::*;
use kumo_core::preview::PreviewPayload;

/// Props for the [`PreviewPane`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewPaneProps {
    /// The preview to display.
    payload: PreviewPayload,
}

/// Renders a [`PreviewPayload`] in the designated preview region.
///
/// The payload serializes itself to an HTML fragment with all
/// user-supplied values already escaped (see
/// [`PreviewPayload::markup`]), so injecting it here is safe.
#[component]
pub fn PreviewPane(props: PreviewPaneProps) -> Element {
    rsx! {
        div { class: "preview-pane",
            div {
                class: "preview-content",
                dangerous_inner_html: props.payload.markup(),
            }
        }
    }
}
