//! Blocking overlay shown while an upload is in flight.

use dioxus::prelude::*;

/// Props for the [`LoadingOverlay`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LoadingOverlayProps {
    /// Whether the overlay covers the page.
    active: bool,
    /// Status text shown in the overlay.
    message: String,
}

/// Full-page overlay that blocks interaction while active.
///
/// The overlay is always mounted; `active` toggles its visibility via
/// CSS so activation and release are single class changes.
#[component]
pub fn LoadingOverlay(props: LoadingOverlayProps) -> Element {
    let class = if props.active {
        "loading-overlay active"
    } else {
        "loading-overlay"
    };

    rsx! {
        div { class: "{class}", aria_hidden: !props.active,
            div { class: "loading-box",
                div { class: "loading-spinner" }
                p { "{props.message}" }
            }
        }
    }
}
