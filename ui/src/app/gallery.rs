use dioxus::prelude::*;

use crate::components::buttons::{Button, CancelButton, CheckboxButton, IconButton, SpinnerButton};
use crate::components::forms::Submit;
use crate::components::layout::{Sidebar, SidebarBackdrop};
use crate::console_info;
use crate::theme::StyleRegistry;

/// Demo application showing every component in the library.
#[component]
pub fn Gallery() -> Element {
    // Style registry resolved once here and injected for the whole tree
    use_context_provider(StyleRegistry::default);

    let mut sidebar_open = use_signal(|| false);
    let mut subscribed = use_signal(|| false);
    let mut pending = use_signal(|| false);

    use_effect(move || {
        console_info!("[Gallery] component gallery mounted");
    });

    rsx! {
        div {
            class: "gallery-container",

            h1 {
                class: "gallery-title",
                "Component Gallery"
            }

            // Button variants
            section {
                class: "gallery-section",
                h2 { "Buttons" }
                Button {
                    onclick: move |_| console_info!("[Gallery] base button clicked"),
                    "Primary action"
                }
                IconButton {
                    icon: "add",
                    onclick: move |_| console_info!("[Gallery] icon button clicked"),
                    "New item"
                }
                CancelButton {
                    onclick: move |_| console_info!("[Gallery] cancel clicked"),
                    "Dismiss"
                }
                SpinnerButton { "Loading" }
            }

            // Checkbox button with live state readout
            section {
                class: "gallery-section",
                h2 { "Checkbox" }
                CheckboxButton {
                    checked: subscribed(),
                    on_change: move |_| {
                        let value = !subscribed();
                        subscribed.set(value);
                        console_info!("[Gallery] subscription toggled to {}", value);
                    },
                    "Subscribe to updates"
                }
                p {
                    class: "gallery-note",
                    if subscribed() { "Subscribed" } else { "Not subscribed" }
                }
            }

            // Submit switches branches off the pending flag
            section {
                class: "gallery-section",
                h2 { "Submit" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        pending.set(true);
                    },
                    Submit {
                        id: "gallery-submit",
                        label: "Save changes",
                        pending: pending(),
                        pending_label: "Saving...",
                    }
                }
                CancelButton {
                    onclick: move |_| pending.set(false),
                    "Reset"
                }
            }

            // Sidebar overlay
            section {
                class: "gallery-section",
                h2 { "Sidebar" }
                Button {
                    onclick: move |_| sidebar_open.set(true),
                    "Open sidebar"
                }
            }

            if sidebar_open() {
                SidebarBackdrop {
                    onclick: move |_| sidebar_open.set(false),
                }
                Sidebar {
                    heading: "Acme Corp",
                    sub_heading: "admin@acme.example",
                    nav {
                        class: "sidebar-nav",
                        a { href: "#", "Dashboard" }
                        a { href: "#", "Settings" }
                    }
                }
            }
        }
    }
}
