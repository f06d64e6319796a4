use dioxus::prelude::*;

use crate::theme::use_styles;
use crate::utils::ClassList;

#[derive(Props, PartialEq, Clone)]
pub struct SidebarBackdropProps {
    #[props(into, default)]
    pub class: String,
    /// Invoked when the backdrop is clicked, typically to dismiss the
    /// sidebar overlay.
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Full-screen dismiss layer rendered behind a floating sidebar.
#[component]
pub fn SidebarBackdrop(props: SidebarBackdropProps) -> Element {
    let styles = use_styles();
    let onclick = props.onclick;
    let class = ClassList::new()
        .push(&styles.sidebar_backdrop)
        .push(&props.class)
        .build();

    rsx! {
        div {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
        }
    }
}
