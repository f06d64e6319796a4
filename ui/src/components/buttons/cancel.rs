use dioxus::prelude::*;

use crate::toolkit;
use crate::toolkit::ButtonVariant;

#[derive(Props, PartialEq, Clone)]
pub struct CancelButtonProps {
    #[props(into, default)]
    pub class: String,
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

/// Link-styled button for dismiss and cancel affordances.
#[component]
pub fn CancelButton(props: CancelButtonProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        toolkit::Button {
            variant: ButtonVariant::Link,
            class: props.class,
            onclick: move |evt| onclick.call(evt),
            {props.children}
        }
    }
}
