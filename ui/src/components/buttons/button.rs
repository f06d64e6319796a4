use dioxus::prelude::*;

use crate::toolkit;
use crate::toolkit::{ButtonType, ButtonVariant};

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub button_type: ButtonType,
    #[props(default)]
    pub disabled: bool,
    #[props(into, default)]
    pub class: String,
    #[props(into, default)]
    pub id: String,
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Unrecognized attributes are forwarded to the underlying control.
    #[props(extends = GlobalAttributes, extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Plain clickable button. Children render unchanged inside the underlying
/// toolkit control; the caller's click handler is always forwarded.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        toolkit::Button {
            variant: props.variant,
            button_type: props.button_type,
            disabled: props.disabled,
            class: props.class,
            id: props.id,
            attributes: props.attributes,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
