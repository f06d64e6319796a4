use dioxus::prelude::*;

use crate::components::buttons::{Button, SpinnerButton};
use crate::toolkit::{ButtonType, ButtonVariant};

#[derive(Props, PartialEq, Clone)]
pub struct SubmitProps {
    #[props(into)]
    pub label: String,
    #[props(default)]
    pub pending: bool,
    #[props(into)]
    pub pending_label: String,
    #[props(into, default)]
    pub class: String,
    #[props(into, default)]
    pub id: String,
}

/// Form submit control. While `pending` is set the spinner button takes
/// over with `pending_label`; `label` and `id` apply only to the idle
/// branch. Stateless, so the branch follows the prop on every render.
#[component]
pub fn Submit(props: SubmitProps) -> Element {
    if props.pending {
        rsx! {
            SpinnerButton {
                class: props.class,
                "{props.pending_label}"
            }
        }
    } else {
        rsx! {
            Button {
                class: props.class,
                id: props.id,
                button_type: ButtonType::Submit,
                variant: ButtonVariant::Primary,
                "{props.label}"
            }
        }
    }
}
