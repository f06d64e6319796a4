use dioxus::prelude::*;

use crate::theme::use_styles;
use crate::toolkit;
use crate::toolkit::{ButtonVariant, SpinnerSize};

#[derive(Props, PartialEq, Clone)]
pub struct SpinnerButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(into, default)]
    pub class: String,
    pub children: Element,
}

/// Button showing an in-flight operation. The control is always disabled
/// while the spinner is visible; there is no click handler to forward.
#[component]
pub fn SpinnerButton(props: SpinnerButtonProps) -> Element {
    let styles = use_styles();

    rsx! {
        toolkit::Button {
            variant: props.variant,
            class: props.class,
            disabled: true,
            toolkit::Spinner {
                class: styles.mr2.clone(),
                size: SpinnerSize::Sm,
                role: "status",
                aria_hidden: true,
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_is_always_disabled() {
        let html = dioxus_ssr::render_element(rsx! {
            SpinnerButton { "Saving..." }
        });

        assert!(html.contains("disabled"));
        assert!(html.contains("Saving..."));
    }

    #[test]
    fn test_variant_defaults_to_primary() {
        let html = dioxus_ssr::render_element(rsx! {
            SpinnerButton { "Saving..." }
        });

        assert!(html.contains("btn btn-primary"));
    }

    #[test]
    fn test_fixed_spinner_configuration() {
        let html = dioxus_ssr::render_element(rsx! {
            SpinnerButton { variant: ButtonVariant::Secondary, "Working" }
        });

        assert!(html.contains("btn btn-secondary"));
        assert!(html.contains("spinner-border spinner-border-sm mr-2"));
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }
}
