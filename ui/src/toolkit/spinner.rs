use dioxus::prelude::*;

use crate::utils::ClassList;

/// Animation style of a [`Spinner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerAnimation {
    #[default]
    Border,
    Grow,
}

impl SpinnerAnimation {
    pub fn class(&self) -> &'static str {
        match self {
            SpinnerAnimation::Border => "spinner-border",
            SpinnerAnimation::Grow => "spinner-grow",
        }
    }

    fn size_class(&self) -> &'static str {
        match self {
            SpinnerAnimation::Border => "spinner-border-sm",
            SpinnerAnimation::Grow => "spinner-grow-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    #[default]
    Default,
    Sm,
}

#[derive(Props, PartialEq, Clone)]
pub struct SpinnerProps {
    #[props(default)]
    pub animation: SpinnerAnimation,
    #[props(default)]
    pub size: SpinnerSize,
    #[props(into, default)]
    pub class: String,
    #[props(into, default)]
    pub role: String,
    /// Hide the indicator from assistive technology.
    #[props(default)]
    pub aria_hidden: bool,
}

#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let class = ClassList::new()
        .push(props.animation.class())
        .push_if(props.animation.size_class(), props.size == SpinnerSize::Sm)
        .push(&props.class)
        .build();

    rsx! {
        span {
            class: "{class}",
            role: if !props.role.is_empty() { props.role.clone() },
            aria_hidden: if props.aria_hidden { "true" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_border_spinner_classes() {
        let html = dioxus_ssr::render_element(rsx! {
            Spinner {
                size: SpinnerSize::Sm,
                role: "status",
                aria_hidden: true,
            }
        });

        assert!(html.contains("spinner-border spinner-border-sm"));
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_full_size_spinner_has_no_size_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Spinner {}
        });

        assert!(html.contains("spinner-border"));
        assert!(!html.contains("spinner-border-sm"));
    }
}
