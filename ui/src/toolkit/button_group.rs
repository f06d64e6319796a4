use dioxus::prelude::*;

use crate::utils::ClassList;

#[derive(Props, PartialEq, Clone)]
pub struct ToggleGroupProps {
    #[props(into, default)]
    pub class: String,
    pub children: Element,
}

/// Toggle-group container for checkbox- and radio-styled buttons.
#[component]
pub fn ToggleGroup(props: ToggleGroupProps) -> Element {
    let class = ClassList::new()
        .push("btn-group")
        .push("btn-group-toggle")
        .push(&props.class)
        .build();

    rsx! {
        div {
            class: "{class}",
            role: "group",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_children_in_toggle_group() {
        let html = dioxus_ssr::render_element(rsx! {
            ToggleGroup {
                class: "filters",
                span { "child" }
            }
        });

        assert!(html.contains("btn-group btn-group-toggle filters"));
        assert!(html.contains(r#"role="group""#));
        assert!(html.contains("child"));
    }
}
