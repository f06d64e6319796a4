use dioxus::prelude::*;

use crate::components::layout::SidebarDropdown;
use crate::theme::use_styles;
use crate::utils::ClassList;

#[derive(Props, PartialEq, Clone)]
pub struct SidebarProps {
    #[props(into)]
    pub heading: String,
    #[props(into)]
    pub sub_heading: String,
    pub children: Element,
}

/// Dark sidebar shell: a dropdown header followed by caller-supplied
/// navigation content. Compose with [`super::SidebarBackdrop`] for
/// modal-style overlays.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let styles = use_styles();
    let class = ClassList::new()
        .push(&styles.sidebar)
        .push(&styles.sidebar_dark)
        .build();

    rsx! {
        div {
            class: "{class}",
            SidebarDropdown {
                heading: props.heading,
                sub_heading: props.sub_heading,
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_precedes_children_inside_shell() {
        let html = dioxus_ssr::render_element(rsx! {
            Sidebar {
                heading: "H",
                sub_heading: "S",
                nav { "links" }
            }
        });

        assert!(html.contains("sidebar sidebar-dark"));
        let heading = html.find(">H<").unwrap();
        let child = html.find("links").unwrap();
        assert!(heading < child);
    }
}
