use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SidebarDropdownProps {
    #[props(into)]
    pub heading: String,
    #[props(into)]
    pub sub_heading: String,
}

/// Media-style header block at the top of a [`super::Sidebar`].
#[component]
pub fn SidebarDropdown(props: SidebarDropdownProps) -> Element {
    rsx! {
        div {
            class: "sidebar-media",
            div {
                class: "sidebar-media-body",
                div {
                    class: "sidebar-heading",
                    "{props.heading}"
                }
                div {
                    class: "sidebar-subheading",
                    "{props.sub_heading}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading_and_sub_heading() {
        let html = dioxus_ssr::render_element(rsx! {
            SidebarDropdown { heading: "Acme Corp", sub_heading: "admin@acme.example" }
        });

        assert!(html.contains("Acme Corp"));
        assert!(html.contains("admin@acme.example"));
        let heading = html.find("Acme Corp").unwrap();
        let sub = html.find("admin@acme.example").unwrap();
        assert!(heading < sub);
    }
}
