use dioxus::prelude::*;

use crate::theme::{use_styles, StyleRegistry};
use crate::toolkit;
use crate::utils::ClassList;

#[derive(Props, PartialEq, Clone)]
pub struct IconButtonProps {
    /// Ligature name of the glyph, rendered through the icon font.
    #[props(into)]
    pub icon: String,
    #[props(into, default)]
    pub class: String,
    pub onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes, extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Glyph class order is fixed: icon font marker, spacing, alignment, then
/// the caller's class last so it can override the utilities.
fn icon_classes(styles: &StyleRegistry, class: &str) -> String {
    ClassList::new()
        .push(&styles.icon_font)
        .push(&styles.mr3)
        .push(&styles.align_bottom)
        .push(class)
        .build()
}

/// Button with a leading ligature glyph before its children.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let styles = use_styles();
    let onclick = props.onclick;
    let glyph_class = icon_classes(&styles, &props.class);

    rsx! {
        toolkit::Button {
            class: props.class.clone(),
            attributes: props.attributes,
            onclick: move |evt| onclick.call(evt),
            i { class: "{glyph_class}", "{props.icon}" }
            span { {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_class_order() {
        let styles = StyleRegistry::default();

        assert_eq!(
            icon_classes(&styles, "text-muted"),
            "material-icons-outlined mr-3 align-bottom text-muted"
        );
    }

    #[test]
    fn test_glyph_classes_without_caller_class() {
        let styles = StyleRegistry::default();

        assert_eq!(
            icon_classes(&styles, ""),
            "material-icons-outlined mr-3 align-bottom"
        );
    }

    #[test]
    fn test_glyph_renders_before_children() {
        // Building the `onclick` EventHandler from a closure requires a live
        // Dioxus runtime, so evaluate the rsx inside a VirtualDom rather than
        // with `render_element` (which evaluates it eagerly, runtime-less).
        fn app() -> Element {
            rsx! {
                IconButton {
                    icon: "delete",
                    onclick: |_| {},
                    "Remove"
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let glyph = html.find("delete").unwrap();
        let label = html.find("Remove").unwrap();
        assert!(glyph < label);
        assert!(html.contains("material-icons-outlined mr-3 align-bottom"));
    }
}
