use dioxus::prelude::*;

use crate::console_debug;
use crate::theme::use_styles;
use crate::toolkit;
use crate::utils::ClassList;

/// Checked flag mirrored from the `checked` prop.
///
/// `external` is the last value observed from the prop, `local` the value
/// currently shown. A prop change overwrites both; a user toggle flips only
/// `local`, which therefore wins until the caller supplies the next
/// `checked` value. Re-supplying an unchanged prop leaves a pending local
/// toggle alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedState {
    external: bool,
    local: bool,
}

impl CheckedState {
    pub fn new(initial: bool) -> Self {
        Self {
            external: initial,
            local: initial,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.local
    }

    /// User toggle: flip the displayed value.
    pub fn toggle(&mut self) {
        self.local = !self.local;
    }

    /// Prop reconciliation: an external change wins over any local toggle.
    pub fn sync_external(&mut self, checked: bool) {
        if checked != self.external {
            self.external = checked;
            self.local = checked;
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxButtonProps {
    #[props(default)]
    pub checked: bool,
    #[props(into, default)]
    pub class: String,
    pub on_change: Option<EventHandler<FormEvent>>,
    pub children: Element,
}

/// Checkbox styled as a toggle button.
#[component]
pub fn CheckboxButton(props: CheckboxButtonProps) -> Element {
    let styles = use_styles();
    let on_change = props.on_change;
    let mut state = use_signal(|| CheckedState::new(props.checked));

    let checked = props.checked;
    use_effect(use_reactive!(|(checked,)| {
        state.write().sync_external(checked);
    }));

    let is_checked = state().is_checked();
    let label_class = ClassList::new()
        .push(&styles.btn)
        .push(&styles.btn_outline_secondary)
        .push_if(&styles.active, is_checked)
        .build();

    rsx! {
        toolkit::ToggleGroup {
            class: props.class,
            label {
                class: "{label_class}",
                input {
                    r#type: "checkbox",
                    checked: is_checked,
                    oninput: move |evt| {
                        state.write().toggle();
                        match &on_change {
                            Some(handler) => handler.call(evt),
                            None => {
                                console_debug!("CheckboxButton toggled without an on_change handler")
                            }
                        }
                    },
                }
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_comes_from_prop() {
        assert!(!CheckedState::new(false).is_checked());
        assert!(CheckedState::new(true).is_checked());
    }

    #[test]
    fn test_single_toggle_checks() {
        let mut state = CheckedState::new(false);
        state.toggle();

        assert!(state.is_checked());
    }

    #[test]
    fn test_external_change_hard_sets_state() {
        // Mounted checked, caller drives the prop to false: next render
        // shows unchecked regardless of local history
        let mut state = CheckedState::new(true);
        state.sync_external(false);
        assert!(!state.is_checked());

        state.sync_external(true);
        assert!(state.is_checked());
    }

    #[test]
    fn test_unchanged_prop_keeps_pending_local_toggle() {
        let mut state = CheckedState::new(true);
        state.toggle();

        // The caller re-renders with the same checked value before it has
        // reconciled the toggle; the local value must survive
        state.sync_external(true);
        assert!(!state.is_checked());
    }

    #[test]
    fn test_renders_active_label_when_checked() {
        let html = dioxus_ssr::render_element(rsx! {
            CheckboxButton { checked: true, "Remember me" }
        });

        assert!(html.contains("btn btn-outline-secondary active"));
        assert!(html.contains("btn-group btn-group-toggle"));
        assert!(html.contains("Remember me"));
    }

    #[test]
    fn test_renders_plain_label_when_unchecked() {
        let html = dioxus_ssr::render_element(rsx! {
            CheckboxButton { "Remember me" }
        });

        assert!(!html.contains("active"));
    }
}
