/// Order-preserving builder for CSS class strings.
///
/// Segments are emitted in the order they are pushed; empty segments are
/// skipped so optional caller classes can be passed through without
/// producing doubled whitespace.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class segment. Whitespace-only segments are dropped.
    pub fn push(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Append a class segment only when `condition` holds.
    pub fn push_if(self, class: impl AsRef<str>, condition: bool) -> Self {
        if condition {
            self.push(class)
        } else {
            self
        }
    }

    pub fn build(self) -> String {
        self.classes.join(" ")
    }
}
