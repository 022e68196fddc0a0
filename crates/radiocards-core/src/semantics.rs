/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Main,
    Group,
    RadioButton,
}

/// Semantics attached to a `View`, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Accessible name announced by screen readers. For groups this is the
    /// legend, for radio buttons the card label.
    pub label: Option<String>,
    /// Disabled nodes remain in the tree but are marked not enabled.
    pub enabled: bool,
    /// Whether keyboard focus can land here.
    pub focusable: bool,
    /// Selection state for checkable roles.
    pub checked: Option<bool>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            enabled: true,
            focusable: false,
            checked: None,
        }
    }
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
