use crate::{Color, Modifier, Semantics};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
}

impl FontWeight {
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
        }
    }
}

/// Opaque reference to a vector icon supplied by the host's icon set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconHandle {
    pub name: &'static str,
    /// Square edge length in px.
    pub size: f32,
}

impl IconHandle {
    pub const fn new(name: &'static str, size: f32) -> Self {
        Self { name, size }
    }
    pub const fn with_size(self, size: f32) -> Self {
        Self {
            name: self.name,
            size,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Row,
    Column,
    Fieldset,
    Legend {
        text: String,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        font_weight: FontWeight,
    },
    /// `color: None` inherits the nearest `content_color`.
    Icon {
        handle: IconHandle,
        color: Option<Color>,
    },
    RadioInput {
        id: String,
        name: String,
        value: String,
        checked: bool,
        disabled: bool,
    },
    Label {
        for_id: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    /// Stable identity among siblings.
    pub key: Option<String>,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            key: None,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Pre-order walk over this node and all descendants.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// All nodes (self included) matching `pred`, in pre-order.
    pub fn find_all(&self, pred: impl Fn(&View) -> bool) -> Vec<&View> {
        let mut out = Vec::new();
        self.visit(&mut |v| {
            if pred(v) {
                out.push(v);
            }
        });
        out
    }

    pub fn find(&self, pred: impl Fn(&View) -> bool) -> Option<&View> {
        self.find_all(pred).into_iter().next()
    }
}
