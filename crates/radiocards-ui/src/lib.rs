#![allow(non_snake_case)]
//! Widget primitives plus the radio card and radio group components.

pub mod error;
pub mod icons;
pub mod radio_card;

pub use error::{Error, Result};
pub use radio_card::{
    CardSize, CardSpec, CardState, CardStyle, GroupSpacing, RadioCard, RadioGroup, SizePreset,
    Slot, StyleModifiers, StyleRule, TIME_PERIOD_LEGEND, validate_group,
};

use radiocards_core::*;

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier.flex_dir(FlexDirection::Row))
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier.flex_dir(FlexDirection::Column))
}

/// Plain text span. It carries no semantics of its own: inside a card the
/// radio input already announces the same words as its name.
pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: theme().on_surface,
        font_size: 16.0,
        font_weight: FontWeight::Normal,
    })
}

/// Decorative icon; the surrounding control carries the accessible name.
pub fn Icon(handle: IconHandle) -> View {
    View::new(ViewKind::Icon {
        handle,
        color: None,
    })
}

/// Groups related controls. `legend` is exposed to assistive technology
/// only; it takes no space on screen.
pub fn Fieldset(legend: impl Into<String>, modifier: Modifier) -> View {
    let legend = legend.into();
    View::new(ViewKind::Fieldset)
        .modifier(modifier)
        .semantics(Semantics::new(Role::Group).label(legend.clone()))
        .with_children(vec![
            View::new(ViewKind::Legend { text: legend })
                .modifier(Modifier::new().visually_hidden()),
        ])
}

/// Native radio input. It is visually hidden; the paired `Label` is what
/// the user sees and clicks.
pub fn RadioInput(
    id: impl Into<String>,
    name: impl Into<String>,
    value: impl Into<String>,
    checked: bool,
    disabled: bool,
    accessible_name: Option<&str>,
) -> View {
    View::new(ViewKind::RadioInput {
        id: id.into(),
        name: name.into(),
        value: value.into(),
        checked,
        disabled,
    })
    .modifier(Modifier::new().visually_hidden())
    .semantics(Semantics {
        role: Role::RadioButton,
        label: accessible_name.map(str::to_owned),
        enabled: !disabled,
        focusable: !disabled,
        checked: Some(checked),
    })
}

pub fn Label(for_id: impl Into<String>, modifier: Modifier) -> View {
    View::new(ViewKind::Label {
        for_id: for_id.into(),
    })
    .modifier(modifier)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    /// Appends, so containers that seed their own children (`Fieldset`)
    /// keep them first.
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<A: IntoChildren, B: IntoChildren> IntoChildren for (A, B) {
    fn into_children(self) -> Vec<View> {
        let mut v = self.0.into_children();
        v.extend(self.1.into_children());
        v
    }
}

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { font_weight, .. } = &mut self.kind {
            *font_weight = w;
        }
        self
    }
}
