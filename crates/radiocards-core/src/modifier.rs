use taffy::{AlignItems, FlexDirection, FlexWrap, JustifyContent};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// Spacing between children of a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gap {
    pub row: f32,
    pub column: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

/// One zero-offset, zero-blur shadow layer, i.e. a solid ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayer {
    pub spread: f32,
    pub color: Color,
}

/// Drawn while the node or one of its descendants holds keyboard focus.
/// Layers are painted in order.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusRing {
    pub layers: Vec<RingLayer>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding_values: Option<PaddingValues>,
    pub max_width: Option<f32>,
    pub gap: Option<Gap>,
    pub background: Option<Color>,
    /// Background while hovered; `None` means hover has no effect.
    pub hover_background: Option<Color>,
    pub border: Option<Border>,
    /// Foreground color inherited by text and icons below this node.
    pub content_color: Option<Color>,
    pub cursor: Option<Cursor>,
    pub focus_ring: Option<FocusRing>,
    pub flex_dir: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    /// Kept in the accessibility tree, removed from the visual layout.
    pub visually_hidden: bool,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }
    pub fn padding_xy(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding_values = Some(PaddingValues::symmetric(horizontal, vertical));
        self
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn gap(self, v: f32) -> Self {
        self.gap_xy(v, v)
    }
    pub fn gap_xy(mut self, row: f32, column: f32) -> Self {
        self.gap = Some(Gap { row, column });
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn content_color(mut self, color: Color) -> Self {
        self.content_color = Some(color);
        self
    }
    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
    pub fn focus_ring(mut self, ring: FocusRing) -> Self {
        self.focus_ring = Some(ring);
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn flex_wrap(mut self, w: FlexWrap) -> Self {
        self.flex_wrap = Some(w);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    pub fn visually_hidden(mut self) -> Self {
        self.visually_hidden = true;
        self
    }
}
