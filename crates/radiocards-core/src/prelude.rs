pub use crate::color::{Color, palette};
pub use crate::locals::{
    Breakpoint, Theme, breakpoint, theme, viewport_width, with_theme, with_viewport_width,
};
pub use crate::modifier::{Cursor, FocusRing, Modifier, RingLayer};
pub use crate::semantics::{Role, Semantics};
pub use crate::view::{FontWeight, IconHandle, View, ViewKind};
pub use taffy::{AlignItems, FlexDirection, FlexWrap, JustifyContent};
