//! # Views, Modifiers, and Locals
//!
//! radiocards describes UI as a plain tree of values rather than live widgets.
//! There are three main pieces:
//!
//! - `View`: a node with a `ViewKind`, a `Modifier` and optional `Semantics`.
//! - `Modifier`: layout and paint attributes, built fluently.
//! - locals: thread‑local `Theme` and viewport width read while building.
//!
//! ## Building a tree
//!
//! ```rust
//! use radiocards_core::*;
//!
//! let view = View::new(ViewKind::Row)
//!     .modifier(Modifier::new().padding_xy(12.0, 8.0).gap(4.0))
//!     .with_children(vec![View::new(ViewKind::Text {
//!         text: "Weekly".into(),
//!         color: theme().on_surface,
//!         font_size: 14.0,
//!         font_weight: FontWeight::Medium,
//!     })]);
//!
//! assert_eq!(view.children.len(), 1);
//! ```
//!
//! Trees are immutable once built. Rendering the same input twice yields
//! equal trees, which is what the devtools snapshot tests rely on.
//!
//! ## Locals
//!
//! Widgets read the palette via `theme()` and the responsive breakpoint via
//! `breakpoint()`. Override either for a subtree:
//!
//! ```rust
//! use radiocards_core::*;
//!
//! let bp = with_viewport_width(800.0, breakpoint);
//! assert_eq!(bp, Breakpoint::Md);
//! ```

pub mod color;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod semantics;
pub mod view;

pub use color::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use semantics::*;
pub use view::*;
