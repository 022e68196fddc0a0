//! # Theming and locals
//!
//! Composition locals are thread‑local values that widgets read while the
//! tree is being built:
//!
//! - `Theme`: the palette cards resolve their style modifiers against.
//! - `ViewportWidth`: host width in px, mapped to a `Breakpoint`.
//!
//! Override them for a subtree using `with_theme` and `with_viewport_width`:
//!
//! ```rust
//! use radiocards_core::*;
//!
//! let dark = Theme {
//!     background: Color::from_hex("#121212"),
//!     on_surface: Color::from_hex("#DDDDDD"),
//!     ..Theme::default()
//! };
//!
//! with_theme(dark, || {
//!     // all views built here will see the dark palette
//!     assert_eq!(theme().on_surface, Color::from_hex("#DDDDDD"));
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Color, palette};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Pops the frame even if `f` unwinds.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn local<T: Any + Copy + Default>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

fn with_local<T: Any, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Palette used by the card widgets.
///
/// Names are semantic; the defaults are the light neutral/indigo scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Primary text color.
    pub on_surface: Color,
    /// Resting card border.
    pub outline: Color,
    /// Border of a selected card.
    pub accent: Color,
    /// Card background under the pointer.
    pub hover: Color,
    /// Background of a disabled card.
    pub disabled_background: Color,
    /// Text and icon color of a disabled card.
    pub disabled_content: Color,
    /// Inner focus ring layer.
    pub focus_ring_inner: Color,
    /// Outer focus ring layer.
    pub focus_ring_outer: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            on_surface: palette::NEUTRAL_900,
            outline: palette::NEUTRAL_200,
            accent: palette::INDIGO_600,
            hover: palette::NEUTRAL_50,
            disabled_background: palette::NEUTRAL_100,
            disabled_content: palette::NEUTRAL_400,
            // 10% and 12% alpha
            focus_ring_inner: palette::FOCUS.with_alpha(26),
            focus_ring_outer: palette::FOCUS.with_alpha(31),
        }
    }
}

/// Host viewport width in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWidth(pub f32);

impl Default for ViewportWidth {
    fn default() -> Self {
        Self(1280.0)
    }
}

/// Responsive breakpoints, min-width based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Base,
    /// >= 768 px
    Md,
    /// >= 1024 px
    Lg,
}

impl Breakpoint {
    pub const MD_MIN: f32 = 768.0;
    pub const LG_MIN: f32 = 1024.0;

    pub fn from_width(width: f32) -> Self {
        if width >= Self::LG_MIN {
            Breakpoint::Lg
        } else if width >= Self::MD_MIN {
            Breakpoint::Md
        } else {
            Breakpoint::Base
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_local(theme, f)
}

pub fn with_viewport_width<R>(width: f32, f: impl FnOnce() -> R) -> R {
    with_local(ViewportWidth(width), f)
}

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn viewport_width() -> f32 {
    local::<ViewportWidth>().0
}

pub fn breakpoint() -> Breakpoint {
    Breakpoint::from_width(viewport_width())
}
