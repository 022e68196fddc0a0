//! # Radio cards
//!
//! A radio card is a native radio input paired with a bordered, clickable
//! label. Building one goes through three steps:
//!
//! 1. `CardStyle::resolve` maps a `CardSize` and `CardState` to a size
//!    preset and a set of `StyleModifiers`. Pure, no theme involved.
//! 2. `RadioCard` applies that style against the current `Theme` and lays out
//!    the content slots of a `CardSpec`.
//! 3. `RadioGroup` wraps an ordered slice of specs in a fieldset.
//!
//! ```rust
//! use radiocards_ui::{CardSize, CardSpec, RadioGroup, icons};
//!
//! const CARDS: &[CardSpec<'static>] = &[
//!     CardSpec::new(CardSize::Sm, "icon-left-text", "weekly")
//!         .label("Weekly")
//!         .leading_icon(icons::CALENDAR_VIEW),
//!     CardSpec::new(CardSize::Md, "text-only", "weekly").label("Weekly"),
//! ];
//!
//! let group = RadioGroup("Select time period", CARDS);
//! assert_eq!(group.children.len(), 3); // legend + two cards
//! ```

mod card;
mod group;
mod style;

pub use card::{CardSpec, RadioCard, Slot};
pub use group::{GroupSpacing, RadioGroup, TIME_PERIOD_LEGEND, validate_group};
pub use style::{CardSize, CardState, CardStyle, SizePreset, StyleModifiers, StyleRule};
