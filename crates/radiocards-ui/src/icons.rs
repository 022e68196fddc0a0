//! Remix icon handles used by the billing-period cards.
//!
//! Handles are names plus a pixel size; the host resolves the name to
//! vector data.

use radiocards_core::IconHandle;

use crate::{Error, Result};

/// Default edge length for icons inside a card.
pub const ICON_SIZE: f32 = 20.0;
/// Edge length for the icon of the largest card.
pub const ICON_SIZE_LARGE: f32 = 24.0;

pub const CALENDAR_VIEW: IconHandle = IconHandle::new("calendar-view", ICON_SIZE);
pub const CALENDAR_TODO_LINE: IconHandle = IconHandle::new("calendar-todo-line", ICON_SIZE);
pub const CALENDAR_LINE: IconHandle = IconHandle::new("calendar-line", ICON_SIZE);
pub const ARROW_DOWN_S_LINE: IconHandle = IconHandle::new("arrow-down-s-line", ICON_SIZE);

const CATALOG: &[IconHandle] = &[
    CALENDAR_VIEW,
    CALENDAR_TODO_LINE,
    CALENDAR_LINE,
    ARROW_DOWN_S_LINE,
];

/// Look up an icon by name. A leading `ri-` prefix is accepted.
///
/// Card data uses the consts directly. Hosts go the other way: they read an
/// icon name back out of rendered output (the `data-icon` attribute) and
/// resolve it here before drawing.
pub fn lookup(name: &str, size: f32) -> Result<IconHandle> {
    let bare = name.strip_prefix("ri-").unwrap_or(name);
    CATALOG
        .iter()
        .find(|h| h.name == bare)
        .map(|h| h.with_size(size))
        .ok_or_else(|| Error::UnknownIcon(name.to_owned()))
}
