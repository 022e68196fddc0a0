//! The three billing-period groups. Each shows the same five layouts, one
//! per card size.

use radiocards_core::IconHandle;
use radiocards_ui::{CardSize, CardSpec, icons};

const fn period_cards(
    group: &'static str,
    label: &'static str,
    icon: IconHandle,
    checked: bool,
    disabled: bool,
) -> [CardSpec<'static>; 5] {
    [
        CardSpec::new(CardSize::Sm, "icon-left-text", group)
            .label(label)
            .leading_icon(icon)
            .checked(checked)
            .disabled(disabled),
        CardSpec::new(CardSize::Md, "text-only", group)
            .label(label)
            .checked(checked)
            .disabled(disabled),
        CardSpec::new(CardSize::Lg, "text-icon-right", group)
            .label(label)
            .trailing_icon(icon)
            .checked(checked)
            .disabled(disabled),
        CardSpec::new(CardSize::Xl, "icon-left-text-icon-right", group)
            .label(label)
            .leading_icon(icon)
            .trailing_icon(icons::ARROW_DOWN_S_LINE)
            .checked(checked)
            .disabled(disabled),
        CardSpec::new(CardSize::Xxl, "icon-only", group)
            .leading_icon(icon.with_size(CardSize::Xxl.icon_size()))
            .checked(checked)
            .disabled(disabled),
    ]
}

pub const WEEKLY: [CardSpec<'static>; 5] =
    period_cards("weekly", "Weekly", icons::CALENDAR_VIEW, false, false);

pub const MONTHLY: [CardSpec<'static>; 5] =
    period_cards("monthly", "Monthly", icons::CALENDAR_TODO_LINE, true, false);

pub const ANNUALLY: [CardSpec<'static>; 5] =
    period_cards("annually", "Annually", icons::CALENDAR_LINE, false, true);

/// Display order, top to bottom.
pub const GROUPS: [&[CardSpec<'static>]; 3] = [&WEEKLY, &MONTHLY, &ANNUALLY];
