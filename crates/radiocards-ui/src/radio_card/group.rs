use std::collections::HashSet;

use radiocards_core::{
    AlignItems, Breakpoint, FlexDirection, FlexWrap, JustifyContent, Modifier, View, breakpoint,
};

use super::{CardSpec, RadioCard};
use crate::{Error, Fieldset, Result, ViewExt};

pub const TIME_PERIOD_LEGEND: &str = "Select time period";

/// Wrapping limits and gaps for a group at one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupSpacing {
    pub max_width: f32,
    pub row_gap: f32,
    pub column_gap: f32,
}

impl GroupSpacing {
    pub fn for_breakpoint(bp: Breakpoint) -> Self {
        match bp {
            Breakpoint::Base => Self {
                max_width: 320.0,
                row_gap: 12.0,
                column_gap: 16.0,
            },
            Breakpoint::Md => Self {
                max_width: 448.0,
                row_gap: 24.0,
                column_gap: 24.0,
            },
            Breakpoint::Lg => Self {
                max_width: 672.0,
                row_gap: 24.0,
                column_gap: 24.0,
            },
        }
    }
}

/// Checks the group invariants: non-empty, one shared group name, unique
/// values.
pub fn validate_group(cards: &[CardSpec<'_>]) -> Result<()> {
    let first = cards.first().ok_or(Error::EmptyGroup)?;
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if card.group_name != first.group_name {
            return Err(Error::GroupMismatch {
                expected: first.group_name.to_owned(),
                found: card.group_name.to_owned(),
                value: card.value.to_owned(),
            });
        }
        if !seen.insert(card.value) {
            return Err(Error::DuplicateValue {
                group: card.group_name.to_owned(),
                value: card.value.to_owned(),
            });
        }
    }
    Ok(())
}

/// Cards in display order inside one fieldset. Spacing follows the current
/// `breakpoint()`.
pub fn RadioGroup(legend: &str, cards: &[CardSpec<'_>]) -> View {
    if let Err(err) = validate_group(cards) {
        log::warn!("rendering invalid radio group: {err}");
    }

    let bp = breakpoint();
    let spacing = GroupSpacing::for_breakpoint(bp);
    log::debug!(
        "radio group {:?}: {} cards at {:?}",
        cards.first().map(|c| c.group_name),
        cards.len(),
        bp
    );

    let mut group = Fieldset(
        legend,
        Modifier::new()
            .flex_dir(FlexDirection::Row)
            .flex_wrap(FlexWrap::Wrap)
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center)
            .max_width(spacing.max_width)
            .gap_xy(spacing.row_gap, spacing.column_gap),
    );
    if let Some(first) = cards.first() {
        group = group.key(first.group_name);
    }
    group.child(cards.iter().map(RadioCard).collect::<Vec<_>>())
}
