use radiocards_core::prelude::*;
use radiocards_ui::*;

use crate::data::GROUPS;

fn vertical_padding(bp: Breakpoint) -> f32 {
    match bp {
        Breakpoint::Base => 128.0,
        Breakpoint::Md => 300.0,
        Breakpoint::Lg => 268.0,
    }
}

/// The whole page: one group per billing period, stacked and centered.
pub fn screen() -> View {
    let bp = breakpoint();
    Column(
        Modifier::new()
            .fill_max_width()
            .fill_max_height()
            .align_items(AlignItems::Center)
            .gap(32.0)
            .padding_xy(0.0, vertical_padding(bp))
            .background(theme().background),
    )
    .semantics(Semantics::new(Role::Main))
    .child(
        GROUPS
            .iter()
            .map(|cards| RadioGroup(TIME_PERIOD_LEGEND, cards))
            .collect::<Vec<_>>(),
    )
}
