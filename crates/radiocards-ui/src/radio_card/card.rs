use radiocards_core::{FontWeight, IconHandle, Modifier, View, theme};
use smallvec::SmallVec;

use super::{CardSize, CardState, CardStyle};
use crate::{Icon, Label, RadioInput, Row, Text, TextStyle, ViewExt};

/// Static description of one selectable option.
///
/// All fields are `Copy`, so whole groups can live in `const` slices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSpec<'a> {
    pub size: CardSize,
    pub label: Option<&'a str>,
    pub leading_icon: Option<IconHandle>,
    pub trailing_icon: Option<IconHandle>,
    /// Draw the leading icon after the text. The trailing icon does not move.
    pub swap_icons: bool,
    /// Unique within the group.
    pub value: &'a str,
    /// Shared by every card of one group.
    pub group_name: &'a str,
    pub checked: bool,
    pub disabled: bool,
}

impl<'a> CardSpec<'a> {
    pub const fn new(size: CardSize, value: &'a str, group_name: &'a str) -> Self {
        Self {
            size,
            label: None,
            leading_icon: None,
            trailing_icon: None,
            swap_icons: false,
            value,
            group_name,
            checked: false,
            disabled: false,
        }
    }
    pub const fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
    pub const fn leading_icon(mut self, icon: IconHandle) -> Self {
        self.leading_icon = Some(icon);
        self
    }
    pub const fn trailing_icon(mut self, icon: IconHandle) -> Self {
        self.trailing_icon = Some(icon);
        self
    }
    pub const fn swap_icons(mut self, swap: bool) -> Self {
        self.swap_icons = swap;
        self
    }
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Pairs the input with its label: `{value}-{group_name}`.
    pub fn input_id(&self) -> String {
        format!("{}-{}", self.value, self.group_name)
    }

    pub fn state(&self) -> CardState {
        CardState {
            checked: self.checked,
            disabled: self.disabled,
        }
    }

    pub fn style(&self) -> CardStyle {
        CardStyle::resolve(self.size, self.state())
    }

    /// Label content in visual order. Missing fields leave no slot behind.
    pub fn content_slots(&self) -> SmallVec<[Slot<'a>; 3]> {
        let mut slots = SmallVec::new();
        if !self.swap_icons {
            slots.extend(self.leading_icon.map(Slot::Icon));
        }
        slots.extend(self.label.map(Slot::Text));
        if self.swap_icons {
            slots.extend(self.leading_icon.map(Slot::Icon));
        }
        slots.extend(self.trailing_icon.map(Slot::Icon));
        slots
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot<'a> {
    Icon(IconHandle),
    Text(&'a str),
}

pub fn RadioCard(spec: &CardSpec<'_>) -> View {
    let theme = theme();
    let style = spec.style();
    let id = spec.input_id();

    let content: Vec<View> = spec
        .content_slots()
        .into_iter()
        .map(|slot| match slot {
            Slot::Icon(handle) => Icon(handle),
            Slot::Text(text) => Text(text)
                .size(CardStyle::TEXT_SIZE)
                .weight(FontWeight::Medium)
                .color(style.text_color(&theme))
                .modifier(Modifier::new().padding_xy(CardStyle::TEXT_PADDING_X, 0.0)),
        })
        .collect();

    Row(style.container_modifier(&theme))
        .key(spec.value)
        .child((
            RadioInput(
                &id,
                spec.group_name,
                spec.value,
                spec.checked,
                spec.disabled,
                spec.label,
            ),
            Label(id, style.label_modifier()).child(content),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{ARROW_DOWN_S_LINE, CALENDAR_LINE, CALENDAR_TODO_LINE, CALENDAR_VIEW};
    use crate::radio_card::StyleModifiers;
    use radiocards_core::{Cursor, Role, ViewKind, palette};

    fn label_of(card: &View) -> &View {
        card.find(|v| matches!(v.kind, ViewKind::Label { .. }))
            .expect("card has a label")
    }

    fn content_kinds(card: &View) -> Vec<&'static str> {
        label_of(card)
            .children
            .iter()
            .map(|v| match &v.kind {
                ViewKind::Icon { .. } => "icon",
                ViewKind::Text { .. } => "text",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn slots_follow_leading_text_trailing() {
        let spec = CardSpec::new(CardSize::Xl, "icon-left-text-icon-right", "weekly")
            .label("Weekly")
            .leading_icon(CALENDAR_VIEW)
            .trailing_icon(ARROW_DOWN_S_LINE);
        assert_eq!(
            spec.content_slots().as_slice(),
            [
                Slot::Icon(CALENDAR_VIEW),
                Slot::Text("Weekly"),
                Slot::Icon(ARROW_DOWN_S_LINE)
            ]
        );
    }

    #[test]
    fn swap_moves_only_the_leading_icon() {
        let spec = CardSpec::new(CardSize::Xl, "icon-left-text-icon-right", "weekly")
            .label("Weekly")
            .leading_icon(CALENDAR_VIEW)
            .trailing_icon(ARROW_DOWN_S_LINE)
            .swap_icons(true);
        assert_eq!(
            spec.content_slots().as_slice(),
            [
                Slot::Text("Weekly"),
                Slot::Icon(CALENDAR_VIEW),
                Slot::Icon(ARROW_DOWN_S_LINE)
            ]
        );
    }

    #[test]
    fn swapped_leading_icon_without_trailing() {
        let spec = CardSpec::new(CardSize::Sm, "icon-left-text", "weekly")
            .label("Weekly")
            .leading_icon(CALENDAR_VIEW)
            .swap_icons(true);
        insta::assert_debug_snapshot!(spec.content_slots(), @r#"
        [
            Text(
                "Weekly",
            ),
            Icon(
                IconHandle {
                    name: "calendar-view",
                    size: 20.0,
                },
            ),
        ]
        "#);
    }

    #[test]
    fn missing_label_leaves_no_text_node() {
        let spec = CardSpec::new(CardSize::Xxl, "icon-only", "monthly")
            .leading_icon(CALENDAR_TODO_LINE.with_size(24.0));
        let card = RadioCard(&spec);

        assert_eq!(content_kinds(&card), ["icon"]);
        assert!(card.find(|v| matches!(v.kind, ViewKind::Text { .. })).is_none());
    }

    #[test]
    fn input_and_label_share_the_identifier() {
        let spec = CardSpec::new(CardSize::Md, "text-only", "weekly").label("Weekly");
        let card = RadioCard(&spec);

        let input = card
            .find(|v| matches!(v.kind, ViewKind::RadioInput { .. }))
            .unwrap();
        let ViewKind::RadioInput { id, name, value, .. } = &input.kind else {
            unreachable!()
        };
        assert_eq!(id, "text-only-weekly");
        assert_eq!(name, "weekly");
        assert_eq!(value, "text-only");
        assert!(input.modifier.visually_hidden);

        assert_eq!(
            label_of(&card).kind,
            ViewKind::Label {
                for_id: "text-only-weekly".into()
            }
        );
        assert_eq!(card.key.as_deref(), Some("text-only"));
    }

    #[test]
    fn weekly_small_card_is_neutral_and_hoverable() {
        let spec = CardSpec::new(CardSize::Sm, "icon-left-text", "weekly")
            .label("Weekly")
            .leading_icon(CALENDAR_VIEW);
        let card = RadioCard(&spec);

        assert_eq!(card.modifier.border.map(|b| b.color), Some(palette::NEUTRAL_200));
        assert_eq!(card.modifier.hover_background, Some(palette::NEUTRAL_50));
        assert!(!spec.style().has(StyleModifiers::ACCENT_BORDER));
        assert_eq!(content_kinds(&card), ["icon", "text"]);
    }

    #[test]
    fn monthly_icon_only_card_is_accented() {
        let spec = CardSpec::new(CardSize::Xxl, "icon-only", "monthly")
            .leading_icon(CALENDAR_TODO_LINE.with_size(24.0))
            .checked(true);
        let card = RadioCard(&spec);

        assert_eq!(card.modifier.border.map(|b| b.color), Some(palette::INDIGO_600));
        assert_eq!(content_kinds(&card), ["icon"]);

        let input = card
            .find(|v| matches!(v.kind, ViewKind::RadioInput { .. }))
            .unwrap();
        let sem = input.semantics.as_ref().unwrap();
        assert_eq!(sem.checked, Some(true));
        assert_eq!(sem.label, None);
    }

    #[test]
    fn annually_disabled_checked_card_is_muted_with_accent() {
        let spec = CardSpec::new(CardSize::Lg, "text-icon-right", "annually")
            .label("Annually")
            .trailing_icon(CALENDAR_LINE)
            .checked(true)
            .disabled(true);
        let card = RadioCard(&spec);
        let m = &card.modifier;

        assert_eq!(m.background, Some(palette::NEUTRAL_100));
        assert_eq!(m.content_color, Some(palette::NEUTRAL_400));
        assert_eq!(m.hover_background, None);
        assert_eq!(m.border.map(|b| b.color), Some(palette::INDIGO_600));
        assert_eq!(content_kinds(&card), ["text", "icon"]);

        let label = label_of(&card);
        assert_eq!(label.modifier.cursor, Some(Cursor::NotAllowed));
        let ViewKind::Text { color, .. } = &label.children[0].kind else {
            panic!("first slot is text")
        };
        assert_eq!(*color, palette::NEUTRAL_400);
    }

    #[test]
    fn only_the_radio_carries_the_label_semantics() {
        let spec = CardSpec::new(CardSize::Sm, "icon-left-text", "weekly")
            .label("Weekly")
            .leading_icon(CALENDAR_VIEW);
        let card = RadioCard(&spec);
        let named = card.find_all(|v| v.semantics.is_some());

        assert_eq!(named.len(), 1);
        assert!(matches!(named[0].kind, ViewKind::RadioInput { .. }));
        assert_eq!(
            named[0].semantics.as_ref().and_then(|s| s.label.as_deref()),
            Some("Weekly")
        );
    }

    #[test]
    fn disabled_input_is_not_focusable() {
        let spec = CardSpec::new(CardSize::Md, "text-only", "annually")
            .label("Annually")
            .disabled(true);
        let card = RadioCard(&spec);
        let input = card
            .find(|v| v.semantics.as_ref().is_some_and(|s| s.role == Role::RadioButton))
            .unwrap();
        let sem = input.semantics.as_ref().unwrap();

        assert!(!sem.enabled);
        assert!(!sem.focusable);
        assert_eq!(sem.label.as_deref(), Some("Annually"));
    }

    #[test]
    fn icons_inherit_the_card_color() {
        let spec = CardSpec::new(CardSize::Sm, "icon-left-text", "annually")
            .label("Annually")
            .leading_icon(CALENDAR_LINE)
            .disabled(true);
        let card = RadioCard(&spec);
        let icon = card
            .find(|v| matches!(v.kind, ViewKind::Icon { .. }))
            .unwrap();

        assert_eq!(
            icon.kind,
            ViewKind::Icon {
                handle: CALENDAR_LINE,
                color: None
            }
        );
    }
}
