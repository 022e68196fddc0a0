use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use radiocards_core::{
    AlignItems, Color, Cursor, FlexDirection, FocusRing, JustifyContent, Modifier, RingLayer,
    Theme,
};
use smallvec::SmallVec;

use crate::{Error, icons};

/// The five card sizes. Closed on purpose: every mapping below is an
/// exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardSize {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl CardSize {
    pub const ALL: [CardSize; 5] = [
        CardSize::Sm,
        CardSize::Md,
        CardSize::Lg,
        CardSize::Xl,
        CardSize::Xxl,
    ];

    pub const fn preset(self) -> SizePreset {
        match self {
            CardSize::Sm => SizePreset::new(12.0, 8.0, 4.0),
            CardSize::Md => SizePreset::new(14.0, 10.0, 4.0),
            CardSize::Lg => SizePreset::new(16.0, 10.0, 6.0),
            CardSize::Xl => SizePreset::new(20.0, 12.0, 6.0),
            CardSize::Xxl => SizePreset::new(24.0, 16.0, 10.0),
        }
    }

    pub const fn icon_size(self) -> f32 {
        match self {
            CardSize::Xxl => icons::ICON_SIZE_LARGE,
            CardSize::Sm | CardSize::Md | CardSize::Lg | CardSize::Xl => icons::ICON_SIZE,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            CardSize::Sm => "sm",
            CardSize::Md => "md",
            CardSize::Lg => "lg",
            CardSize::Xl => "xl",
            CardSize::Xxl => "2xl",
        }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CardSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardSize::ALL
            .into_iter()
            .find(|size| size.token() == s)
            .ok_or_else(|| Error::UnknownSize(s.to_owned()))
    }
}

/// Label padding and spacing between content slots, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizePreset {
    pub padding_x: f32,
    pub padding_y: f32,
    pub gap: f32,
}

impl SizePreset {
    pub const fn new(padding_x: f32, padding_y: f32, gap: f32) -> Self {
        Self {
            padding_x,
            padding_y,
            gap,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CardState {
    pub checked: bool,
    pub disabled: bool,
}

impl CardState {
    /// Rules that apply to this state, in precedence order (later wins).
    pub fn rules(self) -> SmallVec<[StyleRule; 2]> {
        let mut rules = SmallVec::new();
        if self.checked {
            rules.push(StyleRule::CHECKED);
        }
        if self.disabled {
            rules.push(StyleRule::DISABLED);
        }
        rules
    }
}

bitflags! {
    /// Named visual adjustments a card can carry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StyleModifiers: u8 {
        const NEUTRAL_BORDER = 1 << 0;
        const ACCENT_BORDER = 1 << 1;
        const HOVER_HIGHLIGHT = 1 << 2;
        const MUTED_BACKGROUND = 1 << 3;
        const MUTED_TEXT = 1 << 4;
        const NOT_ALLOWED_CURSOR = 1 << 5;
        const FOCUS_RING = 1 << 6;
    }
}

impl StyleModifiers {
    /// Every card starts here. The focus ring is unconditional; disabled
    /// inputs never take focus, so it stays dormant on them.
    pub const BASE: StyleModifiers = StyleModifiers::NEUTRAL_BORDER
        .union(StyleModifiers::HOVER_HIGHLIGHT)
        .union(StyleModifiers::FOCUS_RING);

    pub fn merge(self, rule: StyleRule) -> StyleModifiers {
        self.difference(rule.remove).union(rule.add)
    }

    pub fn resolve(state: CardState) -> StyleModifiers {
        state.rules().into_iter().fold(Self::BASE, Self::merge)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub add: StyleModifiers,
    pub remove: StyleModifiers,
}

impl StyleRule {
    /// Accent border replaces the neutral one. Hover stays.
    pub const CHECKED: StyleRule = StyleRule {
        add: StyleModifiers::ACCENT_BORDER,
        remove: StyleModifiers::NEUTRAL_BORDER,
    };

    /// Mutes the card and drops hover feedback. Border bits are left alone.
    pub const DISABLED: StyleRule = StyleRule {
        add: StyleModifiers::MUTED_BACKGROUND
            .union(StyleModifiers::MUTED_TEXT)
            .union(StyleModifiers::NOT_ALLOWED_CURSOR),
        remove: StyleModifiers::HOVER_HIGHLIGHT,
    };
}

/// Resolved, theme-independent style of one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub size: CardSize,
    pub preset: SizePreset,
    pub modifiers: StyleModifiers,
}

impl CardStyle {
    pub const BORDER_WIDTH: f32 = 1.0;
    pub const CORNER_RADIUS: f32 = 4.0;
    pub const TEXT_SIZE: f32 = 14.0;
    pub const TEXT_PADDING_X: f32 = 2.0;

    pub fn resolve(size: CardSize, state: CardState) -> Self {
        Self {
            size,
            preset: size.preset(),
            modifiers: StyleModifiers::resolve(state),
        }
    }

    pub fn has(&self, m: StyleModifiers) -> bool {
        self.modifiers.contains(m)
    }

    pub fn cursor(&self) -> Cursor {
        if self.has(StyleModifiers::NOT_ALLOWED_CURSOR) {
            Cursor::NotAllowed
        } else {
            Cursor::Pointer
        }
    }

    pub fn border_color(&self, theme: &Theme) -> Option<Color> {
        if self.has(StyleModifiers::ACCENT_BORDER) {
            Some(theme.accent)
        } else if self.has(StyleModifiers::NEUTRAL_BORDER) {
            Some(theme.outline)
        } else {
            None
        }
    }

    pub fn text_color(&self, theme: &Theme) -> Color {
        if self.has(StyleModifiers::MUTED_TEXT) {
            theme.disabled_content
        } else {
            theme.on_surface
        }
    }

    /// Outer card: border, backgrounds, cursor and focus ring.
    pub fn container_modifier(&self, theme: &Theme) -> Modifier {
        let mut m = Modifier::new().cursor(self.cursor());
        if let Some(color) = self.border_color(theme) {
            m = m.border(Self::BORDER_WIDTH, color, Self::CORNER_RADIUS);
        }
        if self.has(StyleModifiers::HOVER_HIGHLIGHT) {
            m = m.hover_background(theme.hover);
        }
        if self.has(StyleModifiers::MUTED_BACKGROUND) {
            m = m.background(theme.disabled_background);
        }
        if self.has(StyleModifiers::MUTED_TEXT) {
            m = m.content_color(theme.disabled_content);
        }
        if self.has(StyleModifiers::FOCUS_RING) {
            m = m.focus_ring(FocusRing {
                layers: vec![
                    RingLayer {
                        spread: 1.0,
                        color: theme.focus_ring_inner,
                    },
                    RingLayer {
                        spread: 4.0,
                        color: theme.focus_ring_outer,
                    },
                ],
            });
        }
        m
    }

    /// Inner label: the size preset, centered content.
    pub fn label_modifier(&self) -> Modifier {
        Modifier::new()
            .flex_dir(FlexDirection::Row)
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center)
            .padding_xy(self.preset.padding_x, self.preset.padding_y)
            .gap(self.preset.gap)
            .cursor(self.cursor())
    }
}
