//! Inspection helpers for view trees.
//!
//! - `markup`: indented HTML-like dump, stable across runs.
//! - `accessibility_tree`: what assistive technology sees.
//! - `Metrics`: node counts.

use std::fmt::Write as _;

use radiocards_core::{Cursor, FocusRing, Modifier, Role, View, ViewKind};
use serde::Serialize;

/// Serialize `view` and all descendants.
///
/// Static styles go into `style`; state-dependent ones (hover, focus) into
/// `data-*` attributes because they only apply while the host reports that
/// state.
pub fn markup(view: &View) -> String {
    let mut out = String::new();
    write_node(&mut out, view, 0);
    log::debug!("markup: {} bytes", out.len());
    out
}

struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    styles: Vec<String>,
    text: Option<String>,
    void: bool,
}

fn element(view: &View) -> Element {
    let mut el = Element {
        tag: "div",
        attrs: Vec::new(),
        styles: Vec::new(),
        text: None,
        void: false,
    };
    match &view.kind {
        ViewKind::Row | ViewKind::Column => {}
        ViewKind::Fieldset => el.tag = "fieldset",
        ViewKind::Legend { text } => {
            el.tag = "legend";
            el.text = Some(text.clone());
        }
        ViewKind::Text {
            text,
            color,
            font_size,
            font_weight,
        } => {
            el.tag = "span";
            el.text = Some(text.clone());
            el.styles.push(format!("color:{}", color.to_hex()));
            el.styles.push(format!("font-size:{}", px(*font_size)));
            el.styles.push(format!("font-weight:{}", font_weight.numeric()));
        }
        ViewKind::Icon { handle, color } => {
            el.tag = "svg";
            el.void = true;
            el.attrs.push(("data-icon", Some(handle.name.to_owned())));
            el.attrs.push(("width", Some(handle.size.to_string())));
            el.attrs.push(("height", Some(handle.size.to_string())));
            if let Some(c) = color {
                el.styles.push(format!("color:{}", c.to_hex()));
            }
        }
        ViewKind::RadioInput {
            id,
            name,
            value,
            checked,
            disabled,
        } => {
            el.tag = "input";
            el.void = true;
            el.attrs.push(("type", Some("radio".to_owned())));
            el.attrs.push(("id", Some(id.clone())));
            el.attrs.push(("name", Some(name.clone())));
            el.attrs.push(("value", Some(value.clone())));
            if *checked {
                el.attrs.push(("checked", None));
            }
            if *disabled {
                el.attrs.push(("disabled", None));
            }
        }
        ViewKind::Label { for_id } => {
            el.tag = "label";
            el.attrs.push(("for", Some(for_id.clone())));
        }
    }
    el
}

fn implied_role(tag: &str) -> Option<Role> {
    match tag {
        "fieldset" => Some(Role::Group),
        "input" => Some(Role::RadioButton),
        _ => None,
    }
}

fn write_node(out: &mut String, view: &View, depth: usize) {
    let indent = "  ".repeat(depth);
    let el = element(view);

    let mut attrs: Vec<(&'static str, Option<String>)> = Vec::new();
    if let Some(key) = &view.key {
        attrs.push(("data-key", Some(key.clone())));
    }
    if let Some(sem) = &view.semantics
        && implied_role(el.tag) != Some(sem.role)
    {
        attrs.push(("role", Some(role_name(sem.role).to_owned())));
    }
    attrs.extend(el.attrs);

    let mut styles = el.styles;
    styles.extend(style_decls(&view.modifier));
    if !styles.is_empty() {
        attrs.push(("style", Some(styles.join(";"))));
    }
    if let Some(c) = view.modifier.hover_background {
        attrs.push(("data-hover-background", Some(c.to_hex())));
    }
    if let Some(ring) = &view.modifier.focus_ring {
        attrs.push(("data-focus-ring", Some(ring_shadow(ring))));
    }

    let _ = write!(out, "{indent}<{}", el.tag);
    for (name, value) in &attrs {
        match value {
            Some(v) => {
                let _ = write!(out, " {name}=\"{}\"", escape(v));
            }
            None => {
                let _ = write!(out, " {name}");
            }
        }
    }

    if el.void {
        out.push_str(" />\n");
        return;
    }
    out.push('>');
    if let Some(text) = &el.text {
        out.push_str(&escape(text));
    }
    if view.children.is_empty() {
        let _ = writeln!(out, "</{}>", el.tag);
        return;
    }
    out.push('\n');
    for child in &view.children {
        write_node(out, child, depth + 1);
    }
    let _ = writeln!(out, "{indent}</{}>", el.tag);
}

fn style_decls(m: &Modifier) -> Vec<String> {
    let mut s = Vec::new();
    if let Some(dir) = m.flex_dir {
        s.push("display:flex".to_owned());
        s.push(format!("flex-direction:{}", kebab(&format!("{dir:?}"))));
    }
    if let Some(wrap) = m.flex_wrap {
        s.push(format!("flex-wrap:{}", kebab(&format!("{wrap:?}"))));
    }
    if let Some(j) = m.justify_content {
        s.push(format!("justify-content:{}", kebab(&format!("{j:?}"))));
    }
    if let Some(a) = m.align_items_container {
        s.push(format!("align-items:{}", kebab(&format!("{a:?}"))));
    }
    if let Some(gap) = m.gap {
        if gap.row == gap.column {
            s.push(format!("gap:{}", px(gap.row)));
        } else {
            s.push(format!("gap:{} {}", px(gap.row), px(gap.column)));
        }
    }
    if let Some(p) = m.padding_values {
        s.push(format!(
            "padding:{} {} {} {}",
            px(p.top),
            px(p.right),
            px(p.bottom),
            px(p.left)
        ));
    }
    if let Some(w) = m.max_width {
        s.push(format!("max-width:{}", px(w)));
    }
    if m.fill_max_w {
        s.push("width:100%".to_owned());
    }
    if m.fill_max_h {
        s.push("min-height:100%".to_owned());
    }
    if let Some(bg) = m.background {
        s.push(format!("background:{}", bg.to_hex()));
    }
    if let Some(b) = m.border {
        s.push(format!("border:{} solid {}", px(b.width), b.color.to_hex()));
        s.push(format!("border-radius:{}", px(b.radius)));
    }
    if let Some(c) = m.content_color {
        s.push(format!("color:{}", c.to_hex()));
    }
    if let Some(cursor) = m.cursor {
        let v = match cursor {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        };
        s.push(format!("cursor:{v}"));
    }
    if m.visually_hidden {
        s.push(
            "position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0)".to_owned(),
        );
    }
    s
}

fn ring_shadow(ring: &FocusRing) -> String {
    ring.layers
        .iter()
        .map(|l| format!("0 0 0 {} {}", px(l.spread), l.color.to_hex()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn px(v: f32) -> String {
    format!("{v}px")
}

/// `SpaceBetween` -> `space-between`
fn kebab(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Main => "main",
        Role::Group => "group",
        Role::RadioButton => "radio",
    }
}

/// One node of the accessibility tree. Views without semantics are
/// transparent: their children attach to the nearest semantic ancestor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct A11yNode {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    pub enabled: bool,
    pub focusable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<A11yNode>,
}

pub fn accessibility_tree(view: &View) -> Vec<A11yNode> {
    let mut roots = Vec::new();
    collect_a11y(view, &mut roots);
    roots
}

fn collect_a11y(view: &View, out: &mut Vec<A11yNode>) {
    let Some(sem) = &view.semantics else {
        for child in &view.children {
            collect_a11y(child, out);
        }
        return;
    };
    let mut node = A11yNode {
        role: role_name(sem.role),
        name: sem.label.clone(),
        checked: sem.checked,
        enabled: sem.enabled,
        focusable: sem.focusable,
        children: Vec::new(),
    };
    for child in &view.children {
        collect_a11y(child, &mut node.children);
    }
    out.push(node);
}

pub fn accessibility_json(view: &View) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&accessibility_tree(view))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub nodes: usize,
    pub groups: usize,
    pub radio_inputs: usize,
    pub checked: usize,
    pub disabled: usize,
    pub focusable: usize,
}

impl Metrics {
    pub fn collect(view: &View) -> Self {
        let mut m = Metrics::default();
        view.visit(&mut |v| {
            m.nodes += 1;
            match &v.kind {
                ViewKind::Fieldset => m.groups += 1,
                ViewKind::RadioInput {
                    checked, disabled, ..
                } => {
                    m.radio_inputs += 1;
                    m.checked += usize::from(*checked);
                    m.disabled += usize::from(*disabled);
                }
                _ => {}
            }
            if v.semantics.as_ref().is_some_and(|s| s.focusable) {
                m.focusable += 1;
            }
        });
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiocards_core::{Semantics, with_viewport_width};
    use radiocards_ui::{CardSize, CardSpec, RadioCard, RadioGroup, TIME_PERIOD_LEGEND, icons};
    use serde_json::json;

    const MONTHLY: &[CardSpec<'static>] = &[
        CardSpec::new(CardSize::Sm, "icon-left-text", "monthly")
            .label("Monthly")
            .leading_icon(icons::CALENDAR_TODO_LINE)
            .checked(true),
        CardSpec::new(CardSize::Xxl, "icon-only", "monthly")
            .leading_icon(icons::CALENDAR_TODO_LINE.with_size(24.0))
            .checked(true),
    ];

    #[test]
    fn disabled_card_markup() {
        let spec = CardSpec::new(CardSize::Md, "text-only", "annually")
            .label("Annually")
            .disabled(true);
        insta::assert_snapshot!(markup(&RadioCard(&spec)).trim_end(), @r##"
        <div data-key="text-only" style="display:flex;flex-direction:row;background:#f5f5f5;border:1px solid #e5e5e5;border-radius:4px;color:#a3a3a3;cursor:not-allowed" data-focus-ring="0 0 0 1px #444ce71a, 0 0 0 4px #444ce71f">
          <input type="radio" id="text-only-annually" name="annually" value="text-only" disabled style="position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0)" />
          <label for="text-only-annually" style="display:flex;flex-direction:row;justify-content:center;align-items:center;gap:4px;padding:10px 14px 10px 14px;cursor:not-allowed">
            <span style="color:#a3a3a3;font-size:14px;font-weight:500;padding:0px 2px 0px 2px">Annually</span>
          </label>
        </div>
        "##);
    }

    #[test]
    fn hover_and_icons_show_up_as_attributes() {
        let spec = CardSpec::new(CardSize::Sm, "icon-left-text", "weekly")
            .label("Weekly")
            .leading_icon(icons::CALENDAR_VIEW);
        let out = markup(&RadioCard(&spec));

        assert!(out.contains(r##"data-hover-background="#fafafa""##));
        assert!(out.contains(r#"<svg data-icon="calendar-view" width="20" height="20" />"#));
        assert!(!out.contains(" checked"));
        assert!(out.find("<svg").unwrap() < out.find("<span").unwrap());
    }

    #[test]
    fn group_markup_wraps_cards_in_a_fieldset() {
        let out = with_viewport_width(375.0, || markup(&RadioGroup(TIME_PERIOD_LEGEND, MONTHLY)));
        let first = out.lines().next().unwrap();

        assert_eq!(
            first,
            r#"<fieldset data-key="monthly" style="display:flex;flex-direction:row;flex-wrap:wrap;justify-content:center;align-items:center;gap:12px 16px;max-width:320px">"#
        );
        assert!(out.contains(r#"<legend style="position:absolute;"#));
        assert!(out.contains(">Select time period</legend>"));
        assert_eq!(out.matches(" checked ").count(), 2);
        assert!(out.trim_end().ends_with("</fieldset>"));
    }

    #[test]
    fn role_is_emitted_when_the_tag_does_not_imply_it() {
        let main = View::new(ViewKind::Column).semantics(Semantics::new(Role::Main));
        assert_eq!(markup(&main), "<div role=\"main\"></div>\n");
    }

    #[test]
    fn text_is_escaped() {
        let legend = View::new(ViewKind::Legend {
            text: "Weekly & <monthly>".into(),
        });
        assert_eq!(
            markup(&legend),
            "<legend>Weekly &amp; &lt;monthly&gt;</legend>\n"
        );
    }

    #[test]
    fn kebab_case_matches_css_keywords() {
        assert_eq!(kebab("SpaceBetween"), "space-between");
        assert_eq!(kebab("Center"), "center");
        assert_eq!(kebab("RowReverse"), "row-reverse");
    }

    #[test]
    fn accessibility_tree_exposes_group_and_radios() {
        let group = RadioGroup(TIME_PERIOD_LEGEND, MONTHLY);
        let tree = serde_json::to_value(accessibility_tree(&group)).unwrap();

        assert_eq!(
            tree,
            json!([{
                "role": "group",
                "name": "Select time period",
                "enabled": true,
                "focusable": false,
                "children": [
                    {
                        "role": "radio",
                        "name": "Monthly",
                        "checked": true,
                        "enabled": true,
                        "focusable": true
                    },
                    {
                        "role": "radio",
                        "checked": true,
                        "enabled": true,
                        "focusable": true
                    }
                ]
            }])
        );
    }

    #[test]
    fn card_label_is_announced_once() {
        let spec = CardSpec::new(CardSize::Lg, "text-icon-right", "weekly")
            .label("Weekly")
            .trailing_icon(icons::CALENDAR_VIEW);
        let tree = accessibility_tree(&RadioCard(&spec));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].role, "radio");
        assert_eq!(tree[0].name.as_deref(), Some("Weekly"));
        assert!(tree[0].children.is_empty());
        assert!(markup(&RadioCard(&spec)).contains(">Weekly</span>"));
    }

    #[test]
    fn metrics_count_inputs_and_states() {
        let group = RadioGroup(TIME_PERIOD_LEGEND, MONTHLY);
        assert_eq!(
            Metrics::collect(&group),
            Metrics {
                // fieldset, legend, 2 x (card, input, label), icon, text, icon
                nodes: 11,
                groups: 1,
                radio_inputs: 2,
                checked: 2,
                disabled: 0,
                focusable: 2,
            }
        );
    }
}
