use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use radiocards_core::with_viewport_width;
use radiocards_devtools::{Metrics, accessibility_json, markup};
use radiocards_ui::validate_group;

mod data;
mod page;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented HTML-like markup
    #[default]
    Markup,
    /// Accessibility tree as JSON
    A11y,
    /// Node and control counts as JSON
    Summary,
}

/// Render the billing-period radio card showcase.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markup)]
    format: Format,

    /// Viewport width in px, selects the responsive breakpoint
    #[arg(short, long, default_value_t = 1280.0)]
    width: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    for cards in data::GROUPS {
        validate_group(cards).context("invalid showcase data")?;
    }

    let view = with_viewport_width(args.width, page::screen);
    log::info!("rendered showcase at {}px as {:?}", args.width, args.format);

    let out = match args.format {
        Format::Markup => markup(&view),
        Format::A11y => accessibility_json(&view)?,
        Format::Summary => serde_json::to_string_pretty(&Metrics::collect(&view))?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_render_markup_at_desktop_width() {
        let args = Args::parse_from(["showcase"]);
        assert_eq!(args.format, Format::Markup);
        assert_eq!(args.width, 1280.0);
    }

    #[test]
    fn format_flag_parses() {
        let args = Args::parse_from(["showcase", "--format", "a11y", "-w", "375"]);
        assert_eq!(args.format, Format::A11y);
        assert_eq!(args.width, 375.0);
    }

    #[test]
    fn summary_counts_the_whole_page() {
        let m = Metrics::collect(&page::screen());
        assert_eq!(m.groups, 3);
        assert_eq!(m.radio_inputs, 15);
        assert_eq!(m.checked, 5);
        assert_eq!(m.disabled, 5);
        assert_eq!(m.focusable, 10);
    }
}
