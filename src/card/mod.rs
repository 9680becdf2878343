//! SVG quote cards.
//!
//! A card is laid out without any font metrics: lines are wrapped with a fixed per-character
//! width, stacked at a fixed line height, and the block is centred vertically leaving room for
//! the author line and the rule beneath the text.

use crate::models::quotes::Quote;

pub mod escape;
pub mod theme;
pub mod wrap;

pub use escape::escape_xml;
pub use theme::{Palette, Theme};
pub use wrap::wrap_text;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;

pub const LINE_HEIGHT: f64 = 35.0;
/// Horizontal space kept free around the wrapped text.
const WRAP_MARGIN: i64 = 100;
/// Vertical space reserved for the author line and the rule.
const DECORATION_HEIGHT: f64 = 60.0;
const BASELINE_OFFSET: f64 = 40.0;
const AUTHOR_OFFSET: f64 = 40.0;
const RULE_OFFSET: f64 = 15.0;
const RULE_HALF_LENGTH: f64 = 100.0;

/// Card query parameters as they arrive on the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderQuery {
    pub width: Option<String>,
    pub height: Option<String>,
    pub theme: Option<String>,
}

impl RenderQuery {
    /// Picks the card options out of raw query pairs. A repeated key keeps its first value
    /// and unrelated keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = RenderQuery::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "width" => &mut query.width,
                "height" => &mut query.height,
                "theme" => &mut query.theme,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: Theme::default(),
        }
    }
}

impl From<&RenderQuery> for RenderOptions {
    fn from(query: &RenderQuery) -> Self {
        Self {
            width: parse_dimension(query.width.as_deref()).unwrap_or(DEFAULT_WIDTH),
            height: parse_dimension(query.height.as_deref()).unwrap_or(DEFAULT_HEIGHT),
            theme: Theme::resolve(query.theme.as_deref()),
        }
    }
}

/// Reads the leading integer of `raw` (`"1200px"` is 1200). Anything without leading digits,
/// zero, negative or out of range yields `None`.
fn parse_dimension(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim_start();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse::<u32>().ok().filter(|value| *value > 0)
}

/// Renders `quote` as a standalone SVG document.
pub fn generate_svg(quote: &Quote, options: &RenderOptions) -> String {
    let colors = options.theme.palette();

    let width = options.width;
    let height = options.height;
    let center_x = f64::from(width) / 2.0;

    let lines = wrap_text(&quote.text, i64::from(width) - WRAP_MARGIN);
    let text_block_height = lines.len() as f64 * LINE_HEIGHT;
    let start_y =
        (f64::from(height) - text_block_height - DECORATION_HEIGHT) / 2.0 + BASELINE_OFFSET;

    let author = escape_xml(&quote.author);
    let author_y = start_y + text_block_height + AUTHOR_OFFSET;
    let rule_y = start_y + text_block_height + RULE_OFFSET;
    let rule_x1 = center_x - RULE_HALF_LENGTH;
    let rule_x2 = center_x + RULE_HALF_LENGTH;

    let tspans = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                r#"<tspan x="{center_x}" y="{}">{}</tspan>"#,
                start_y + i as f64 * LINE_HEIGHT,
                escape_xml(line)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#667eea;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#764ba2;stop-opacity:1" />
    </linearGradient>
  </defs>

  <!-- Background -->
  <rect width="{width}" height="{height}" fill="{background}" rx="10"/>

  <!-- Decorative quote marks -->
  <text x="50" y="60" font-family="Georgia, serif" font-size="60" fill="{accent}" opacity="0.3">"</text>

  <!-- Quote text -->
  <text font-family="Georgia, serif" font-size="24" fill="{text_color}" text-anchor="middle">
    {tspans}
  </text>

  <!-- Author -->
  <text x="{center_x}" y="{author_y}" font-family="Georgia, serif" font-size="20" fill="{author_color}" text-anchor="middle" font-style="italic">
    — {author}
  </text>

  <!-- Decorative line -->
  <line x1="{rule_x1}" y1="{rule_y}" x2="{rule_x2}" y2="{rule_y}" stroke="{accent}" stroke-width="2" opacity="0.5"/>
</svg>"##,
        background = colors.background,
        accent = colors.accent,
        text_color = colors.text,
        author_color = colors.author,
    )
}
