//! color_converter: HEX / RGB / HSL / CSS-name conversion

use super::{parse_args, ToolOutput};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// CSS color names and their hex values.
const CSS_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("red", (0xFF, 0x00, 0x00)),
    ("blue", (0x00, 0x00, 0xFF)),
    ("green", (0x00, 0x80, 0x00)),
    ("white", (0xFF, 0xFF, 0xFF)),
    ("black", (0x00, 0x00, 0x00)),
    ("yellow", (0xFF, 0xFF, 0x00)),
    ("cyan", (0x00, 0xFF, 0xFF)),
    ("magenta", (0xFF, 0x00, 0xFF)),
    ("gray", (0x80, 0x80, 0x80)),
    ("grey", (0x80, 0x80, 0x80)),
    ("silver", (0xC0, 0xC0, 0xC0)),
    ("maroon", (0x80, 0x00, 0x00)),
    ("olive", (0x80, 0x80, 0x00)),
    ("lime", (0x00, 0xFF, 0x00)),
    ("aqua", (0x00, 0xFF, 0xFF)),
    ("teal", (0x00, 0x80, 0x80)),
    ("navy", (0x00, 0x00, 0x80)),
    ("purple", (0x80, 0x00, 0x80)),
    ("orange", (0xFF, 0xA5, 0x00)),
    ("pink", (0xFF, 0xC0, 0xCB)),
    ("brown", (0xA5, 0x2A, 0x2A)),
    ("gold", (0xFF, 0xD7, 0x00)),
    ("coral", (0xFF, 0x7F, 0x50)),
    ("salmon", (0xFA, 0x80, 0x72)),
    ("khaki", (0xF0, 0xE6, 0x8C)),
    ("plum", (0xDD, 0xA0, 0xDD)),
    ("turquoise", (0x40, 0xE0, 0xD0)),
    ("violet", (0xEE, 0x82, 0xEE)),
    ("indigo", (0x4B, 0x00, 0x82)),
];

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum FromFormat {
    #[default]
    Auto,
    Hex,
    Rgb,
    Hsl,
    Name,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ToFormat {
    #[default]
    All,
    Hex,
    Rgb,
    Hsl,
    Name,
}

#[derive(Debug, Deserialize)]
struct ColorArgs {
    color: String,
    #[serde(default)]
    from_format: FromFormat,
    #[serde(default)]
    to_format: ToFormat,
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: ColorArgs = parse_args(args)?;
    let input = args.color.trim().to_lowercase();

    let parsed = match args.from_format {
        FromFormat::Auto => parse_name(&input)
            .or_else(|| parse_hex(&input))
            .or_else(|| parse_rgb(&input))
            .or_else(|| parse_hsl(&input)),
        FromFormat::Hex => parse_hex(&input),
        FromFormat::Rgb => parse_rgb(&input),
        FromFormat::Hsl => parse_hsl(&input),
        FromFormat::Name => parse_name(&input),
    };

    let Some((r, g, b)) = parsed else {
        return Ok(ToolOutput::failure(format!(
            "❌ Unknown color format: '{input}'\n\n\
             Try formats:\n\
             - Hex: `#FF0000` or `FF0000`\n\
             - RGB: `rgb(255, 0, 0)`\n\
             - HSL: `hsl(0, 100%, 50%)`\n\
             - Name: `red`, `blue`, `green`"
        )));
    };

    let hex = format!("#{r:02X}{g:02X}{b:02X}");
    let rgb = format!("rgb({r}, {g}, {b})");
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let hsl = format!("hsl({h}, {s}%, {l}%)");
    let name = nearest_name(r, g, b);

    let text = match args.to_format {
        ToFormat::All => format!(
            "## 🎨 Color Converter\n\n\
             **Input:** `{input}`\n\n\
             **Formats:**\n\
             • **HEX:** `{hex}`\n\
             • **RGB:** `{rgb}`\n\
             • **HSL:** `{hsl}`\n\
             • **CSS Name:** `{name}`"
        ),
        ToFormat::Hex => format!("`{hex}`"),
        ToFormat::Rgb => format!("`{rgb}`"),
        ToFormat::Hsl => format!("`{hsl}`"),
        ToFormat::Name => format!("`{name}`"),
    };

    Ok(ToolOutput::success(text))
}

fn parse_name(input: &str) -> Option<(u8, u8, u8)> {
    CSS_COLORS
        .iter()
        .find(|(name, _)| *name == input)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn parse_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let body = input
        .strip_prefix("rgba(")
        .or_else(|| input.strip_prefix("rgb("))?
        .trim_end_matches(')');
    let mut parts = body.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    Some((r, g, b))
}

fn parse_hsl(input: &str) -> Option<(u8, u8, u8)> {
    let body = input.strip_prefix("hsl(")?.trim_end_matches(')');
    let mut parts = body.split(',').map(|p| p.trim().trim_end_matches('%'));
    let h: f64 = parts.next()?.parse().ok()?;
    let s: f64 = parts.next()?.parse().ok()?;
    let l: f64 = parts.next()?.parse().ok()?;
    Some(hsl_to_rgb(h / 360.0, s / 100.0, l / 100.0))
}

/// Euclidean RGB distance to the closest CSS color name.
fn nearest_name(r: u8, g: u8, b: u8) -> &'static str {
    let mut best = CSS_COLORS[0].0;
    let mut best_dist = i64::MAX;
    for (name, (cr, cg, cb)) in CSS_COLORS {
        let dr = i64::from(r) - i64::from(*cr);
        let dg = i64::from(g) - i64::from(*cg);
        let db = i64::from(b) - i64::from(*cb);
        let dist = dr * dr + dg * dg + db * db;
        if dist < best_dist {
            best_dist = dist;
            best = *name;
        }
    }
    best
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u32, u32, u32) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0, 0, (l * 100.0).round() as u32);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;

    (
        h.round() as u32 % 360,
        (s * 100.0).round() as u32,
        (l * 100.0).round() as u32,
    )
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s <= 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let to_channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    (
        to_channel(h + 1.0 / 3.0),
        to_channel(h),
        to_channel(h - 1.0 / 3.0),
    )
}
