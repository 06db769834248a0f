//! Per-node color derivation.
//!
//! Every function here is pure: the focused officer id and the ambient
//! background color arrive as parameters, so repeated or concurrent renders
//! cannot interfere through hidden state.

use crate::model::Officer;
use crate::scheme::ColorScheme;
use crate::{Error, Result};
use regex::Regex;

fn hex_color_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid regex")
    })
}

/// The officer's tabulated background color for `scheme`.
pub fn background_color<'a>(scheme: &'a ColorScheme, officer: &Officer) -> Result<&'a str> {
    scheme.background_color(officer)
}

/// Derives the link/stroke grey for a background color by reflecting the
/// maximum channel around 60: `v - 60` when `v >= 60`, else `v + 60`. The
/// result is always distinguishable in luminance from the input, however
/// light or dark the input is.
pub fn edge_color(color: &str) -> Result<String> {
    let captures = hex_color_regex()
        .captures(color.trim())
        .ok_or_else(|| Error::InvalidColor {
            value: color.to_string(),
        })?;

    let mut max = 0u8;
    for i in 1..=3usize {
        let channel = u8::from_str_radix(&captures[i], 16).map_err(|_| Error::InvalidColor {
            value: color.to_string(),
        })?;
        max = max.max(channel);
    }

    let grey = if max >= 60 { max - 60 } else { max + 60 };
    Ok(format!("#{grey:02x}{grey:02x}{grey:02x}"))
}

/// Highlight fill for the focused officer, tabulated background otherwise.
pub fn fill_color<'a>(
    scheme: &'a ColorScheme,
    officer: &Officer,
    focused_id: i64,
) -> Result<&'a str> {
    if officer.id == focused_id {
        Ok(scheme.highlight_fill())
    } else {
        scheme.background_color(officer)
    }
}

/// Stroke for a node circle, or `None` for no stroke.
///
/// The focused officer gets the scheme's highlight stroke. Any other node is
/// stroked only when its fill exactly equals the ambient background color,
/// so low-contrast nodes stay visible against the canvas.
pub fn stroke_color(
    scheme: &ColorScheme,
    officer: &Officer,
    focused_id: i64,
    ambient_background: &str,
) -> Result<Option<String>> {
    if officer.id == focused_id {
        return Ok(scheme.highlight_stroke().map(str::to_string));
    }
    let fill = fill_color(scheme, officer, focused_id)?;
    if fill == ambient_background {
        Ok(Some(edge_color(ambient_background)?))
    } else {
        Ok(None)
    }
}
