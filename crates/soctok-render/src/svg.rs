//! SVG serialization of a laid-out graph.
//!
//! Element structure mirrors what the production D3 renderer left in the
//! DOM: a `link-group` of lines under a `node-group` of circles, each circle
//! carrying its officer's name as a `<title>`.

use crate::model::LayoutedGraph;
use crate::viewbox::{Viewbox, fit_viewbox};
use crate::{Error, Result};
use soctok_core::{ColorScheme, edge_color, fill_color, stroke_color};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// viewBox fitted tightly to the laid-out nodes plus padding; the canvas
    /// takes the fitted size.
    Fitted,
    /// Fixed canvas with a predetermined viewBox, independent of where the
    /// simulation settled.
    FixedCanvas {
        width: f64,
        height: f64,
        viewbox: Viewbox,
    },
}

impl Sizing {
    /// The 1200x630 social-media card canvas.
    pub fn social_media_canvas() -> Self {
        Self::FixedCanvas {
            width: 1200.0,
            height: 630.0,
            viewbox: Viewbox::new(-381.0, -200.0, 762.0, 400.0),
        }
    }

    /// The square 675x675 canvas used for standalone SVG documents.
    pub fn square_canvas() -> Self {
        Self::FixedCanvas {
            width: 675.0,
            height: 675.0,
            viewbox: Viewbox::new(-337.5, -337.5, 675.0, 675.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    pub scheme: ColorScheme,
    pub sizing: Sizing,
    pub node_radius: f64,
    /// Extra space around the computed viewBox (fitted sizing only).
    pub viewbox_padding: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::complaint_trr(),
            sizing: Sizing::Fitted,
            node_radius: 10.0,
            viewbox_padding: 20.0,
        }
    }
}

/// A rendered visual token. The background color is surfaced separately so
/// embedders can match the page chrome to the token.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedToken {
    pub background_color: String,
    pub svg: String,
}

pub fn render_svg(layout: &LayoutedGraph, options: &SvgRenderOptions) -> Result<RenderedToken> {
    let focused = layout
        .focused_node()
        .ok_or_else(|| Error::InvalidModel {
            message: format!("focused officer {} not present in layout", layout.focused_id),
        })?
        .officer
        .clone();

    let scheme = &options.scheme;
    let background = scheme.background_color(&focused)?.to_string();
    let link_stroke = edge_color(&background)?;

    let viewbox = match options.sizing {
        Sizing::Fitted => fit_viewbox(layout.positions(), options.viewbox_padding)
            .ok_or(soctok_core::Error::EmptyGraph)?,
        Sizing::FixedCanvas { viewbox, .. } => viewbox,
    };
    let (width, height) = match options.sizing {
        Sizing::Fitted => (viewbox.width, viewbox.height),
        Sizing::FixedCanvas { width, height, .. } => (width, height),
    };

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}" style="background-color: {}">"#,
        fmt(width),
        fmt(height),
        fmt(viewbox.min_x),
        fmt(viewbox.min_y),
        fmt(viewbox.width.max(1.0)),
        fmt(viewbox.height.max(1.0)),
        escape_xml(&background),
    );

    out.push_str(r#"<g class="link-group">"#);
    for link in &layout.links {
        let source = &layout.nodes[link.source];
        let target = &layout.nodes[link.target];
        let _ = write!(
            &mut out,
            r#"<line class="link" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" shape-rendering="optimizeQuality" />"#,
            fmt(source.x),
            fmt(source.y),
            fmt(target.x),
            fmt(target.y),
            escape_xml(&link_stroke),
        );
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="node-group">"#);
    for node in &layout.nodes {
        let fill = fill_color(scheme, &node.officer, layout.focused_id)?;
        let stroke = stroke_color(scheme, &node.officer, layout.focused_id, &background)?;
        let stroke_width = if node.officer.id == layout.focused_id {
            3.0
        } else {
            1.0
        };

        let _ = write!(
            &mut out,
            r#"<circle class="node" cx="{}" cy="{}" r="{}" stroke-width="{}""#,
            fmt(node.x),
            fmt(node.y),
            fmt(options.node_radius),
            fmt(stroke_width),
        );
        if let Some(stroke) = stroke {
            let _ = write!(&mut out, r#" stroke="{}""#, escape_xml(&stroke));
        }
        let _ = write!(
            &mut out,
            r#" fill="{}"><title>{}</title></circle>"#,
            escape_xml(fill),
            escape_xml(&node.officer.name),
        );
    }
    out.push_str("</g>\n");
    out.push_str("</svg>\n");

    tracing::debug!(
        background = background.as_str(),
        nodes = layout.nodes.len(),
        links = layout.links.len(),
        "rendered visual token"
    );

    Ok(RenderedToken {
        background_color: background,
        svg: out,
    })
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form (similar to JS `Number#toString()`), but
    // avoiding `-0` and tiny float noise from our own calculations.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
