#![forbid(unsafe_code)]

//! `soctok` renders force-directed officer social graphs into shareable SVG
//! "visual token" images, headlessly.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`soctok::render`)

pub use soctok_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use soctok_render::svg::{RenderedToken, Sizing, SvgRenderOptions};
    pub use soctok_render::{
        ForceDirectedEngine, LayoutEngine, LayoutOptions, LayoutedGraph, PositionedNode, Viewbox,
        fit_viewbox, layout_graph, render_svg,
    };

    use soctok_core::GraphPayload;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] soctok_core::Error),
        #[error(transparent)]
        Render(#[from] soctok_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Renders a payload to a visual token in one call.
    ///
    /// Pure per render: the payload and options fully determine the output,
    /// so repeated or concurrent renders cannot interfere.
    pub fn render_token(
        payload: &GraphPayload,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<RenderedToken> {
        let layout = layout_graph(payload, layout_options)?;
        Ok(render_svg(&layout, svg_options)?)
    }

    /// Parses the payload JSON and renders it.
    pub fn render_token_json(
        payload_json: &str,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<RenderedToken> {
        let payload = GraphPayload::from_json(payload_json)?;
        render_token(&payload, layout_options, svg_options)
    }
}
