#![forbid(unsafe_code)]

//! Headless layout + SVG rendering for officer social-graph visual tokens.
//!
//! The physics engine sits behind the narrow [`LayoutEngine`] seam so the
//! color and viewbox logic stays testable without a real simulation; the
//! default engine drives [`selkie`] with the production parameters (charge
//! -100, collision radius 10, centered, link distances 40-80, 300 ticks).

pub mod layout;
pub mod model;
pub mod svg;
pub mod viewbox;

use std::sync::Arc;

pub use layout::{ForceDirectedEngine, LayoutEngine, layout_graph};
pub use model::{LayoutedGraph, LayoutedLink, PositionedNode};
pub use svg::{RenderedToken, Sizing, SvgRenderOptions, render_svg};
pub use viewbox::{Viewbox, fit_viewbox};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] soctok_core::Error),
    #[error("invalid graph model: {message}")]
    InvalidModel { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub engine: Arc<dyn LayoutEngine + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            engine: Arc::new(ForceDirectedEngine::default()),
        }
    }
}
