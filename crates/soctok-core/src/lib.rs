#![forbid(unsafe_code)]

//! Officer social-graph payload model + color bucketing (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (a payload plus a scheme fully
//!   determines every color in the token)
//! - no ambient state: the focused officer and the ambient background color
//!   are threaded through every color function as parameters
//! - bucket tables are configuration, not hard-coded truth; both observed
//!   production variants ship as [`ColorScheme`] constructors

pub mod color;
pub mod error;
pub mod model;
pub mod scheme;

pub use color::{background_color, edge_color, fill_color, stroke_color};
pub use error::{Error, Result};
pub use model::{GraphPayload, Link, Officer};
pub use scheme::{Attribute, ColorScheme, ThresholdScale};

#[cfg(test)]
mod tests;
