use serde::Serialize;

/// An SVG viewBox rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewbox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewbox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// Computes the padded bounding rectangle of a point set, for use as an SVG
/// viewBox. Returns `None` for an empty sequence; callers guarantee at least
/// one node.
pub fn fit_viewbox(points: impl IntoIterator<Item = (f64, f64)>, padding: f64) -> Option<Viewbox> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for (x, y) in points {
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds?;
    Some(Viewbox::new(
        min_x - padding,
        min_y - padding,
        (max_x - min_x) + padding * 2.0,
        (max_y - min_y) + padding * 2.0,
    ))
}
