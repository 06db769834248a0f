use crate::{Force, Lcg, Node};

/// Translates the whole system so its centroid sits at a fixed point.
///
/// A positional force: it moves `x`/`y` directly and ignores alpha, matching
/// `d3.forceCenter`.
pub struct Center {
    x: f64,
    y: f64,
    strength: f64,
}

impl Default for Center {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Center {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            strength: 1.0,
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }
}

impl Force for Center {
    fn apply(&mut self, nodes: &mut [Node], _alpha: f64, _random: &mut Lcg) {
        if nodes.is_empty() {
            return;
        }
        let n = nodes.len() as f64;
        let mut sx = 0.0;
        let mut sy = 0.0;
        for node in nodes.iter() {
            sx += node.x;
            sy += node.y;
        }
        sx = (sx / n - self.x) * self.strength;
        sy = (sy / n - self.y) * self.strength;
        for node in nodes.iter_mut() {
            node.x -= sx;
            node.y -= sy;
        }
    }
}
