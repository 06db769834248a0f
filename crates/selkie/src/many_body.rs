use crate::{Force, Lcg, Node, jiggle};

/// Mutual n-body force: negative strength repels (the usual charge force),
/// positive attracts.
///
/// Upstream approximates with a Barnes-Hut quadtree; coaccusal neighborhoods
/// are small, so this applies the same force law exactly, pairwise.
pub struct ManyBody {
    strength: f64,
    distance_min2: f64,
    distance_max2: f64,
}

impl Default for ManyBody {
    fn default() -> Self {
        Self {
            strength: -30.0,
            distance_min2: 1.0,
            distance_max2: f64::INFINITY,
        }
    }
}

impl ManyBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_distance_max(mut self, distance_max: f64) -> Self {
        self.distance_max2 = distance_max * distance_max;
        self
    }
}

impl Force for ManyBody {
    fn apply(&mut self, nodes: &mut [Node], alpha: f64, random: &mut Lcg) {
        let n = nodes.len();
        for i in 0..n {
            let (xi, yi) = (nodes[i].x, nodes[i].y);
            let mut vx = 0.0;
            let mut vy = 0.0;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let mut x = nodes[j].x - xi;
                let mut y = nodes[j].y - yi;
                let mut l = x * x + y * y;
                if l >= self.distance_max2 {
                    continue;
                }
                if x == 0.0 {
                    x = jiggle(random);
                    l += x * x;
                }
                if y == 0.0 {
                    y = jiggle(random);
                    l += y * y;
                }
                if l < self.distance_min2 {
                    l = (self.distance_min2 * l).sqrt();
                }
                let w = self.strength * alpha / l;
                vx += x * w;
                vy += y * w;
            }
            nodes[i].vx += vx;
            nodes[i].vy += vy;
        }
    }
}
