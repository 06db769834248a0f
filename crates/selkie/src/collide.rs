use crate::{Force, Lcg, Node, jiggle};

/// Resolves circle overlap between nodes of a uniform radius.
///
/// Operates on anticipated positions (`x + vx`), like `d3.forceCollide`, and
/// is deliberately not alpha-scaled: overlap is corrected at full strength
/// even late in the simulation.
pub struct Collide {
    radius: f64,
    strength: f64,
    iterations: usize,
}

impl Collide {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            strength: 1.0,
            iterations: 1,
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }
}

impl Force for Collide {
    fn apply(&mut self, nodes: &mut [Node], _alpha: f64, random: &mut Lcg) {
        let n = nodes.len();
        let r = self.radius + self.radius;
        let r2 = r * r;
        // Equal radii, so each correction splits evenly between the pair.
        let w = 0.5;

        for _ in 0..self.iterations {
            for i in 0..n {
                let xi = nodes[i].x + nodes[i].vx;
                let yi = nodes[i].y + nodes[i].vy;
                for j in (i + 1)..n {
                    let mut x = xi - nodes[j].x - nodes[j].vx;
                    let mut y = yi - nodes[j].y - nodes[j].vy;
                    let mut l = x * x + y * y;
                    if l < r2 {
                        if x == 0.0 {
                            x = jiggle(random);
                            l += x * x;
                        }
                        if y == 0.0 {
                            y = jiggle(random);
                            l += y * y;
                        }
                        l = l.sqrt();
                        l = (r - l) / l * self.strength;
                        x *= l;
                        y *= l;
                        nodes[i].vx += x * w;
                        nodes[i].vy += y * w;
                        nodes[j].vx -= x * (1.0 - w);
                        nodes[j].vy -= y * (1.0 - w);
                    }
                }
            }
        }
    }
}
