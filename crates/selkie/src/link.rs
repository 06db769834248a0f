use crate::{Force, Lcg, Node, jiggle};

/// A spring between two nodes, identified by index into the simulation's
/// node slice.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    /// Rest length of the spring.
    pub distance: f64,
    /// Spring stiffness; `None` uses the upstream degree-based default
    /// `1 / min(degree(source), degree(target))`.
    pub strength: Option<f64>,
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            distance: 30.0,
            strength: None,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
}

/// Pulls linked nodes toward a per-link rest distance.
///
/// The correction is split between endpoints by degree bias so that highly
/// connected nodes move less, matching `d3.forceLink`.
pub struct LinkForce {
    links: Vec<Link>,
    iterations: usize,
    bias: Vec<f64>,
    strengths: Vec<f64>,
}

impl LinkForce {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            links,
            iterations: 1,
            bias: Vec::new(),
            strengths: Vec::new(),
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }
}

impl Force for LinkForce {
    fn initialize(&mut self, nodes: &[Node]) {
        let mut count = vec![0usize; nodes.len()];
        for link in &self.links {
            count[link.source] += 1;
            count[link.target] += 1;
        }

        self.bias = self
            .links
            .iter()
            .map(|l| count[l.source] as f64 / (count[l.source] + count[l.target]) as f64)
            .collect();
        self.strengths = self
            .links
            .iter()
            .map(|l| {
                l.strength
                    .unwrap_or_else(|| 1.0 / count[l.source].min(count[l.target]) as f64)
            })
            .collect();
    }

    fn apply(&mut self, nodes: &mut [Node], alpha: f64, random: &mut Lcg) {
        for _ in 0..self.iterations {
            for (i, link) in self.links.iter().enumerate() {
                let (s, t) = (link.source, link.target);
                let mut x = nodes[t].x + nodes[t].vx - nodes[s].x - nodes[s].vx;
                let mut y = nodes[t].y + nodes[t].vy - nodes[s].y - nodes[s].vy;
                if x == 0.0 {
                    x = jiggle(random);
                }
                if y == 0.0 {
                    y = jiggle(random);
                }
                let mut l = (x * x + y * y).sqrt();
                l = (l - link.distance) / l * alpha * self.strengths[i];
                x *= l;
                y *= l;

                let b = self.bias[i];
                nodes[t].vx -= x * b;
                nodes[t].vy -= y * b;
                nodes[s].vx += x * (1.0 - b);
                nodes[s].vy += y * (1.0 - b);
            }
        }
    }
}
