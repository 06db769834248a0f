#![forbid(unsafe_code)]

//! d3-force-compatible force-directed graph simulation.
//!
//! Baseline: `d3-force@3`. Parameter values tuned against upstream D3
//! (charge strengths, link distances, collision radii, tick counts) carry
//! over unchanged: the integrator is the same velocity Verlet with alpha
//! decay, and each force module reproduces the upstream force law.

pub mod center;
pub mod collide;
pub mod link;
pub mod many_body;

pub use center::Center;
pub use collide::Collide;
pub use link::{Link, LinkForce};
pub use many_body::ManyBody;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const INITIAL_RADIUS: f64 = 10.0;

fn initial_angle() -> f64 {
    // The golden angle, as upstream uses for phyllotaxis seeding.
    std::f64::consts::PI * (3.0 - 5.0_f64.sqrt())
}

/// A simulated particle. Velocities persist across ticks; positions are the
/// simulation output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Node {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }
}

/// Deterministic pseudo-random source used to jiggle coincident points
/// (Knuth MMIX LCG constants over 2^32, seeded with 1 like upstream).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self { state: 1 }
    }
}

impl Lcg {
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        f64::from(self.state) / 4294967296.0
    }
}

pub(crate) fn jiggle(random: &mut Lcg) -> f64 {
    (random.next() - 0.5) * 1e-6
}

/// A force mutates node velocities (or, for positional forces like
/// [`Center`], positions directly) once per tick.
pub trait Force {
    /// Called when the force is attached to a simulation.
    fn initialize(&mut self, _nodes: &[Node]) {}

    fn apply(&mut self, nodes: &mut [Node], alpha: f64, random: &mut Lcg);
}

pub struct Simulation {
    nodes: Vec<Node>,
    alpha: f64,
    alpha_min: f64,
    alpha_decay: f64,
    alpha_target: f64,
    velocity_decay: f64,
    random: Lcg,
    forces: Vec<Box<dyn Force>>,
}

impl Simulation {
    /// Creates a simulation of `node_count` particles seeded on the
    /// phyllotaxis spiral (radius `10 * sqrt(0.5 + i)`, golden-angle steps),
    /// matching upstream's initial placement.
    pub fn new(node_count: usize) -> Self {
        let angle = initial_angle();
        let nodes = (0..node_count)
            .map(|i| {
                let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
                let a = i as f64 * angle;
                Node::at(radius * a.cos(), radius * a.sin())
            })
            .collect();
        Self::with_nodes(nodes)
    }

    /// Creates a simulation over pre-positioned particles.
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            alpha: 1.0,
            alpha_min: 0.001,
            alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
            alpha_target: 0.0,
            velocity_decay: 0.6,
            random: Lcg::default(),
            forces: Vec::new(),
        }
    }

    pub fn add_force<F: Force + 'static>(&mut self, mut force: F) -> &mut Self {
        force.initialize(&self.nodes);
        self.forces.push(Box::new(force));
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    /// Advances the simulation one step: decay alpha, apply each force, then
    /// integrate (velocity decay 0.6 per tick, as upstream).
    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

        for force in &mut self.forces {
            force.apply(&mut self.nodes, self.alpha, &mut self.random);
        }

        for node in &mut self.nodes {
            node.vx *= self.velocity_decay;
            node.vy *= self.velocity_decay;
            node.x += node.vx;
            node.y += node.vy;
        }
    }

    /// Runs a fixed number of ticks. The original D3 renderers stop the
    /// internal timer and step manually; this is the equivalent.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().map(|n| (n.x, n.y))
    }
}
