use crate::model::{LayoutedGraph, LayoutedLink, PositionedNode};
use crate::{Error, LayoutOptions, Result};
use selkie::{Center, Collide, Link as SimLink, LinkForce, ManyBody, Simulation};
use soctok_core::GraphPayload;
use std::collections::HashMap;

/// Assigns a 2D position to each payload node, in payload order.
///
/// The seam exists so color/viewbox logic can be exercised with a stub
/// engine; production renders use [`ForceDirectedEngine`].
pub trait LayoutEngine {
    fn layout(&self, payload: &GraphPayload) -> Result<Vec<(f64, f64)>>;
}

/// The production layout: a bounded-step force simulation, no convergence
/// detection. Parameters mirror the original D3 renderer.
#[derive(Debug, Clone)]
pub struct ForceDirectedEngine {
    pub charge_strength: f64,
    pub collide_radius: f64,
    /// Link rest distances: `crs` is mapped linearly from `[1, max crs]`
    /// onto this range.
    pub distance_range: (f64, f64),
    pub ticks: usize,
}

impl Default for ForceDirectedEngine {
    fn default() -> Self {
        Self {
            charge_strength: -100.0,
            collide_radius: 10.0,
            distance_range: (40.0, 80.0),
            ticks: 300,
        }
    }
}

impl ForceDirectedEngine {
    /// `d3.scaleLinear([1, max], range)` semantics, including the degenerate
    /// domain case mapping to the range midpoint.
    fn link_distance(&self, crs: u32, max_crs: u32) -> f64 {
        let (lo, hi) = self.distance_range;
        let span = f64::from(max_crs) - 1.0;
        if span == 0.0 {
            return (lo + hi) / 2.0;
        }
        lo + (f64::from(crs) - 1.0) / span * (hi - lo)
    }
}

impl LayoutEngine for ForceDirectedEngine {
    fn layout(&self, payload: &GraphPayload) -> Result<Vec<(f64, f64)>> {
        let index_of: HashMap<i64, usize> = payload
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id, i))
            .collect();

        let max_crs = payload.links.iter().map(|l| l.crs).max().unwrap_or(1);
        let mut sim_links = Vec::with_capacity(payload.links.len());
        for link in &payload.links {
            let source = resolve(&index_of, link.source)?;
            let target = resolve(&index_of, link.target)?;
            sim_links.push(
                SimLink::new(source, target).with_distance(self.link_distance(link.crs, max_crs)),
            );
        }

        // Force order matches the original registration order: charge, link,
        // collision, center.
        let mut sim = Simulation::new(payload.nodes.len());
        sim.add_force(ManyBody::new().with_strength(self.charge_strength));
        sim.add_force(LinkForce::new(sim_links));
        sim.add_force(Collide::new(self.collide_radius));
        sim.add_force(Center::default());
        sim.run(self.ticks);

        Ok(sim.positions().collect())
    }
}

fn resolve(index_of: &HashMap<i64, usize>, id: i64) -> Result<usize> {
    index_of
        .get(&id)
        .copied()
        .ok_or_else(|| Error::InvalidModel {
            message: format!("link references unknown officer id {id}"),
        })
}

/// Validates the payload and runs the layout engine, pairing each officer
/// with its settled position.
pub fn layout_graph(payload: &GraphPayload, options: &LayoutOptions) -> Result<LayoutedGraph> {
    payload.validate()?;

    let positions = options.engine.layout(payload)?;
    if positions.len() != payload.nodes.len() {
        return Err(Error::InvalidModel {
            message: format!(
                "layout engine returned {} positions for {} nodes",
                positions.len(),
                payload.nodes.len()
            ),
        });
    }

    let index_of: HashMap<i64, usize> = payload
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect();
    let mut links = Vec::with_capacity(payload.links.len());
    for link in &payload.links {
        links.push(LayoutedLink {
            source: resolve(&index_of, link.source)?,
            target: resolve(&index_of, link.target)?,
            crs: link.crs,
        });
    }

    let nodes = payload
        .nodes
        .iter()
        .zip(positions)
        .map(|(officer, (x, y))| PositionedNode {
            officer: officer.clone(),
            x,
            y,
        })
        .collect();

    tracing::debug!(
        nodes = payload.nodes.len(),
        links = payload.links.len(),
        "graph layout complete"
    );

    Ok(LayoutedGraph {
        focused_id: payload.focused_id,
        nodes,
        links,
    })
}
