use soctok_core::{GraphPayload, Link, Officer};
use soctok_render::{
    Error, ForceDirectedEngine, LayoutEngine, LayoutOptions, Result, Sizing, SvgRenderOptions,
    layout_graph, render_svg,
};
use std::sync::Arc;

/// Places node `i` at `(50 * i, 0)` so expected geometry is trivial.
struct GridEngine;

impl LayoutEngine for GridEngine {
    fn layout(&self, payload: &GraphPayload) -> Result<Vec<(f64, f64)>> {
        Ok((0..payload.nodes.len())
            .map(|i| (50.0 * i as f64, 0.0))
            .collect())
    }
}

fn grid_options() -> LayoutOptions {
    LayoutOptions {
        engine: Arc::new(GridEngine),
    }
}

fn officer(id: i64, crs: u32, trrs: u32) -> Officer {
    Officer {
        id,
        name: format!("Officer {id}"),
        crs,
        trrs,
        salary: None,
    }
}

fn two_officer_payload() -> GraphPayload {
    GraphPayload {
        focused_id: 1,
        nodes: vec![officer(1, 1, 0), officer(2, 1, 0)],
        links: vec![Link {
            source: 1,
            target: 2,
            crs: 1,
        }],
    }
}

#[test]
fn layout_graph_pairs_officers_with_engine_positions() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    assert_eq!(layout.nodes.len(), 2);
    assert_eq!((layout.nodes[0].x, layout.nodes[0].y), (0.0, 0.0));
    assert_eq!((layout.nodes[1].x, layout.nodes[1].y), (50.0, 0.0));
    assert_eq!(layout.links[0].source, 0);
    assert_eq!(layout.links[0].target, 1);
    assert_eq!(layout.focused_node().unwrap().officer.id, 1);
}

#[test]
fn layout_graph_rejects_a_missing_focused_officer() {
    let mut payload = two_officer_payload();
    payload.focused_id = 42;
    let err = layout_graph(&payload, &grid_options()).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(soctok_core::Error::FocusedOfficerMissing { focused_id: 42, .. })
    ));
}

#[test]
fn layout_graph_rejects_links_to_unknown_officers() {
    let mut payload = two_officer_payload();
    payload.links[0].target = 99;
    let err = layout_graph(&payload, &grid_options()).unwrap_err();
    assert!(matches!(err, Error::InvalidModel { .. }));
}

#[test]
fn renders_one_marker_per_node_and_link() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();

    assert_eq!(token.svg.matches("<circle").count(), 2);
    assert_eq!(token.svg.matches("<line").count(), 1);
}

#[test]
fn focused_node_is_filled_with_the_highlight_color() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();

    // Two-axis scheme highlight; exactly one focused node.
    assert_eq!(token.svg.matches(r##"fill="#231f20""##).count(), 1);
    assert_eq!(token.svg.matches(r#"stroke-width="3""#).count(), 1);
    assert_eq!(token.svg.matches(r#"stroke="white""#).count(), 1);
}

#[test]
fn background_and_link_stroke_derive_from_the_focused_officer() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();

    // Focused officer: crs=1, trrs=0 -> bucket "10".
    assert_eq!(token.background_color, "#edf0fa");
    assert!(token.svg.contains(r##"background-color: #edf0fa"##));
    // edge_color("#edf0fa"): max 0xfa = 250 -> 190 = 0xbe.
    assert!(token.svg.contains(r##"stroke="#bebebe""##));
}

#[test]
fn node_matching_the_ambient_background_keeps_a_contrast_stroke() {
    // Focused bucket "00" -> ambient "#f5f4f4"; the other node is also
    // bucket "00", so its fill equals the ambient background.
    let payload = GraphPayload {
        focused_id: 1,
        nodes: vec![officer(1, 0, 0), officer(2, 0, 0)],
        links: vec![],
    };
    let layout = layout_graph(&payload, &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();

    assert_eq!(token.background_color, "#f5f4f4");
    assert!(token.svg.contains(r##"stroke="#b9b9b9""##));
}

#[test]
fn fitted_sizing_wraps_the_settled_positions_with_padding() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();

    // Positions (0,0) and (50,0), padding 20.
    assert!(token.svg.contains(r#"viewBox="-20 -20 90 40""#));
}

#[test]
fn fixed_canvas_sizing_ignores_the_settled_positions() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let options = SvgRenderOptions {
        sizing: Sizing::social_media_canvas(),
        ..Default::default()
    };
    let token = render_svg(&layout, &options).unwrap();

    assert!(token.svg.contains(r#"width="1200""#));
    assert!(token.svg.contains(r#"height="630""#));
    assert!(token.svg.contains(r#"viewBox="-381 -200 762 400""#));
}

#[test]
fn square_canvas_matches_the_standalone_document_shape() {
    let layout = layout_graph(&two_officer_payload(), &grid_options()).unwrap();
    let options = SvgRenderOptions {
        sizing: Sizing::square_canvas(),
        ..Default::default()
    };
    let token = render_svg(&layout, &options).unwrap();
    assert!(token.svg.contains(r#"viewBox="-337.5 -337.5 675 675""#));
}

#[test]
fn officer_names_are_xml_escaped_in_titles() {
    let mut payload = two_officer_payload();
    payload.nodes[1].name = "O'Brien <jr> & \"co\"".to_string();
    let layout = layout_graph(&payload, &grid_options()).unwrap();
    let token = render_svg(&layout, &SvgRenderOptions::default()).unwrap();
    assert!(
        token
            .svg
            .contains("<title>O&#39;Brien &lt;jr&gt; &amp; &quot;co&quot;</title>")
    );
}

#[test]
fn force_directed_layout_is_deterministic_and_finite() {
    let payload = GraphPayload {
        focused_id: 1,
        nodes: (1..=6).map(|id| officer(id, 1, 0)).collect(),
        links: (2..=6)
            .map(|id| Link {
                source: 1,
                target: id,
                crs: 1,
            })
            .collect(),
    };
    let options = LayoutOptions::default();

    let a = layout_graph(&payload, &options).unwrap();
    let b = layout_graph(&payload, &options).unwrap();
    assert_eq!(a, b);
    assert!(a.nodes.iter().all(|n| n.x.is_finite() && n.y.is_finite()));
}

#[test]
fn force_directed_link_distances_scale_with_coaccusal_weight() {
    let engine = ForceDirectedEngine::default();
    let pair = GraphPayload {
        focused_id: 1,
        nodes: vec![officer(1, 0, 0), officer(2, 0, 0)],
        links: vec![Link {
            source: 1,
            target: 2,
            // Degenerate domain [1, 1] maps to the range midpoint, 60.
            crs: 1,
        }],
    };
    let positions = engine.layout(&pair).unwrap();
    let (a, b) = (positions[0], positions[1]);
    let d = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
    // Link pulls toward 60 while the charge pushes apart; the settled
    // distance stays in the same ballpark.
    assert!((30.0..120.0).contains(&d), "settled distance {d}");
}
