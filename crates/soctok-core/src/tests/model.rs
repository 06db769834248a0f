use crate::*;
use serde_json::json;

fn payload_json() -> String {
    json!({
        "focusedId": 1,
        "nodes": [
            { "id": 1, "name": "Steve Jobs", "crs": 1, "trrs": 0, "salary": 0 },
            { "id": 2, "name": "Bill Gates", "crs": 1, "trrs": 0, "salary": 0 }
        ],
        "links": [
            { "source": 1, "target": 2, "crs": 1 }
        ]
    })
    .to_string()
}

#[test]
fn parses_the_production_payload_shape() {
    let payload = GraphPayload::from_json(&payload_json()).unwrap();
    assert_eq!(payload.focused_id, 1);
    assert_eq!(payload.nodes.len(), 2);
    assert_eq!(
        payload.nodes[0],
        Officer {
            id: 1,
            name: "Steve Jobs".to_string(),
            crs: 1,
            trrs: 0,
            salary: Some(0),
        }
    );
    assert_eq!(
        payload.links[0],
        Link {
            source: 1,
            target: 2,
            crs: 1
        }
    );
}

#[test]
fn salary_and_counts_default_when_absent() {
    let payload = GraphPayload::from_json(
        &json!({
            "focusedId": 9,
            "nodes": [{ "id": 9, "name": "Solo" }],
            "links": []
        })
        .to_string(),
    )
    .unwrap();
    let node = &payload.nodes[0];
    assert_eq!(node.crs, 0);
    assert_eq!(node.trrs, 0);
    assert_eq!(node.salary, None);
}

#[test]
fn focused_officer_is_resolved_by_id() {
    let payload = GraphPayload::from_json(&payload_json()).unwrap();
    assert_eq!(payload.focused_officer().unwrap().name, "Steve Jobs");
    assert!(payload.validate().is_ok());
}

#[test]
fn missing_focused_officer_is_a_hard_failure_carrying_the_payload() {
    let mut payload = GraphPayload::from_json(&payload_json()).unwrap();
    payload.focused_id = 42;
    let err = payload.focused_officer().unwrap_err();
    match err {
        Error::FocusedOfficerMissing {
            focused_id,
            payload,
        } => {
            assert_eq!(focused_id, 42);
            assert!(payload.contains("Bill Gates"), "payload not surfaced");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_node_set_fails_validation() {
    let payload = GraphPayload {
        focused_id: 1,
        nodes: vec![],
        links: vec![],
    };
    assert!(matches!(payload.validate(), Err(Error::EmptyGraph)));
}

#[test]
fn malformed_json_is_surfaced_as_a_json_error() {
    let err = GraphPayload::from_json("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
