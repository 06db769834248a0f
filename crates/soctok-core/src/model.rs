use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An officer as delivered by the payload serializer. Immutable input; the
/// renderer never mutates officer statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    pub id: i64,
    pub name: String,
    /// Complaint record count.
    #[serde(default)]
    pub crs: u32,
    /// Use-of-force (TRR) report count.
    #[serde(default)]
    pub trrs: u32,
    /// Annual salary in whole dollars. Absent in two-axis payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u32>,
}

/// A complaint co-occurrence edge between two officers. `crs` is the
/// coaccusal count, used only to derive the visual link distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: i64,
    pub target: i64,
    #[serde(default)]
    pub crs: u32,
}

/// The renderer's single JSON input: `{ "focusedId": …, "nodes": […], "links": […] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPayload {
    pub focused_id: i64,
    pub nodes: Vec<Officer>,
    pub links: Vec<Link>,
}

impl GraphPayload {
    pub fn from_json(text: &str) -> Result<Self> {
        let payload: Self = serde_json::from_str(text)?;
        tracing::debug!(
            focused_id = payload.focused_id,
            nodes = payload.nodes.len(),
            links = payload.links.len(),
            "parsed graph payload"
        );
        Ok(payload)
    }

    /// The officer the token is centered on. A `focusedId` that matches no
    /// node is a hard failure carrying the payload for diagnosis.
    pub fn focused_officer(&self) -> Result<&Officer> {
        self.nodes
            .iter()
            .find(|node| node.id == self.focused_id)
            .ok_or_else(|| Error::FocusedOfficerMissing {
                focused_id: self.focused_id,
                payload: serde_json::to_string(self).unwrap_or_default(),
            })
    }

    /// Checks the invariants every render relies on: at least one node, and
    /// a resolvable focused officer.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }
        self.focused_officer()?;
        Ok(())
    }
}
