pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("payload JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload's `focusedId` names an officer absent from `nodes`. The
    /// re-serialized payload is carried for diagnosis, as the production
    /// renderer surfaced the raw JSON when this happened.
    #[error("focused officer {focused_id} not present in payload nodes: {payload}")]
    FocusedOfficerMissing { focused_id: i64, payload: String },

    /// An officer's threshold indices produced a key the bucket table does
    /// not cover. Tables are expected to tabulate every reachable index
    /// combination; a miss is a scheme configuration bug, not a crash.
    #[error("no background color tabulated for bucket key {key:?}")]
    UnmappedBucket { key: String },

    #[error("malformed hex color {value:?} (expected 6 hex digits, optional '#' prefix)")]
    InvalidColor { value: String },

    #[error("payload contains no nodes")]
    EmptyGraph,
}
