//! Color-bucket schemes.
//!
//! A scheme discretizes 2-3 officer attributes through threshold scales,
//! concatenates the resulting indices into a digit key, and looks the key up
//! in a fixed table of hex colors. Two production variants exist (two-axis
//! and three-axis); neither is canonical, so the whole scheme is data.

use crate::model::Officer;
use crate::{Error, Result};
use std::collections::HashMap;

/// Step function over an ascending boundary list, with `d3.scaleThreshold`
/// semantics: the index is the number of boundaries `<= value`, so a value
/// sitting exactly on a boundary falls in the bucket above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    boundaries: Vec<f64>,
}

impl ThresholdScale {
    pub fn new(boundaries: Vec<f64>) -> Self {
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        Self { boundaries }
    }

    pub fn index(&self, value: f64) -> usize {
        self.boundaries.partition_point(|b| *b <= value)
    }
}

/// Which officer statistic a scheme axis reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Complaints,
    UseOfForce,
    Salary,
}

impl Attribute {
    fn value_of(self, officer: &Officer) -> f64 {
        match self {
            Attribute::Complaints => f64::from(officer.crs),
            Attribute::UseOfForce => f64::from(officer.trrs),
            // The payload serializer emits 0 for unknown salaries.
            Attribute::Salary => f64::from(officer.salary.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    axes: Vec<(Attribute, ThresholdScale)>,
    table: HashMap<String, String>,
    highlight_fill: String,
    highlight_stroke: Option<String>,
}

impl ColorScheme {
    pub fn new(
        axes: Vec<(Attribute, ThresholdScale)>,
        table: HashMap<String, String>,
        highlight_fill: impl Into<String>,
        highlight_stroke: Option<String>,
    ) -> Self {
        Self {
            axes,
            table,
            highlight_fill: highlight_fill.into(),
            highlight_stroke,
        }
    }

    /// Two-axis variant: complaint and use-of-force counts on matching
    /// six-bucket scales, key ordered complaints-then-TRRs.
    pub fn complaint_trr() -> Self {
        let boundaries = || ThresholdScale::new(vec![1.0, 5.0, 10.0, 25.0, 40.0]);
        Self::new(
            vec![
                (Attribute::Complaints, boundaries()),
                (Attribute::UseOfForce, boundaries()),
            ],
            table(TWO_AXIS_TABLE),
            "#231f20",
            Some("white".to_string()),
        )
    }

    /// Three-axis variant: TRRs, salary, then complaints on three-bucket
    /// scales. No highlight stroke in this variant.
    pub fn complaint_trr_salary() -> Self {
        Self::new(
            vec![
                (Attribute::UseOfForce, ThresholdScale::new(vec![6.0, 25.0])),
                (
                    Attribute::Salary,
                    ThresholdScale::new(vec![60000.0, 90000.0]),
                ),
                (Attribute::Complaints, ThresholdScale::new(vec![6.0, 25.0])),
            ],
            table(THREE_AXIS_TABLE),
            "#001733",
            None,
        )
    }

    /// The concatenated threshold-index digits for an officer, in axis order.
    pub fn bucket_key(&self, officer: &Officer) -> String {
        self.axes
            .iter()
            .map(|(attribute, scale)| {
                char::from_digit(scale.index(attribute.value_of(officer)) as u32, 10)
                    .unwrap_or('9')
            })
            .collect()
    }

    pub fn background_color(&self, officer: &Officer) -> Result<&str> {
        let key = self.bucket_key(officer);
        self.table
            .get(&key)
            .map(String::as_str)
            .ok_or(Error::UnmappedBucket { key })
    }

    pub fn highlight_fill(&self) -> &str {
        &self.highlight_fill
    }

    pub fn highlight_stroke(&self) -> Option<&str> {
        self.highlight_stroke.as_deref()
    }
}

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

const TWO_AXIS_TABLE: &[(&str, &str)] = &[
    ("00", "#f5f4f4"),
    ("10", "#edf0fa"),
    ("01", "#f8eded"),
    ("20", "#d4e2f4"),
    ("11", "#ecdeef"),
    ("02", "#efdede"),
    ("30", "#c6d4ec"),
    ("21", "#d9d1ee"),
    ("12", "#eacbe0"),
    ("03", "#ebcfcf"),
    ("40", "#aec9e8"),
    ("31", "#c0c3e1"),
    ("22", "#cdbddd"),
    ("13", "#e4b8cf"),
    ("04", "#f0b8b8"),
    ("50", "#90b1f5"),
    ("41", "#aaace3"),
    ("32", "#b6a5de"),
    ("23", "#c99edc"),
    ("14", "#e498b6"),
    ("05", "#f89090"),
    ("51", "#748be4"),
    ("42", "#8e84e0"),
    ("33", "#af7fbd"),
    ("24", "#c873a2"),
    ("15", "#e1718a"),
    ("52", "#6660ae"),
    ("43", "#8458aa"),
    ("34", "#a34e99"),
    ("25", "#b5496a"),
    ("53", "#4c3d8f"),
    ("44", "#6b2e7e"),
    ("35", "#792f55"),
    ("54", "#391c6a"),
    ("45", "#520051"),
    ("55", "#131313"),
];

const THREE_AXIS_TABLE: &[(&str, &str)] = &[
    ("000", "#f5f4f4"),
    ("001", "#cbd4db"),
    ("010", "#e7eee3"),
    ("100", "#f9efe3"),
    ("002", "#c3d7ed"),
    ("011", "#d3f3eb"),
    ("020", "#bae5b6"),
    ("101", "#e4dde6"),
    ("110", "#faf6c7"),
    ("200", "#f8c8bf"),
    ("012", "#78b8d3"),
    ("021", "#61b29d"),
    ("102", "#8a7c96"),
    ("111", "#8f8f8f"),
    ("120", "#9c9b84"),
    ("201", "#df7575"),
    ("210", "#f4765d"),
    ("022", "#308182"),
    ("112", "#485787"),
    ("121", "#4b704d"),
    ("202", "#6c4c83"),
    ("211", "#e44747"),
    ("220", "#ae4c12"),
    ("122", "#104045"),
    ("212", "#38314a"),
    ("221", "#472610"),
    ("222", "#231f20"),
];
