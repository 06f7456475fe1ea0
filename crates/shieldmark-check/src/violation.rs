use serde::{Deserialize, Serialize};

/// Rule that a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Fewer than three vertices in an outline.
    DegenerateOutline,
    /// NaN or infinite coordinate.
    NonFiniteCoordinate,
    /// Transformed outline exceeds the artwork dimensions.
    OutOfBounds,
    /// Artwork with no groups at all.
    EmptyArtwork,
    /// Artwork with zero width or height.
    ZeroAreaCanvas,
}

/// Severity level of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single validation finding with location and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleKind,
    pub severity: Severity,
    pub message: String,
    /// Index of the offending group in the artwork sequence, when the
    /// finding is group-scoped.
    pub group_index: Option<usize>,
    /// Bounding box of the offending region: [min_x, min_y, max_x, max_y].
    pub bbox: Option<[f64; 4]>,
}

impl Violation {
    pub fn artwork_level(rule: RuleKind, severity: Severity, message: String) -> Self {
        Self {
            rule,
            severity,
            message,
            group_index: None,
            bbox: None,
        }
    }

    pub fn group_level(
        rule: RuleKind,
        severity: Severity,
        message: String,
        group_index: usize,
    ) -> Self {
        Self {
            rule,
            severity,
            message,
            group_index: Some(group_index),
            bbox: None,
        }
    }

    pub fn with_bbox(mut self, bbox: [f64; 4]) -> Self {
        self.bbox = Some(bbox);
        self
    }
}
