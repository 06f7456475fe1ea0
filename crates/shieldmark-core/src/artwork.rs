use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::{BBox, Point, Transform2D};

/// Interior classification rule for polygon filling.
///
/// `NonZero` is the default of the drawing platform the artwork format
/// originated on; `EvenOdd` is kept selectable per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> Self {
        Self::NonZero
    }
}

/// One step of an artwork's drawing sequence: a closed polygon outline
/// filled with a single color.
///
/// The outline is closed implicitly (last vertex connects back to the
/// first). `transform` is applied to the outline when the group is filled;
/// it is the identity for all but deliberately quirky data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeGroup {
    pub name: String,
    pub fill: Rgba,
    pub rule: FillRule,
    pub outline: Vec<Point>,
    pub transform: Transform2D,
}

impl ShapeGroup {
    pub fn new(name: &str, fill: Rgba, outline: Vec<Point>) -> Self {
        Self {
            name: name.to_string(),
            fill,
            rule: FillRule::default(),
            outline,
            transform: Transform2D::identity(),
        }
    }

    pub fn with_rule(mut self, rule: FillRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// The outline with the group transform applied.
    pub fn transformed_outline(&self) -> Vec<Point> {
        if self.transform.is_identity() {
            return self.outline.clone();
        }
        self.outline.iter().map(|p| self.transform.apply(p)).collect()
    }

    /// Bounding box of the transformed outline.
    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.transformed_outline())
    }

    pub fn vertex_count(&self) -> usize {
        self.outline.len()
    }
}

/// A complete piece of vector artwork: native surface dimensions plus an
/// ordered list of shape groups, filled first to last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub name: String,
    pub width: u32,
    pub height: u32,
    groups: Vec<ShapeGroup>,
}

impl Artwork {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            groups: Vec::new(),
        }
    }

    pub fn add_group(&mut self, group: ShapeGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[ShapeGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Bounding box of all transformed group outlines.
    pub fn bbox(&self) -> Option<BBox> {
        let mut result: Option<BBox> = None;
        for group in &self.groups {
            if let Some(bb) = group.bbox() {
                result = Some(match result {
                    Some(acc) => acc.union(&bb),
                    None => bb,
                });
            }
        }
        result
    }

    /// Distinct fill colors in order of first use across the sequence.
    pub fn palette(&self) -> Vec<Rgba> {
        let mut colors = Vec::new();
        for group in &self.groups {
            if !colors.contains(&group.fill) {
                colors.push(group.fill);
            }
        }
        colors
    }
}
