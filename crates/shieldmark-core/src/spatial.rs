use rstar::{RTree, RTreeObject, AABB};

use crate::artwork::Artwork;
use crate::geometry::{BBox, Point};

/// An entry in the R-tree spatial index, referencing a shape group by its
/// position in the artwork sequence.
#[derive(Debug, Clone)]
pub struct GroupEntry {
    /// Index into the artwork's group list.
    pub group_index: usize,
    /// Bounding box of the transformed outline.
    pub bbox: BBox,
}

impl RTreeObject for GroupEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

/// Spatial index over an artwork's shape groups for coarse hit-testing.
///
/// Queries are bounding-box level: a hit means the point or rectangle
/// touches a group's bounds, not necessarily its filled interior.
pub struct GroupIndex {
    tree: RTree<GroupEntry>,
}

impl GroupIndex {
    /// Build the index from an artwork's transformed group bounds.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let entries: Vec<GroupEntry> = artwork
            .groups()
            .iter()
            .enumerate()
            .filter_map(|(group_index, group)| {
                group.bbox().map(|bbox| GroupEntry { group_index, bbox })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Indices of groups whose bounds contain the given point, in sequence
    /// order.
    pub fn query_point(&self, point: &Point) -> Vec<usize> {
        let envelope = AABB::from_point([point.x, point.y]);
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.group_index)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Indices of groups whose bounds intersect the given rectangle, in
    /// sequence order.
    pub fn query_rect(&self, rect: &BBox) -> Vec<usize> {
        let envelope = AABB::from_corners(
            [rect.min.x, rect.min.y],
            [rect.max.x, rect.max.y],
        );
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.group_index)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
