//! R-tree over structure positions.
//!
//! Structures never move, so the tree is bulk-loaded once when the world is
//! built.  Radius queries (fire priority density, spread candidates) go
//! through it instead of scanning every structure.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rb_core::{Point, StructureId};

/// Entry stored in the R-tree: an `[x, y]` point with its `StructureId`.
#[derive(Clone)]
struct StructureEntry {
    point: [f64; 2],
    id:    StructureId,
}

impl RTreeObject for StructureEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StructureEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Static spatial index over all structures.
pub struct StructureIndex {
    tree: RTree<StructureEntry>,
}

impl StructureIndex {
    /// Bulk-load from `(id, position)` pairs.
    pub fn build(entries: impl IntoIterator<Item = (StructureId, Point)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(id, pos)| StructureEntry { point: pos.as_array(), id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Structures strictly closer than `radius` to `center`, with their
    /// distance.  Iteration order is unspecified.
    pub fn within(
        &self,
        center: Point,
        radius: f64,
    ) -> impl Iterator<Item = (StructureId, f64)> + '_ {
        let r2 = radius * radius;
        self.tree
            .locate_within_distance(center.as_array(), r2)
            .filter(move |e| e.distance_2(&center.as_array()) < r2)
            .map(move |e| (e.id, e.distance_2(&center.as_array()).sqrt()))
    }
}
