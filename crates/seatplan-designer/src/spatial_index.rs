//! Spatial index for fast neighbor lookup while dragging.
//!
//! A region quadtree over axis-aligned boxes. Nodes live in an arena and
//! refer to their children by index. An item is stored once, in the
//! deepest node whose region fully contains its box; items that straddle a
//! quadrant boundary stay with the ancestor. The index owns only the box
//! and a caller-supplied handle, never element data.

use seatplan_core::Point;

/// Default half extent of the root region. Layout coordinates are pixels
/// on an infinite canvas, so the root is generous.
pub const DEFAULT_WORLD_EXTENT: f64 = 100_000.0;
pub const DEFAULT_MAX_ITEMS: usize = 8;
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates a box; corners are normalized so `min <= max`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn envelope(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.y, p.x, p.y),
                Some(b) => Bounds {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// True when `other` lies entirely inside this box.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Touching edges count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn expanded(&self, margin: f64) -> Bounds {
        Bounds::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Bounds {
        Bounds {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    fn quadrants(&self) -> [Bounds; 4] {
        let (cx, cy) = self.center();
        [
            Bounds::new(self.min_x, self.min_y, cx, cy),
            Bounds::new(cx, self.min_y, self.max_x, cy),
            Bounds::new(self.min_x, cy, cx, self.max_y),
            Bounds::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}

/// Construction parameters for a [`SpatialIndex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexConfig {
    /// Region covered by the root node
    pub region: Bounds,
    /// Items a node holds before it subdivides
    pub max_items: usize,
    /// Depth at which nodes stop subdividing
    pub max_depth: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            region: Bounds::new(
                -DEFAULT_WORLD_EXTENT,
                -DEFAULT_WORLD_EXTENT,
                DEFAULT_WORLD_EXTENT,
                DEFAULT_WORLD_EXTENT,
            ),
            max_items: DEFAULT_MAX_ITEMS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IndexConfig {
    pub fn build<T: Clone + PartialEq>(&self) -> SpatialIndex<T> {
        SpatialIndex::new(self.region, self.max_items, self.max_depth)
    }
}

/// A stored item: the caller's handle plus the box it was inserted with.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry<T> {
    pub item: T,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
struct QuadtreeNode<T> {
    region: Bounds,
    depth: usize,
    items: Vec<IndexEntry<T>>,
    children: Option<[usize; 4]>,
}

impl<T> QuadtreeNode<T> {
    fn new(region: Bounds, depth: usize) -> Self {
        Self {
            region,
            depth,
            items: Vec::new(),
            children: None,
        }
    }
}

/// Statistics about the spatial index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpatialIndexStats {
    pub total_nodes: usize,
    pub total_items: usize,
    pub max_depth_reached: usize,
}

/// Region quadtree keyed by caller handles.
#[derive(Debug, Clone)]
pub struct SpatialIndex<T> {
    nodes: Vec<QuadtreeNode<T>>,
    root_region: Bounds,
    max_items: usize,
    max_depth: usize,
    len: usize,
}

const ROOT: usize = 0;

impl<T: Clone + PartialEq> SpatialIndex<T> {
    /// Creates an index covering `region`.
    ///
    /// A node splits the first time it holds more than `max_items`, unless
    /// it already sits at `max_depth`, in which case it keeps growing.
    pub fn new(region: Bounds, max_items: usize, max_depth: usize) -> Self {
        Self {
            nodes: vec![QuadtreeNode::new(region, 0)],
            root_region: region,
            max_items: max_items.max(1),
            max_depth,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root_region(&self) -> Bounds {
        self.root_region
    }

    /// Inserts `item` with its box.
    pub fn insert(&mut self, item: T, bounds: &Bounds) {
        let mut node = ROOT;
        while let Some(child) = self.child_containing(node, bounds) {
            node = child;
        }
        self.nodes[node].items.push(IndexEntry {
            item,
            bounds: *bounds,
        });
        self.len += 1;

        let n = &self.nodes[node];
        if n.children.is_none() && n.items.len() > self.max_items && n.depth < self.max_depth {
            self.subdivide(node);
        }
    }

    /// Removes `item`. `bounds` must be the box it was inserted with (or a
    /// box that still reaches the node holding it).
    pub fn remove(&mut self, item: &T, bounds: &Bounds) -> bool {
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            let n = &mut self.nodes[node];
            if let Some(pos) = n.items.iter().position(|e| &e.item == item) {
                n.items.swap_remove(pos);
                self.len -= 1;
                return true;
            }
            if let Some(children) = n.children {
                for child in children.into_iter().rev() {
                    if self.nodes[child].region.intersects(bounds) {
                        stack.push(child);
                    }
                }
            }
        }
        false
    }

    /// Moves `item` from `old_bounds` to `new_bounds`. Returns whether the old
    /// entry was found; the item is inserted either way.
    pub fn update(&mut self, item: T, old_bounds: &Bounds, new_bounds: &Bounds) -> bool {
        let removed = self.remove(&item, old_bounds);
        self.insert(item, new_bounds);
        removed
    }

    /// Returns every item whose box intersects `region`, in no particular order.
    pub fn query(&self, region: &Bounds) -> Vec<T> {
        let mut results = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            let n = &self.nodes[node];
            results.extend(
                n.items
                    .iter()
                    .filter(|e| e.bounds.intersects(region))
                    .map(|e| e.item.clone()),
            );
            if let Some(children) = n.children {
                stack.extend(
                    children
                        .into_iter()
                        .filter(|&c| self.nodes[c].region.intersects(region)),
                );
            }
        }
        results
    }

    /// Returns every item whose box contains the point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<T> {
        self.query(&Bounds::new(x, y, x, y))
    }

    /// Drops all items and subdivisions.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(QuadtreeNode::new(self.root_region, 0));
        self.len = 0;
    }

    pub fn stats(&self) -> SpatialIndexStats {
        SpatialIndexStats {
            total_nodes: self.nodes.len(),
            total_items: self.nodes.iter().map(|n| n.items.len()).sum(),
            max_depth_reached: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
        }
    }

    fn child_containing(&self, node: usize, bounds: &Bounds) -> Option<usize> {
        self.nodes[node]
            .children?
            .into_iter()
            .find(|&c| self.nodes[c].region.contains(bounds))
    }

    fn subdivide(&mut self, node: usize) {
        let depth = self.nodes[node].depth + 1;
        let quadrants = self.nodes[node].region.quadrants();
        let first = self.nodes.len();
        for region in quadrants {
            self.nodes.push(QuadtreeNode::new(region, depth));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[node].children = Some(children);
        tracing::trace!(node, depth, "quadtree node subdivided");

        let items = std::mem::take(&mut self.nodes[node].items);
        for entry in items {
            match children
                .into_iter()
                .find(|&c| self.nodes[c].region.contains(&entry.bounds))
            {
                Some(child) => self.nodes[child].items.push(entry),
                None => self.nodes[node].items.push(entry),
            }
        }
    }
}

impl<T: Clone + PartialEq> Default for SpatialIndex<T> {
    fn default() -> Self {
        IndexConfig::default().build()
    }
}
