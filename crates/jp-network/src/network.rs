//! Multimodal network representation.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** form.  Given
//! a `NodeId n`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! Edge arrays (`edge_from`, `edge_to`, `edge_length_km`, `edge_mode`,
//! `edge_geometry`) are sorted by source node and indexed by `EdgeId`.
//! Within one source node, edges keep the order they were added in; the
//! searches rely on this for reproducible tie-breaking.
//!
//! Every edge has a reciprocal twin (same length and mode, reversed
//! geometry), so the graph is undirected in effect.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `(lat, lon)` snaps query coordinates to the
//! graph.  The tree orders candidates by planar degrees, which is not the
//! ground order (a degree of longitude shrinks with latitude), so
//! `nearest_on_ground` walks it in planar order and ranks by haversine,
//! stopping once the planar distance bounds out every remaining candidate.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use jp_core::geo::EARTH_RADIUS_KM;
use jp_core::{EdgeId, GeoPoint, Mode, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point and its `NodeId`.
#[derive(Clone, Debug)]
pub(crate) struct NodeEntry {
    pub(crate) point: [f64; 2], // [lat, lon]
    pub(crate) id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon degrees.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Kilometres per degree along a meridian.
const KM_PER_DEG: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Lower bound on the ground distance to anything `deg` planar degrees from
/// a point at latitude `lat`.  Every such point lies within `|lat| + deg` of
/// the equator, where a degree spans at least `cos(|lat| + deg)` of
/// [`KM_PER_DEG`]; the small slack absorbs the flat-earth approximation.
fn ground_lower_bound_km(lat: f64, deg: f64) -> f64 {
    let worst_lat = (lat.abs() + deg).min(90.0);
    deg * KM_PER_DEG * worst_lat.to_radians().cos() * 0.999
}

/// Up to `k` entries of `index` accepted by `keep`, closest to `pos` by
/// haversine distance, as `(id, km)` sorted by distance then id.
pub(crate) fn nearest_on_ground(
    index: &RTree<NodeEntry>,
    pos: GeoPoint,
    k: usize,
    mut keep: impl FnMut(&NodeEntry) -> bool,
) -> Vec<(NodeId, f64)> {
    let mut best: Vec<(NodeId, f64)> = Vec::new();
    if k == 0 {
        return best;
    }
    let query = [pos.lat, pos.lon];

    for entry in index.nearest_neighbor_iter(&query) {
        let deg = entry.distance_2(&query).sqrt();
        if best.len() == k && ground_lower_bound_km(pos.lat, deg) > best[k - 1].1 {
            break;
        }
        if !keep(entry) {
            continue;
        }
        let km = pos.distance_km(GeoPoint::new(entry.point[0], entry.point[1]));
        let at = best.partition_point(|&(id, d)| (d, id) < (km, entry.id));
        if at < k {
            best.insert(at, (entry.id, km));
            best.truncate(k);
        }
    }
    best
}

// ── EdgeRef ───────────────────────────────────────────────────────────────────

/// Borrowed view of one directed edge.
#[derive(Copy, Clone, Debug)]
pub struct EdgeRef<'a> {
    pub id:        EdgeId,
    pub from:      NodeId,
    pub to:        NodeId,
    pub length_km: f64,
    pub mode:      Mode,
    /// Polyline from `from` to `to`.
    pub geometry:  &'a [GeoPoint],
}

// ── TransitNetwork ────────────────────────────────────────────────────────────

/// Directed multigraph of road, transit, and walking links in CSR format,
/// plus a spatial index and a station-name lookup.
///
/// Fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`NetworkBuilder`](crate::NetworkBuilder).
pub struct TransitNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// Station name, `None` for street intersections.  Indexed by `NodeId`.
    pub node_name: Vec<Option<String>>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Source node of each edge; used when tracing a path backwards.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in kilometres.
    pub edge_length_km: Vec<f64>,

    /// Travel mode of each edge.
    pub edge_mode: Vec<Mode>,

    /// Polyline of each edge, oriented from source to destination.
    pub edge_geometry: Vec<Vec<GeoPoint>>,

    // ── Lookups ───────────────────────────────────────────────────────────
    pub(crate) spatial_idx: RTree<NodeEntry>,
    pub(crate) stations: FxHashMap<String, NodeId>,
}

impl TransitNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a valid id in this network.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`, in
    /// insertion order.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    pub fn edge(&self, e: EdgeId) -> EdgeRef<'_> {
        let i = e.index();
        EdgeRef {
            id:        e,
            from:      self.edge_from[i],
            to:        self.edge_to[i],
            length_km: self.edge_length_km[i],
            mode:      self.edge_mode[i],
            geometry:  &self.edge_geometry[i],
        }
    }

    // ── Node attributes ───────────────────────────────────────────────────

    #[inline]
    pub fn pos(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    /// Station name of `node`, or `None` for an intersection.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.node_name[node.index()].as_deref()
    }

    /// The node carrying station name `name` (lowest id if several do).
    pub fn station(&self, name: &str) -> Option<NodeId> {
        self.stations.get(name).copied()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the node nearest to `pos` by haversine
    /// distance, lowest id on a tie.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        nearest_on_ground(&self.spatial_idx, pos, 1, |_| true)
            .first()
            .map(|&(id, _)| id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending
    /// haversine distance.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        nearest_on_ground(&self.spatial_idx, pos, k, |_| true)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }
}
