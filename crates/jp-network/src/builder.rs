//! Incremental construction of a [`TransitNetwork`].
//!
//! The builder owns a live R-tree so that [`NetworkBuilder::node_at`] can
//! deduplicate coordinates as links are added, which is how the dataset
//! loaders stitch separate polylines into one graph.  `build()` then sorts
//! edges into CSR order and bulk-loads a fresh index for the finished
//! network.

use rstar::{RTree, AABB};
use rustc_hash::FxHashMap;
use tracing::debug;

use jp_core::geo::SAME_PLACE_EPS_DEG;
use jp_core::{GeoPoint, Mode, NodeId};

use crate::network::{nearest_on_ground, NodeEntry, TransitNetwork};

/// Stations farther than this from every street node stay unlinked.
pub const STATION_LINK_MAX_KM: f64 = 0.5;

/// Construct a [`TransitNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use jp_core::{GeoPoint, Mode};
/// use jp_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// let a = b.node_at(GeoPoint::new(23.80, 90.36));
/// let c = b.node_at(GeoPoint::new(23.81, 90.37));
/// b.add_link(a, c, 1.5, Mode::Road, vec![]);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // reciprocal pair
/// ```
pub struct NetworkBuilder {
    nodes:     Vec<GeoPoint>,
    names:     Vec<Option<String>>,
    raw_edges: Vec<RawEdge>,
    index:     RTree<NodeEntry>,
}

struct RawEdge {
    from:      NodeId,
    to:        NodeId,
    length_km: f64,
    mode:      Mode,
    geometry:  Vec<GeoPoint>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:     Vec::new(),
            names:     Vec::new(),
            raw_edges: Vec::new(),
            index:     RTree::new(),
        }
    }

    /// Add a node unconditionally and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.names.push(None);
        self.index.insert(NodeEntry { point: [pos.lat, pos.lon], id });
        id
    }

    /// Existing node within 1e-6° of `pos` on both axes, if any.
    ///
    /// When several qualify the lowest id wins, so the first node created at
    /// a place keeps owning it.
    pub fn find_node(&self, pos: GeoPoint) -> Option<NodeId> {
        let eps = SAME_PLACE_EPS_DEG;
        let envelope = AABB::from_corners(
            [pos.lat - eps, pos.lon - eps],
            [pos.lat + eps, pos.lon + eps],
        );
        self.index
            .locate_in_envelope(&envelope)
            .filter(|e| self.nodes[e.id.index()].same_place(pos))
            .map(|e| e.id)
            .min()
    }

    /// Get-or-create the node at `pos`.
    pub fn node_at(&mut self, pos: GeoPoint) -> NodeId {
        match self.find_node(pos) {
            Some(id) => id,
            None => self.add_node(pos),
        }
    }

    /// Give `node` a station name unless it already has one.
    ///
    /// Returns `true` if the name was set.
    pub fn name_station(&mut self, node: NodeId, name: &str) -> bool {
        let slot = &mut self.names[node.index()];
        if slot.is_some() || name.is_empty() {
            return false;
        }
        *slot = Some(name.to_owned());
        true
    }

    /// Add a link between `a` and `b` as a reciprocal pair of directed edges.
    ///
    /// `geometry` runs from `a` to `b`; the reverse edge gets it reversed.
    pub fn add_link(
        &mut self,
        a: NodeId,
        b: NodeId,
        length_km: f64,
        mode: Mode,
        geometry: Vec<GeoPoint>,
    ) {
        let mut reversed = geometry.clone();
        reversed.reverse();
        self.raw_edges.push(RawEdge { from: a, to: b, length_km, mode, geometry });
        self.raw_edges.push(RawEdge { from: b, to: a, length_km, mode, geometry: reversed });
    }

    /// Join every named station to its nearest unnamed node with a
    /// `Walking` link, when that node lies within `max_km`.
    ///
    /// Nearness and link length are both haversine distance.  Returns the
    /// number of stations linked.
    pub fn link_stations(&mut self, max_km: f64) -> usize {
        let mut links = Vec::new();

        for (i, name) in self.names.iter().enumerate() {
            if name.is_none() {
                continue;
            }
            let station = NodeId(i as u32);
            let pos = self.nodes[i];
            let nearest = nearest_on_ground(&self.index, pos, 1, |e| {
                e.id != station && self.names[e.id.index()].is_none()
            });

            if let Some(&(street, d)) = nearest.first() {
                if d < max_km {
                    links.push((station, street, d, vec![pos, self.nodes[street.index()]]));
                }
            }
        }

        let count = links.len();
        for (station, street, d, geometry) in links {
            self.add_link(station, street, d, Mode::Walking, geometry);
        }
        debug!(linked = count, max_km, "linked stations to street network");
        count
    }

    /// Position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.names[id.index()].as_deref()
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`TransitNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> TransitNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable sort: edges of one node keep their insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:      Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:        Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_km: Vec<f64>    = raw.iter().map(|e| e.length_km).collect();
        let edge_mode:      Vec<Mode>   = raw.iter().map(|e| e.mode).collect();
        let edge_geometry: Vec<Vec<GeoPoint>> = raw.into_iter().map(|e| e.geometry).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for from in &edge_from {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry { point: [pos.lat, pos.lon], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut stations = FxHashMap::default();
        for (i, name) in self.names.iter().enumerate() {
            if let Some(name) = name {
                stations.entry(name.clone()).or_insert(NodeId(i as u32));
            }
        }

        TransitNetwork {
            node_pos: self.nodes,
            node_name: self.names,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_km,
            edge_mode,
            edge_geometry,
            spatial_idx,
            stations,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
