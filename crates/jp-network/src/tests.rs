//! Unit tests for jp-network.
//!
//! All tests use hand-built networks or inline CSV so they run without the
//! real dataset.

#[cfg(test)]
mod helpers {
    use jp_core::{GeoPoint, Mode, NodeId};

    use crate::{NetworkBuilder, TransitNetwork};

    /// A small mixed network.
    ///
    /// ```text
    ///   0 ──road 2.0── 1 ──road 2.0── 2
    ///   │                             │
    ///  walk 0.1                      walk 0.1
    ///   │                             │
    ///   3 (Mirpur) ═══metro 3.0═══ 4 (Motijheel)
    /// ```
    pub fn mixed_network() -> (TransitNetwork, [NodeId; 5]) {
        let mut b = NetworkBuilder::new();
        let n0 = b.node_at(GeoPoint::new(23.80, 90.36));
        let n1 = b.node_at(GeoPoint::new(23.80, 90.38));
        let n2 = b.node_at(GeoPoint::new(23.80, 90.40));
        let n3 = b.node_at(GeoPoint::new(23.801, 90.36));
        let n4 = b.node_at(GeoPoint::new(23.801, 90.40));
        b.name_station(n3, "Mirpur");
        b.name_station(n4, "Motijheel");

        b.add_link(n0, n1, 2.0, Mode::Road, vec![]);
        b.add_link(n1, n2, 2.0, Mode::Road, vec![]);
        b.add_link(n3, n4, 3.0, Mode::Metro, vec![b.node_pos(n3), b.node_pos(n4)]);
        b.add_link(n3, n0, 0.1, Mode::Walking, vec![]);
        b.add_link(n4, n2, 0.1, Mode::Walking, vec![]);

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use jp_core::{GeoPoint, Mode};

    use crate::NetworkBuilder;

    #[test]
    fn empty_build() {
        let net = NetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn node_at_deduplicates_within_tolerance() {
        let mut b = NetworkBuilder::new();
        let a = b.node_at(GeoPoint::new(23.834145, 90.363833));
        let same = b.node_at(GeoPoint::new(23.834145 + 4e-7, 90.363833 - 4e-7));
        let other = b.node_at(GeoPoint::new(23.834145 + 3e-6, 90.363833));
        assert_eq!(a, same);
        assert_ne!(a, other);
        assert_eq!(b.node_count(), 2);
    }

    #[test]
    fn node_at_prefers_lowest_id() {
        let mut b = NetworkBuilder::new();
        // Two distinct nodes 1.5e-6 apart; a lookup between them is within
        // tolerance of both.
        let first = b.add_node(GeoPoint::new(10.0, 10.0));
        let second = b.add_node(GeoPoint::new(10.0, 10.0 + 1.5e-6));
        let midway = b.node_at(GeoPoint::new(10.0, 10.0 + 0.75e-6));
        assert_eq!(midway, first);
        assert_ne!(midway, second);
    }

    #[test]
    fn ids_are_sequential() {
        let mut b = NetworkBuilder::new();
        for i in 0..5u32 {
            let id = b.node_at(GeoPoint::new(i as f64, 0.0));
            assert_eq!(id.0, i);
        }
    }

    #[test]
    fn links_are_reciprocal_with_reversed_geometry() {
        let mut b = NetworkBuilder::new();
        let p = GeoPoint::new(23.80, 90.36);
        let mid = GeoPoint::new(23.805, 90.365);
        let q = GeoPoint::new(23.81, 90.37);
        let a = b.node_at(p);
        let c = b.node_at(q);
        b.add_link(a, c, 1.7, Mode::BusLineA, vec![p, mid, q]);
        let net = b.build();

        assert_eq!(net.edge_count(), 2);
        let fwd = net.edge(net.out_edges(a).next().unwrap());
        let back = net.edge(net.out_edges(c).next().unwrap());
        assert_eq!((fwd.from, fwd.to), (a, c));
        assert_eq!((back.from, back.to), (c, a));
        assert_eq!(fwd.length_km, back.length_km);
        assert_eq!(fwd.mode, back.mode);
        assert_eq!(fwd.geometry, &[p, mid, q]);
        assert_eq!(back.geometry, &[q, mid, p]);
    }

    #[test]
    fn out_edges_keep_insertion_order() {
        let mut b = NetworkBuilder::new();
        let hub = b.node_at(GeoPoint::new(0.0, 0.0));
        let spokes: Vec<_> = (1..=4).map(|i| b.node_at(GeoPoint::new(0.0, i as f64))).collect();
        // Insert spokes in a scrambled order.
        for &i in &[2usize, 0, 3, 1] {
            b.add_link(hub, spokes[i], 1.0, Mode::Road, vec![]);
        }
        let net = b.build();
        let targets: Vec<_> = net.out_edges(hub).map(|e| net.edge_to[e.index()]).collect();
        assert_eq!(targets, vec![spokes[2], spokes[0], spokes[3], spokes[1]]);
    }

    #[test]
    fn name_station_keeps_first_name() {
        let mut b = NetworkBuilder::new();
        let n = b.node_at(GeoPoint::new(1.0, 1.0));
        assert!(b.name_station(n, "Agargaon"));
        assert!(!b.name_station(n, "Other"));
        let unnamed = b.node_at(GeoPoint::new(2.0, 2.0));
        assert!(!b.name_station(unnamed, ""));
        assert_eq!(b.node_name(n), Some("Agargaon"));
    }

    #[test]
    fn link_stations_joins_nearest_street_node() {
        let mut b = NetworkBuilder::new();
        let street_far = b.node_at(GeoPoint::new(23.800, 90.400));
        let street_near = b.node_at(GeoPoint::new(23.800, 90.3605));
        let station = b.node_at(GeoPoint::new(23.800, 90.360));
        let other_station = b.node_at(GeoPoint::new(23.8001, 90.3601));
        b.name_station(station, "Mirpur 10");
        b.name_station(other_station, "Mirpur 11");
        // A lonely station far from every street node.
        let lonely = b.node_at(GeoPoint::new(24.5, 91.0));
        b.name_station(lonely, "Sylhet");

        let linked = b.link_stations(0.5);
        assert_eq!(linked, 2);

        let net = b.build();
        // Station links never target another station.
        let walk: Vec<_> = net
            .out_edges(station)
            .map(|e| net.edge(e))
            .filter(|e| e.mode == Mode::Walking)
            .collect();
        assert_eq!(walk.len(), 1);
        assert_eq!(walk[0].to, street_near);
        assert!((walk[0].length_km - net.pos(station).distance_km(net.pos(street_near))).abs() < 1e-12);
        assert_eq!(net.out_degree(lonely), 0);
        assert_eq!(net.out_degree(street_far), 0);
    }

    #[test]
    fn link_stations_ranks_by_ground_distance() {
        // East is farther in raw degrees but nearer on the ground, since a
        // degree of longitude at 23.8° N spans about 0.915 of a latitude degree.
        let mut b = NetworkBuilder::new();
        let station = b.node_at(GeoPoint::new(23.800, 90.360));
        let north = b.node_at(GeoPoint::new(23.801, 90.360));
        let east = b.node_at(GeoPoint::new(23.800, 90.36105));
        b.name_station(station, "Kazipara");

        assert_eq!(b.link_stations(0.5), 1);

        let net = b.build();
        let walk: Vec<_> = net.out_edges(station).map(|e| net.edge(e)).collect();
        assert_eq!(walk.len(), 1);
        assert_eq!(walk[0].to, east);
        assert!(walk[0].length_km < net.pos(station).distance_km(net.pos(north)));
        assert_eq!(net.out_degree(north), 0);
    }
}

// ── Lookups ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use jp_core::{GeoPoint, Mode, NodeId};

    use crate::NetworkBuilder;

    #[test]
    fn csr_out_degrees() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::mixed_network();
        assert_eq!(net.out_degree(n0), 2); // road to n1, walk to n3
        assert_eq!(net.out_degree(n1), 2);
        assert_eq!(net.out_degree(n2), 2);
        assert_eq!(net.out_degree(n3), 2); // metro, walk
        assert_eq!(net.out_degree(n4), 2);
        for n in [n0, n1, n2, n3, n4] {
            for e in net.out_edges(n) {
                assert_eq!(net.edge_from[e.index()], n);
            }
        }
    }

    #[test]
    fn contains_checks_range() {
        let (net, _) = super::helpers::mixed_network();
        assert!(net.contains(NodeId(4)));
        assert!(!net.contains(NodeId(5)));
        assert!(!net.contains(NodeId::INVALID));
    }

    #[test]
    fn station_lookup_by_name() {
        let (net, [_, _, _, n3, n4]) = super::helpers::mixed_network();
        assert_eq!(net.station("Mirpur"), Some(n3));
        assert_eq!(net.station("Motijheel"), Some(n4));
        assert_eq!(net.station("Gulshan"), None);
        assert_eq!(net.station_count(), 2);
        assert_eq!(net.name(n3), Some("Mirpur"));
        assert_eq!(net.name(NodeId(0)), None);
    }

    #[test]
    fn nearest_node_snaps() {
        let (net, [n0, n1, ..]) = super::helpers::mixed_network();
        assert_eq!(net.nearest_node(GeoPoint::new(23.7995, 90.3612)), Some(n0));
        assert_eq!(net.nearest_node(GeoPoint::new(23.7990, 90.3790)), Some(n1));
        assert!(net.k_nearest_nodes(GeoPoint::new(23.80, 90.36), 3).len() == 3);
    }

    #[test]
    fn nearest_node_uses_ground_distance() {
        let mut b = NetworkBuilder::new();
        let north = b.node_at(GeoPoint::new(23.8010, 90.36));
        let east = b.node_at(GeoPoint::new(23.8000, 90.36105));
        let far = b.node_at(GeoPoint::new(23.8100, 90.36));
        let net = b.build();

        let query = GeoPoint::new(23.80, 90.36);
        assert!(query.distance_km(net.pos(east)) < query.distance_km(net.pos(north)));
        assert_eq!(net.nearest_node(query), Some(east));
        assert_eq!(net.k_nearest_nodes(query, 2), vec![east, north]);
        assert_eq!(net.k_nearest_nodes(query, 5), vec![east, north, far]);
        assert!(net.k_nearest_nodes(query, 0).is_empty());
    }

    #[test]
    fn nearest_node_tie_prefers_lowest_id() {
        let mut b = NetworkBuilder::new();
        let first = b.add_node(GeoPoint::new(23.801, 90.361));
        let second = b.add_node(GeoPoint::new(23.801, 90.361));
        let net = b.build();
        let query = GeoPoint::new(23.80, 90.36);
        assert_eq!(net.nearest_node(query), Some(first));
        assert_eq!(net.k_nearest_nodes(query, 2), vec![first, second]);
    }

    #[test]
    fn empty_network_has_no_nearest() {
        let net = NetworkBuilder::new().build();
        assert!(net.nearest_node(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn edge_view_matches_arrays() {
        let (net, [_, _, _, n3, n4]) = super::helpers::mixed_network();
        let metro = net
            .out_edges(n3)
            .map(|e| net.edge(e))
            .find(|e| e.mode == Mode::Metro)
            .unwrap();
        assert_eq!(metro.to, n4);
        assert_eq!(metro.length_km, 3.0);
        assert_eq!(metro.geometry.len(), 2);
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use jp_core::Mode;

    use crate::{
        load_dataset, load_roads_reader, load_routes_reader, DatasetPaths, NetworkBuilder,
        NetworkError,
    };

    const ROADS: &str = "\
DhakaStreet1,90.3600,23.8000,90.3700,23.8000,90.3800,23.8000,x,2.05
DhakaStreet2,90.3800,23.8000,90.3800,23.8100,y,1.11
NotAStreet,90.1,23.1,90.2,23.2,z,9.9
DhakaStreet3,90.3800,23.8100,z,0.5
";

    const METRO: &str = "\
DhakaMetroRail,90.3601,23.8001,90.3801,23.8101,Mirpur 10,Agargaon
DhakaBusX,90.1,23.1,90.2,23.2,A,B
";

    const BUS: &str = "\
DhakaBusBikolpo,90.3700,23.8000,90.3800,23.8100,Kazipara,Shewrapara
DhakaMetroRail,90.1,23.1,90.2,23.2,A,B
";

    #[test]
    fn roads_dedupe_shared_endpoints() {
        let mut b = NetworkBuilder::new();
        let links = load_roads_reader(&mut b, Cursor::new(ROADS)).unwrap();
        // Row 3 has the wrong tag, row 4 has only one point.
        assert_eq!(links, 2);
        // (90.36,23.80) (90.38,23.80) (90.38,23.81): the shared end is one node.
        assert_eq!(b.node_count(), 3);

        let net = b.build();
        let first = net.edge(net.out_edges(jp_core::NodeId(0)).next().unwrap());
        assert_eq!(first.mode, Mode::Road);
        assert_eq!(first.length_km, 2.05);
        assert_eq!(first.geometry.len(), 3);
    }

    #[test]
    fn road_row_without_unused_column() {
        let mut b = NetworkBuilder::new();
        let csv = "DhakaStreet1,90.3600,23.8000,90.3700,23.8100,1.5\n";
        let links = load_roads_reader(&mut b, Cursor::new(csv)).unwrap();
        assert_eq!(links, 1);
        assert_eq!(b.node_count(), 2);

        let net = b.build();
        let road = net.edge(net.out_edges(jp_core::NodeId(0)).next().unwrap());
        assert_eq!(road.length_km, 1.5);
        assert_eq!(road.geometry.len(), 2);
        assert_eq!(net.pos(road.to), jp_core::GeoPoint::new(23.81, 90.37));
    }

    #[test]
    fn routes_filter_by_tag_and_name_stations() {
        let mut b = NetworkBuilder::new();
        let metro = load_routes_reader(&mut b, Cursor::new(METRO), Mode::Metro).unwrap();
        let bus = load_routes_reader(&mut b, Cursor::new(BUS), Mode::BusLineA).unwrap();
        assert_eq!(metro, 1);
        assert_eq!(bus, 1);

        let net = b.build();
        let mirpur = net.station("Mirpur 10").unwrap();
        let e = net.edge(net.out_edges(mirpur).next().unwrap());
        assert_eq!(e.mode, Mode::Metro);
        // Route length is the haversine length of the polyline.
        let expected = net.pos(mirpur).distance_km(net.pos(e.to));
        assert!((e.length_km - expected).abs() < 1e-12);
        assert!(net.station("Kazipara").is_some());
    }

    #[test]
    fn bad_number_reports_line() {
        let mut b = NetworkBuilder::new();
        let csv = "DhakaStreet1,90.36,23.80\nDhakaStreet2,90.36,north,90.37,23.81,x,1.0\n";
        match load_roads_reader(&mut b, Cursor::new(csv)) {
            Err(NetworkError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn road_mode_has_no_route_format() {
        let mut b = NetworkBuilder::new();
        let err = load_routes_reader(&mut b, Cursor::new(METRO), Mode::Road).unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedMode(Mode::Road)));
    }

    #[test]
    fn dataset_from_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = DatasetPaths::in_dir(dir.path());
        std::fs::write(&paths.roads, ROADS).unwrap();
        std::fs::write(&paths.metro, METRO).unwrap();
        std::fs::write(&paths.bus_a, BUS).unwrap();
        std::fs::write(&paths.bus_b, "").unwrap();

        let net = load_dataset(&paths).unwrap();
        // Mirpur 10 sits 1e-4° from street node (90.36, 23.80): linked on foot.
        let mirpur = net.station("Mirpur 10").unwrap();
        assert!(
            net.out_edges(mirpur)
                .any(|e| net.edge_mode[e.index()] == Mode::Walking)
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = load_dataset(&DatasetPaths::in_dir(dir.path()));
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }
}
