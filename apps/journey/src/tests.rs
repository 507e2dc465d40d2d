//! Tests for the canonical scenarios on a hand-built network.

#[cfg(test)]
mod scenarios {
    use jp_core::{GeoPoint, Mode, NodeId};
    use jp_network::{NetworkBuilder, TransitNetwork};

    use crate::scenarios::{canonical, Query, Timetables, Window};

    /// Origin 0 and destination 3 joined by a road pair, a metro line with
    /// walking transfers, and a Bikolpo bus link.
    fn city() -> TransitNetwork {
        let mut b = NetworkBuilder::new();
        let home = b.node_at(GeoPoint::new(23.834, 90.364));
        let mid = b.node_at(GeoPoint::new(23.790, 90.370));
        let north = b.node_at(GeoPoint::new(23.830, 90.366));
        let work = b.node_at(GeoPoint::new(23.722, 90.379));
        let south = b.node_at(GeoPoint::new(23.724, 90.378));
        b.name_station(north, "Mirpur 10");
        b.name_station(south, "Motijheel");
        b.add_link(home, mid, 5.0, Mode::Road, vec![]);
        b.add_link(mid, work, 7.5, Mode::Road, vec![]);
        b.add_link(home, north, 0.3, Mode::Walking, vec![]);
        b.add_link(north, south, 12.0, Mode::Metro, vec![]);
        b.add_link(south, work, 0.3, Mode::Walking, vec![]);
        b.add_link(mid, south, 6.0, Mode::BusLineA, vec![]);
        b.build()
    }

    fn window() -> Window {
        Window { start: 17.75, deadline: 20.5 }
    }

    #[test]
    fn six_distinct_queries() {
        let ids: Vec<u32> = canonical().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_query_finds_a_path() {
        let net = city();
        for scenario in canonical() {
            let it = scenario
                .run(&net, NodeId(0), NodeId(3), window(), &Timetables::default())
                .unwrap();
            assert!(it.is_found(), "problem {} found nothing", scenario.id);
            let timed = !matches!(scenario.query, Query::Standard { .. });
            assert_eq!(it.start.is_some(), timed, "problem {}", scenario.id);
        }
    }

    #[test]
    fn car_only_query_stays_on_road() {
        let net = city();
        let it = canonical()[0]
            .run(&net, NodeId(0), NodeId(3), window(), &Timetables::default())
            .unwrap();
        assert!(it.legs.iter().all(|l| l.mode == Mode::Road));
        assert!((it.total_distance_km - 12.5).abs() < 1e-9);
        // Rate 1 per km: cost equals distance.
        assert!((it.total_cost - it.total_distance_km).abs() < 1e-9);
    }

    #[test]
    fn cheapest_uses_metro() {
        let net = city();
        let it = canonical()[1]
            .run(&net, NodeId(0), NodeId(3), window(), &Timetables::default())
            .unwrap();
        let modes: Vec<Mode> = it.legs.iter().map(|l| l.mode).collect();
        assert_eq!(modes, vec![Mode::Walking, Mode::Metro, Mode::Walking]);
        assert!((it.total_cost - 60.0).abs() < 1e-9);
    }

    #[test]
    fn deadline_arrival_respected() {
        let net = city();
        let w = window();
        let it = canonical()[5]
            .run(&net, NodeId(0), NodeId(3), w, &Timetables::default())
            .unwrap();
        assert!(it.arrival().unwrap() <= w.deadline);
    }

    #[test]
    fn walk_eats_deadline() {
        let net = city();
        let it = canonical()[5]
            .run(&net, NodeId(0), NodeId(3), Window { start: 19.0, deadline: 18.5 }, &Timetables::default())
            .unwrap();
        assert!(!it.is_found());
    }
}
