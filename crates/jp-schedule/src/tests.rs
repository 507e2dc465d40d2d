//! Unit tests for jp-schedule.

use jp_core::Mode;

use crate::{Schedule, Timetable, Wait};

const EPS: f64 = 1e-9;

fn hours(w: Wait) -> f64 {
    w.hours().expect("expected a finite wait")
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    #[test]
    fn before_service_waits_for_first_departure() {
        assert!((hours(Schedule::DAILY.wait_at(5.0)) - 1.0).abs() < EPS);
        assert!((hours(Schedule::DAILY.wait_at(0.0)) - 6.0).abs() < EPS);
    }

    #[test]
    fn after_service_is_unreachable() {
        assert_eq!(Schedule::DAILY.wait_at(23.5), Wait::Unreachable);
        assert!(Schedule::DAILY.wait_at(23.0001).is_unreachable());
    }

    #[test]
    fn on_grid_point_departs_immediately() {
        assert_eq!(hours(Schedule::DAILY.wait_at(6.25)), 0.0);
        assert_eq!(hours(Schedule::DAILY.wait_at(6.0)), 0.0);
        // The last departure is still catchable.
        assert_eq!(hours(Schedule::DAILY.wait_at(23.0)), 0.0);
    }

    #[test]
    fn between_grid_points_waits_for_next() {
        assert!((hours(Schedule::DAILY.wait_at(6.10)) - 0.15).abs() < EPS);
        assert!((hours(Schedule::DAILY.wait_at(17.5 + 1.0 / 60.0)) - 14.0 / 60.0).abs() < EPS);
    }

    #[test]
    fn wait_never_exceeds_headway_inside_service() {
        let s = Schedule::every_minutes(6.0, 23.0, 6.0).unwrap();
        for k in 0..1_000 {
            let now = 6.0 + k as f64 * 0.017;
            let w = hours(s.wait_at(now));
            assert!(w >= 0.0 && w <= s.headway() + EPS, "now={now} wait={w}");
            // Boarding lands on the departure grid.
            let slots = (now + w - s.start()) / s.headway();
            assert!((slots - slots.round()).abs() < 1e-6, "now={now} slots={slots}");
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Schedule::new(6.0, 23.0, 0.0).is_err());
        assert!(Schedule::new(6.0, 23.0, -0.25).is_err());
        assert!(Schedule::new(23.0, 6.0, 0.25).is_err());
        assert!(Schedule::new(f64::NAN, 23.0, 0.25).is_err());
        assert!(Schedule::new(6.0, 6.0, 0.25).is_ok());
    }

    #[test]
    fn every_minutes_converts() {
        let s = Schedule::every_minutes(7.0, 22.0, 20.0).unwrap();
        assert!((s.headway() - 1.0 / 3.0).abs() < EPS);
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timetable {
    use super::*;

    #[test]
    fn unscheduled_modes_never_wait() {
        let t = Timetable::empty();
        assert_eq!(t.waiting_time(3.0, Mode::Road), Wait::Hours(0.0));
        assert_eq!(t.waiting_time(23.9, Mode::Walking), Wait::Hours(0.0));
    }

    #[test]
    fn missing_schedule_means_no_service() {
        let t = Timetable::uniform(Schedule::DAILY).without(Mode::Metro);
        assert!(t.waiting_time(12.0, Mode::Metro).is_unreachable());
        assert!(!t.waiting_time(12.0, Mode::BusLineA).is_unreachable());
    }

    #[test]
    fn uniform_covers_every_scheduled_mode() {
        let t = Timetable::default();
        for m in Mode::ALL {
            assert_eq!(t.schedule(m).is_some(), m.is_scheduled());
        }
    }

    #[test]
    fn per_line_uses_line_specific_headways() {
        let t = Timetable::per_line();
        // Metro every 5 min from 1:00: at 17:43 the next train is 17:45.
        let now = 17.0 + 43.0 / 60.0;
        assert!((hours(t.waiting_time(now, Mode::Metro)) - 2.0 / 60.0).abs() < EPS);
        // Bikolpo every 20 min from 7:00: next is 18:00.
        assert!((hours(t.waiting_time(now, Mode::BusLineA)) - 17.0 / 60.0).abs() < EPS);
        // Uttara every 10 min from 6:00: next is 17:50.
        assert!((hours(t.waiting_time(now, Mode::BusLineB)) - 7.0 / 60.0).abs() < EPS);
        // Bikolpo stops at 22:00.
        assert!(t.waiting_time(22.5, Mode::BusLineA).is_unreachable());
        assert!(!t.waiting_time(22.5, Mode::BusLineB).is_unreachable());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::load_timetable_reader;

    #[test]
    fn loads_per_line_equivalent() {
        let csv = "\
mode,first_departure,last_departure,headway_min
metro,01:00,23:00,5
bikolpo,07:00,22:00,20
bus_b,06:00,23:00,10
";
        let t = load_timetable_reader(Cursor::new(csv)).unwrap();
        let preset = Timetable::per_line();
        for m in [Mode::Metro, Mode::BusLineA, Mode::BusLineB] {
            let (a, b) = (t.schedule(m).unwrap(), preset.schedule(m).unwrap());
            assert!((a.start() - b.start()).abs() < EPS);
            assert!((a.end() - b.end()).abs() < EPS);
            assert!((a.headway() - b.headway()).abs() < EPS);
        }
    }

    #[test]
    fn omitted_mode_has_no_service() {
        let csv = "mode,first_departure,last_departure,headway_min\nmetro,06:00,23:00,15\n";
        let t = load_timetable_reader(Cursor::new(csv)).unwrap();
        assert!(t.schedule(Mode::BusLineA).is_none());
        assert!(t.waiting_time(12.0, Mode::BusLineA).is_unreachable());
    }

    #[test]
    fn rejects_unscheduled_mode() {
        let csv = "mode,first_departure,last_departure,headway_min\nroad,06:00,23:00,15\n";
        assert!(load_timetable_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_bad_rows() {
        let bad_time = "mode,first_departure,last_departure,headway_min\nmetro,6am,23:00,15\n";
        assert!(load_timetable_reader(Cursor::new(bad_time)).is_err());
        let zero_headway = "mode,first_departure,last_departure,headway_min\nmetro,06:00,23:00,0\n";
        assert!(load_timetable_reader(Cursor::new(zero_headway)).is_err());
        let unknown = "mode,first_departure,last_departure,headway_min\nferry,06:00,23:00,10\n";
        assert!(load_timetable_reader(Cursor::new(unknown)).is_err());
    }
}
