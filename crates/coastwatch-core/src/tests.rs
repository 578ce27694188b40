#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::enums::*;
    use crate::events::{AudioCue, LogEvent};
    use crate::state::{SimSnapshot, StatsSnapshot};
    use crate::types::*;

    // ---- Geometry ----

    #[test]
    fn test_distance() {
        let d = distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        let n = normalize(Vec2::new(0.0, -7.0));
        assert!((n.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_diff_wraps_shortest_way() {
        assert!((angle_diff(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_diff(FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < 1e-12);
        // 170° to -170° is a +20° turn, not -340°.
        let a = 170f64.to_radians();
        let b = -170f64.to_radians();
        assert!((angle_diff(a, b) - 20f64.to_radians()).abs() < 1e-9);
        assert!(angle_diff(0.0, 3.0 * PI).abs() <= PI + 1e-12);
    }

    #[test]
    fn test_steer_toward_clamps_turn() {
        let h = steer_toward(0.0, 1.0, 0.04);
        assert!((h - 0.04).abs() < 1e-12);
        let h = steer_toward(0.0, -1.0, 0.04);
        assert!((h + 0.04).abs() < 1e-12);
        // Small corrections land exactly on the desired heading.
        let h = steer_toward(0.5, 0.51, 0.04);
        assert!((h - 0.51).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_and_heading_vector_agree() {
        let from = Vec2::new(10.0, 10.0);
        let to = Vec2::new(10.0, 50.0);
        let b = bearing(from, to);
        assert!((b - FRAC_PI_2).abs() < 1e-12);
        let v = heading_vector(b);
        assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parking_slots_are_distinct() {
        let slots: Vec<Vec2> = (0..4).map(|i| parking_slot(DroneId(i))).collect();
        assert!((slots[0].y - 270.0).abs() < 1e-12);
        assert!((slots[3].y - 330.0).abs() < 1e-12);
        for s in &slots {
            assert_eq!(s.x, base_position().x);
        }
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TargetId(7).to_string(), "T-0007");
        assert_eq!(DroneId(0).to_string(), "VTOL-01");
        assert_eq!(AttackDroneId(12).to_string(), "ATK-012");
    }

    // ---- Weather table ----

    #[test]
    fn test_weather_coefficients() {
        let storm = Weather::Storm.effects();
        assert_eq!(storm.detection_range, 100.0);
        assert_eq!(storm.speed_multiplier, 0.6);
        assert_eq!(storm.drain_multiplier, 2.0);

        let fog = Weather::Fog.effects();
        assert_eq!(fog.detection_range, 130.0);
        assert_eq!(fog.drain_multiplier, 1.0);

        let rain = Weather::Rain.effects();
        assert_eq!(rain.detection_range, 160.0);
        assert_eq!(rain.speed_multiplier, 0.9);
        assert_eq!(rain.drain_multiplier, 1.2);

        assert_eq!(WeatherEffects::default(), Weather::Clear.effects());
    }

    // ---- Serde ----

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&TargetKind::Enemy).unwrap(),
            "\"ENEMY\""
        );
        assert_eq!(
            serde_json::to_string(&DroneState::Returning).unwrap(),
            "\"RETURNING\""
        );
        assert_eq!(serde_json::to_string(&Weather::Storm).unwrap(), "\"STORM\"");
        assert_eq!(serde_json::to_string(&Severity::Alert).unwrap(), "\"ALERT\"");
    }

    #[test]
    fn test_audio_cue_tagged() {
        let json = serde_json::to_string(&AudioCue::LockAcquired {
            target: TargetId(3),
        })
        .unwrap();
        assert!(json.contains("\"type\":\"LockAcquired\""));
        let back: AudioCue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AudioCue::LockAcquired { target: TargetId(3) });
    }

    #[test]
    fn test_log_event_serde() {
        let event = LogEvent {
            id: 9,
            timestamp_ms: 1234.5,
            message: "VTOL-01 landed".into(),
            severity: Severity::Info,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: LogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_stats_record_and_total() {
        let mut stats = StatsSnapshot::default();
        stats.record(TargetKind::Enemy);
        stats.record(TargetKind::Enemy);
        stats.record(TargetKind::Fishing);
        assert_eq!(stats.enemy, 2);
        assert_eq!(stats.fishing, 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.weather, Weather::Clear);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = SimSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"weather\":\"CLEAR\""));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(16.0);
        t.advance(500.0);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs() - 0.516).abs() < 1e-12);
    }
}
