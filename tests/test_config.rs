use std::path::Path;

use glam::Vec2;
use toohoo::config::*;
use toohoo::entities::*;

// ── Arena ─────────────────────────────────────────────────────────────────────

#[test]
fn default_arena_is_480_by_720() {
    let arena = Arena::default();
    assert_eq!(arena.width, 480.0);
    assert_eq!(arena.height, 720.0);
}

#[test]
fn arena_contains_is_inclusive() {
    let arena = Arena { width: 100.0, height: 50.0 };
    assert!(arena.contains(Vec2::new(0.0, 0.0)));
    assert!(arena.contains(Vec2::new(100.0, 50.0)));
    assert!(!arena.contains(Vec2::new(100.01, 25.0)));
    assert!(!arena.contains(Vec2::new(50.0, -0.01)));
}

// ── Default encounter ─────────────────────────────────────────────────────────

#[test]
fn default_encounter_shape() {
    let bs = default_encounter();
    let frames: Vec<u32> = bs.iter().map(|b| b.frames).collect();
    assert_eq!(frames, vec![120, 180, 180, 180, 1200]);
    assert_eq!(frames.iter().sum::<u32>(), 1860);

    let last = &bs[4].projectile_types;
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].kind(), ProjectileKind::Big);
    assert_eq!(last[0].at_once, 18);
    assert_eq!(last[1].kind(), ProjectileKind::Small);

    // The third phase fires the unnamed (normal) tier
    assert_eq!(bs[2].projectile_types[0].kind(), ProjectileKind::Normal);

    for t in bs.iter().flat_map(|b| &b.projectile_types) {
        assert!(t.reload > 0);
        assert_eq!(t.current_angle_offset, 0.0);
    }
}

// ── Encounter files ───────────────────────────────────────────────────────────

#[test]
fn parse_minimal_encounter() {
    let json = r#"[
        { "frames": 90, "projectile_types": [
            { "reload": 30, "at_once": 3, "angle_offset_increment": 0.05 }
        ] }
    ]"#;
    let bs = parse_encounter(json).unwrap();
    assert_eq!(bs.len(), 1);
    assert_eq!(bs[0].frames, 90);
    let t = &bs[0].projectile_types[0];
    assert_eq!(t.name, "");
    assert_eq!(t.kind(), ProjectileKind::Normal);
    assert_eq!(t.current_angle_offset, 0.0);
}

#[test]
fn default_encounter_survives_json() {
    let json = serde_json::to_string(&default_encounter()).unwrap();
    assert_eq!(parse_encounter(&json).unwrap(), default_encounter());
}

#[test]
fn empty_encounter_rejected() {
    let err = parse_encounter("[]").unwrap_err();
    assert!(err.to_string().contains("no behaviours"));
}

#[test]
fn zero_reload_rejected() {
    let json = r#"[
        { "frames": 60, "projectile_types": [
            { "name": "big", "reload": 0, "at_once": 3, "angle_offset_increment": 0.1 }
        ] }
    ]"#;
    let err = parse_encounter(json).unwrap_err();
    assert!(err.to_string().contains("reload"));
}

#[test]
fn malformed_json_rejected() {
    assert!(parse_encounter("{ not json").is_err());
    assert!(parse_encounter(r#"[{ "frames": -5, "projectile_types": [] }]"#).is_err());
}

#[test]
fn missing_file_names_the_path() {
    let err = load_encounter(Path::new("/nonexistent/encounter.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/encounter.json"));
}

#[test]
fn load_encounter_from_disk() {
    let path = std::env::temp_dir().join(format!("toohoo-encounter-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&default_encounter()).unwrap()).unwrap();
    let loaded = load_encounter(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap().len(), 5);
}
