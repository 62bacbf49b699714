use super::*;
use std::f64::consts::PI;

#[test]
fn test_angles_evenly_spaced_without_endpoint() {
    let angles = radar_angles(5);
    assert_eq!(angles.len(), 5);
    assert_eq!(angles[0], 0.0);
    for pair in angles.windows(2) {
        assert!((pair[1] - pair[0] - 2.0 * PI / 5.0).abs() < 1e-12);
    }
    assert!(*angles.last().unwrap() < TAU);
    assert!(radar_angles(0).is_empty());
}

#[test]
fn test_closed_loop_repeats_first_vertex() {
    let pts = closed_loop(&[62.0, 50.0, 53.0, 100.0, 50.0]);
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[0], pts[5]);
    assert!((pts[0].0 - 62.0).abs() < 1e-12);
    assert!(pts[0].1.abs() < 1e-12);
    assert!(closed_loop(&[]).is_empty());
}

#[test]
fn test_render_radar_chart_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("radar_chart.png");
    let scores = ScoreSet {
        clarity: 62,
        impact: 50,
        logic: 53,
        innovation: 100,
        market: 50,
        overall: 61.1,
    };
    render_radar_chart(&path, &scores).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
