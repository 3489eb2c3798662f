use prancheta_board::{DrawingEngine, StrokeSegment};
use prancheta_core::Point;

#[test]
fn test_finish_simplifies_and_clears() {
    let mut engine = DrawingEngine::new(true, 0.5, true);
    engine.start_drawing(Point::new(0.0, 0.0), "#ff0000", 3.0, None);
    for x in 1..=10 {
        engine.continue_drawing(Point::new(x as f64, 0.0), None);
    }
    engine.continue_drawing(Point::new(10.0, 10.0), None);

    let path = engine.finish_drawing().unwrap();
    assert_eq!(
        path.points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0)
        ]
    );
    assert_eq!(path.color, "#ff0000");
    assert_eq!(path.thickness, 3.0);
    assert!(path.timestamp > 0);
    assert!(path.widths.is_none());

    assert!(!engine.is_drawing());
    assert!(engine.current_points().is_empty());
    assert!(engine.finish_drawing().is_none());
}

#[test]
fn test_pressure_widths_follow_kept_points() {
    let mut engine = DrawingEngine::new(false, 0.5, true);
    engine.start_drawing(Point::new(0.0, 0.0), "#000", 4.0, Some(1.0));
    engine.continue_drawing(Point::new(5.0, 0.0), Some(0.5));
    engine.continue_drawing(Point::new(10.0, 0.0), Some(0.25));
    engine.continue_drawing(Point::new(10.0, 8.0), Some(0.5));

    let path = engine.finish_drawing().unwrap();
    assert_eq!(path.points.len(), 3);
    assert_eq!(path.widths, Some(vec![4.0, 1.0, 2.0]));
}

#[test]
fn test_pressure_ignored_when_disabled() {
    let mut engine = DrawingEngine::new(false, 0.5, false);
    engine.start_drawing(Point::new(0.0, 0.0), "#000", 4.0, Some(0.2));
    engine.continue_drawing(Point::new(5.0, 5.0), Some(0.2));
    assert!(engine.finish_drawing().unwrap().widths.is_none());
}

#[test]
fn test_smoothing_off_emits_lines() {
    let mut engine = DrawingEngine::new(false, 0.0, false);
    engine.start_drawing(Point::new(0.0, 0.0), "#000", 2.0, None);
    engine.continue_drawing(Point::new(5.0, 0.0), None);
    let seg = engine.continue_drawing(Point::new(5.0, 5.0), None).unwrap();
    assert!(matches!(seg, StrokeSegment::Line { .. }));
    assert_eq!(seg.end(), Point::new(5.0, 5.0));
}

#[test]
fn test_preview_follows_samples() {
    let mut engine = DrawingEngine::default();
    engine.start_drawing(Point::new(0.0, 0.0), "#000", 2.0, None);
    engine.continue_drawing(Point::new(5.0, 0.0), None);
    engine.continue_drawing(Point::new(5.0, 5.0), None);

    let preview = engine.preview_path().unwrap();
    // begin, line, quadratic, end
    assert_eq!(preview.iter().count(), 4);
    assert_eq!(engine.current_style(), Some(("#000", 2.0)));
}

#[test]
fn test_single_sample_stroke_is_kept() {
    let mut engine = DrawingEngine::default();
    engine.start_drawing(Point::new(7.0, 7.0), "#000", 2.0, None);
    let path = engine.finish_drawing().unwrap();
    assert_eq!(path.points, vec![Point::new(7.0, 7.0)]);
}
