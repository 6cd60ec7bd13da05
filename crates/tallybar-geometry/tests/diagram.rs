//! Transform properties checked over whole ranges of inputs.

use glam::DVec2;
use tallybar_geometry::{
    Axis, AxisRange, CoordinateSystem, CoordinateSystemConfig, Diagram, DiagramConfig,
    NotationFlags,
};

fn bars_diagram(max: f64, step: f64) -> Diagram {
    Diagram::new(DiagramConfig {
        width_px: 500.0,
        height_px: 500.0,
        x: AxisRange::new(100.0, 1.0),
        y: AxisRange::new(max, step),
        x_offset_px: 8.0,
        y_offset_px: 32.0,
    })
}

#[test]
fn test_pixel_y_non_increasing_over_range() {
    for (max, step) in [(10.0, 1.0), (15.0, 1.0), (10.0, 3.0), (1.0, 0.1), (7.0, 0.0)] {
        let diagram = bars_diagram(max, step);
        let mut previous = diagram.to_pixel_y(0.0, 0.0);

        for i in 1..=200 {
            let value = max * i as f64 / 200.0;
            let current = diagram.to_pixel_y(value, 0.0);
            assert!(
                current <= previous,
                "pixel_y must not increase: max={max} step={step} value={value}"
            );
            previous = current;
        }
    }
}

#[test]
fn test_pixel_y_constant_above_max() {
    for (max, step) in [(10.0, 1.0), (10.0, 3.0), (2.5, 0.5)] {
        let diagram = bars_diagram(max, step);
        let at_max = diagram.to_pixel_y(max, 0.0);

        for over in [max + 0.001, max + 1.0, max * 10.0, f64::MAX] {
            assert_eq!(diagram.to_pixel_y(over, 0.0), at_max);
        }
    }
}

#[test]
fn test_divisible_max_lands_on_top_edge() {
    let diagram = bars_diagram(15.0, 1.0);
    assert_eq!(diagram.to_pixel_y(15.0, 0.0), diagram.frame().top);
    assert_eq!(diagram.to_pixel_y(20.0, 0.0), diagram.frame().top);
}

#[test]
fn test_pixel_x_constant_above_max() {
    let diagram = bars_diagram(10.0, 1.0);
    assert_eq!(diagram.to_pixel_x(100.0, 0.0), diagram.frame().right);
    assert_eq!(diagram.to_pixel_x(150.0, 0.0), diagram.frame().right);
}

#[test]
fn test_caption_adjust_does_not_move_geometry() {
    let diagram = bars_diagram(10.0, 1.0);
    let plain = diagram.to_pixel_xy(DVec2::new(40.0, 4.0), 0.0);
    let adjusted = diagram.to_pixel_xy(DVec2::new(40.0, 4.0), 6.0);
    assert_eq!(adjusted, DVec2::new(plain.x - 6.0, plain.y + 6.0));
}

#[test]
fn test_bars_style_coordinate_system() {
    let system = CoordinateSystem::new(
        CoordinateSystemConfig::new(500.0, 500.0)
            .with_x_range(AxisRange::new(100.0, 1.0))
            .with_y_range(AxisRange::new(10.0, 1.0))
            .with_notation_offsets(36.0, 32.0)
            .with_flags(NotationFlags::HIDE_X_NOTATION | NotationFlags::HIDE_NO_NOTABLE_CAPTIONS),
    );

    // Hidden horizontal notation shrinks its offset to the minimum.
    assert_eq!(system.diagram().frame().bottom, 492.0);
    assert_eq!(system.diagram().frame().left, 32.0);
    assert!(system.notations(Axis::X).is_empty());
    assert_eq!(system.notations(Axis::Y).len(), 10);
    assert_eq!(system.ticks(Axis::X).len(), 100);
}
