//! Bars Demo - drag a bar and print the resulting scene as SVG
//!
//! This example demonstrates:
//! - Building a bars widget with a value listener
//! - Driving a drag through raw pointer events
//! - Reconciling the widget against a new bar count
//! - Turning the display list into SVG markup
//!
//! Run with: cargo run --example bars_demo > bars.svg
//! Set `RUST_LOG=tallybar_ui=trace` for per-step logging, and pass
//! `--profile` to serve puffin data on port 8585.

use std::fmt::Write as _;
use std::rc::Rc;
use tallybar::core::{logging, profiling};
use tallybar::prelude::*;

fn main() {
    logging::init();
    if std::env::args().any(|arg| arg == "--profile") {
        profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp);
    }

    let pressed = PointerPressedSignal::new();
    let config = BarsWidgetConfig::new(vec![
        PartialBar::new().key("mon").value(3.0),
        PartialBar::new().key("tue").value(6.0),
        PartialBar::new()
            .key("wed")
            .value(9.0)
            .color(Color::from_hex(0xE67E22)),
    ])
    .max(12.0)
    .step(1.0)
    .notable_step(3.0)
    .show_no_notable_captions(true)
    .on_bar_value_changed(|key, value| tracing::info!(key, value, "bar changed"));

    let mut widget = BarsWidget::new(config, Rc::new(pressed.clone()));

    // Drag "tue" up by two steps, releasing outside the widget.
    let marker = widget.bar_geometry()[1].marker.center();
    let step_px = widget.diagram().step_px(Axis::Y);
    let gesture = [
        PointerEvent::Pressed(marker),
        PointerEvent::Moved(marker - dvec2(0.0, step_px)),
        PointerEvent::Moved(marker - dvec2(0.0, step_px * 2.0)),
        PointerEvent::Released(dvec2(-100.0, -100.0)),
    ];
    for event in gesture {
        profiling::new_frame();
        pressed.handle_event(&event);
        widget.handle_pointer_event(event);
    }

    // Switching to an uncontrolled count regenerates the bars.
    widget.set_bars(BarsSource::Count(5));
    widget.step_up("4");

    print!("{}", to_svg(&widget.render()));
}

fn to_svg(scene: &Scene) -> String {
    let size = scene.size();
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        size.x, size.y
    );

    for primitive in scene.primitives() {
        let _ = match primitive {
            Primitive::Line(line) => {
                let dash = if line.stroke.dash.is_solid() {
                    String::new()
                } else {
                    let segments: Vec<String> =
                        line.stroke.dash.segments.iter().map(f64::to_string).collect();
                    format!(r#" stroke-dasharray="{}""#, segments.join(" "))
                };
                writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
                    line.from.x,
                    line.from.y,
                    line.to.x,
                    line.to.y,
                    line.stroke.color.to_css_hex(),
                    line.stroke.width,
                    dash
                )
            }
            Primitive::Rect(rect) => {
                let stroke = rect
                    .stroke
                    .as_ref()
                    .map(|stroke| {
                        format!(
                            r#" stroke="{}" stroke-width="{}""#,
                            stroke.color.to_css_hex(),
                            stroke.width
                        )
                    })
                    .unwrap_or_default();
                writeln!(
                    svg,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                    rect.rect.x,
                    rect.rect.y,
                    rect.rect.width,
                    rect.rect.height,
                    rect.fill.to_css_hex(),
                    stroke
                )
            }
            Primitive::Text(text) => {
                let anchor = match text.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}px">{}</text>"#,
                    text.position.x,
                    text.position.y,
                    anchor,
                    text.color.to_css_hex(),
                    text.font_size_px,
                    text.content
                )
            }
        };
    }

    svg.push_str("</svg>\n");
    svg
}
