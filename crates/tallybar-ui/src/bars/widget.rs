//! The draggable bar chart widget.

use super::bar::{Bar, BarsSource};
use super::collection::{BarCollection, ListenerId, StepLimits};
use super::config::BarsWidgetConfig;
use super::drag::{DragController, DragSession, DragStep};
use super::layout::{BarGeometry, X_AXIS_MAX, layout_bars};
use super::reconcile::BarValueChange;
use glam::DVec2;
use std::rc::Rc;
use std::sync::Arc;
use tallybar_core::profiling::profile_scope;
use tallybar_geometry::{
    Axis, AxisRange, CoordinateSystem, CoordinateSystemConfig, DashPattern, Diagram,
    NotationFlags, NotationStyle, Scene, Stroke, TextAnchor, Tick, format_tick_value,
};
use tallybar_input::{PointerEvent, PointerPressedObserver};

/// Bars on a value axis whose heights can be dragged in steps.
///
/// The widget owns the bar collection. Values change through
/// [`set_bars`](Self::set_bars), the programmatic mutators, or drags routed
/// through [`pointer_down`](Self::pointer_down) and
/// [`pointer_move`](Self::pointer_move). Drags end when the injected
/// [`PointerPressedObserver`] reports a release.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use tallybar_input::PointerPressedSignal;
/// use tallybar_ui::{BarsWidget, BarsWidgetConfig};
///
/// let signal = PointerPressedSignal::new();
/// let mut widget = BarsWidget::new(BarsWidgetConfig::new(4).max(15.0), Rc::new(signal));
///
/// widget.step_up("0");
/// assert_eq!(widget.value("0"), Some(1.0));
/// ```
pub struct BarsWidget {
    config: BarsWidgetConfig,
    system: CoordinateSystem,
    collection: BarCollection,
    drag: DragController,
}

impl BarsWidget {
    /// Build a widget from `config`, reading the pressed state from
    /// `observer`.
    ///
    /// The configuration is sanitized first. Building the initial bars
    /// notifies nobody.
    pub fn new(config: BarsWidgetConfig, observer: Rc<dyn PointerPressedObserver>) -> Self {
        let (mut config, _) = config.sanitize();

        let mut collection = BarCollection::new(&config.bars, config.defaults);
        if let Some(listener) = config.on_bar_value_changed.take() {
            collection.on_value_changed(listener);
        }

        let system = coordinate_system(&config);
        let drag = DragController::new(observer, config.drag_distance_step_percentage);

        tracing::debug!(
            bars = collection.len(),
            max = config.max,
            read_only = config.read_only,
            "bars widget created"
        );

        Self {
            config,
            system,
            collection,
            drag,
        }
    }

    /// Draw axes, notation, bars, markers and the drag level line.
    pub fn render(&self) -> Scene {
        profile_scope!("bars_widget_render");

        let geometry = self.bar_geometry();
        self.system.render(|diagram, scene| {
            for (bar, geometry) in self.collection.bars().iter().zip(&geometry) {
                scene.rect(
                    geometry.rect,
                    bar.color,
                    Some(Stroke::solid(bar.border_color, bar.border_thickness)),
                );
            }

            if !self.config.read_only {
                let marker = &self.config.marker;
                for geometry in &geometry {
                    scene.rect(
                        geometry.marker,
                        marker.color,
                        Some(Stroke::solid(marker.border_color, marker.border_thickness)),
                    );
                }
            }

            if let Some(bar) = self.active_bar() {
                self.draw_drag_level_line(diagram, scene, bar.value);
            }
        })
    }

    fn draw_drag_level_line(&self, diagram: &Diagram, scene: &mut Scene, value: f64) {
        let style = &self.config.drag_level_line;
        if style.hidden {
            return;
        }

        let y = diagram.to_pixel_y(value, 0.0);
        let right = diagram.to_pixel_x(X_AXIS_MAX, 0.0);
        scene.line(
            DVec2::new(diagram.to_pixel_x(0.0, 0.0), y),
            DVec2::new(right, y),
            Stroke::solid(style.color, 1.0).dashed(DashPattern::uniform(4.0)),
        );
        scene.text(
            DVec2::new(
                right + style.caption_offset_px,
                diagram.to_pixel_y(value, style.caption_font_size_px / 3.0),
            ),
            format_tick_value(value),
            TextAnchor::Start,
            style.caption_color,
            style.caption_font_size_px,
        );
    }

    /// Reconcile against a new bar count or list.
    ///
    /// Listeners have already been called for every changed value when this
    /// returns; the same changes are returned.
    pub fn set_bars(&mut self, bars: impl Into<BarsSource>) -> Vec<BarValueChange> {
        profile_scope!("bars_widget_set_bars");

        self.config.bars = bars.into();
        let changes = self.collection.set_source(&self.config.bars);
        self.end_stale_drag();
        changes
    }

    /// Change any part of the configuration.
    ///
    /// The edited configuration is sanitized again and the coordinate system
    /// and step limits are derived from it anew. New defaults apply to bars
    /// created from now on; existing bars keep their values, even above a
    /// lowered `max`. A changed `bars` source is reconciled as in
    /// [`set_bars`](Self::set_bars) and its changes returned. A listener set
    /// through `on_bar_value_changed` is added to the registered ones.
    pub fn update(&mut self, change: impl FnOnce(&mut BarsWidgetConfig)) -> Vec<BarValueChange> {
        profile_scope!("bars_widget_update");

        let mut config = std::mem::take(&mut self.config);
        let previous_bars = config.bars.clone();
        change(&mut config);
        let (mut config, _) = config.sanitize();

        if let Some(listener) = config.on_bar_value_changed.take() {
            self.collection.on_value_changed(listener);
        }
        self.collection.set_defaults(config.defaults);
        self.drag.set_step_ratio(config.drag_distance_step_percentage);
        self.system = coordinate_system(&config);
        self.config = config;

        tracing::debug!(
            max = self.config.max,
            step = self.config.step,
            read_only = self.config.read_only,
            "bars widget reconfigured"
        );

        let changes = if self.config.bars != previous_bars {
            self.collection.set_source(&self.config.bars)
        } else {
            Vec::new()
        };
        self.end_stale_drag();
        changes
    }

    /// Cancel a drag that can no longer continue.
    fn end_stale_drag(&mut self) {
        let Some(session) = self.drag.session() else {
            return;
        };
        if self.config.read_only || self.collection.get(&session.active_key).is_none() {
            self.drag.cancel();
        }
    }

    /// Set a bar's value. Unknown keys are ignored.
    pub fn set_value(&mut self, key: &str, value: f64) -> bool {
        self.collection.set_value(key, value)
    }

    /// One step up, refused at `max`.
    pub fn step_up(&mut self, key: &str) -> Option<f64> {
        self.collection.step_up(key, self.step_limits())
    }

    /// One step down, refused at zero. Values above `max` snap to
    /// `max - step`.
    pub fn step_down(&mut self, key: &str) -> Option<f64> {
        self.collection.step_down(key, self.step_limits())
    }

    fn step_limits(&self) -> StepLimits {
        StepLimits {
            max: self.config.max,
            step: self.config.step,
        }
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.collection.value(key)
    }

    /// Immutable snapshot of the current bars.
    pub fn bars(&self) -> Arc<[Bar]> {
        self.collection.snapshot()
    }

    /// Register a listener called with `(key, value)` on every value change.
    pub fn on_value_changed(&mut self, listener: impl FnMut(&str, f64) + 'static) -> ListenerId {
        self.collection.on_value_changed(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.collection.remove_listener(id)
    }

    /// Start a drag if `pointer` is on a marker.
    ///
    /// Returns the key of the grabbed bar. Read-only widgets never start a
    /// drag.
    pub fn pointer_down(&mut self, pointer: DVec2) -> Option<String> {
        if self.config.read_only {
            return None;
        }

        // Later markers are drawn on top.
        let key = self
            .bar_geometry()
            .into_iter()
            .rev()
            .find(|geometry| geometry.marker.contains(pointer))
            .map(|geometry| geometry.key)?;

        self.drag.begin(&key, pointer);
        Some(key)
    }

    /// Route a pointer move to the active drag.
    ///
    /// Only moves over the dragged bar's column count. Returns the bar's new
    /// value when the move stepped it.
    pub fn pointer_move(&mut self, pointer: DVec2) -> Option<f64> {
        if self.config.read_only || !self.drag.is_dragging() {
            return None;
        }

        let key = self
            .bar_geometry()
            .into_iter()
            .find(|geometry| geometry.column.contains(pointer))
            .map(|geometry| geometry.key)?;

        let min_distance = self.drag.min_step_distance(self.system.diagram());
        match self.drag.pointer_move(&key, pointer, min_distance)? {
            DragStep::Up => self.step_up(&key),
            DragStep::Down => self.step_down(&key),
        }
    }

    /// Dispatch a raw pointer event.
    ///
    /// The pressed state itself is owned by the observer; feed the same
    /// event to it before calling this.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(pointer) => {
                self.pointer_down(pointer);
            }
            PointerEvent::Moved(pointer) => {
                self.pointer_move(pointer);
            }
            PointerEvent::Released(_) => {}
        }
    }

    /// The running drag, if any.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    fn active_bar(&self) -> Option<&Bar> {
        let session = self.drag.session()?;
        self.collection.get(&session.active_key)
    }

    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.system
    }

    pub fn diagram(&self) -> &Diagram {
        self.system.diagram()
    }

    /// Ticks of the value axis.
    pub fn ticks(&self) -> Vec<Tick> {
        self.system.ticks(Axis::Y)
    }

    /// Pixel geometry of every bar, in bar order.
    pub fn bar_geometry(&self) -> Vec<BarGeometry> {
        layout_bars(
            self.system.diagram(),
            self.collection.bars(),
            self.config.bar_gap_percentage,
            self.config.marker.size_px,
        )
    }

    pub fn config(&self) -> &BarsWidgetConfig {
        &self.config
    }
}

impl std::fmt::Debug for BarsWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarsWidget")
            .field("config", &self.config)
            .field("collection", &self.collection)
            .field("drag", &self.drag)
            .finish()
    }
}

/// The value axis runs over `max` in `step`s; the horizontal lane is a
/// hidden `0..100` axis.
fn coordinate_system(config: &BarsWidgetConfig) -> CoordinateSystem {
    let mut flags = NotationFlags::HIDE_X_NOTATION;
    if !config.show_no_notable_captions {
        flags |= NotationFlags::HIDE_NO_NOTABLE_CAPTIONS;
    }

    CoordinateSystem::new(
        CoordinateSystemConfig::new(config.width_px, config.height_px)
            .with_x_range(AxisRange::new(X_AXIS_MAX, 1.0))
            .with_y_range(AxisRange::new(config.max, config.step))
            .with_y_notation(NotationStyle {
                bar_width_px: config.notation_bar_width_px,
                notable_step: config.notable_step,
                level_line_color: config.level_line_color,
            })
            .with_notation_offsets(config.notation_offset_px, config.notation_offset_px)
            .with_flags(flags)
            .with_axis_style(config.axis_style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::DragLevelLineStyle;
    use tallybar_input::PointerPressedSignal;

    fn widget(config: BarsWidgetConfig) -> (PointerPressedSignal, BarsWidget) {
        let signal = PointerPressedSignal::new();
        let widget = BarsWidget::new(config, Rc::new(signal.clone()));
        (signal, widget)
    }

    #[test]
    fn test_layout_uses_hidden_x_notation() {
        let (_, widget) = widget(BarsWidgetConfig::new(2));
        let frame = widget.diagram().frame();
        assert_eq!(frame.left, 32.0);
        assert_eq!(frame.bottom, 492.0);
        assert!(widget.coordinate_system().notations(Axis::X).is_empty());
        assert_eq!(widget.ticks().len(), 10);
    }

    #[test]
    fn test_render_counts() {
        let (_, widget) = widget(BarsWidgetConfig::new(3));
        let scene = widget.render();
        // Three bars plus three markers.
        assert_eq!(scene.rects().count(), 6);

        let (_, read_only) = self::widget(BarsWidgetConfig::new(3).read_only(true));
        assert_eq!(read_only.render().rects().count(), 3);
    }

    #[test]
    fn test_drag_level_line_follows_active_bar() {
        let (signal, mut widget) = widget(BarsWidgetConfig::new(2).default_value(5.0));
        let marker = widget.bar_geometry()[1].marker.center();

        signal.press();
        assert_eq!(widget.pointer_down(marker).as_deref(), Some("1"));

        let scene = widget.render();
        let y = widget.diagram().to_pixel_y(5.0, 0.0);
        let dashed = scene
            .lines()
            .find(|line| !line.stroke.dash.is_solid())
            .expect("drag level line");
        assert_eq!(dashed.from.y, y);
        assert!(
            scene
                .texts()
                .any(|text| text.anchor == TextAnchor::Start && text.content == "5")
        );

        signal.release();
        assert!(widget.render().lines().all(|line| line.stroke.dash.is_solid()));
    }

    #[test]
    fn test_hidden_drag_level_line() {
        let style = DragLevelLineStyle {
            hidden: true,
            ..Default::default()
        };
        let (signal, mut widget) =
            widget(BarsWidgetConfig::new(2).default_value(4.0).with_drag_level_line(style));
        let marker = widget.bar_geometry()[0].marker.center();

        signal.press();
        assert!(widget.pointer_down(marker).is_some());

        let scene = widget.render();
        assert!(scene.lines().all(|line| line.stroke.dash.is_solid()));
        assert!(scene.texts().all(|text| text.anchor != TextAnchor::Start));
    }

    #[test]
    fn test_update_to_read_only_ends_drag() {
        let (signal, mut widget) = widget(BarsWidgetConfig::new(2));
        let marker = widget.bar_geometry()[1].marker.center();
        signal.press();
        widget.pointer_down(marker);
        assert!(widget.drag_session().is_some());

        widget.update(|config| config.read_only = true);
        assert!(widget.drag_session().is_none());
        assert_eq!(widget.render().rects().count(), 2);
    }

    #[test]
    fn test_read_only_never_drags() {
        let (signal, mut widget) = widget(BarsWidgetConfig::new(2).read_only(true));
        let marker = widget.bar_geometry()[0].marker.center();
        signal.press();
        assert_eq!(widget.pointer_down(marker), None);
        assert!(widget.drag_session().is_none());
    }

    #[test]
    fn test_shrinking_away_active_bar_cancels_drag() {
        let (signal, mut widget) = widget(BarsWidgetConfig::new(3));
        let marker = widget.bar_geometry()[2].marker.center();
        signal.press();
        widget.pointer_down(marker);
        assert!(widget.drag_session().is_some());

        widget.set_bars(2);
        assert!(widget.drag_session().is_none());
    }
}
