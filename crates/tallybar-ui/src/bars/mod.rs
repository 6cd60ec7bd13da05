//! Bars widget: bar records, reconciliation, layout and drag editing.

mod bar;
mod collection;
mod config;
mod drag;
mod layout;
mod reconcile;
mod widget;

pub use bar::{Bar, BarDefaults, BarsSource, PartialBar};
pub use collection::{BarCollection, ListenerId, StepLimits, ValueListener};
pub use config::{BarsWidgetConfig, ConfigAdjustment, DragLevelLineStyle, MarkerStyle};
pub use drag::{DEFAULT_DRAG_STEP_RATIO, DragController, DragSession, DragStep, min_step_distance};
pub use layout::{BarGeometry, BarLane, X_AXIS_MAX, layout_bars};
pub use reconcile::{BarValueChange, BarsState, SourceKind, diff_values, reconcile};
pub use widget::BarsWidget;
