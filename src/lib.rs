//! Grid layout engine for a widget dashboard.
//!
//! Widgets are snapped onto a fixed column grid, pushed aside until they no
//! longer overlap, and the board canvas is sized to fit them. The engine is
//! stateless: the host owns the widget collection and persists it.
//!
//! # Example
//! ```
//! use widget_grid::{Grid, Rect, Widget, compute_board_size, normalize_layout};
//!
//! let grid = Grid::default();
//! let widgets = vec![
//!     Widget::new("timeline", Rect::new(0, 0, 400, 360)),
//!     Widget::new("dice", Rect::new(0, 0, 224, 128)),
//! ];
//!
//! let settled = normalize_layout(&grid, &widgets);
//! assert!(!settled[0].rect().overlaps(&settled[1].rect()));
//! let board = compute_board_size(&grid, &settled);
//! assert!(board.width >= grid.span_width(grid.column_count()));
//! ```

pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod presets;
pub mod tracker;
pub mod widget;

pub use engine::LayoutEngine;
pub use error::{LayoutError, Result};
pub use geometry::{Position, Rect, Size};
pub use grid::{ColumnSpan, Grid, GridConfig};
pub use layout::{
    NormalizeReport, Placement, compute_board_size, minimum_board_size, normalize_layout,
    normalize_layout_with_report, resolve_placement, resolve_placement_within,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use tracker::{LayoutTracker, layout_fingerprint};
pub use widget::{Widget, WidgetFields, WidgetId, widgets_from_json, widgets_to_json};
