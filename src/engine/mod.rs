//! Host-facing layout engine.
//!
//! [`LayoutEngine`] wraps the pure layout functions with a fixed [`Grid`],
//! running counters and optional structured logging. It holds no widget
//! state; the host passes its collection in on every call.

use std::path::Path;

use serde_json::{Value, json};

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::grid::Grid;
use crate::layout::{NormalizeReport, Placement, compute_board_size, normalize_each, resolve_bounded};
use crate::logging::{FileSink, LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;
use crate::widget::Widget;

const PLACEMENT_TARGET: &str = "widget_grid::placement";
const NORMALIZE_TARGET: &str = "widget_grid::normalize";
const METRICS_TARGET: &str = "widget_grid::metrics";

#[derive(Clone, Default)]
pub struct LayoutEngine {
    grid: Grid,
    logger: Option<Logger>,
    metrics: LayoutMetrics,
    max_attempts: Option<u32>,
}

impl LayoutEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            logger: None,
            metrics: LayoutMetrics::new(),
            max_attempts: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Log JSON lines to `path`, truncating past `max_bytes` (zero disables
    /// the limit).
    pub fn with_log_file(
        self,
        path: impl AsRef<Path>,
        max_bytes: u64,
        min_level: LogLevel,
    ) -> Result<Self> {
        let sink = FileSink::new(path, max_bytes)?;
        Ok(self.with_logger(Logger::new(sink).with_min_level(min_level)))
    }

    /// Bound every placement search to `max_attempts` candidates instead of
    /// the size-dependent default. Keeps drag frames cheap on crowded boards.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Resolve `desired` for `widget_id` against the rest of `widgets`
    /// without touching the collection.
    pub fn resolve(&mut self, widgets: &[Widget], widget_id: &str, desired: Rect) -> Placement {
        let placement = resolve_bounded(&self.grid, widgets, widget_id, desired, self.max_attempts);
        self.observe(widget_id, &placement);
        placement
    }

    /// Resolve a drag or resize of an existing widget and write the result
    /// back. Returns `None` when `widget_id` is not in the collection.
    pub fn move_widget(
        &mut self,
        widgets: &mut [Widget],
        widget_id: &str,
        desired: Rect,
    ) -> Option<Placement> {
        let index = widgets
            .iter()
            .position(|widget| widget.id.as_str() == widget_id)?;
        let placement = self.resolve(widgets, widget_id, desired);
        widgets[index].set_rect(placement.rect);
        Some(placement)
    }

    /// Place a new widget at the nearest free spot to its current rect and
    /// append it to the collection.
    pub fn add_widget(&mut self, widgets: &mut Vec<Widget>, mut widget: Widget) -> Placement {
        let placement = self.resolve(widgets, widget.id.as_str(), widget.rect());
        widget.set_rect(placement.rect);
        widgets.push(widget);
        placement
    }

    pub fn normalize(&mut self, widgets: &[Widget]) -> Vec<Widget> {
        self.normalize_with_report(widgets).0
    }

    pub fn normalize_with_report(&mut self, widgets: &[Widget]) -> (Vec<Widget>, NormalizeReport) {
        let (next, report) = normalize_each(&self.grid, widgets, self.max_attempts, |widget, placement| {
            self.metrics.record_placement(placement);
            log_placement(self.logger.as_ref(), widget.id.as_str(), placement);
        });
        self.metrics.record_normalization();

        let level = if report.is_fully_resolved() {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        self.emit(
            level,
            NORMALIZE_TARGET,
            "layout_normalized",
            [
                json_kv("widgets", next.len()),
                json_kv("moved", report.moved.len()),
                json_kv("unresolved", unresolved_ids(&report)),
            ],
        );

        (next, report)
    }

    pub fn board_size(&self, widgets: &[Widget]) -> Size {
        compute_board_size(&self.grid, widgets)
    }

    /// Emit the current counters as one info event.
    pub fn log_metrics(&self) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(self.metrics.snapshot().to_log_event(METRICS_TARGET));
        }
    }

    fn observe(&mut self, widget_id: &str, placement: &Placement) {
        self.metrics.record_placement(placement);
        log_placement(self.logger.as_ref(), widget_id, placement);
    }

    fn emit(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(event_with_fields(level, target, message, fields));
        }
    }
}

fn log_placement(logger: Option<&Logger>, widget_id: &str, placement: &Placement) {
    let Some(logger) = logger else {
        return;
    };
    let (level, message) = if placement.resolved {
        (LogLevel::Debug, "placement_resolved")
    } else {
        (LogLevel::Warn, "placement_unresolved")
    };
    if !logger.enabled(level) {
        return;
    }

    let rect = placement.rect;
    let event = event_with_fields(
        level,
        PLACEMENT_TARGET,
        message,
        [
            json_kv("widget_id", widget_id),
            json_kv("x", rect.x),
            json_kv("y", rect.y),
            json_kv("width", rect.width),
            json_kv("height", rect.height),
            json_kv("attempts", placement.attempts),
        ],
    );
    let _ = logger.log_event(event);
}

fn unresolved_ids(report: &NormalizeReport) -> Value {
    json!(
        report
            .unresolved
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
    )
}
