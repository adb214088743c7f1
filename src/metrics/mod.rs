use crate::layout::Placement;
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters for a [`LayoutEngine`](crate::LayoutEngine).
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    placements: u64,
    collisions: u64,
    fallbacks: u64,
    normalizations: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement(&mut self, placement: &Placement) {
        self.placements = self.placements.saturating_add(1);
        self.collisions = self
            .collisions
            .saturating_add(u64::from(placement.collisions()));
        if !placement.resolved {
            self.fallbacks = self.fallbacks.saturating_add(1);
        }
    }

    pub fn record_normalization(&mut self) {
        self.normalizations = self.normalizations.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            placements: self.placements,
            collisions: self.collisions,
            fallbacks: self.fallbacks,
            normalizations: self.normalizations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub placements: u64,
    pub collisions: u64,
    pub fallbacks: u64,
    pub normalizations: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("placements".to_string(), json!(self.placements));
        map.insert("collisions".to_string(), json!(self.collisions));
        map.insert("fallbacks".to_string(), json!(self.fallbacks));
        map.insert("normalizations".to_string(), json!(self.normalizations));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn placement(resolved: bool, attempts: u32) -> Placement {
        Placement {
            rect: Rect::new(0, 0, 224, 128),
            resolved,
            attempts,
        }
    }

    #[test]
    fn counts_collisions_and_fallbacks() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_placement(&placement(true, 1));
        metrics.record_placement(&placement(true, 4));
        metrics.record_placement(&placement(false, 600));
        metrics.record_normalization();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.placements, 3);
        assert_eq!(snapshot.collisions, 603);
        assert_eq!(snapshot.fallbacks, 1);
        assert_eq!(snapshot.normalizations, 1);

        metrics.reset();
        assert_eq!(metrics.snapshot().placements, 0);
    }

    #[test]
    fn snapshot_event_carries_fields() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_placement(&placement(true, 2));
        let event = metrics.snapshot().to_log_event("widget_grid::metrics");

        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields["placements"], json!(1));
        assert_eq!(event.fields["collisions"], json!(1));
    }
}
