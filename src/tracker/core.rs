use blake3::{Hash, Hasher};

use crate::widget::Widget;

/// Hash of a layout's ids and rects, in collection order.
///
/// Host fields and z-order are not part of the fingerprint.
pub fn layout_fingerprint(widgets: &[Widget]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&(widgets.len() as u64).to_le_bytes());
    for widget in widgets {
        let id = widget.id.as_str().as_bytes();
        hasher.update(&(id.len() as u64).to_le_bytes());
        hasher.update(id);
        let rect = widget.rect();
        for value in [rect.x, rect.y, rect.width, rect.height] {
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finalize()
}

/// Remembers the last layout the host persisted so unchanged layouts can
/// skip a write.
#[derive(Debug, Default, Clone)]
pub struct LayoutTracker {
    hash: Option<Hash>,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_synced(&self, widgets: &[Widget]) -> bool {
        self.hash == Some(layout_fingerprint(widgets))
    }

    /// Record `widgets` as the current layout. Returns true when it differs
    /// from the previously recorded one.
    pub fn sync(&mut self, widgets: &[Widget]) -> bool {
        let new_hash = layout_fingerprint(widgets);
        if self.hash.map(|h| h != new_hash).unwrap_or(true) {
            self.hash = Some(new_hash);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.hash = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn layout() -> Vec<Widget> {
        vec![
            Widget::new("a", Rect::new(0, 0, 224, 128)),
            Widget::new("b", Rect::new(256, 0, 224, 128)),
        ]
    }

    #[test]
    fn first_sync_is_dirty_then_clean() {
        let mut tracker = LayoutTracker::new();
        let widgets = layout();
        assert!(!tracker.is_synced(&widgets));
        assert!(tracker.sync(&widgets));
        assert!(!tracker.sync(&widgets));
        assert!(tracker.is_synced(&widgets));
    }

    #[test]
    fn moving_a_widget_marks_dirty() {
        let mut tracker = LayoutTracker::new();
        let mut widgets = layout();
        tracker.sync(&widgets);

        widgets[1].set_rect(Rect::new(256, 160, 224, 128));
        assert!(tracker.sync(&widgets));
    }

    #[test]
    fn host_fields_do_not_affect_fingerprint() {
        let plain = layout();
        let decorated: Vec<Widget> = layout()
            .into_iter()
            .map(|w| w.with_field("title", "Dice").with_z_index(9))
            .collect();
        assert_eq!(layout_fingerprint(&plain), layout_fingerprint(&decorated));
    }

    #[test]
    fn order_is_part_of_fingerprint() {
        let mut reversed = layout();
        reversed.reverse();
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&reversed));
    }

    #[test]
    fn reset_forces_next_sync_dirty() {
        let mut tracker = LayoutTracker::new();
        tracker.sync(&layout());
        tracker.reset();
        assert!(tracker.sync(&layout()));
    }
}
