use crate::grid::Grid;
use crate::widget::{Widget, WidgetId};

use super::resolver::{Placement, resolve_bounded};

/// Summary of a normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Widgets whose rect changed, in processing order.
    pub moved: Vec<WidgetId>,
    /// Widgets whose placement search ran out of attempts.
    pub unresolved: Vec<WidgetId>,
}

impl NormalizeReport {
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Settle every widget onto the grid so that no two overlap.
///
/// Widgets are processed in input order against the evolving layout: earlier
/// widgets keep priority, later ones are pushed aside. Reordering the input
/// changes the result.
pub fn normalize_layout(grid: &Grid, widgets: &[Widget]) -> Vec<Widget> {
    normalize_layout_with_report(grid, widgets).0
}

pub fn normalize_layout_with_report(grid: &Grid, widgets: &[Widget]) -> (Vec<Widget>, NormalizeReport) {
    normalize_each(grid, widgets, None, |_, _| {})
}

/// Drive the sequential pass, handing each settled widget and its placement
/// to `observe`. `max_attempts` overrides the resolver's default budget.
pub(crate) fn normalize_each<F>(
    grid: &Grid,
    widgets: &[Widget],
    max_attempts: Option<u32>,
    mut observe: F,
) -> (Vec<Widget>, NormalizeReport)
where
    F: FnMut(&Widget, &Placement),
{
    let mut next = widgets.to_vec();
    let mut report = NormalizeReport::default();

    for index in 0..next.len() {
        let previous = next[index].rect();
        let placement = resolve_bounded(grid, &next, next[index].id.as_str(), previous, max_attempts);
        next[index].set_rect(placement.rect);

        let widget = &next[index];
        if placement.rect != previous {
            report.moved.push(widget.id.clone());
        }
        if !placement.resolved {
            report.unresolved.push(widget.id.clone());
        }
        observe(widget, &placement);
    }

    (next, report)
}
