use crate::geometry::Rect;
use crate::grid::{ColumnSpan, Grid};
use crate::widget::Widget;

/// Lower bound on candidate positions tried before giving up.
const MIN_ATTEMPTS: u32 = 600;
/// Rows of full column sweeps budgeted per obstacle.
const ATTEMPTS_PER_OBSTACLE_COLUMN: u32 = 6;

/// Outcome of resolving one widget's rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    /// False when the search hit its attempt cap; `rect` may then still
    /// overlap another widget.
    pub resolved: bool,
    /// Candidate positions examined.
    pub attempts: u32,
}

impl Placement {
    /// Candidates rejected because another widget was in the way.
    pub fn collisions(&self) -> u32 {
        if self.resolved {
            self.attempts.saturating_sub(1)
        } else {
            self.attempts
        }
    }
}

/// Find the nearest grid-aligned rect for `widget_id` that does not overlap
/// any other widget in `widgets`.
///
/// The desired width is widened to a whole column span and the height snapped
/// to the grid, both floored at the grid's minimum widget size. Candidates are
/// scanned left to right from the nearest column, then downwards past the
/// blocking widget. The widget's own current rect is ignored, so the call is
/// valid both for a widget already in `widgets` and for one about to be added.
pub fn resolve_placement(grid: &Grid, widgets: &[Widget], widget_id: &str, desired: Rect) -> Placement {
    let obstacles = widgets
        .iter()
        .filter(|widget| widget.id.as_str() != widget_id)
        .count();
    resolve_placement_within(grid, widgets, widget_id, desired, attempt_cap(grid, obstacles))
}

/// [`resolve_placement`] with an explicit bound on candidate positions.
///
/// When the bound is reached the last candidate is returned with
/// `resolved == false`.
pub fn resolve_placement_within(
    grid: &Grid,
    widgets: &[Widget],
    widget_id: &str,
    desired: Rect,
    max_attempts: u32,
) -> Placement {
    let others: Vec<Rect> = widgets
        .iter()
        .filter(|widget| widget.id.as_str() != widget_id)
        .map(Widget::rect)
        .collect();

    let ColumnSpan { span, width } =
        grid.normalize_column_width(desired.width.max(grid.min_widget_width()));
    let height = grid
        .snap_to_grid(desired.height)
        .max(grid.min_widget_height());
    let base_column = grid.clamp_column_index(grid.nearest_column(desired.x), span);
    let column_limit = grid.max_column_index(span);

    let mut column = base_column;
    let mut y = grid.snap_to_grid(desired.y.max(0));
    let mut attempts = 0;

    while attempts < max_attempts {
        let candidate = Rect::new(grid.column_offset(column), y, width, height);
        attempts += 1;

        let Some(collider) = others.iter().find(|rect| candidate.overlaps(rect)) else {
            return Placement {
                rect: candidate,
                resolved: true,
                attempts,
            };
        };

        if column < column_limit {
            column += 1;
        } else {
            column = base_column;
            let below = collider.bottom().saturating_add(grid.grid_size());
            let next_y = grid.snap_to_grid(y.max(below));
            y = if next_y == y {
                y.saturating_add(grid.grid_size())
            } else {
                next_y
            };
        }
    }

    Placement {
        rect: Rect::new(
            grid.column_offset(grid.clamp_column_index(column, span)),
            y,
            width,
            height,
        ),
        resolved: false,
        attempts,
    }
}

/// Resolve with `max_attempts` when given, else with the default budget.
pub(crate) fn resolve_bounded(
    grid: &Grid,
    widgets: &[Widget],
    widget_id: &str,
    desired: Rect,
    max_attempts: Option<u32>,
) -> Placement {
    match max_attempts {
        Some(limit) => resolve_placement_within(grid, widgets, widget_id, desired, limit),
        None => resolve_placement(grid, widgets, widget_id, desired),
    }
}

fn attempt_cap(grid: &Grid, obstacles: usize) -> u32 {
    let obstacles = u32::try_from(obstacles).unwrap_or(u32::MAX);
    obstacles
        .saturating_mul(grid.column_count())
        .saturating_mul(ATTEMPTS_PER_OBSTACLE_COLUMN)
        .max(MIN_ATTEMPTS)
}
