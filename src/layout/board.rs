use crate::geometry::Size;
use crate::grid::Grid;
use crate::widget::Widget;

/// Canvas size for a board with no widgets: every column wide, one minimum
/// widget tall, plus padding.
pub fn minimum_board_size(grid: &Grid) -> Size {
    Size::new(
        grid.span_width(grid.column_count())
            .saturating_add(grid.board_margin()),
        grid.min_widget_height()
            .saturating_add(grid.board_min_extra_height()),
    )
}

/// Smallest canvas containing every widget plus the board margin, never
/// smaller than [`minimum_board_size`].
pub fn compute_board_size(grid: &Grid, widgets: &[Widget]) -> Size {
    let floor = minimum_board_size(grid);
    let (max_right, max_bottom) = widgets
        .iter()
        .map(Widget::rect)
        .fold((0, 0), |(right, bottom), rect| {
            (right.max(rect.right()), bottom.max(rect.bottom()))
        });

    Size::new(
        max_right.saturating_add(grid.board_margin()).max(floor.width),
        max_bottom.saturating_add(grid.board_margin()).max(floor.height),
    )
}
