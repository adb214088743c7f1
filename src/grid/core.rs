use super::config::GridConfig;

/// Column span paired with its canonical pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub span: u32,
    pub width: i32,
}

/// Immutable column grid the board is laid out on.
///
/// Y coordinates and heights snap to multiples of `grid_size`; X coordinates
/// snap to column boundaries. All conversions clamp out-of-range input rather
/// than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(GridConfig::default())
    }
}

impl Grid {
    /// Callers go through [`GridConfig::build`] so the settings are validated.
    pub(super) fn from_config(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn grid_size(&self) -> i32 {
        self.config.grid_size
    }

    pub fn column_count(&self) -> u32 {
        self.config.column_count
    }

    pub fn column_width(&self) -> i32 {
        self.config.column_width
    }

    pub fn column_gap(&self) -> i32 {
        self.config.column_gap
    }

    pub fn column_step(&self) -> i32 {
        self.config.column_width.saturating_add(self.config.column_gap)
    }

    pub fn min_widget_width(&self) -> i32 {
        self.config.min_widget_width
    }

    pub fn min_widget_height(&self) -> i32 {
        self.config.min_widget_height
    }

    pub fn board_margin(&self) -> i32 {
        self.config.board_margin
    }

    pub fn board_min_extra_height(&self) -> i32 {
        self.config.board_min_extra_height
    }

    pub fn column_offset(&self, index: i32) -> i32 {
        index.saturating_mul(self.column_step())
    }

    /// Width of `span` adjacent columns including the gaps between them.
    pub fn span_width(&self, span: u32) -> i32 {
        let span = span.min(i32::MAX as u32) as i32;
        let gaps = span.saturating_sub(1).max(0);
        self.config
            .column_width
            .saturating_mul(span)
            .saturating_add(self.config.column_gap.saturating_mul(gaps))
    }

    /// Last column index a `span`-wide widget may start at.
    pub fn max_column_index(&self, span: u32) -> i32 {
        (self.column_count() as i64 - span as i64).max(0) as i32
    }

    pub fn clamp_column_index(&self, index: i32, span: u32) -> i32 {
        index.clamp(0, self.max_column_index(span))
    }

    /// Smallest column count whose span covers `width`, never less than one.
    pub fn span_for_width(&self, width: i32) -> u32 {
        let needed = ceil_div(
            width as i64 + self.config.column_gap as i64,
            self.column_step() as i64,
        );
        needed.clamp(1, self.column_count() as i64) as u32
    }

    pub fn normalize_column_width(&self, width: i32) -> ColumnSpan {
        let span = self.span_for_width(width);
        ColumnSpan {
            span,
            width: self.span_width(span),
        }
    }

    pub fn column_from_offset(&self, offset: i32) -> i32 {
        if offset <= 0 {
            return 0;
        }
        let column = offset / self.column_step();
        column.min(self.column_count() as i32 - 1)
    }

    /// Column whose offset is nearest to `offset`; halves round up.
    pub fn nearest_column(&self, offset: i32) -> i32 {
        round_half_up(offset as i64, self.column_step() as i64) as i32
    }

    /// Round to the nearest multiple of the grid size; halves round up.
    pub fn snap_to_grid(&self, value: i32) -> i32 {
        let size = self.config.grid_size as i64;
        let snapped = round_half_up(value as i64, size) * size;
        snapped.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

fn round_half_up(value: i64, unit: i64) -> i64 {
    (2 * value + unit).div_euclid(2 * unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::default()
    }

    #[test]
    fn default_column_metrics() {
        let grid = grid();
        assert_eq!(grid.column_width(), 224);
        assert_eq!(grid.column_gap(), 32);
        assert_eq!(grid.column_step(), 256);
        assert_eq!(grid.column_offset(3), 768);
    }

    #[test]
    fn span_width_excludes_trailing_gap() {
        let grid = grid();
        assert_eq!(grid.span_width(1), 224);
        assert_eq!(grid.span_width(2), 480);
        assert_eq!(grid.span_width(6), 1504);
        assert_eq!(grid.span_width(0), 0);
    }

    #[test]
    fn span_round_trips_canonical_widths() {
        let grid = grid();
        for span in 1..=grid.column_count() {
            assert_eq!(grid.span_for_width(grid.span_width(span)), span);
        }
    }

    #[test]
    fn span_never_under_allocates() {
        let grid = grid();
        assert_eq!(grid.span_for_width(225), 2);
        assert_eq!(grid.span_for_width(224), 1);
        assert_eq!(grid.span_for_width(10), 1);
    }

    #[test]
    fn span_is_at_least_one_for_degenerate_widths() {
        let grid = grid();
        assert_eq!(grid.span_for_width(0), 1);
        assert_eq!(grid.span_for_width(-500), 1);
        assert_eq!(grid.span_for_width(i32::MIN), 1);
    }

    #[test]
    fn span_clamps_to_column_count() {
        let grid = grid();
        let normalized = grid.normalize_column_width(grid.span_width(6) + 100);
        assert_eq!(normalized.span, 6);
        assert_eq!(normalized.width, grid.span_width(6));
        assert_eq!(grid.span_for_width(i32::MAX), 6);
    }

    #[test]
    fn clamp_column_index_stays_in_range() {
        let grid = grid();
        for span in 1..=grid.column_count() {
            for index in -10..20 {
                let clamped = grid.clamp_column_index(index, span);
                assert!(clamped >= 0);
                assert!(clamped <= grid.column_count() as i32 - span as i32);
            }
        }
    }

    #[test]
    fn oversized_span_clamps_to_first_column() {
        assert_eq!(grid().clamp_column_index(3, 9), 0);
    }

    #[test]
    fn column_from_offset_inverts_column_offset() {
        let grid = grid();
        for index in 0..grid.column_count() as i32 {
            assert_eq!(grid.column_from_offset(grid.column_offset(index)), index);
        }
    }

    #[test]
    fn column_from_offset_clamps() {
        let grid = grid();
        assert_eq!(grid.column_from_offset(-40), 0);
        assert_eq!(grid.column_from_offset(0), 0);
        assert_eq!(grid.column_from_offset(255), 0);
        assert_eq!(grid.column_from_offset(10_000), 5);
    }

    #[test]
    fn snap_rounds_to_nearest_cell() {
        let grid = grid();
        assert_eq!(grid.snap_to_grid(0), 0);
        assert_eq!(grid.snap_to_grid(15), 0);
        assert_eq!(grid.snap_to_grid(16), 32);
        assert_eq!(grid.snap_to_grid(47), 32);
        assert_eq!(grid.snap_to_grid(132), 128);
        assert_eq!(grid.snap_to_grid(-16), 0);
        assert_eq!(grid.snap_to_grid(-17), -32);
    }

    #[test]
    fn nearest_column_rounds_half_up() {
        let grid = grid();
        assert_eq!(grid.nearest_column(127), 0);
        assert_eq!(grid.nearest_column(128), 1);
        assert_eq!(grid.nearest_column(500), 2);
        assert_eq!(grid.nearest_column(-300), -1);
    }
}
