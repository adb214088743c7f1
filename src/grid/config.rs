use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

use super::Grid;

pub const DEFAULT_GRID_SIZE: i32 = 32;
pub const DEFAULT_COLUMN_COUNT: u32 = 6;
pub const DEFAULT_COLUMN_GAP: i32 = DEFAULT_GRID_SIZE;
pub const DEFAULT_COLUMN_WIDTH: i32 = DEFAULT_GRID_SIZE * 7;
pub const DEFAULT_MIN_WIDGET_WIDTH: i32 = DEFAULT_COLUMN_WIDTH;
pub const DEFAULT_MIN_WIDGET_HEIGHT: i32 = DEFAULT_GRID_SIZE * 4;
pub const DEFAULT_BOARD_MARGIN: i32 = DEFAULT_GRID_SIZE * 4;
pub const DEFAULT_BOARD_MIN_EXTRA_HEIGHT: i32 = DEFAULT_GRID_SIZE * 8;

/// Host-facing grid settings.
///
/// Every key is optional when loaded from JSON; missing keys fall back to the
/// dashboard defaults (32px cells, six 224px columns with 32px gaps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub grid_size: i32,
    pub column_count: u32,
    pub column_width: i32,
    pub column_gap: i32,
    pub min_widget_width: i32,
    pub min_widget_height: i32,
    /// Padding added past the right/bottom-most widget when sizing the board.
    pub board_margin: i32,
    /// Extra height added below the minimum widget height for an empty board.
    pub board_min_extra_height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            column_count: DEFAULT_COLUMN_COUNT,
            column_width: DEFAULT_COLUMN_WIDTH,
            column_gap: DEFAULT_COLUMN_GAP,
            min_widget_width: DEFAULT_MIN_WIDGET_WIDTH,
            min_widget_height: DEFAULT_MIN_WIDGET_HEIGHT,
            board_margin: DEFAULT_BOARD_MARGIN,
            board_min_extra_height: DEFAULT_BOARD_MIN_EXTRA_HEIGHT,
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_column_count(mut self, column_count: u32) -> Self {
        self.column_count = column_count;
        self
    }

    /// Validate the settings and freeze them into a [`Grid`].
    pub fn build(self) -> Result<Grid> {
        if self.grid_size <= 0 {
            return Err(invalid(format!("grid size must be positive, got {}", self.grid_size)));
        }
        if self.column_count == 0 {
            return Err(invalid("column count must be at least 1".to_string()));
        }
        if self.column_count > i32::MAX as u32 {
            return Err(invalid(format!(
                "column count must not exceed {}, got {}",
                i32::MAX,
                self.column_count
            )));
        }
        if self.column_width <= 0 {
            return Err(invalid(format!(
                "column width must be positive, got {}",
                self.column_width
            )));
        }
        if self.column_gap < 0 {
            return Err(invalid(format!(
                "column gap must not be negative, got {}",
                self.column_gap
            )));
        }
        for (name, value) in [
            ("min widget width", self.min_widget_width),
            ("min widget height", self.min_widget_height),
            ("board margin", self.board_margin),
            ("board min extra height", self.board_min_extra_height),
        ] {
            if value < 0 {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        Ok(Grid::from_config(self))
    }
}

fn invalid(reason: String) -> LayoutError {
    LayoutError::InvalidGrid(reason)
}
