//! Column grid geometry.
//!
//! `config` holds the host-tunable settings; `core` turns them into the pure
//! coordinate conversions the resolver relies on.

mod config;
mod core;

pub use config::{
    DEFAULT_BOARD_MARGIN, DEFAULT_BOARD_MIN_EXTRA_HEIGHT, DEFAULT_COLUMN_COUNT,
    DEFAULT_COLUMN_GAP, DEFAULT_COLUMN_WIDTH, DEFAULT_GRID_SIZE, DEFAULT_MIN_WIDGET_HEIGHT,
    DEFAULT_MIN_WIDGET_WIDTH, GridConfig,
};
pub use self::core::{ColumnSpan, Grid};
