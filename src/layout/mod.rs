//! Widget placement on the column grid.
//!
//! The resolver finds a collision-free rect for one widget, the normalizer
//! runs it over a whole collection, and the board sizer reports the canvas
//! needed to show the result. Everything here is a pure function of its
//! arguments.

mod board;
mod normalize;
mod resolver;

pub use board::{compute_board_size, minimum_board_size};
pub(crate) use normalize::normalize_each;
pub(crate) use resolver::resolve_bounded;
pub use normalize::{NormalizeReport, normalize_layout, normalize_layout_with_report};
pub use resolver::{Placement, resolve_placement, resolve_placement_within};
