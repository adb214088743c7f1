mod core;

pub use self::core::{LayoutTracker, layout_fingerprint};
