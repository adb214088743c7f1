mod core;

pub use self::core::{Widget, WidgetFields, WidgetId, widgets_from_json, widgets_to_json};
