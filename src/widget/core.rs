use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::geometry::{Position, Rect, Size};

/// Host-assigned widget identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WidgetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Host-owned fields the engine carries along untouched (title, icon, ...).
pub type WidgetFields = Map<String, Value>;

/// A dashboard widget as the host stores it.
///
/// The layout engine only reads and writes `position` and `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub z_index: i32,
    #[serde(flatten)]
    pub extra: WidgetFields,
}

impl Widget {
    pub fn new(id: impl Into<WidgetId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            position: rect.position(),
            size: rect.size(),
            z_index: 0,
            extra: WidgetFields::new(),
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.position();
        self.size = rect.size();
    }
}

pub fn widgets_from_json(json: &str) -> Result<Vec<Widget>> {
    Ok(serde_json::from_str(json)?)
}

pub fn widgets_to_json(widgets: &[Widget]) -> Result<String> {
    Ok(serde_json::to_string(widgets)?)
}
