use serde::{Deserialize, Deserializer, Serialize};

/// Pixel size of a widget or of the board canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(deserialize_with = "deserialize_pixel")]
    pub width: i32,
    #[serde(deserialize_with = "deserialize_pixel")]
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Pixel position of a widget's top-left corner on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(deserialize_with = "deserialize_pixel")]
    pub x: i32,
    #[serde(deserialize_with = "deserialize_pixel")]
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Accept any JSON number as a pixel: fractions round to the nearest whole
/// pixel (halves away from zero), out-of-range values saturate.
fn deserialize_pixel<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i32)
}

/// Axis-aligned rectangle in board pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Strict intersection test: rects that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 100, 100);
        let right = Rect::new(100, 0, 100, 100);
        let below = Rect::new(0, 100, 100, 100);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::new(0, 0, 200, 200);
        let inner = Rect::new(50, 50, 10, 10);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn fractional_pixels_round() {
        let position: Position = serde_json::from_str(r#"{"x": 48.5, "y": -12.4}"#).unwrap();
        assert_eq!(position, Position::new(49, -12));

        let size: Size = serde_json::from_str(r#"{"width": 400.0, "height": 1e12}"#).unwrap();
        assert_eq!(size, Size::new(400, i32::MAX));
    }

    #[test]
    fn non_numeric_pixels_are_rejected() {
        assert!(serde_json::from_str::<Position>(r#"{"x": "48", "y": 0}"#).is_err());
    }

    #[test]
    fn edges_saturate() {
        let rect = Rect::new(i32::MAX - 1, 0, 10, 10);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), 10);
    }
}
