use serde::{Deserialize, Serialize};

/// RGBA color, independent of any UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with its alpha channel replaced
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Whether a shape is filled or outlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Drawing parameters handed through to the [`DrawSurface`](crate::DrawSurface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    /// Outline width in pixels, ignored for fills
    pub stroke_width: f32,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
        }
    }

    pub fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::stroke(Color::rgb(0, 0, 255), 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_constructors() {
        let fill = Paint::fill(Color::rgb(255, 0, 0).with_alpha(64));
        assert_eq!(fill.style, PaintStyle::Fill);
        assert_eq!(fill.color, Color::new(255, 0, 0, 64));

        let stroke = Paint::stroke(Color::rgb(0, 0, 0), 3.0);
        assert_eq!(stroke.style, PaintStyle::Stroke);
        assert_eq!(stroke.stroke_width, 3.0);
    }

    #[test]
    fn test_paint_json() {
        let paint = Paint::default();
        let json = serde_json::to_string(&paint).unwrap();
        assert_eq!(serde_json::from_str::<Paint>(&json).unwrap(), paint);
    }
}
