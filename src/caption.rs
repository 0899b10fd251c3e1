//! Caption text layout: where the top and bottom captions go and how they are painted.

use alloc::format;
use alloc::string::String;

use crate::color::Color;
use crate::fit::Dimensions;

/// Vertical anchor of a caption run, relative to its `y` coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Baseline {
    /// `y` is the top of the em box; text hangs below it.
    Top,
    /// `y` is the bottom of the em box; text sits above it.
    Bottom,
}

/// Horizontal anchor of a caption run, relative to its `x` coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Center,
}

/// The two caption strings of a meme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// True when both captions are empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

/// Paint and position settings for captions.
///
/// The defaults reproduce the classic meme look: 30px white sans-serif text with
/// a 4px black outline, 10px below the top edge and 5px above the bottom edge.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionStyle {
    pub font_size: f64,
    pub font_family: String,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Distance from the canvas top to the top caption's baseline.
    pub top_margin: f64,
    /// Distance from the canvas bottom to the bottom caption's baseline.
    pub bottom_margin: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_size: 30.0,
            font_family: String::from("sans-serif"),
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: 4.0,
            top_margin: 10.0,
            bottom_margin: 5.0,
        }
    }
}

impl CaptionStyle {
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = px;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    pub fn stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    pub fn margins(mut self, top: f64, bottom: f64) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// CSS font shorthand, e.g. `"30px sans-serif"`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }

    /// Position both captions on a canvas. Returns `[top, bottom]`.
    pub fn layout(&self, canvas: Dimensions, captions: &Captions) -> [CaptionRun; 2] {
        let x = canvas.width / 2.0;
        [
            self.run(&captions.top, x, self.top_margin, Baseline::Top),
            self.run(
                &captions.bottom,
                x,
                canvas.height - self.bottom_margin,
                Baseline::Bottom,
            ),
        ]
    }

    fn run(&self, text: &str, x: f64, y: f64, baseline: Baseline) -> CaptionRun {
        CaptionRun {
            text: String::from(text),
            x,
            y,
            align: TextAlign::Center,
            baseline,
            font_size: self.font_size,
            font_family: self.font_family.clone(),
        }
    }
}

/// A single positioned line of caption text.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub baseline: Baseline,
    pub font_size: f64,
    pub font_family: String,
}
