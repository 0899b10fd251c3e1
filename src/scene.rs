//! Draw plan for the meme canvas.
//!
//! A [`Scene`] records what to paint, in order, without touching a rendering
//! surface. Hosts replay the commands onto their own canvas; the `svg` feature
//! replays them into an SVG document.

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;

use crate::caption::{CaptionRun, CaptionStyle, Captions};
use crate::color::Color;
use crate::fit::{Dimensions, Fit, FitError, FitMode, Placement};

/// A single paint operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Erase the whole canvas to transparent.
    Clear,
    /// Fill an axis-aligned rectangle.
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Draw the loaded image scaled into `placement`.
    DrawImage { placement: Placement },
    /// Outline caption text.
    StrokeText {
        run: CaptionRun,
        color: Color,
        width: f64,
    },
    /// Fill caption text.
    FillText { run: CaptionRun, color: Color },
}

/// Ordered draw commands for one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    canvas: Dimensions,
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// An erased canvas.
    pub fn blank(canvas: Dimensions) -> Self {
        Self {
            canvas,
            commands: vec![DrawCommand::Clear],
        }
    }

    /// Erase, fill with `background`, then draw an image of natural size
    /// `image` fitted into the canvas.
    ///
    /// # Example
    ///
    /// ```
    /// use memefit::{Color, Dimensions, FitMode, Placement, Scene};
    ///
    /// let scene = Scene::with_image(
    ///     Dimensions::new(400.0, 400.0),
    ///     Dimensions::new(1000.0, 500.0),
    ///     FitMode::Classic,
    ///     Color::BLACK,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(scene.commands().len(), 3);
    /// assert_eq!(
    ///     scene.image_placement(),
    ///     Some(Placement::new(400.0, 200.0, 0.0, 100.0))
    /// );
    /// ```
    pub fn with_image(
        canvas: Dimensions,
        image: Dimensions,
        mode: FitMode,
        background: Color,
    ) -> Result<Self, FitError> {
        let placement = Fit::new(mode).compute(canvas, image)?;
        trace!(
            width = placement.width,
            height = placement.height,
            start_x = placement.start_x,
            start_y = placement.start_y,
            "image placed"
        );
        Ok(Self {
            canvas,
            commands: vec![
                DrawCommand::Clear,
                DrawCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: canvas.width,
                    height: canvas.height,
                    color: background,
                },
                DrawCommand::DrawImage { placement },
            ],
        })
    }

    /// Paint both captions over the current content, top first.
    /// Each caption is stroked, then filled, so the outline sits under the fill.
    pub fn push_captions(&mut self, captions: &Captions, style: &CaptionStyle) {
        for run in style.layout(self.canvas, captions) {
            self.commands.push(DrawCommand::StrokeText {
                run: run.clone(),
                color: style.stroke,
                width: style.stroke_width,
            });
            self.commands.push(DrawCommand::FillText {
                run,
                color: style.fill,
            });
        }
    }

    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Placement of the most recently drawn image, if any.
    pub fn image_placement(&self) -> Option<Placement> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::DrawImage { placement } => Some(*placement),
            _ => None,
        })
    }

    pub fn has_captions(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillText { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::Baseline;

    const CANVAS: Dimensions = Dimensions::new(400.0, 400.0);

    #[test]
    fn blank_is_single_clear() {
        let scene = Scene::blank(CANVAS);
        assert_eq!(scene.commands(), &[DrawCommand::Clear]);
        assert_eq!(scene.image_placement(), None);
        assert!(!scene.has_captions());
    }

    #[test]
    fn image_scene_order() {
        let scene = Scene::with_image(
            CANVAS,
            Dimensions::new(100.0, 200.0),
            FitMode::Classic,
            Color::BLACK,
        )
        .unwrap();
        assert_eq!(
            scene.commands(),
            &[
                DrawCommand::Clear,
                DrawCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 400.0,
                    height: 400.0,
                    color: Color::BLACK
                },
                DrawCommand::DrawImage {
                    placement: Placement::new(200.0, 400.0, 100.0, 0.0)
                },
            ]
        );
    }

    #[test]
    fn image_scene_propagates_fit_error() {
        let err = Scene::with_image(
            CANVAS,
            Dimensions::new(0.0, 200.0),
            FitMode::Classic,
            Color::BLACK,
        );
        assert!(matches!(err, Err(FitError::InvalidDimension { .. })));
    }

    #[test]
    fn captions_stroke_then_fill_top_first() {
        let mut scene = Scene::blank(CANVAS);
        scene.push_captions(&Captions::new("top", "bottom"), &CaptionStyle::default());

        let cmds = &scene.commands()[1..];
        assert_eq!(cmds.len(), 4);
        match (&cmds[0], &cmds[1], &cmds[2], &cmds[3]) {
            (
                DrawCommand::StrokeText {
                    run: s0,
                    color: stroke,
                    width,
                },
                DrawCommand::FillText { run: f0, color: fill },
                DrawCommand::StrokeText { run: s1, .. },
                DrawCommand::FillText { run: f1, .. },
            ) => {
                assert_eq!(s0, f0);
                assert_eq!(s1, f1);
                assert_eq!(s0.text, "top");
                assert_eq!(s0.baseline, Baseline::Top);
                assert_eq!(s1.text, "bottom");
                assert_eq!(s1.y, 395.0);
                assert_eq!(*stroke, Color::BLACK);
                assert_eq!(*fill, Color::WHITE);
                assert_eq!(*width, 4.0);
            }
            other => panic!("unexpected command order: {other:?}"),
        }
        assert!(scene.has_captions());
    }
}
