//! SVG rendering of a meme [`Scene`].
//!
//! Replays the draw commands into a standalone SVG document the size of the
//! canvas. Useful for previews, snapshots and hosts without a raster canvas.
//!
//! # Example
//!
//! ```
//! use memefit::{Captions, CaptionStyle, Color, Dimensions, FitMode, Scene};
//! use memefit::svg::render_scene_svg;
//!
//! let mut scene = Scene::with_image(
//!     Dimensions::new(400.0, 400.0),
//!     Dimensions::new(800.0, 600.0),
//!     FitMode::Classic,
//!     Color::BLACK,
//! )
//! .unwrap();
//! scene.push_captions(&Captions::new("TOP", "BOTTOM"), &CaptionStyle::default());
//!
//! let svg = render_scene_svg(&scene, Some("cat.jpg"));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"href="cat.jpg""#));
//! ```

use crate::caption::{Baseline, CaptionRun, TextAlign};
use crate::color::Color;
use crate::scene::{DrawCommand, Scene};

/// Render a scene into a complete SVG document.
///
/// `image_href` is used for the `<image>` element; without it, the image area
/// is drawn as a placeholder rectangle. Commands before the last
/// [`DrawCommand::Clear`] are not rendered, and empty caption text emits no
/// element.
pub fn render_scene_svg(scene: &Scene, image_href: Option<&str>) -> String {
    let canvas = scene.canvas();
    let commands = scene.commands();
    let start = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Clear))
        .map_or(0, |i| i + 1);

    let mut svg = String::with_capacity(1024);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    ));
    svg.push('\n');
    svg.push_str(
        r##"<style>
  .placeholder { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
</style>
"##,
    );

    for command in &commands[start..] {
        match command {
            DrawCommand::Clear => {}
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                svg.push_str(&format!(
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{paint}/>"#,
                    paint = Paint::fill(*color),
                ));
                svg.push('\n');
            }
            DrawCommand::DrawImage { placement } => {
                match image_href {
                    Some(href) => {
                        svg.push_str(&format!(
                            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none"/>"#,
                            escape_xml(href),
                            placement.start_x,
                            placement.start_y,
                            placement.width,
                            placement.height,
                        ));
                    }
                    None => {
                        svg.push_str(&format!(
                            r#"<rect x="{}" y="{}" width="{}" height="{}" class="placeholder"/>"#,
                            placement.start_x, placement.start_y, placement.width, placement.height,
                        ));
                    }
                }
                svg.push('\n');
            }
            DrawCommand::StrokeText { run, color, width } => {
                push_text(&mut svg, run, Paint::stroke(*color, *width));
            }
            DrawCommand::FillText { run, color } => {
                push_text(&mut svg, run, Paint::fill(*color));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_text(svg: &mut String, run: &CaptionRun, paint: Paint) {
    if run.text.is_empty() {
        return;
    }
    let anchor = match run.align {
        TextAlign::Center => "middle",
    };
    let baseline = match run.baseline {
        Baseline::Top => "text-before-edge",
        Baseline::Bottom => "text-after-edge",
    };
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" font-family="{}" font-size="{}"{paint}>{}</text>"#,
        run.x,
        run.y,
        escape_xml(&run.font_family),
        run.font_size,
        escape_xml(&run.text),
    ));
    svg.push('\n');
}

/// Fill or stroke presentation attributes.
enum Paint {
    Fill(Color),
    Stroke(Color, f64),
}

impl Paint {
    fn fill(color: Color) -> Self {
        Self::Fill(color)
    }

    fn stroke(color: Color, width: f64) -> Self {
        Self::Stroke(color, width)
    }
}

impl core::fmt::Display for Paint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fill(c) => {
                write!(f, r#" fill="{}""#, Rgb(*c))?;
                if !c.is_opaque() {
                    write!(f, r#" fill-opacity="{}""#, c.opacity())?;
                }
            }
            Self::Stroke(c, width) => {
                write!(
                    f,
                    r#" fill="none" stroke="{}" stroke-width="{width}" stroke-linejoin="round""#,
                    Rgb(*c)
                )?;
                if !c.is_opaque() {
                    write!(f, r#" stroke-opacity="{}""#, c.opacity())?;
                }
            }
        }
        Ok(())
    }
}

/// `#rrggbb` without alpha; opacity goes in a separate attribute.
struct Rgb(Color);

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

/// Escape special characters for XML text and attribute content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
