//! Render a meme to SVG on stdout.
//!
//! ```text
//! cargo run --example render_meme --features svg,form -- \
//!     'text-top=ONE+DOES+NOT&text-bottom=SIMPLY&mode=contain' 1200 800 cat.jpg
//! ```
//!
//! Set `RUST_LOG=memefit=debug` to see editor events.

use memefit::svg::render_scene_svg;
use memefit::{EditorConfig, ImageSource, MemeEditor, form};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let body = args.get(1).map(String::as_str).unwrap_or("");
    let width: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(800.0);
    let height: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(600.0);
    let href = args.get(4).map(String::as_str);

    let parsed = form::parse(body);
    for warning in &parsed.warnings {
        tracing::warn!(?warning, "ignored form field");
    }

    let mut editor = MemeEditor::new(parsed.form.apply(EditorConfig::default()));
    editor.load_image(ImageSource::new(href.unwrap_or("image"), width, height))?;
    editor.generate(parsed.form.captions())?;

    print!("{}", render_scene_svg(editor.scene(), href));
    Ok(())
}
