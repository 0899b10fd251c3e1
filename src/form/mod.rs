//! Meme form parsing.
//!
//! Parses URL-encoded form bodies like
//! `text-top=ONE+DOES+NOT&text-bottom=SIMPLY&volume=60` into a [`MemeForm`]
//! that yields captions and editor configuration.
//!
//! # Example
//!
//! ```
//! use memefit::{form, EditorConfig};
//!
//! let result = form::parse("text-top=ONE+DOES+NOT&text-bottom=SIMPLY&volume=60&mode=contain");
//! assert!(result.warnings.is_empty());
//!
//! let captions = result.form.captions();
//! assert_eq!(captions.top, "ONE DOES NOT");
//!
//! let config = result.form.apply(EditorConfig::default());
//! assert_eq!(config.initial_volume.percent(), 60);
//! ```

mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::caption::Captions;
use crate::color::Color;
use crate::controls::Volume;
use crate::editor::EditorConfig;
use crate::fit::{Dimensions, FitMode};

/// Parsed meme form. Absent fields leave the corresponding setting untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemeForm {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub voice: Option<String>,
    pub volume: Option<Volume>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub font_size: Option<f64>,
    pub mode: Option<FitMode>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl MemeForm {
    /// Caption text; missing fields become empty strings.
    pub fn captions(&self) -> Captions {
        Captions::new(
            self.top.clone().unwrap_or_default(),
            self.bottom.clone().unwrap_or_default(),
        )
    }

    /// Overlay the form's settings onto `config`.
    ///
    /// A canvas size given on one axis only keeps the other axis from `config`.
    pub fn apply(&self, mut config: EditorConfig) -> EditorConfig {
        if self.width.is_some() || self.height.is_some() {
            config.canvas = Dimensions::new(
                self.width.unwrap_or(config.canvas.width),
                self.height.unwrap_or(config.canvas.height),
            );
        }
        if let Some(mode) = self.mode {
            config.fit_mode = mode;
        }
        if let Some(volume) = self.volume {
            config.initial_volume = volume;
        }
        if let Some(fill) = self.fill {
            config.caption_style.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            config.caption_style.stroke = stroke;
        }
        if let Some(size) = self.font_size {
            config.caption_style.font_size = size;
        }
        if let Some(voice) = &self.voice {
            config.initial_voice = Some(voice.clone());
        }
        config
    }
}

/// Result of parsing a form body.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub form: MemeForm,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from form parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key is not part of the meme form.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a URL-encoded form body (with or without leading `?`).
pub fn parse(body: &str) -> ParseResult {
    let (form, warnings) = parse::parse_form(body);
    ParseResult { form, warnings }
}
