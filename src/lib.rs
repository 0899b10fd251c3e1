//! Meme canvas layout: aspect-preserving image fit, caption placement, and
//! read-aloud state.
//!
//! The core is [`fit()`], a pure function that scales content into a fixed
//! container and centers it on the free axis. Everything around it, from
//! caption layout to draw plans to editor state, is plain data: no pixel
//! operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`]: Fit modes, placement computation, dimension validation
//! - [`color`]: Paint colors and color parsing
//! - [`caption`]: Top/bottom caption positioning and style
//! - [`scene`]: Ordered draw commands for the canvas
//! - [`controls`]: Volume levels and button state
//! - [`speech`]: Voices, utterances and the synthesizer seam
//! - [`editor`]: Event-driven editor controller tying it together
//! - `form`: URL-encoded meme form parsing (feature `form`)
//! - `svg`: SVG rendering of scenes (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod controls;
pub mod fit;

#[cfg(feature = "alloc")]
pub mod caption;
#[cfg(feature = "alloc")]
pub mod editor;
#[cfg(feature = "alloc")]
pub mod scene;
#[cfg(feature = "alloc")]
pub mod speech;

#[cfg(feature = "form")]
pub mod form;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use color::Color;
pub use controls::{Control, ControlState, Volume, VolumeLevel};
pub use fit::{Axis, Dimensions, Fit, FitError, FitMode, Placement, Role, Shape, fit};

#[cfg(feature = "alloc")]
pub use caption::{Baseline, CaptionRun, CaptionStyle, Captions, TextAlign};
#[cfg(feature = "alloc")]
pub use editor::{EditorConfig, EditorError, ImageSource, MemeEditor};
#[cfg(feature = "alloc")]
pub use scene::{DrawCommand, Scene};
#[cfg(feature = "alloc")]
pub use speech::{Synthesizer, Utterance, Voice, VoiceOption};
