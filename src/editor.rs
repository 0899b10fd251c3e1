//! Meme editor controller.
//!
//! Holds all editor state in one value and exposes one method per user event:
//! loading an image, generating captions, clearing, reading aloud, moving the
//! volume slider and receiving the voice list. Each method returns what the
//! host needs to update its surface.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::caption::{CaptionStyle, Captions};
use crate::color::Color;
use crate::controls::{Control, ControlState, Volume, VolumeLevel};
use crate::fit::{Dimensions, FitError, FitMode};
use crate::scene::Scene;
use crate::speech::{self, Synthesizer, Voice, VoiceOption};

/// Editor error.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// The event came from a control that is currently disabled.
    #[error("the {0} control is disabled")]
    ControlDisabled(Control),
    /// The loaded image could not be fitted onto the canvas.
    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Editor configuration.
///
/// # Example
///
/// ```
/// use memefit::{CaptionStyle, Color, Dimensions, EditorConfig, FitMode};
///
/// let config = EditorConfig::default()
///     .canvas(Dimensions::new(600.0, 600.0))
///     .fit_mode(FitMode::Contain)
///     .background(Color::WHITE)
///     .caption_style(CaptionStyle::default().font_size(40.0));
/// assert_eq!(config.canvas.width, 600.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub canvas: Dimensions,
    pub fit_mode: FitMode,
    /// Fill behind the image; shows as bars around non-square images.
    pub background: Color,
    pub caption_style: CaptionStyle,
    pub initial_volume: Volume,
    /// Voice to select once the engine reports it, instead of the first voice.
    pub initial_voice: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: Dimensions::new(400.0, 400.0),
            fit_mode: FitMode::Classic,
            background: Color::BLACK,
            caption_style: CaptionStyle::default(),
            initial_volume: Volume::MAX,
            initial_voice: None,
        }
    }
}

impl EditorConfig {
    pub fn canvas(mut self, canvas: Dimensions) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = mode;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn caption_style(mut self, style: CaptionStyle) -> Self {
        self.caption_style = style;
        self
    }

    pub fn initial_volume(mut self, volume: Volume) -> Self {
        self.initial_volume = volume;
        self
    }

    pub fn initial_voice(mut self, name: impl Into<String>) -> Self {
        self.initial_voice = Some(name.into());
        self
    }
}

/// A decoded image as reported by the host's loader.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    /// File name, used as the image's alt text.
    pub name: String,
    /// Natural size in pixels.
    pub dimensions: Dimensions,
}

impl ImageSource {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Dimensions::new(width, height),
        }
    }
}

/// Editor state and event handlers.
#[derive(Clone, Debug)]
pub struct MemeEditor {
    config: EditorConfig,
    controls: ControlState,
    volume: Volume,
    voices: Vec<Voice>,
    voice_options: Vec<VoiceOption>,
    selected_voice: Option<String>,
    image: Option<ImageSource>,
    captions: Captions,
    scene: Scene,
}

impl Default for MemeEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl MemeEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            controls: ControlState::default(),
            volume: config.initial_volume,
            voices: Vec::new(),
            voice_options: Vec::new(),
            selected_voice: None,
            image: None,
            captions: Captions::default(),
            scene: Scene::blank(config.canvas),
            config,
        }
    }

    /// Draw a newly loaded image: background fill, then the image fitted to the canvas.
    ///
    /// Button state is left as is. On error the previous scene and image are kept.
    pub fn load_image(&mut self, image: ImageSource) -> Result<&Scene, EditorError> {
        let scene = Scene::with_image(
            self.config.canvas,
            image.dimensions,
            self.config.fit_mode,
            self.config.background,
        )?;

        if let Some(placement) = scene.image_placement() {
            let (over_x, over_y) = placement.overflow(self.config.canvas);
            if over_x > 0.0 || over_y > 0.0 {
                warn!(
                    name = %image.name,
                    over_x,
                    over_y,
                    "image placement exceeds the canvas"
                );
            }
        }

        debug!(
            "loaded image {:?} ({}x{})",
            image.name, image.dimensions.width, image.dimensions.height
        );
        self.scene = scene;
        self.image = Some(image);
        Ok(&self.scene)
    }

    /// Paint captions over the current canvas.
    pub fn generate(&mut self, captions: Captions) -> Result<&Scene, EditorError> {
        self.require(Control::Generate)?;
        self.scene.push_captions(&captions, &self.config.caption_style);
        debug!(top = %captions.top, bottom = %captions.bottom, "captions drawn");
        self.captions = captions;
        self.controls = self.controls.after_generate();
        Ok(&self.scene)
    }

    /// Erase the canvas.
    pub fn clear(&mut self) -> Result<&Scene, EditorError> {
        self.require(Control::Clear)?;
        self.scene = Scene::blank(self.config.canvas);
        self.controls = self.controls.after_clear();
        debug!("canvas cleared");
        Ok(&self.scene)
    }

    /// Speak the generated captions, top then bottom.
    pub fn read_aloud<S: Synthesizer + ?Sized>(&self, synth: &mut S) -> Result<(), EditorError> {
        self.require(Control::Read)?;
        let queued = speech::utterances(
            &self.voices,
            self.selected_voice.as_deref(),
            &self.captions,
            self.volume,
        );
        debug!(
            voice = ?self.selected_voice,
            volume = self.volume.percent(),
            "reading captions aloud"
        );
        for utterance in queued {
            synth.speak(utterance);
        }
        Ok(())
    }

    /// Move the volume slider. Returns the icon bucket to show.
    pub fn set_volume(&mut self, percent: u8) -> VolumeLevel {
        self.volume = Volume::new(percent);
        self.volume.level()
    }

    /// Replace the voice list reported by the speech engine.
    ///
    /// Enables the voice selector. The current selection is kept when a voice
    /// of that name still exists. Otherwise the configured initial voice is
    /// selected if the engine offers it, else the first voice.
    pub fn voices_changed(&mut self, voices: Vec<Voice>) -> &[VoiceOption] {
        self.voice_options = speech::voice_options(&voices);
        let still_present = self
            .selected_voice
            .as_deref()
            .is_some_and(|name| speech::find_voice(&voices, name).is_some());
        if !still_present {
            let preferred = self
                .config
                .initial_voice
                .as_deref()
                .and_then(|name| speech::find_voice(&voices, name));
            self.selected_voice = preferred.or(voices.first()).map(|v| v.name.clone());
        }
        debug!(count = voices.len(), selected = ?self.selected_voice, "voices changed");
        self.voices = voices;
        self.controls = self.controls.with_voices();
        &self.voice_options
    }

    /// Select a voice by name. Returns false, leaving the selection unchanged,
    /// when no voice has that name.
    pub fn select_voice(&mut self, name: &str) -> bool {
        if speech::find_voice(&self.voices, name).is_none() {
            return false;
        }
        self.selected_voice = Some(String::from(name));
        true
    }

    fn require(&self, control: Control) -> Result<(), EditorError> {
        if self.controls.is_enabled(control) {
            Ok(())
        } else {
            Err(EditorError::ControlDisabled(control))
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn voice_options(&self) -> &[VoiceOption] {
        &self.voice_options
    }

    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    /// The last successfully loaded image.
    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// The last generated captions.
    pub fn captions(&self) -> &Captions {
        &self.captions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::Placement;
    use crate::scene::DrawCommand;
    use crate::speech::Utterance;
    use alloc::vec;

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("Alex", "en-US").default_voice(),
            Voice::new("Kyoko", "ja-JP"),
        ]
    }

    #[test]
    fn starts_blank() {
        let editor = MemeEditor::default();
        assert_eq!(editor.scene().commands(), &[DrawCommand::Clear]);
        assert_eq!(editor.controls(), ControlState::default());
        assert_eq!(editor.volume(), Volume::MAX);
        assert!(editor.image().is_none());
    }

    #[test]
    fn load_image_fits_onto_canvas() {
        let mut editor = MemeEditor::default();
        let scene = editor
            .load_image(ImageSource::new("cat.png", 1000.0, 500.0))
            .unwrap();
        assert_eq!(
            scene.image_placement(),
            Some(Placement::new(400.0, 200.0, 0.0, 100.0))
        );
        assert_eq!(editor.image().map(|i| i.name.as_str()), Some("cat.png"));
        assert_eq!(editor.controls(), ControlState::default());
    }

    #[test]
    fn bad_image_keeps_previous_scene() {
        let mut editor = MemeEditor::default();
        editor
            .load_image(ImageSource::new("ok.png", 100.0, 100.0))
            .unwrap();
        let before = editor.scene().clone();

        let err = editor
            .load_image(ImageSource::new("broken.png", 0.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, EditorError::Fit(FitError::InvalidDimension { .. })));
        assert_eq!(editor.scene(), &before);
        assert_eq!(editor.image().map(|i| i.name.as_str()), Some("ok.png"));
    }

    #[test]
    fn generate_toggles_controls() {
        let mut editor = MemeEditor::default();
        editor.generate(Captions::new("top", "bottom")).unwrap();
        let c = editor.controls();
        assert!(!c.generate && c.clear && c.read);
        assert!(editor.scene().has_captions());

        assert_eq!(
            editor.generate(Captions::new("again", "")).unwrap_err(),
            EditorError::ControlDisabled(Control::Generate)
        );
    }

    #[test]
    fn clear_requires_generate_first() {
        let mut editor = MemeEditor::default();
        assert_eq!(
            editor.clear().unwrap_err(),
            EditorError::ControlDisabled(Control::Clear)
        );

        editor.generate(Captions::new("a", "b")).unwrap();
        let scene = editor.clear().unwrap();
        assert_eq!(scene.commands(), &[DrawCommand::Clear]);
        assert_eq!(editor.controls(), ControlState::default());
    }

    #[test]
    fn read_aloud_uses_selected_voice_and_volume() {
        let mut editor = MemeEditor::default();
        editor.voices_changed(voices());
        assert!(editor.select_voice("Kyoko"));
        assert_eq!(editor.set_volume(20), VolumeLevel::Level1);
        editor.generate(Captions::new("hello", "world")).unwrap();

        let mut spoken: Vec<Utterance> = Vec::new();
        editor.read_aloud(&mut spoken).unwrap();
        assert_eq!(spoken.len(), 2);
        assert_eq!(spoken[0].text, "hello");
        assert_eq!(spoken[1].text, "world");
        assert_eq!(
            spoken[0].voice.as_ref().map(|v| v.name.as_str()),
            Some("Kyoko")
        );
        assert_eq!(spoken[1].volume, 0.2);
    }

    #[test]
    fn read_aloud_disabled_before_generate() {
        let editor = MemeEditor::default();
        let mut spoken: Vec<Utterance> = Vec::new();
        assert_eq!(
            editor.read_aloud(&mut spoken).unwrap_err(),
            EditorError::ControlDisabled(Control::Read)
        );
        assert!(spoken.is_empty());
    }

    #[test]
    fn voices_changed_replaces_options() {
        let mut editor = MemeEditor::default();
        assert!(!editor.controls().voice_select);

        let opts = editor.voices_changed(voices());
        assert_eq!(opts.len(), 2);
        assert_eq!(editor.selected_voice(), Some("Alex"));
        assert!(editor.controls().voice_select);

        // A second notification replaces rather than appends.
        editor.select_voice("Kyoko");
        editor.voices_changed(vec![Voice::new("Kyoko", "ja-JP"), Voice::new("Zoe", "en-AU")]);
        assert_eq!(editor.voice_options().len(), 2);
        assert_eq!(editor.selected_voice(), Some("Kyoko"));

        editor.voices_changed(vec![Voice::new("Zoe", "en-AU")]);
        assert_eq!(editor.selected_voice(), Some("Zoe"));
    }

    #[test]
    fn initial_voice_preferred_when_offered() {
        let mut editor = MemeEditor::new(EditorConfig::default().initial_voice("Kyoko"));
        editor.voices_changed(voices());
        assert_eq!(editor.selected_voice(), Some("Kyoko"));

        let mut other = MemeEditor::new(EditorConfig::default().initial_voice("Nobody"));
        other.voices_changed(voices());
        assert_eq!(other.selected_voice(), Some("Alex"));
    }

    #[test]
    fn select_unknown_voice_is_rejected() {
        let mut editor = MemeEditor::default();
        editor.voices_changed(voices());
        assert!(!editor.select_voice("Nobody"));
        assert_eq!(editor.selected_voice(), Some("Alex"));
    }

    #[test]
    fn empty_voice_list_selects_nothing() {
        let mut editor = MemeEditor::default();
        editor.voices_changed(Vec::new());
        assert_eq!(editor.selected_voice(), None);
        assert!(editor.voice_options().is_empty());
    }

    #[test]
    fn contain_mode_on_wide_canvas() {
        let mut editor = MemeEditor::new(
            EditorConfig::default()
                .canvas(Dimensions::new(400.0, 200.0))
                .fit_mode(FitMode::Contain),
        );
        let scene = editor
            .load_image(ImageSource::new("square.png", 50.0, 50.0))
            .unwrap();
        assert_eq!(
            scene.image_placement(),
            Some(Placement::new(200.0, 200.0, 100.0, 0.0))
        );
    }
}
