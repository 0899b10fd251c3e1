//! Text-to-speech requests for reading captions aloud.
//!
//! The crate never talks to a speech engine itself. It builds [`Utterance`]s
//! and hands them to a host-provided [`Synthesizer`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::caption::Captions;
use crate::controls::Volume;

/// A voice offered by the host's speech engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
    /// The engine's default voice.
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    pub fn default_voice(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// One entry of the voice selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoiceOption {
    /// Display text, e.g. `Alex (en-US) -- DEFAULT`.
    pub label: String,
    pub lang: String,
    pub name: String,
}

impl VoiceOption {
    pub fn from_voice(voice: &Voice) -> Self {
        let mut label = format!("{} ({})", voice.name, voice.lang);
        if voice.is_default {
            label.push_str(" -- DEFAULT");
        }
        Self {
            label,
            lang: voice.lang.clone(),
            name: voice.name.clone(),
        }
    }
}

/// Selector entries for every voice, in engine order.
pub fn voice_options(voices: &[Voice]) -> Vec<VoiceOption> {
    voices.iter().map(VoiceOption::from_voice).collect()
}

/// Find a voice by name. When names repeat, the last match wins.
pub fn find_voice<'a>(voices: &'a [Voice], name: &str) -> Option<&'a Voice> {
    voices.iter().rev().find(|v| v.name == name)
}

/// A single piece of text to speak.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` lets the engine use its default voice.
    pub voice: Option<Voice>,
    /// Gain in `0.0..=1.0`.
    pub volume: f32,
}

/// Utterances for the top and bottom captions, in speaking order.
pub fn utterances(
    voices: &[Voice],
    selected: Option<&str>,
    captions: &Captions,
    volume: Volume,
) -> [Utterance; 2] {
    let voice = selected.and_then(|name| find_voice(voices, name)).cloned();
    let utter = |text: &str| Utterance {
        text: String::from(text),
        voice: voice.clone(),
        volume: volume.gain(),
    };
    [utter(&captions.top), utter(&captions.bottom)]
}

/// A speech engine. Utterances queue in the order they are spoken.
pub trait Synthesizer {
    fn speak(&mut self, utterance: Utterance);
}

impl Synthesizer for Vec<Utterance> {
    fn speak(&mut self, utterance: Utterance) {
        self.push(utterance);
    }
}
