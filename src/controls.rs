//! Volume and button state of the meme editor.

use core::fmt;

/// Read-aloud volume as a whole percentage, `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    pub const MUTE: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Percentages above 100 are clamped.
    pub const fn new(percent: u8) -> Self {
        if percent > 100 { Self::MAX } else { Self(percent) }
    }

    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Speech volume in `0.0..=1.0`.
    pub fn gain(&self) -> f32 {
        self.0 as f32 / 100.0
    }

    pub fn level(&self) -> VolumeLevel {
        VolumeLevel::from(*self)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

/// Volume icon bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VolumeLevel {
    /// Muted.
    Level0,
    /// 1–33%.
    Level1,
    /// 34–66%.
    Level2,
    /// 67–100%.
    Level3,
}

impl From<Volume> for VolumeLevel {
    fn from(volume: Volume) -> Self {
        match volume.percent() {
            67.. => Self::Level3,
            34..=66 => Self::Level2,
            1..=33 => Self::Level1,
            0 => Self::Level0,
        }
    }
}

impl VolumeLevel {
    pub const fn index(&self) -> u8 {
        match self {
            Self::Level0 => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// Relative path of the icon shown for this level.
    pub const fn icon_path(&self) -> &'static str {
        match self {
            Self::Level0 => "./icons/volume-level-0.svg",
            Self::Level1 => "./icons/volume-level-1.svg",
            Self::Level2 => "./icons/volume-level-2.svg",
            Self::Level3 => "./icons/volume-level-3.svg",
        }
    }

    pub const fn alt_text(&self) -> &'static str {
        match self {
            Self::Level0 => "Volume Level 0",
            Self::Level1 => "Volume Level 1",
            Self::Level2 => "Volume Level 2",
            Self::Level3 => "Volume Level 3",
        }
    }
}

/// An interactive control of the editor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// Draws the captions.
    Generate,
    /// Erases the canvas.
    Clear,
    /// Reads the captions aloud.
    Read,
    /// Picks the speech voice.
    VoiceSelect,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate => f.write_str("generate"),
            Self::Clear => f.write_str("clear"),
            Self::Read => f.write_str("read"),
            Self::VoiceSelect => f.write_str("voice selection"),
        }
    }
}

/// Which controls are enabled.
///
/// Generating captions locks the generate button and unlocks clear/read;
/// clearing does the reverse. The voice selector unlocks once voices are known.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlState {
    pub generate: bool,
    pub clear: bool,
    pub read: bool,
    pub voice_select: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            generate: true,
            clear: false,
            read: false,
            voice_select: false,
        }
    }
}

impl ControlState {
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Generate => self.generate,
            Control::Clear => self.clear,
            Control::Read => self.read,
            Control::VoiceSelect => self.voice_select,
        }
    }

    pub fn after_generate(self) -> Self {
        Self {
            generate: false,
            clear: true,
            read: true,
            ..self
        }
    }

    pub fn after_clear(self) -> Self {
        Self {
            generate: true,
            clear: false,
            read: false,
            ..self
        }
    }

    pub fn with_voices(self) -> Self {
        Self {
            voice_select: true,
            ..self
        }
    }
}
