//! Paint colors: 8-bit sRGB with alpha, plus hex and named-color parsing.

use core::fmt;

/// sRGB color with alpha (8-bit per channel).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Black, fully opaque.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White, fully opaque.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Transparent black `[0, 0, 0, 0]`.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parse a color string (hex or named).
    ///
    /// Accepts:
    /// - `#RGB` / `RGB`: 3-digit hex, alpha = 0xFF
    /// - `#RGBA` / `RGBA`: 4-digit hex
    /// - `#RRGGBB` / `RRGGBB`: 6-digit hex, alpha = 0xFF
    /// - `#RRGGBBAA` / `RRGGBBAA`: 8-digit hex
    /// - CSS color names (case-insensitive) from a common subset: `white`, `red`,
    ///   `transparent`, etc.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if let Some(c) = parse_hex(hex) {
            return Some(c);
        }

        lookup_named(s)
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 | 4 => {
            let r = expand_nibble(bytes[0])?;
            let g = expand_nibble(bytes[1])?;
            let b = expand_nibble(bytes[2])?;
            let a = match bytes.get(3) {
                Some(&ch) => expand_nibble(ch)?,
                None => 255,
            };
            Some(Color::rgba(r, g, b, a))
        }
        6 | 8 => {
            let r = parse_byte(bytes[0], bytes[1])?;
            let g = parse_byte(bytes[2], bytes[3])?;
            let b = parse_byte(bytes[4], bytes[5])?;
            let a = if bytes.len() == 8 {
                parse_byte(bytes[6], bytes[7])?
            } else {
                255
            };
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn lookup_named(name: &str) -> Option<Color> {
    // Lowercase into a scratch buffer; every name in the table is short ASCII.
    let mut buf = [0u8; 16];
    let name_bytes = name.as_bytes();
    if name_bytes.len() > buf.len() {
        return None;
    }
    for (i, &b) in name_bytes.iter().enumerate() {
        buf[i] = b.to_ascii_lowercase();
    }
    let lower = core::str::from_utf8(&buf[..name_bytes.len()]).ok()?;

    NAMED_COLORS
        .binary_search_by_key(&lower, |&(n, _)| n)
        .ok()
        .map(|idx| {
            let [r, g, b, a] = NAMED_COLORS[idx].1;
            Color::rgba(r, g, b, a)
        })
}

/// Named colors, sorted alphabetically for binary search.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("aqua", [0, 255, 255, 255]),
    ("black", [0, 0, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gold", [255, 215, 0, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("grey", [128, 128, 128, 255]),
    ("hotpink", [255, 105, 180, 255]),
    ("lime", [0, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("olive", [128, 128, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("silver", [192, 192, 192, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("white", [255, 255, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
];
