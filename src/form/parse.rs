//! Form body tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::{MemeForm, ParseWarning};
use crate::color::Color;
use crate::controls::Volume;
use crate::fit::FitMode;

/// Parse a form body into a MemeForm + warnings.
pub(crate) fn parse_form(body: &str) -> (MemeForm, Vec<ParseWarning>) {
    let mut form = MemeForm::default();
    let mut warnings = Vec::new();

    for pair in split_body(body) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut form, &mut warnings);
    }

    (form, warnings)
}

fn dispatch_key(key: &str, value: &str, form: &mut MemeForm, warnings: &mut Vec<ParseWarning>) {
    match key {
        // Caption text is taken verbatim.
        "text-top" | "top" => set_or_warn(&mut form.top, Some(String::from(value)), key, value, warnings),
        "text-bottom" | "bottom" => {
            set_or_warn(&mut form.bottom, Some(String::from(value)), key, value, warnings);
        }
        "voice" | "voice-selection" => {
            set_or_warn(&mut form.voice, Some(String::from(value)), key, value, warnings);
        }

        "volume" => match parse_volume(value) {
            Some(v) => set_or_warn(&mut form.volume, Some(v), key, value, warnings),
            None => invalid("volume", value, "expected an integer 0-100", warnings),
        },

        "fill" | "stroke" => match Color::parse(value) {
            Some(c) => {
                let field = if key == "fill" { &mut form.fill } else { &mut form.stroke };
                set_or_warn(field, Some(c), key, value, warnings);
            }
            None => invalid(
                static_key(key),
                value,
                "expected hex color or color name",
                warnings,
            ),
        },

        "font-size" => match parse_positive(value.trim_end_matches("px")) {
            Some(px) => set_or_warn(&mut form.font_size, Some(px), key, value, warnings),
            None => invalid("font-size", value, "expected a positive number", warnings),
        },

        "mode" => match parse_fit_mode(value) {
            Some(m) => set_or_warn(&mut form.mode, Some(m), key, value, warnings),
            None => invalid("mode", value, "expected classic|contain", warnings),
        },

        "w" | "width" | "h" | "height" => match parse_positive(value) {
            Some(px) => {
                let field = if key.starts_with('w') {
                    &mut form.width
                } else {
                    &mut form.height
                };
                set_or_warn(field, Some(px), key, value, warnings);
            }
            None => invalid(
                static_key(key),
                value,
                "expected a positive number",
                warnings,
            ),
        },

        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

/// Canonical name for keys with aliases.
fn static_key(key: &str) -> &'static str {
    match key {
        "fill" => "fill",
        "stroke" => "stroke",
        "w" | "width" => "w",
        "h" | "height" => "h",
        _ => "unknown",
    }
}

// ---- Value parsers ----

fn parse_volume(s: &str) -> Option<Volume> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|&v| v <= 100)
        .map(Volume::new)
}

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_fit_mode(s: &str) -> Option<FitMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "classic" => Some(FitMode::Classic),
        "contain" | "fit" => Some(FitMode::Contain),
        _ => None,
    }
}

// ---- Tokenizer ----

/// Split on '&', dropping empty segments.
fn split_body(body: &str) -> impl Iterator<Item = &str> {
    let body = body.strip_prefix('?').unwrap_or(body);
    body.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a form component as UTF-8. Also handles '+' as space.
/// Malformed escapes pass through literally; invalid UTF-8 becomes U+FFFD.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
