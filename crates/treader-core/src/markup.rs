//! Inline color markup for styled lines.
//!
//! Lines are plain strings with embedded tags such as `[gray]`, `[#303030]`
//! and `[reset]`. Bracketed words that are not tags (`[INFO]`, `[WARN]`)
//! stay literal, and `[[` is a literal `[`. The display layer parses lines
//! into segments; nothing here knows about terminals.

use std::borrow::Cow;
use std::fmt;

/// A foreground color carried by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Terminal default foreground.
    Reset,
    Gray,
    White,
    Green,
    Yellow,
    Red,
    Rgb(u8, u8, u8),
}

impl Tint {
    /// Parses the inside of a tag (`gray`, `#a0a0a0`, ...).
    pub fn from_tag(name: &str) -> Option<Self> {
        let tint = match name {
            "reset" | "-" => Tint::Reset,
            "gray" | "grey" => Tint::Gray,
            "white" => Tint::White,
            "green" => Tint::Green,
            "yellow" => Tint::Yellow,
            "red" => Tint::Red,
            _ => return parse_hex(name),
        };
        Some(tint)
    }
}

fn parse_hex(name: &str) -> Option<Tint> {
    let hex = name.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Tint::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tint::Reset => f.write_str("[reset]"),
            Tint::Gray => f.write_str("[gray]"),
            Tint::White => f.write_str("[white]"),
            Tint::Green => f.write_str("[green]"),
            Tint::Yellow => f.write_str("[yellow]"),
            Tint::Red => f.write_str("[red]"),
            Tint::Rgb(r, g, b) => write!(f, "[#{r:02x}{g:02x}{b:02x}]"),
        }
    }
}

/// A line of text with embedded color tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine(String);

impl StyledLine {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the markup into colored segments.
    pub fn segments(&self) -> Vec<Segment> {
        parse(&self.0)
    }

    /// The text with all tags removed.
    pub fn plain_text(&self) -> String {
        self.segments().into_iter().map(|s| s.text).collect()
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StyledLine {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// A run of text drawn in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tint: Tint,
    pub text: String,
}

/// Splits markup into segments. Empty runs are dropped.
pub fn parse(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut tint = Tint::Reset;
    let mut text = String::new();
    let mut rest = markup;

    while let Some(open) = rest.find('[') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if let Some(stripped) = after.strip_prefix('[') {
            text.push('[');
            rest = stripped;
            continue;
        }

        let tag = after
            .find(']')
            .and_then(|close| Tint::from_tag(&after[..close]).map(|t| (t, close)));
        match tag {
            Some((next, close)) => {
                flush(&mut segments, tint, &mut text);
                tint = next;
                rest = &after[close + 1..];
            }
            None => {
                text.push('[');
                rest = after;
            }
        }
    }
    text.push_str(rest);
    flush(&mut segments, tint, &mut text);
    segments
}

fn flush(segments: &mut Vec<Segment>, tint: Tint, text: &mut String) {
    if !text.is_empty() {
        segments.push(Segment {
            tint,
            text: std::mem::take(text),
        });
    }
}

/// Escapes text so that none of it is read as a tag.
pub fn escape(text: &str) -> Cow<'_, str> {
    if text.contains('[') {
        Cow::Owned(text.replace('[', "[["))
    } else {
        Cow::Borrowed(text)
    }
}
