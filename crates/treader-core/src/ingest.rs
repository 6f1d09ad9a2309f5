//! Document ingestion.
//!
//! Loading never fails: unreadable files turn into a placeholder document
//! with usage instructions, and undecodable bytes degrade to lossy UTF-8.
//!
//! Decoding order:
//! 1. valid UTF-8 is used as-is
//! 2. otherwise GBK, accepted only when it decodes cleanly
//! 3. otherwise forced UTF-8 with replacement characters

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Single line shown when a file yields no displayable text.
pub const EMPTY_DOCUMENT_LINE: &str = "File is empty or its encoding is unsupported";

/// Immutable, display-ready lines of the hidden document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Largest scroll offset that still shows a full page of `page_size` lines.
    pub fn max_offset(&self, page_size: usize) -> usize {
        self.lines.len().saturating_sub(page_size)
    }
}

/// Which decoder produced the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Gbk,
    /// Neither decoder was clean; invalid sequences became U+FFFD.
    Lossy,
}

/// Loads the document at `path`, wrapping lines longer than `width` bytes.
pub fn load(path: &Path, width: usize) -> Document {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document unreadable, showing placeholder");
            return Document::new(not_found_lines(path));
        }
    };

    let (text, encoding) = decode(&bytes);
    let lines = split_lines(&text, width);
    debug!(
        path = %path.display(),
        ?encoding,
        bytes = bytes.len(),
        lines = lines.len(),
        "document loaded"
    );

    if lines.is_empty() {
        return Document::new(vec![EMPTY_DOCUMENT_LINE.to_string()]);
    }
    Document::new(lines)
}

/// Decodes raw bytes, preferring UTF-8, then GBK, then lossy UTF-8.
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, SourceEncoding) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), SourceEncoding::Utf8);
    }
    if let Some(text) = decode_gbk(bytes) {
        return (Cow::Owned(text), SourceEncoding::Gbk);
    }
    (String::from_utf8_lossy(bytes), SourceEncoding::Lossy)
}

fn decode_gbk(bytes: &[u8]) -> Option<String> {
    let (text, had_errors) = encoding_rs::GBK.decode_without_bom_handling(bytes);
    if had_errors || text.contains(char::REPLACEMENT_CHARACTER) {
        return None;
    }
    Some(text.into_owned())
}

/// Normalizes line endings, trims, drops blank lines and wraps to `width`.
pub fn split_lines(text: &str, width: usize) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| wrap(line, width))
        .map(str::to_owned)
        .collect()
}

/// Splits `line` into chunks of at most `width` bytes on char boundaries.
///
/// A chunk only exceeds `width` when `width` is smaller than the first
/// character's encoded length; that character is emitted whole so the
/// loop always advances.
pub fn wrap(line: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = line;

    while rest.len() > width {
        let mut cut = floor_char_boundary(rest, width);
        if cut == 0 {
            cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
    }

    if !rest.is_empty() || chunks.is_empty() {
        chunks.push(rest);
    }
    chunks
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

fn not_found_lines(path: &Path) -> Vec<String> {
    vec![
        format!("File not found: {}", path.display()),
        String::new(),
        "Supported formats: UTF-8 or GBK encoded .txt files".to_string(),
        "Usage: treader [FILE]".to_string(),
        String::new(),
        "Keys:".to_string(),
        "- h: toggle reading mode (boss key)".to_string(),
        "- j/k or ↑↓: scroll the document".to_string(),
        "- PgUp/PgDn: scroll by five lines".to_string(),
        "- [/]: adjust opacity".to_string(),
        "- /: search text".to_string(),
        "- Ctrl+C: quit".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_utf8_lines() {
        let file = write_temp(b"alpha\nbeta\ngamma");
        let doc = load(file.path(), 70);
        assert_eq!(doc.lines(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_load_missing_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-novel.txt");
        let doc = load(&path, 70);
        let first = doc.get(0).unwrap();
        assert!(first.starts_with("File not found"));
        assert!(first.contains("missing-novel.txt"));
        assert!(doc.len() > 1);
    }

    #[test]
    fn test_load_blank_file_uses_empty_line() {
        let file = write_temp(b"  \r\n\t\n\n");
        let doc = load(file.path(), 70);
        assert_eq!(doc.lines(), [EMPTY_DOCUMENT_LINE]);
    }

    #[test]
    fn test_load_gbk_file() {
        // "你好" then "世界" in GBK
        let file = write_temp(&[0xC4, 0xE3, 0xBA, 0xC3, b'\n', 0xCA, 0xC0, 0xBD, 0xE7]);
        let doc = load(file.path(), 70);
        assert_eq!(doc.lines(), ["你好", "世界"]);
    }

    #[test]
    fn test_decode_prefers_utf8() {
        let (text, encoding) = decode("中文".as_bytes());
        assert_eq!(text, "中文");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_decode_falls_back_to_lossy() {
        // 0xFF is neither valid UTF-8 nor a GBK lead byte
        let (text, encoding) = decode(&[b'o', b'k', 0xFF]);
        assert_eq!(encoding, SourceEncoding::Lossy);
        assert!(text.starts_with("ok"));
        assert!(text.contains(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn test_split_lines_normalizes_endings() {
        let lines = split_lines("one\r\ntwo\rthree\n  four  \n\n", 70);
        assert_eq!(lines, ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_split_lines_wraps_long_lines() {
        let line = "x".repeat(150);
        let lines = split_lines(&line, 70);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 70);
        assert_eq!(lines[1].len(), 70);
        assert_eq!(lines[2].len(), 10);
    }

    #[test]
    fn test_wrap_short_line_is_single_chunk() {
        assert_eq!(wrap("short", 70), ["short"]);
    }

    #[test]
    fn test_wrap_respects_char_boundaries() {
        // each CJK char is 3 bytes; 70 is not a multiple of 3
        let line = "字".repeat(40);
        let chunks = wrap(&line, 70);
        assert!(chunks.iter().all(|chunk| chunk.len() <= 70));
        assert_eq!(chunks[0].len(), 69);
        assert_eq!(chunks.concat(), line);
    }

    #[test]
    fn test_wrap_mixed_width_text() {
        let line = "ab字cd字ef字gh字ij字kl";
        for width in 4..=12 {
            let chunks = wrap(line, width);
            assert!(chunks.iter().all(|chunk| chunk.len() <= width));
            assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
            assert_eq!(chunks.concat(), line);
        }
    }

    #[test]
    fn test_wrap_emits_oversized_char_whole() {
        let chunks = wrap("字字", 2);
        assert_eq!(chunks, ["字", "字"]);
    }

    #[test]
    fn test_document_max_offset() {
        let doc = Document::new((0..20).map(|i| i.to_string()).collect());
        assert_eq!(doc.max_offset(15), 5);
        let short = Document::new(vec!["a".to_string()]);
        assert_eq!(short.max_offset(15), 0);
    }
}
