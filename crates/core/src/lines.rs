//! Character offset ↔ line index addressing over the rendered document.
//!
//! Offsets count Unicode scalar values, not bytes, and every line is
//! followed by one terminator in the rendered text. Terminator positions
//! belong to no line.

use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn platform() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    pub fn width(&self) -> usize {
        self.as_str().len()
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        Self::platform()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    start: usize,
    len: usize,
}

impl Line {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.span().contains(&offset)
    }
}

/// A hit returned by [`LineTable::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub offset: usize,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    lines: Vec<Line>,
    terminator: LineTerminator,
}

impl LineTable {
    pub fn new(lines: Vec<String>, terminator: LineTerminator) -> Self {
        let mut start = 0;
        let lines = lines
            .into_iter()
            .map(|text| {
                let len = text.chars().count();
                let line = Line { text, start, len };
                start += len + terminator.width();
                line
            })
            .collect();

        Self { lines, terminator }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn terminator(&self) -> LineTerminator {
        self.terminator
    }

    /// Length of the rendered document in characters.
    pub fn text_len(&self) -> usize {
        self.lines
            .last()
            .map_or(0, |line| line.start + line.len + self.terminator.width())
    }

    /// Index of the line containing `offset`, found by binary search over
    /// the line starts.
    pub fn line_index_for_offset(&self, offset: usize) -> Option<usize> {
        let candidate = self
            .lines
            .partition_point(|line| line.start <= offset)
            .checked_sub(1)?;
        self.lines[candidate].contains(offset).then_some(candidate)
    }

    pub fn offset_for_line_index(&self, line_index: usize) -> Option<usize> {
        self.lines.get(line_index).map(Line::start)
    }

    pub fn line_text(&self, line_index: usize) -> Option<&str> {
        self.lines.get(line_index).map(Line::text)
    }

    pub fn line_length(&self, line_index: usize) -> Option<usize> {
        self.lines.get(line_index).map(Line::len)
    }

    pub fn line_span(&self, line_index: usize) -> Option<Range<usize>> {
        self.lines.get(line_index).map(Line::span)
    }

    /// Widens a caret at `offset` to the whole line under it.
    pub fn snap_to_line(&self, offset: usize) -> Option<Range<usize>> {
        self.line_span(self.line_index_for_offset(offset)?)
    }

    /// Every line followed by the terminator.
    pub fn render(&self) -> String {
        let terminator = self.terminator.as_str();
        let capacity = self
            .lines
            .iter()
            .map(|line| line.text.len() + terminator.len())
            .sum();

        let mut content = String::with_capacity(capacity);
        for line in &self.lines {
            content.push_str(&line.text);
            content.push_str(terminator);
        }
        content
    }

    /// First occurrence of `needle` starting at or after `from`.
    ///
    /// Matches are confined to a single line.
    pub fn find(&self, needle: &str, from: usize) -> Option<Match> {
        if needle.is_empty() {
            return None;
        }

        let first = self.lines.partition_point(|line| line.start + line.len <= from);

        for (index, line) in self.lines.iter().enumerate().skip(first) {
            let skip = from.saturating_sub(line.start);
            let Some((byte_start, _)) = line.text.char_indices().nth(skip) else {
                continue;
            };

            let haystack = &line.text[byte_start..];
            if let Some(byte_pos) = haystack.find(needle) {
                let chars_before = haystack[..byte_pos].chars().count();
                return Some(Match {
                    offset: line.start + skip + chars_before,
                    line: index,
                });
            }
        }

        None
    }
}
