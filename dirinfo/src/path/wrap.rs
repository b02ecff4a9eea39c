//! Line wrapping for long paths.
//!
//! A path that does not fit in the output width is rendered over several
//! lines, breaking only at separators. Lines are filled greedily: a segment
//! joins the current line as long as the line stays shorter than the width,
//! otherwise it starts a new one. A segment longer than the width is never
//! split; it sits alone on its own line. The leading `/` of a root-slash path
//! does not count toward the running length.
//!
//! The rendered block is framed by a blank line before and after it.
//!
//! # Examples
//!
//! ```
//! use dirinfo::path::{wrap_path, PathDialect};
//!
//! let lines: Vec<String> = wrap_path("/aaaa/bbbb/cccc", PathDialect::RootSlash, 10)
//!     .map(|line| line.to_string())
//!     .collect();
//! assert_eq!(lines, ["", "/aaaa/", "bbbb/", "cccc", ""]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::Split;

use crate::path::PathDialect;

/// One rendered output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLine(String);

impl DisplayLine {
    fn blank() -> Self {
        Self::default()
    }

    /// The text of the line, without a line break.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the line in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether this is a framing blank line.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Alias of [`DisplayLine::is_blank`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_blank()
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Leading,
    Whole,
    Segments,
    Trailing,
    Done,
}

/// Lazy sequence of display lines for one path.
///
/// Created by [`wrap_path`]. The sequence is finite and cannot be restarted.
#[derive(Debug, Clone)]
pub struct PathLines<'a> {
    path: &'a str,
    dialect: PathDialect,
    width: usize,
    segments: Split<'a, char>,
    line: String,
    line_len: usize,
    state: State,
}

/// Render `path` as display lines no wider than `width`.
///
/// A `width` of zero is treated as one.
#[must_use]
pub fn wrap_path(path: &str, dialect: PathDialect, width: usize) -> PathLines<'_> {
    let root = dialect.line_root();
    PathLines {
        path,
        dialect,
        width: width.max(1),
        segments: path.split(dialect.separator()),
        line: root.to_string(),
        line_len: 0,
        state: State::Leading,
    }
}

impl<'a> PathLines<'a> {
    fn next_segment(&mut self) -> Option<&'a str> {
        self.segments.by_ref().find(|segment| !segment.is_empty())
    }

    fn line_is_open(&self) -> bool {
        self.line.is_empty() || self.line == self.dialect.line_root()
    }

    fn push_segment(&mut self, segment: &str, segment_len: usize) {
        self.line.push_str(segment);
        self.line.push(self.dialect.separator());
        self.line_len += segment_len + 1;
    }

    fn fill_line(&mut self) -> DisplayLine {
        let separator = self.dialect.separator();
        while let Some(segment) = self.next_segment() {
            let segment_len = segment.chars().count();
            let prospective = self.line_len + segment_len + 1;

            if self.line_is_open() || prospective < self.width {
                self.push_segment(segment, segment_len);
                continue;
            }

            let mut next_line = String::with_capacity(segment.len() + 1);
            next_line.push_str(segment);
            next_line.push(separator);
            let completed = std::mem::replace(&mut self.line, next_line);
            self.line_len = segment_len + 1;
            return DisplayLine(completed);
        }

        self.state = State::Trailing;
        let last = self.line.trim_end_matches(separator);
        if last.is_empty() {
            // Only separators: fall back to the root marker.
            let root = self.dialect.line_root();
            let fallback = if root.is_empty() { self.path } else { root };
            DisplayLine(fallback.to_string())
        } else {
            DisplayLine(last.to_string())
        }
    }
}

impl Iterator for PathLines<'_> {
    type Item = DisplayLine;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Leading => {
                self.state = if self.path.chars().count() < self.width {
                    State::Whole
                } else {
                    State::Segments
                };
                Some(DisplayLine::blank())
            }
            State::Whole => {
                self.state = State::Trailing;
                Some(DisplayLine(self.path.to_string()))
            }
            State::Segments => Some(self.fill_line()),
            State::Trailing => {
                self.state = State::Done;
                Some(DisplayLine::blank())
            }
            State::Done => None,
        }
    }
}

impl FusedIterator for PathLines<'_> {}
