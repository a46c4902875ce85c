// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Forward-only line stream with single-line pushback.
//!
//! The rewriter never seeks: every decision is made from the current line
//! plus at most one line of lookahead, which is handed back through
//! [`LineStream::push_back`] when it turns out to belong to the next step.

use std::io::{self, BufRead};

/// Line reader over a buffered source with a one-line pushback slot.
#[derive(Debug)]
pub struct LineStream<R> {
    reader: R,
    pending: Option<String>,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Next line without its trailing newline, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Hand back a line consumed by lookahead; the next [`Self::next_line`]
    /// yields it again. At most one line may be pending at a time.
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.pending.is_none(), "single-line pushback only");
        self.pending = Some(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(text: &str) -> LineStream<&[u8]> {
        LineStream::new(text.as_bytes())
    }

    #[test]
    fn yields_lines_without_newlines() {
        let mut lines = stream("first\nsecond\n");
        assert_eq!(lines.next_line().expect("read"), Some("first".to_string()));
        assert_eq!(lines.next_line().expect("read"), Some("second".to_string()));
        assert_eq!(lines.next_line().expect("read"), None);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let mut lines = stream("only");
        assert_eq!(lines.next_line().expect("read"), Some("only".to_string()));
        assert_eq!(lines.next_line().expect("read"), None);
    }

    #[test]
    fn empty_lines_survive() {
        let mut lines = stream("a\n\nb\n");
        assert_eq!(lines.next_line().expect("read"), Some("a".to_string()));
        assert_eq!(lines.next_line().expect("read"), Some(String::new()));
        assert_eq!(lines.next_line().expect("read"), Some("b".to_string()));
    }

    #[test]
    fn pushback_is_returned_before_the_source() {
        let mut lines = stream("a\nb\n");
        let first = lines.next_line().expect("read").expect("line");
        lines.push_back(first);
        assert_eq!(lines.next_line().expect("read"), Some("a".to_string()));
        assert_eq!(lines.next_line().expect("read"), Some("b".to_string()));
        assert_eq!(lines.next_line().expect("read"), None);
    }
}
