//! Bounded transcript window for one conversation.
//!
//! Holds the most recent turn lines in append order and evicts oldest-first
//! once the window is full. The window never interprets role tags; callers
//! format each line before appending.

use std::collections::VecDeque;

/// Maximum number of turn lines retained per conversation.
pub const TRANSCRIPT_CAPACITY: usize = 7;

/// Ordered, bounded log of turn lines, most-recent-last.
#[derive(Debug, Clone, Default)]
pub struct TranscriptWindow {
    lines: VecDeque<String>,
}

impl TranscriptWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, evicting from the front once the window exceeds
    /// [`TRANSCRIPT_CAPACITY`].
    ///
    /// Embedded line breaks are stripped before storage so the rendered
    /// prompt stays one line per turn. Always succeeds.
    pub fn append(&mut self, line: &str) {
        self.lines.push_back(line.replace(['\r', '\n'], ""));
        while self.lines.len() > TRANSCRIPT_CAPACITY {
            self.lines.pop_front();
        }
    }

    /// Join all entries in order with newline separators.
    ///
    /// This is the completion prompt body. The exact textual form matters:
    /// the backend is told to stop generating at the role-tag prefixes, so
    /// append order and eviction must stay FIFO.
    pub fn render(&self) -> String {
        let lines: Vec<&str> = self.lines.iter().map(String::as_str).collect();
        lines.join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot of the retained lines in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut window = TranscriptWindow::new();
        window.append("a");
        window.append("b");
        window.append("c");
        assert_eq!(window.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_window_bound_with_fifo_eviction() {
        let mut window = TranscriptWindow::new();
        for i in 0..20 {
            window.append(&format!("line-{i}"));
            assert!(window.len() <= TRANSCRIPT_CAPACITY);
        }
        // Retained entries are exactly the 7 most recent, in order.
        let expected: Vec<String> = (13..20).map(|i| format!("line-{i}")).collect();
        assert_eq!(window.lines(), expected);
    }

    #[test]
    fn test_append_strips_embedded_line_breaks() {
        let mut window = TranscriptWindow::new();
        window.append("one\r\ntwo\nthree\rfour");
        assert_eq!(window.lines(), vec!["onetwothreefour"]);
    }

    #[test]
    fn test_render_joins_with_newlines() {
        let mut window = TranscriptWindow::new();
        window.append("5511999999999: hello");
        window.append("ASSISTANT:");
        assert_eq!(window.render(), "5511999999999: hello\nASSISTANT:");
    }

    #[test]
    fn test_render_empty_window() {
        let window = TranscriptWindow::new();
        assert_eq!(window.render(), "");
        assert!(window.is_empty());
    }
}
