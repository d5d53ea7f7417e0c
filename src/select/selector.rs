//! Interactive selector state

use std::collections::HashSet;
use std::ops::Range;

use super::rows::{build_rows, Row};
use super::selection::Selection;

/// Input understood by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Up,
    Down,
    Toggle,
    SelectAll,
    SelectNone,
    Confirm,
    Skip,
}

/// What the owner of the selector should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// Still selecting
    Pending,
    /// Non-empty selection, in the original file order
    Confirmed(Vec<String>),
    /// Explicit skip, or confirm with nothing selected
    Skipped,
}

/// File selector over a fixed file list.
///
/// Lives for one selection sub-flow; the selection is discarded with it.
#[derive(Debug, Clone)]
pub struct FileSelector {
    files: Vec<String>,
    rows: Vec<Row>,
    selection: Selection,
    cursor: usize,
    height: usize,
}

impl FileSelector {
    /// Build a selector showing `height` rows at a time.
    ///
    /// Duplicate paths are dropped, keeping the first occurrence.
    pub fn new(files: Vec<String>, height: usize) -> Self {
        let mut seen = HashSet::new();
        let files: Vec<String> = files
            .into_iter()
            .filter(|f| seen.insert(f.clone()))
            .collect();
        let rows = build_rows(&files);

        Self {
            files,
            rows,
            selection: Selection::new(),
            cursor: 0,
            height: height.max(1),
        }
    }

    pub fn handle(&mut self, event: SelectorEvent) -> SelectorOutcome {
        match event {
            SelectorEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            SelectorEvent::Down => {
                self.cursor = (self.cursor + 1).min(self.rows.len().saturating_sub(1));
            }
            SelectorEvent::Toggle => {
                if let Some(row) = self.rows.get(self.cursor) {
                    self.selection.toggle(row);
                }
            }
            SelectorEvent::SelectAll => self.selection.select_all(&self.files),
            SelectorEvent::SelectNone => self.selection.clear(),
            SelectorEvent::Confirm => return self.confirm(),
            SelectorEvent::Skip => return SelectorOutcome::Skipped,
        }
        SelectorOutcome::Pending
    }

    fn confirm(&self) -> SelectorOutcome {
        if self.selection.is_empty() {
            SelectorOutcome::Skipped
        } else {
            SelectorOutcome::Confirmed(self.selection.ordered(&self.files))
        }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows currently in view: centered on the cursor where possible, never
    /// running past the end of the list.
    pub fn visible_range(&self) -> Range<usize> {
        let half = self.height / 2;
        let mut start = self.cursor.saturating_sub(half);
        if start + self.height > self.rows.len() {
            start = self.rows.len().saturating_sub(self.height);
        }
        let end = (start + self.height).min(self.rows.len());
        start..end
    }

    /// `"a-b of n"` when the rows do not fit in the window.
    pub fn scroll_indicator(&self) -> Option<String> {
        if self.rows.len() <= self.height {
            return None;
        }
        let range = self.visible_range();
        Some(format!(
            "{}-{} of {}",
            range.start + 1,
            range.end,
            self.rows.len()
        ))
    }

    /// `"selected/total selected"` summary line.
    pub fn summary(&self) -> String {
        format!("{}/{} selected", self.selection.len(), self.files.len())
    }
}
