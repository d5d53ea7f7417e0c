//! Selection set

use std::collections::HashSet;

use super::rows::Row;

/// Display state of a directory row, always derived from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    All,
    Partial,
    Unselected,
}

impl DirState {
    pub fn checkbox(self) -> &'static str {
        match self {
            DirState::All => "[x]",
            DirState::Partial => "[-]",
            DirState::Unselected => "[ ]",
        }
    }
}

/// Set of selected full relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Flip a file row; for a directory row, deselect every child if all are
    /// selected, otherwise select every child.
    pub fn toggle(&mut self, row: &Row) {
        match row {
            Row::File { full_path, .. } => {
                if !self.paths.remove(full_path) {
                    self.paths.insert(full_path.clone());
                }
            }
            Row::Directory { children, .. } => {
                if self.dir_state(children) == DirState::All {
                    for child in children {
                        self.paths.remove(child);
                    }
                } else {
                    self.paths.extend(children.iter().cloned());
                }
            }
        }
    }

    pub fn select_all<'a>(&mut self, files: impl IntoIterator<Item = &'a String>) {
        self.paths = files.into_iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn dir_state(&self, children: &[String]) -> DirState {
        let count = children.iter().filter(|c| self.paths.contains(*c)).count();
        if count == children.len() {
            DirState::All
        } else if count > 0 {
            DirState::Partial
        } else {
            DirState::Unselected
        }
    }

    /// Selected members of `files`, in the order given.
    pub fn ordered<'a>(&self, files: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        files
            .into_iter()
            .filter(|f| self.paths.contains(*f))
            .cloned()
            .collect()
    }
}
