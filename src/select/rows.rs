//! Row construction

use std::collections::BTreeMap;

/// One line of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A top-level directory grouping every path underneath it
    Directory { name: String, children: Vec<String> },
    /// A single file; `depth` is 1 under a directory row, 0 at the root
    File {
        name: String,
        full_path: String,
        depth: usize,
    },
}

impl Row {
    /// Paths whose selection this row controls.
    pub fn paths(&self) -> &[String] {
        match self {
            Row::Directory { children, .. } => children,
            Row::File { full_path, .. } => std::slice::from_ref(full_path),
        }
    }
}

/// Group relative paths into rows.
///
/// Directories come first in lexicographic order, each followed directly by
/// its children (sorted, depth 1, named relative to the directory). Root-level
/// files follow, sorted, at depth 0. Every input path appears in exactly one
/// file row.
pub fn build_rows(files: &[String]) -> Vec<Row> {
    let mut root_files: Vec<&String> = Vec::new();
    let mut dirs: BTreeMap<&str, Vec<&String>> = BTreeMap::new();

    for file in files {
        match file.split_once('/') {
            Some((dir, _)) => dirs.entry(dir).or_default().push(file),
            None => root_files.push(file),
        }
    }

    let mut rows = Vec::with_capacity(files.len() + dirs.len());

    for (dir, mut children) in dirs {
        children.sort();
        rows.push(Row::Directory {
            name: dir.to_string(),
            children: children.iter().map(|c| c.to_string()).collect(),
        });
        for child in children {
            rows.push(Row::File {
                name: child[dir.len() + 1..].to_string(),
                full_path: child.clone(),
                depth: 1,
            });
        }
    }

    root_files.sort();
    rows.extend(root_files.into_iter().map(|file| Row::File {
        name: file.clone(),
        full_path: file.clone(),
        depth: 0,
    }));

    rows
}
