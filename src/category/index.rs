use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DatasetError, Result};

/// File name a newly generated index is written to.
pub const DEFAULT_CATEGORIES_FILE: &str = "categories.txt";

/// Ordered mapping from class name to a stable integer index.
///
/// Indices are assigned in insertion order starting at 0 and are never
/// reused or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    names: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an index file: one class name per line, line position is the
    /// index. When a name appears twice the first occurrence wins.
    pub fn load(path: &Path) -> Result<CategoryIndex> {
        let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        Ok(Self::from_lines(&text))
    }

    fn from_lines(text: &str) -> CategoryIndex {
        let mut index = CategoryIndex::new();
        for name in text.lines() {
            index.get_or_insert(name);
        }
        index
    }

    /// Returns the index of `name`, assigning the next free index if the
    /// name has not been seen before.
    pub fn get_or_insert(&mut self, name: &str) -> usize {
        if let Some(&i) = self.lookup.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned(), i);
        i
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// Class names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Writes one name per line in index order.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path).map_err(|e| DatasetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for name in &self.names {
            writeln!(writer, "{}", name).map_err(|e| DatasetError::io(path, e))?;
        }
        writer.flush().map_err(|e| DatasetError::io(path, e))
    }
}
