use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::category::CategoryIndex;
use crate::error::{DatasetError, Result};
use crate::example::example::{Example, Label};

/// Result of walking a class-per-subfolder tree.
#[derive(Debug, Clone)]
pub struct FolderExamples {
    pub examples: Vec<Example>,
    pub categories: CategoryIndex,
    /// `true` when the index was built from scratch during the walk and
    /// should be persisted.
    pub generated: bool,
}

/// Walks `folder_name` looking for subfolders of images. Images in each
/// subfolder belong to the class named by the subfolder.
///
/// With `positive_category` set, labels are binary (`1.0` / `-1.0`).
/// Otherwise each subfolder name is resolved through `categories`; when no
/// index is supplied one is built in discovery order.
///
/// Subfolders and files are visited in name order. An empty
/// `positive_category` is treated as absent.
pub fn get_example_list_from_folder(
    folder_name: &Path,
    categories: Option<CategoryIndex>,
    positive_category: Option<&str>,
) -> Result<FolderExamples> {
    let positive_category = positive_category.filter(|p| !p.is_empty());
    let generated = categories.is_none() && positive_category.is_none();
    let mut categories = categories.unwrap_or_default();
    let mut examples = Vec::new();

    for (class_name, class_dir) in sorted_entries(folder_name, EntryKind::Dir)? {
        let label = match positive_category {
            Some(positive) => Label::binary(&class_name, positive),
            None => Label::Class(categories.get_or_insert(&class_name)),
        };

        for (_, image_path) in sorted_entries(&class_dir, EntryKind::File)? {
            examples.push(Example::new(label.clone(), image_path, class_name.as_str()));
        }
    }

    Ok(FolderExamples {
        examples,
        categories,
        generated,
    })
}

#[derive(Clone, Copy, PartialEq)]
enum EntryKind {
    Dir,
    File,
}

/// Immediate children of `dir` of the given kind, sorted by name.
/// Symlinks are followed.
fn sorted_entries(dir: &Path, kind: EntryKind) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))? {
        let entry = entry.map_err(|e| DatasetError::io(dir, e))?;
        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            // Dangling symlink.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Skipping {}, target does not exist", path.display());
                continue;
            }
            Err(e) => return Err(DatasetError::io(&path, e)),
        };
        let keep = match kind {
            EntryKind::Dir => meta.is_dir(),
            EntryKind::File => meta.is_file(),
        };
        if keep {
            entries.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}
