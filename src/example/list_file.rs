use std::fs;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::example::example::{Example, Label};

/// Reads a list file where each line is `LABEL PATH_TO_IMAGE_FILE`, e.g.
///
/// ```text
/// 1.0 /data/squirrel1.jpg
/// -1.0 /data/bird 1.jpg
/// ```
///
/// Blank lines are skipped. The path may contain spaces; only the first run
/// of whitespace separates it from the label.
pub fn get_example_list_from_file(file_name: &Path) -> Result<Vec<Example>> {
    let text = fs::read_to_string(file_name).map_err(|e| DatasetError::io(file_name, e))?;
    parse_example_list(&text, file_name)
}

/// Parses list-file contents. `file_name` is only used for error reporting.
pub fn parse_example_list(text: &str, file_name: &Path) -> Result<Vec<Example>> {
    let mut examples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line = line.replace('\t', " ");
        let (label, image_name) = match line.split_once(' ') {
            Some((label, rest)) if !rest.trim().is_empty() => (label, rest.trim()),
            _ => {
                return Err(DatasetError::Parse {
                    file: file_name.to_path_buf(),
                    line: idx + 1,
                })
            }
        };

        examples.push(Example::new(Label::Raw(label.to_owned()), image_name, label));
    }

    Ok(examples)
}
