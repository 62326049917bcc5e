use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::{ChannelOrder, ImageSize};
use crate::error::{DatasetError, Result};

/// What a run produced. Saved next to the dataset with `--summary`, so a
/// training job can check the row layout without re-reading the images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub output: PathBuf,
    pub image_size: ImageSize,
    pub channel_order: ChannelOrder,
    /// Feature values in every row (width * height * channels).
    pub values_per_row: usize,
    /// Category names in index order; empty when no index was used.
    #[serde(default)]
    pub categories: Vec<String>,
    pub examples_seen: usize,
    pub rows_written: usize,
    /// Images that could not be decoded and were left out.
    #[serde(default)]
    pub skipped: Vec<PathBuf>,
    pub elapsed_secs: f64,
}

impl DatasetSummary {
    /// Serializes the summary to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            if source.is_io() {
                DatasetError::io(path, source.into())
            } else {
                DatasetError::Summary {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        writer.flush().map_err(|e| DatasetError::io(path, e))
    }

    pub fn load_json(path: &Path) -> Result<DatasetSummary> {
        let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| {
            DatasetError::Summary {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_lowercase_channel_order() {
        let summary = DatasetSummary {
            output: PathBuf::from("dataset.gsdf"),
            image_size: ImageSize::new(4, 4),
            channel_order: ChannelOrder::Bgr,
            values_per_row: 48,
            categories: vec!["cat".into(), "dog".into()],
            examples_seen: 6,
            rows_written: 5,
            skipped: vec![PathBuf::from("dog/bad.png")],
            elapsed_secs: 0.25,
        };

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("summary.json");
        summary.save_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"channel_order\": \"bgr\""));
        assert_eq!(DatasetSummary::load_json(&path).unwrap(), summary);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_flush_is_an_io_error() {
        let summary = DatasetSummary {
            output: PathBuf::from("dataset.gsdf"),
            image_size: ImageSize::new(2, 2),
            channel_order: ChannelOrder::Rgb,
            values_per_row: 12,
            categories: Vec::new(),
            examples_seen: 0,
            rows_written: 0,
            skipped: Vec::new(),
            elapsed_secs: 0.0,
        };
        // Every write to /dev/full fails with ENOSPC.
        let err = summary.save_json(Path::new("/dev/full")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }), "{err}");
    }
}
