use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// Fatal errors. Any of these aborts the run.
///
/// Images that fail to decode are not represented here; see
/// [`crate::encode::UnreadableImage`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't parse line number {line} in {}", file.display())]
    Parse { file: PathBuf, line: usize },

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid image size '{0}', expected WIDTHxHEIGHT e.g. 224x224")]
    InvalidImageSize(String),

    #[error("failed to serialize summary to {}: {source}", path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_file_and_line() {
        let err = DatasetError::Parse {
            file: PathBuf::from("list.txt"),
            line: 3,
        };
        assert_eq!(err.to_string(), "couldn't parse line number 3 in list.txt");
    }

    #[test]
    fn io_error_names_path() {
        let err = DatasetError::io(
            "out/dataset.gsdf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("out/dataset.gsdf"));
    }
}
