pub mod summary;
pub mod writer;

pub use summary::DatasetSummary;
pub use writer::{write_examples, write_examples_to_dataset_file, DatasetWriter, WriteStats};
