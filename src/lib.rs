pub mod category;
pub mod config;
pub mod dataset;
pub mod encode;
pub mod error;
pub mod example;
pub mod logging;
pub mod run;

// Convenience re-exports
pub use category::CategoryIndex;
pub use config::{Cli, ExampleSource, RunConfig};
pub use dataset::DatasetSummary;
pub use encode::{ChannelOrder, ImageEncoder, ImageSize};
pub use error::{DatasetError, Result};
pub use example::{Example, Label};
pub use run::run;
