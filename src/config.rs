use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::category::DEFAULT_CATEGORIES_FILE;
use crate::encode::{ChannelOrder, ImageSize};
use crate::logging::LogLevel;

/// Creates a dataset file from a list of labelled images.
#[derive(Debug, Clone, Parser)]
#[command(name = "dataset-from-images", version)]
pub struct Cli {
    /// Each image is cropped and scaled to width x height, e.g. 224x224.
    #[arg(long = "imageSize", default_value = "224x224")]
    pub image_size: ImageSize,

    /// Save the dataset to this file.
    #[arg(long = "outputDataset", default_value = "dataset.gsdf")]
    pub output_dataset: PathBuf,

    /// Write pixel data in BGR order; pass `false` for RGB.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub bgr: bool,

    /// For a binary classification (A, not A), the class that gets label 1.0.
    #[arg(long = "positiveCategory")]
    pub positive_category: Option<String>,

    /// For a multi-class classification, the category index file.
    #[arg(long)]
    pub categories: Option<PathBuf>,

    /// File listing examples, one `LABEL PATH` per line.
    #[arg(long = "exampleList", conflicts_with = "folder")]
    pub example_list: Option<PathBuf>,

    /// Folder with one sub-folder of images per class.
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Also write a JSON summary of the run to this file.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// trace, debug, info, warn or error.
    #[arg(long = "logLevel", default_value = "info")]
    pub log_level: LogLevel,
}

/// Where the examples come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleSource {
    ListFile(PathBuf),
    Folder(PathBuf),
}

/// Everything one run needs, independent of how it was parsed.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: ExampleSource,
    pub image_size: ImageSize,
    pub channel_order: ChannelOrder,
    pub output_dataset: PathBuf,
    pub positive_category: Option<String>,
    pub categories: Option<PathBuf>,
    /// Destination of an index generated in folder mode.
    pub generated_categories: PathBuf,
    pub summary: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(source: ExampleSource) -> Self {
        RunConfig {
            source,
            image_size: ImageSize::default(),
            channel_order: ChannelOrder::Bgr,
            output_dataset: PathBuf::from("dataset.gsdf"),
            positive_category: None,
            categories: None,
            generated_categories: PathBuf::from(DEFAULT_CATEGORIES_FILE),
            summary: None,
        }
    }
}

impl Cli {
    /// `None` when neither `--exampleList` nor `--folder` was given.
    /// An empty `--positiveCategory` counts as unset.
    pub fn run_config(&self) -> Option<RunConfig> {
        let source = match (&self.example_list, &self.folder) {
            (Some(list), _) => ExampleSource::ListFile(list.clone()),
            (None, Some(folder)) => ExampleSource::Folder(folder.clone()),
            (None, None) => return None,
        };
        Some(RunConfig {
            image_size: self.image_size,
            channel_order: ChannelOrder::from_bgr_flag(self.bgr),
            output_dataset: self.output_dataset.clone(),
            positive_category: self.positive_category.clone().filter(|s| !s.is_empty()),
            categories: self.categories.clone(),
            summary: self.summary.clone(),
            ..RunConfig::new(source)
        })
    }
}
