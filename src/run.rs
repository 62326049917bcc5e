use std::time::Instant;

use tracing::{info, warn};

use crate::category::CategoryIndex;
use crate::config::{ExampleSource, RunConfig};
use crate::dataset::{write_examples_to_dataset_file, DatasetSummary};
use crate::encode::ImageEncoder;
use crate::error::Result;
use crate::example::{get_example_list_from_file, get_example_list_from_folder, Example};

/// Enumerates the examples, resolves categories and writes the dataset.
pub fn run(config: &RunConfig) -> Result<DatasetSummary> {
    let started = Instant::now();

    let supplied = match &config.categories {
        Some(path) => Some(CategoryIndex::load(path)?),
        None => None,
    };

    let (examples, categories) = collect_examples(config, supplied)?;

    let encoder = ImageEncoder::new(config.image_size, config.channel_order);
    let summary = write_examples_to_dataset_file(
        &examples,
        categories.names(),
        &encoder,
        &config.output_dataset,
    )?;

    if let Some(path) = &config.summary {
        summary.save_json(path)?;
        info!("Wrote run summary to {}", path.display());
    }

    info!("Total time to create dataset: {:.1} seconds", started.elapsed().as_secs_f64());
    Ok(summary)
}

fn collect_examples(
    config: &RunConfig,
    supplied: Option<CategoryIndex>,
) -> Result<(Vec<Example>, CategoryIndex)> {
    match &config.source {
        ExampleSource::ListFile(path) => {
            if config.positive_category.is_some() {
                warn!(
                    "--positiveCategory is ignored with --exampleList; \
                     labels are taken from the list file"
                );
            }
            let examples = get_example_list_from_file(path)?;
            Ok((examples, supplied.unwrap_or_default()))
        }
        ExampleSource::Folder(path) => {
            let found =
                get_example_list_from_folder(path, supplied, config.positive_category.as_deref())?;
            if found.generated {
                found.categories.save(&config.generated_categories)?;
                info!("Wrote class category labels to {}", config.generated_categories.display());
            }
            Ok((found.examples, found.categories))
        }
    }
}
