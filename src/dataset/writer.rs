use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::dataset::summary::DatasetSummary;
use crate::encode::ImageEncoder;
use crate::error::{DatasetError, Result};
use crate::example::Example;

// ---------------------------------------------------------------------------
// Row-level writer
// ---------------------------------------------------------------------------

/// Serializes the dataset text format:
///
/// ```text
/// # Category labels
/// # 0 : cat
/// # 1 : dog
/// 0	12	40	255	...	# class=cat, source=data/cat/1.png
/// ```
pub struct DatasetWriter<W: Write> {
    out: W,
}

impl<W: Write> DatasetWriter<W> {
    pub fn new(out: W) -> Self {
        DatasetWriter { out }
    }

    /// Writes the comment block listing the category index. Nothing is
    /// written for an empty list.
    pub fn write_header(&mut self, categories: &[String]) -> io::Result<()> {
        if categories.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "# Category labels")?;
        for (i, category) in categories.iter().enumerate() {
            writeln!(self.out, "# {} : {}", i, category)?;
        }
        Ok(())
    }

    /// Writes one row and returns the number of feature values written.
    pub fn write_row(&mut self, example: &Example, values: &[u8]) -> io::Result<usize> {
        write!(self.out, "{}", example.label)?;
        for value in values {
            write!(self.out, "\t{}", value)?;
        }
        writeln!(
            self.out,
            "\t# class={}, source={}",
            example.raw_class_name,
            example.image_path.display()
        )?;
        Ok(values.len())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

// ---------------------------------------------------------------------------
// Full pass
// ---------------------------------------------------------------------------

/// Counts from one pass over the examples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteStats {
    pub rows_written: usize,
    pub skipped: Vec<PathBuf>,
}

/// Encodes every example and writes header plus rows to `out`.
///
/// Images that fail to decode are logged and skipped. Write failures are
/// fatal and reported against `output`.
pub fn write_examples<W: Write>(
    examples: &[Example],
    categories: &[String],
    encoder: &ImageEncoder,
    out: W,
    output: &Path,
) -> Result<WriteStats> {
    let io_err = |e: io::Error| DatasetError::io(output, e);
    let mut writer = DatasetWriter::new(out);
    let mut stats = WriteStats::default();

    writer.write_header(categories).map_err(io_err)?;

    for example in examples {
        let values = match encoder.encode_file(&example.image_path) {
            Ok(v) => v,
            Err(e) => {
                warn!("Skipping {}, could not open as an image", example.image_path.display());
                debug!("{}", e);
                stats.skipped.push(example.image_path.clone());
                continue;
            }
        };

        info!("Processing {} | {}", example.label, example.image_path.display());
        let written = writer.write_row(example, &values).map_err(io_err)?;
        info!("    Wrote {} data values", written);
        stats.rows_written += 1;
    }

    writer.finish().map_err(io_err)?;
    Ok(stats)
}

/// Creates `output_dataset` and writes the whole dataset into it.
pub fn write_examples_to_dataset_file(
    examples: &[Example],
    categories: &[String],
    encoder: &ImageEncoder,
    output_dataset: &Path,
) -> Result<DatasetSummary> {
    info!(
        "Processing {} examples, using image size {}, order={:?}",
        examples.len(),
        encoder.size,
        encoder.order
    );
    let started = Instant::now();

    let file = File::create(output_dataset).map_err(|e| DatasetError::io(output_dataset, e))?;
    let out = BufWriter::new(file);
    let stats = write_examples(examples, categories, encoder, out, output_dataset)?;

    let elapsed_secs = started.elapsed().as_secs_f64();
    info!(
        "Wrote {} examples to {} ({} skipped) in {:.1}s",
        stats.rows_written,
        output_dataset.display(),
        stats.skipped.len(),
        elapsed_secs
    );

    Ok(DatasetSummary {
        output: output_dataset.to_path_buf(),
        image_size: encoder.size,
        channel_order: encoder.order,
        values_per_row: encoder.feature_len(),
        categories: categories.to_vec(),
        examples_seen: examples.len(),
        rows_written: stats.rows_written,
        skipped: stats.skipped,
        elapsed_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{ChannelOrder, ImageSize};
    use crate::example::Label;
    use image::{Rgb, RgbImage};

    #[test]
    fn header_lists_categories_in_index_order() {
        let mut writer = DatasetWriter::new(Vec::new());
        writer.write_header(&["cat".to_owned(), "dog".to_owned()]).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(text, "# Category labels\n# 0 : cat\n# 1 : dog\n");
    }

    #[test]
    fn empty_category_list_writes_no_header() {
        let mut writer = DatasetWriter::new(Vec::new());
        writer.write_header(&[]).unwrap();
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn row_layout() {
        let example = Example::new(Label::Binary(-1.0), "data/dog/a.png", "dog");
        let mut writer = DatasetWriter::new(Vec::new());
        assert_eq!(writer.write_row(&example, &[1, 2, 255]).unwrap(), 3);
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(text, "-1.0\t1\t2\t255\t# class=dog, source=data/dog/a.png\n");
    }

    #[test]
    fn unreadable_images_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("good.png");
        let bad = tmp.path().join("bad.png");
        RgbImage::from_pixel(6, 4, Rgb([9, 8, 7])).save(&good).unwrap();
        std::fs::write(&bad, b"garbage").unwrap();

        let examples = vec![
            Example::new(Label::Class(0), &bad, "a"),
            Example::new(Label::Class(1), &good, "b"),
        ];
        let encoder = ImageEncoder::new(ImageSize::new(2, 2), ChannelOrder::Bgr);
        let mut out = Vec::new();
        let stats =
            write_examples(&examples, &[], &encoder, &mut out, Path::new("mem")).unwrap();

        assert_eq!(stats.rows_written, 1);
        assert_eq!(stats.skipped, vec![bad]);
        let text = String::from_utf8(out).unwrap();
        let fields: Vec<&str> = text.trim_end().split('\t').collect();
        assert_eq!(fields[0], "1");
        assert_eq!(fields.len(), 1 + 2 * 2 * 3 + 1);
        assert!(fields.last().unwrap().starts_with("# class=b"));
    }
}
