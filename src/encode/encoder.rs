//! Image preprocessing for dataset rows.
//!
//! Images are decoded with the `image` crate, center-cropped to a square,
//! resized to the target size and flattened pixel by pixel in the requested
//! channel order. Values keep their native 0–255 range.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::io::Reader;
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::image_size::ImageSize;

/// Samples per pixel in every feature vector.
pub const CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Bgr,
    Rgb,
}

impl ChannelOrder {
    pub fn from_bgr_flag(bgr: bool) -> Self {
        if bgr {
            ChannelOrder::Bgr
        } else {
            ChannelOrder::Rgb
        }
    }
}

/// An image that could not be decoded. Recoverable: the example is skipped.
#[derive(Debug, Error)]
#[error("could not open {} as an image: {reason}", path.display())]
pub struct UnreadableImage {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageEncoder {
    pub size: ImageSize,
    pub order: ChannelOrder,
}

impl ImageEncoder {
    pub fn new(size: ImageSize, order: ChannelOrder) -> Self {
        ImageEncoder { size, order }
    }

    /// Length of every vector this encoder produces.
    pub fn feature_len(&self) -> usize {
        self.size.pixels() * CHANNELS
    }

    /// Decodes the file at `path` and encodes it. The format is sniffed
    /// from the file contents, not the extension.
    pub fn encode_file(&self, path: &Path) -> Result<Vec<u8>, UnreadableImage> {
        let unreadable = |reason: String| UnreadableImage {
            path: path.to_path_buf(),
            reason,
        };
        let img = Reader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| unreadable(e.to_string()))?
            .decode()
            .map_err(|e| unreadable(e.to_string()))?;
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Err(unreadable("image has no pixels".to_owned()));
        }
        Ok(self.encode_image(&img))
    }

    /// Crops the largest centered square, resizes to exactly
    /// `width × height` and flattens row-major, one `CHANNELS`-tuple per pixel.
    ///
    /// Returns a `Vec<u8>` of length `feature_len()`.
    pub fn encode_image(&self, img: &DynamicImage) -> Vec<u8> {
        let square = center_square(img);
        let resized = square.resize_exact(self.size.width, self.size.height, FilterType::Triangle);
        let rgb = resized.to_rgb8();

        let mut out = Vec::with_capacity(self.feature_len());
        for p in rgb.pixels() {
            let [r, g, b] = p.0;
            match self.order {
                ChannelOrder::Bgr => out.extend_from_slice(&[b, g, r]),
                ChannelOrder::Rgb => out.extend_from_slice(&[r, g, b]),
            }
        }
        out
    }
}

fn center_square(img: &DynamicImage) -> DynamicImage {
    let (w, h) = img.dimensions();
    if w == h {
        return img.clone();
    }
    let side = w.min(h);
    img.crop_imm((w - side) / 2, (h - side) / 2, side, side)
}
