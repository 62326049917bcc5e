use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Target spatial size every image is normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        ImageSize { width, height }
    }

    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::new(224, 224)
    }
}

/// Parses `"640x480"` into width 640, height 480.
impl FromStr for ImageSize {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DatasetError::InvalidImageSize(s.to_owned());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(ImageSize { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_by_height() {
        assert_eq!("640x480".parse::<ImageSize>().unwrap(), ImageSize::new(640, 480));
        assert_eq!("4X4".parse::<ImageSize>().unwrap(), ImageSize::new(4, 4));
        assert_eq!(ImageSize::default().to_string(), "224x224");
    }

    #[test]
    fn rejects_malformed_sizes() {
        for bad in ["", "224", "x224", "224x", "0x10", "10x0", "-1x5", "axb", "1x2x3"] {
            assert!(
                matches!(bad.parse::<ImageSize>(), Err(DatasetError::InvalidImageSize(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
