pub mod encoder;
pub mod image_size;

pub use encoder::{ChannelOrder, ImageEncoder, UnreadableImage, CHANNELS};
pub use image_size::ImageSize;
