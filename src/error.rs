use thiserror::Error;

/// Errors raised around the distance field computation.
/// The search and the encoding themselves cannot fail.
#[derive(Debug, Error)]
pub enum SdfError {

    /// A pixel buffer does not hold `width * height * 4` bytes.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// A resize was requested with a zero width or height.
    #[error("cannot resample to an empty image of {width}x{height} pixels")]
    EmptyTarget { width: u32, height: u32 },

    #[cfg(feature = "image_io")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
