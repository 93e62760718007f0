//! Reading, resizing and writing images with the `image` crate.

use crate::config::TargetDimensions;
use crate::error::SdfError;
use crate::source_image::RgbaBuffer;
use image::imageops::{ self, FilterType };
use image::{ ImageFormat, RgbaImage };
use std::path::Path;
use std::str::FromStr;


/// The interpolation used when resizing a finished distance field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl Default for ResampleFilter {
    fn default() -> Self {
        ResampleFilter::Triangle
    }
}

impl ResampleFilter {
    pub const NAMES: [&'static str; 5] = ["nearest", "triangle", "catmull-rom", "gaussian", "lanczos3"];

    fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, String> {
        match name {
            "nearest" => Ok(ResampleFilter::Nearest),
            "triangle" => Ok(ResampleFilter::Triangle),
            "catmull-rom" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            "lanczos3" => Ok(ResampleFilter::Lanczos3),
            other => Err(format!("unknown filter `{}`, expected one of {}", other, Self::NAMES.join(", "))),
        }
    }
}


/// Resize the buffer to the target dimensions.
/// The buffer is returned unchanged if it already has the target size.
pub fn resample(buffer: RgbaBuffer, target: TargetDimensions, filter: ResampleFilter) -> Result<RgbaBuffer, SdfError> {
    let (width, height) = target.resolve(buffer.width(), buffer.height());

    if width == 0 || height == 0 {
        return Err(SdfError::EmptyTarget { width, height });
    }

    if (width, height) == (buffer.width(), buffer.height()) {
        return Ok(buffer);
    }

    log::trace!(
        "resampling {}x{} to {}x{} with {:?}",
        buffer.width(), buffer.height(), width, height, filter
    );

    let image = RgbaImage::from(buffer);
    let resized = imageops::resize(&image, width, height, filter.filter_type());
    Ok(RgbaBuffer::from(resized))
}

/// Decode an image file, converting it to 8-bit RGBA.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaBuffer, SdfError> {
    let image = image::open(path)?.to_rgba8();
    Ok(RgbaBuffer::from(image))
}

/// Encode the buffer as PNG, whatever the extension of the path.
pub fn save_image(path: impl AsRef<Path>, buffer: RgbaBuffer) -> Result<(), SdfError> {
    RgbaImage::from(buffer).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
