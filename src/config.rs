use crate::encoding::{ OutputMode, RgbCopyMode };

/// The search radius used when nothing else is specified.
pub const DEFAULT_RADIUS: u16 = 8;

/// Two alpha values further apart than this lie on opposite sides of the boundary.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Pixels with at least this alpha are inside the shape.
pub const INTERIOR_ALPHA: u8 = 128;


/// All parameters of a single distance field pass.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SdfConfig {

    /// Half the side length of the square search window.
    /// Boundaries further away than this are not found,
    /// and the pixel saturates to fully inside or fully outside.
    pub radius: u16,

    /// Maximum alpha difference between two pixels
    /// on the same side of the boundary.
    pub alpha_threshold: u8,

    pub output_mode: OutputMode,
    pub rgb_copy_mode: RgbCopyMode,
}

impl Default for SdfConfig {
    fn default() -> Self {
        SdfConfig {
            radius: DEFAULT_RADIUS,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            output_mode: OutputMode::AlphaSdf,
            rgb_copy_mode: RgbCopyMode::Passthrough,
        }
    }
}

impl SdfConfig {
    pub fn with_radius(self, radius: u16) -> Self {
        SdfConfig { radius, .. self }
    }

    pub fn with_alpha_threshold(self, alpha_threshold: u8) -> Self {
        SdfConfig { alpha_threshold, .. self }
    }

    pub fn with_output_mode(self, output_mode: OutputMode) -> Self {
        SdfConfig { output_mode, .. self }
    }

    pub fn with_rgb_copy_mode(self, rgb_copy_mode: RgbCopyMode) -> Self {
        SdfConfig { rgb_copy_mode, .. self }
    }

    /// Maps a squared pixel distance to a normalized squared distance.
    /// The farthest corner of the search window maps to `0.25`,
    /// so that normalized distances stay within `[0, 0.5]`.
    /// Infinite for a zero radius, which never finds a boundary anyway.
    #[inline]
    pub fn distance_scale(&self) -> f32 {
        let radius = self.radius as f32;
        0.125 / (radius * radius)
    }
}


/// The size of the image after resampling the distance field.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TargetDimensions {

    /// Missing sides keep the size of the source image.
    Exact { width: Option<u32>, height: Option<u32> },

    /// Multiplies both sides of the source image.
    Scale(f32),
}

impl TargetDimensions {
    pub fn half() -> Self {
        TargetDimensions::Scale(0.5)
    }

    /// Compute the output size for a source of the specified size.
    /// Scaled sides are rounded and never smaller than one pixel.
    pub fn resolve(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        match *self {
            TargetDimensions::Exact { width, height } => (
                width.unwrap_or(source_width),
                height.unwrap_or(source_height)
            ),

            TargetDimensions::Scale(factor) => {
                let scale = |side: u32| ((side as f32 * factor).round() as u32).max(1);
                (scale(source_width), scale(source_height))
            }
        }
    }
}
