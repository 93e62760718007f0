use crate::config::SdfConfig;
use crate::distance_field::{
    SignedDistanceField, DistanceStorage,
    nearest_boundary_distance_squared, normalized_signed_distance
};
use crate::source_image::{ SourceImage, RgbaBuffer, CHANNELS };
use rayon::prelude::*;


/// Which channels of the destination carry the encoded distance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {

    /// Keep the color of the source and store the distance in the alpha channel.
    AlphaSdf,

    /// Store the distance as an opaque grey value.
    DistanceColor,
}

/// How the color channels are populated in `OutputMode::AlphaSdf`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RgbCopyMode {

    /// Copy red, green and blue verbatim.
    Passthrough,

    /// Copy the red channel of the source into all three color channels.
    LuminanceBroadcast,
}


/// Shift a normalized signed distance into `[0, 1]` and quantize it to a byte.
/// Values outside of the byte range saturate instead of wrapping around,
/// so infinite distances become `0x00` or `0xFF`.
#[inline]
pub fn quantize(distance: f32) -> u8 {
    (255.0 * (distance + 0.5)).round().max(0.0).min(255.0) as u8
}

/// Encode the search result of a pixel with the specified alpha.
pub fn encode_distance(min_distance_squared: Option<u64>, own_alpha: u8, config: &SdfConfig) -> u8 {
    quantize(normalized_signed_distance(min_distance_squared, own_alpha, config.distance_scale()))
}

/// Route an encoded distance into the channels selected by the output mode.
#[inline]
pub fn encode_pixel(source: [u8; 4], encoded_distance: u8, config: &SdfConfig) -> [u8; 4] {
    let [red, green, blue, _] = source;

    match config.output_mode {
        OutputMode::DistanceColor => [encoded_distance, encoded_distance, encoded_distance, 0xff],

        OutputMode::AlphaSdf => match config.rgb_copy_mode {
            RgbCopyMode::Passthrough => [red, green, blue, encoded_distance],
            RgbCopyMode::LuminanceBroadcast => [red, red, red, encoded_distance],
        },
    }
}

/// Encode a precomputed distance field, taking the colors from the source image.
/// The source must have the same dimensions as the distance field.
pub fn encode_field<D: DistanceStorage>(
    source: &impl SourceImage, field: &SignedDistanceField<D>, config: &SdfConfig
) -> RgbaBuffer
{
    debug_assert_eq!((source.width(), source.height()), (field.width, field.height), "Field dimension mismatch");

    encode_rows(source, config, |x, y| quantize(field.get_distance(x, y)))
}

/// Compute the distance of every pixel and encode it in a single pass,
/// without storing the intermediate distance field.
pub fn compute_sdf_image(source: &impl SourceImage, config: &SdfConfig) -> RgbaBuffer {
    log::debug!(
        "encoding {}x{} image with radius {} as {:?} ({:?})",
        source.width(), source.height(), config.radius, config.output_mode, config.rgb_copy_mode
    );

    encode_rows(source, config, |x, y| {
        let min_distance_squared = nearest_boundary_distance_squared(
            source, x, y, config.radius, config.alpha_threshold
        );

        encode_distance(min_distance_squared, source.alpha(x, y), config)
    })
}

/// Every row owns a disjoint slice of the destination, so rows are encoded in parallel.
fn encode_rows<E>(source: &impl SourceImage, config: &SdfConfig, encoded_distance: E) -> RgbaBuffer
    where E: Fn(u32, u32) -> u8 + Sync
{
    let width = source.width();
    let mut destination = RgbaBuffer::new(width, source.height());

    if width > 0 {
        destination.as_bytes_mut()
            .par_chunks_mut(width as usize * CHANNELS)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                    let (x, y) = (x as u32, y as u32);
                    let encoded = encode_pixel(source.pixel(x, y), encoded_distance(x, y), config);
                    pixel.copy_from_slice(&encoded);
                }
            });
    }

    destination
}
