//! This crate converts the alpha mask of an RGBA image
//! into a signed distance field of the mask boundary,
//! which can be scaled up or down without aliasing the edges.
//! Every pixel searches a square window of a fixed radius
//! for the nearest pixel on the other side of the boundary.
//! Pixels without a boundary in their window saturate.

pub mod source_image;
pub mod distance_field;
pub mod encoding;
pub mod config;
pub mod error;

#[cfg(feature = "image_io")]
pub mod resample;

pub use encoding::{ compute_sdf_image, encode_field };

pub mod prelude {
    pub use crate::{
        compute_distance_field,
        compute_f16_distance_field,
        compute_f32_distance_field,
        compute_sdf_image, encode_field,
    };

    pub use crate::source_image::{
        SourceImage, RgbaByteImage, RgbaBuffer
    };

    pub use crate::distance_field::{
        SignedDistanceField, DistanceStorage,
        F16DistanceStorage, F32DistanceStorage
    };

    pub use crate::encoding::{ OutputMode, RgbCopyMode };

    pub use crate::config::{ SdfConfig, TargetDimensions };
    pub use crate::error::SdfError;

    #[cfg(feature = "image_io")]
    pub use crate::resample::{ ResampleFilter, resample, load_rgba, save_image };
}


use prelude::*;

/// Compute the signed distance field with the specified distance storage of the specified image.
pub fn compute_distance_field<D: DistanceStorage>(image: &impl SourceImage, config: &SdfConfig) -> SignedDistanceField<D> {
    SignedDistanceField::compute(image, config)
}

/// Compute the signed distance field with an `f16` distance storage of the specified image.
pub fn compute_f16_distance_field(image: &impl SourceImage, config: &SdfConfig) -> SignedDistanceField<F16DistanceStorage> {
    compute_distance_field(image, config)
}

/// Compute the signed distance field with an `f32` distance storage of the specified image.
pub fn compute_f32_distance_field(image: &impl SourceImage, config: &SdfConfig) -> SignedDistanceField<F32DistanceStorage> {
    compute_distance_field(image, config)
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn is_inside_rectangle(left: u32, top: u32, width: u32, height: u32) -> impl Fn(u32, u32) -> bool {
        move |x, y| x >= left && x < left + width && y >= top && y < top + height
    }

    fn is_inside_circle(center_x: u32, center_y: u32, radius: u32) -> impl Fn(u32, u32) -> bool {
        move |x, y|{
            let x = x as f32 - center_x as f32;
            let y = y as f32 - center_y as f32;
            (x * x + y * y).sqrt() < radius as f32
        }
    }

    /// A colorful image, opaque inside the shape and transparent outside.
    fn masked_image(width: u32, height: u32, shape: impl Fn(u32, u32) -> bool) -> RgbaBuffer {
        RgbaBuffer::from_fn(width, height, |x, y| [
            (x * 7) as u8, (y * 5) as u8, (x + y) as u8,
            if shape(x, y) { 255 } else { 0 }
        ])
    }

    fn alpha_channel(image: &RgbaBuffer) -> Vec<u8> {
        image.as_bytes().chunks(4).map(|pixel| pixel[3]).collect()
    }

    #[test]
    pub fn centered_square(){
        let image = masked_image(32, 32, is_inside_rectangle(8, 8, 16, 16));
        let sdf = compute_sdf_image(&image, &SdfConfig::default());

        // edge rows of the square and the pixels just outside
        assert_eq!(sdf.pixel(15, 8)[3], 139);
        assert_eq!(sdf.pixel(15, 7)[3], 116);
        assert_eq!(sdf.pixel(8, 15)[3], 139);
        assert_eq!(sdf.pixel(7, 15)[3], 116);

        // the center is exactly eight pixels away from the outside
        assert_eq!(sdf.pixel(15, 15)[3], 218);

        assert_eq!(sdf.pixel(0, 0)[3], 0x00);
        assert_eq!(sdf.pixel(31, 31)[3], 0x00);

        // colors are passed through
        assert_eq!(&sdf.pixel(20, 3)[.. 3], &image.pixel(20, 3)[.. 3]);
    }

    #[test]
    pub fn deep_pixels_saturate(){
        let image = masked_image(64, 64, is_inside_rectangle(12, 12, 40, 40));
        let sdf = compute_sdf_image(&image, &SdfConfig::default());

        assert_eq!(sdf.pixel(32, 32)[3], 0xff);
        assert_eq!(sdf.pixel(21, 21)[3], 0xff);
        assert_eq!(sdf.pixel(19, 32)[3], 218);

        // further than the window reaches, even along the diagonal
        assert_eq!(sdf.pixel(0, 0)[3], 0x00);
        assert_eq!(sdf.pixel(3, 32)[3], 0x00);
    }

    #[test]
    pub fn uniform_images_saturate(){
        let opaque = masked_image(20, 10, |_, _| true);
        let transparent = masked_image(20, 10, |_, _| false);
        let config = SdfConfig::default();

        assert!(alpha_channel(&compute_sdf_image(&opaque, &config)).iter().all(|&alpha| alpha == 0xff));
        assert!(alpha_channel(&compute_sdf_image(&transparent, &config)).iter().all(|&alpha| alpha == 0x00));
    }

    #[test]
    pub fn zero_radius_saturates_everything(){
        let image = masked_image(24, 24, is_inside_circle(12, 12, 7));
        let sdf = compute_sdf_image(&image, &SdfConfig::default().with_radius(0));

        for y in 0 .. 24 {
            for x in 0 .. 24 {
                let expected = if image.pixel(x, y)[3] >= 128 { 0xff } else { 0x00 };
                assert_eq!(sdf.pixel(x, y)[3], expected);
            }
        }
    }

    #[test]
    pub fn sign_changes_at_the_boundary(){
        let image = masked_image(48, 48, is_inside_circle(24, 24, 12));
        let sdf = compute_sdf_image(&image, &SdfConfig::default());

        for y in 1 .. 47 {
            for x in 1 .. 47 {
                let inside = image.pixel(x, y)[3] == 255;
                let at_edge = image.pixel(x + 1, y)[3] != image.pixel(x, y)[3]
                    || image.pixel(x - 1, y)[3] != image.pixel(x, y)[3];

                if at_edge {
                    let encoded = sdf.pixel(x, y)[3];
                    assert_eq!(encoded >= 0x80, inside, "pixel {} {} encoded {}", x, y, encoded);
                }
            }
        }
    }

    #[test]
    pub fn values_grow_away_from_the_boundary(){
        // left half opaque
        let image = masked_image(40, 8, |x, _| x < 24);
        let sdf = compute_sdf_image(&image, &SdfConfig::default());

        let row: Vec<u8> = (0 .. 24).rev().map(|x| sdf.pixel(x, 4)[3]).collect();
        assert!(row.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(row[0] > 0x80);
        assert_eq!(row[8], 0xff);
        assert!(row[7] < 0xff);

        let outside: Vec<u8> = (24 .. 40).map(|x| sdf.pixel(x, 4)[3]).collect();
        assert!(outside.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(outside[0] < 0x80);
        assert_eq!(outside[8], 0x00);
    }

    #[test]
    pub fn border_pixels_ignore_outside_of_image(){
        // opaque border column, the window of every pixel reaches past the image
        let image = masked_image(3, 3, |x, _| x == 0);
        let sdf = compute_sdf_image(&image, &SdfConfig::default());

        for y in 0 .. 3 {
            assert_eq!(sdf.pixel(0, y)[3], 139);
            assert_eq!(sdf.pixel(1, y)[3], 116);
            assert_eq!(sdf.pixel(2, y)[3], 105);
        }
    }

    #[test]
    pub fn output_is_deterministic(){
        let image = masked_image(50, 30, is_inside_circle(20, 15, 9));
        let config = SdfConfig::default().with_radius(5);

        assert_eq!(compute_sdf_image(&image, &config), compute_sdf_image(&image, &config));
    }

    #[test]
    pub fn modes_share_distances(){
        let image = masked_image(40, 40, is_inside_circle(20, 20, 10));
        let alpha_config = SdfConfig::default();
        let color_config = alpha_config.with_output_mode(OutputMode::DistanceColor);

        let alpha_sdf = compute_sdf_image(&image, &alpha_config);
        let color_sdf = compute_sdf_image(&image, &color_config);

        for (alpha_pixel, color_pixel) in alpha_sdf.as_bytes().chunks(4).zip(color_sdf.as_bytes().chunks(4)) {
            assert_eq!(color_pixel, &[alpha_pixel[3], alpha_pixel[3], alpha_pixel[3], 0xff]);
        }
    }

    #[test]
    pub fn luminance_broadcast_copies_red(){
        let image = masked_image(16, 16, is_inside_circle(8, 8, 4));
        let config = SdfConfig::default().with_rgb_copy_mode(RgbCopyMode::LuminanceBroadcast);
        let sdf = compute_sdf_image(&image, &config);

        let [red, _, _, _] = image.pixel(9, 3);
        assert_eq!(&sdf.pixel(9, 3)[.. 3], &[red, red, red]);
    }

    #[test]
    pub fn stored_fields_encode_like_the_fused_pass(){
        let image = masked_image(64, 48, is_inside_circle(30, 20, 15));
        let config = SdfConfig::default().with_radius(6);

        let fused = compute_sdf_image(&image, &config);
        let field_32 = compute_f32_distance_field(&image, &config);
        assert_eq!(encode_field(&image, &field_32, &config), fused);

        // half precision may round to a neighbouring byte
        let field_16 = compute_f16_distance_field(&image, &config);
        let from_16 = encode_field(&image, &field_16, &config);
        for (a, b) in from_16.as_bytes().iter().zip(fused.as_bytes()) {
            assert!((*a as i16 - *b as i16).abs() <= 1);
        }
    }

    #[test]
    pub fn threshold_controls_boundary(){
        // a soft edge with alpha 100 next to alpha 0 is no boundary by default
        let image = RgbaBuffer::from_fn(16, 4, |x, _| [0, 0, 0, if x < 8 { 100 } else { 0 }]);

        let default_sdf = compute_sdf_image(&image, &SdfConfig::default());
        assert!(alpha_channel(&default_sdf).iter().all(|&alpha| alpha == 0x00));

        let sensitive_sdf = compute_sdf_image(&image, &SdfConfig::default().with_alpha_threshold(50));
        assert_eq!(sensitive_sdf.pixel(7, 0)[3], 116);
        assert_eq!(sensitive_sdf.pixel(8, 0)[3], 116);
    }

    #[test]
    pub fn fused_pass_is_reachable_from_the_crate_root(){
        let image = masked_image(12, 12, is_inside_circle(6, 6, 3));
        let config = SdfConfig::default();
        assert_eq!(crate::compute_sdf_image(&image, &config), crate::encoding::compute_sdf_image(&image, &config));
    }

    #[test]
    pub fn accepts_borrowed_byte_slices(){
        let image = masked_image(10, 10, is_inside_rectangle(2, 2, 5, 5));
        let bytes = image.as_bytes().to_vec();
        let view = RgbaByteImage::from_slice(10, 10, &bytes);

        assert_eq!(compute_sdf_image(&view, &SdfConfig::default()), compute_sdf_image(&image, &SdfConfig::default()));
    }
}
