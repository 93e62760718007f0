fn main(){
    use alpha_sdf::prelude::*;

    let size = 256;
    let (left, right) = (64, 192);

    // a white square with a round notch
    let image = RgbaBuffer::from_fn(size, size, |x, y|{
        let notch_x = x as f32 - right as f32;
        let notch_y = y as f32 - (size / 2) as f32;
        let in_notch = (notch_x * notch_x + notch_y * notch_y).sqrt() < 40.0;

        if x >= left && x < right && y >= left && y < right && !in_notch {
            [255, 255, 255, 255]
        }
        else {
            [255, 255, 255, 0]
        }
    });

    let config = SdfConfig::default().with_radius(16);

    let alpha_sdf = compute_sdf_image(&image, &config);
    let small = resample(alpha_sdf, TargetDimensions::Scale(0.25), ResampleFilter::Triangle).unwrap();
    save_image("square_sdf.png", small).unwrap();

    let color_sdf = compute_sdf_image(&image, &config.with_output_mode(OutputMode::DistanceColor));
    save_image("square_distance.png", color_sdf).unwrap();
}
