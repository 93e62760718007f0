use crate::config::{ SdfConfig, INTERIOR_ALPHA };
use crate::source_image::SourceImage;
use rayon::prelude::*;



/// The normalized signed distance of every pixel to the nearest boundary,
/// positive inside the shape and negative outside.
/// Pixels without a boundary inside their search window are saturated,
/// holding positive infinity inside the shape and negative infinity outside.
#[derive(Clone, PartialEq, Debug)]
pub struct SignedDistanceField<D: DistanceStorage> {
    pub width: u32,
    pub height: u32,
    pub distances: D,
}

/// Needs less storage with sufficient precision for byte output,
/// but rounds some distances to a neighbouring byte value.
pub type F16DistanceStorage = Vec<half::f16>;

/// Needs more storage with high precision,
/// reproduces the byte output exactly.
pub type F32DistanceStorage = Vec<f32>;

pub trait DistanceStorage: Send + Sync {
    type Element: Copy + Send + Sync;

    fn new(length: usize) -> Self;

    fn get(&self, index: usize) -> f32;

    /// The raw elements, one per pixel in row-major order.
    fn elements_mut(&mut self) -> &mut [Self::Element];

    fn to_element(distance: f32) -> Self::Element;
}



impl<D> SignedDistanceField<D> where D: DistanceStorage {

    /// Search the square window around every pixel for the nearest boundary.
    /// Rows are processed in parallel, as every pixel only reads the source image.
    pub fn compute(image: &impl SourceImage, config: &SdfConfig) -> Self {
        let width = image.width();
        let height = image.height();
        let scale = config.distance_scale();

        log::debug!(
            "computing {}x{} distance field with radius {} and alpha threshold {}",
            width, height, config.radius, config.alpha_threshold
        );

        let mut distances = D::new(width as usize * height as usize);

        if width > 0 {
            distances.elements_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, element) in row.iter_mut().enumerate() {
                        let (x, y) = (x as u32, y as u32);

                        let distance = normalized_signed_distance(
                            nearest_boundary_distance_squared(image, x, y, config.radius, config.alpha_threshold),
                            image.alpha(x, y), scale
                        );

                        *element = D::to_element(distance);
                    }
                });
        }

        SignedDistanceField { width, height, distances }
    }

    #[inline(always)]
    pub fn get_distance(&self, x: u32, y: u32) -> f32 {
        self.distances.get(self.flatten_index(x, y))
    }

    /// Whether no boundary was found within the search radius of this pixel.
    #[inline]
    pub fn is_saturated(&self, x: u32, y: u32) -> bool {
        self.get_distance(x, y).is_infinite()
    }

    #[inline]
    pub fn flatten_index(&self, x: u32, y: u32) -> usize {
        self.width as usize * y as usize + x as usize
    }
}


/// Whether two pixels with these alpha values lie on opposite sides of the boundary.
#[inline(always)]
pub fn crosses_boundary(own_alpha: u8, other_alpha: u8, threshold: u8) -> bool {
    (other_alpha as i16 - own_alpha as i16).abs() > threshold as i16
}

/// Find the smallest squared offset, within the square of the specified radius,
/// to a pixel on the other side of the boundary.
/// Returns `None` if the window contains no such pixel.
/// Offsets outside of the image are skipped.
pub fn nearest_boundary_distance_squared(
    image: &impl SourceImage, x: u32, y: u32, radius: u16, threshold: u8
) -> Option<u64>
{
    let own_alpha = image.alpha(x, y);
    let radius = radius as i64;
    let mut min_distance_squared: Option<u64> = None;

    for offset_y in -radius ..= radius {
        let other_y = y as i64 + offset_y;
        if !check_coordinate(other_y, image.height()) {
            continue;
        }

        for offset_x in -radius ..= radius {
            let other_x = x as i64 + offset_x;
            if !check_coordinate(other_x, image.width()) {
                continue;
            }

            let other_alpha = image.alpha(other_x as u32, other_y as u32);
            if crosses_boundary(own_alpha, other_alpha, threshold) {
                let distance_squared = (offset_x * offset_x + offset_y * offset_y) as u64;

                if min_distance_squared.map_or(true, |min| distance_squared < min) {
                    min_distance_squared = Some(distance_squared);
                }
            }
        }
    }

    min_distance_squared
}

/// Scale the squared distance and take its root,
/// negated for pixels outside the shape.
/// Without a boundary, the result is infinite with the sign of the pixel.
#[inline]
pub fn normalized_signed_distance(min_distance_squared: Option<u64>, own_alpha: u8, scale: f32) -> f32 {
    let is_inside = own_alpha >= INTERIOR_ALPHA;

    let distance = match min_distance_squared {
        Some(distance_squared) => (scale * distance_squared as f32).sqrt(),
        None => std::f32::INFINITY,
    };

    if is_inside { distance } else { -distance }
}

#[inline]
fn check_coordinate(coordinate: i64, size: u32) -> bool {
    coordinate >= 0 && coordinate < size as i64
}


impl DistanceStorage for F16DistanceStorage {
    type Element = half::f16;

    fn new(length: usize) -> Self {
        vec![half::f16::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index].to_f32()
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut [half::f16] {
        self
    }

    #[inline]
    fn to_element(distance: f32) -> half::f16 {
        half::f16::from_f32(distance)
    }
}

impl DistanceStorage for F32DistanceStorage {
    type Element = f32;

    fn new(length: usize) -> Self {
        vec![std::f32::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut [f32] {
        self
    }

    #[inline]
    fn to_element(distance: f32) -> f32 {
        distance
    }
}
