use crate::error::SdfError;

/// Number of interleaved channels in every buffer this crate handles.
pub const CHANNELS: usize = 4;

/// Represents a row-major RGBA image with 8 bits per channel.
/// Source images can be created from byte slices
/// or piston images if the feature `image_io` is activated.
pub trait SourceImage: Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// The `[r, g, b, a]` channels of the pixel.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y)[3]
    }
}

#[inline]
fn byte_index(width: u32, x: u32, y: u32) -> usize {
    CHANNELS * (width as usize * y as usize + x as usize)
}

#[inline]
fn expected_length(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}


/// An image which is described by a slice of interleaved RGBA bytes.
#[derive(Clone, Copy, Debug)]
pub struct RgbaByteImage<'b> {
    width: u32,
    height: u32,

    /// A row-major image vector with four bytes per pixel.
    buffer: &'b [u8],
}

impl<'b> RgbaByteImage<'b> {

    /// Create an image view over the buffer.
    /// The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_slice(width: u32, height: u32, buffer: &'b [u8]) -> Self {
        debug_assert_eq!(buffer.len(), expected_length(width, height), "Buffer dimension mismatch");
        RgbaByteImage { width, height, buffer }
    }

    /// Like `from_slice`, but reports a mismatching buffer length instead of panicking.
    pub fn try_from_slice(width: u32, height: u32, buffer: &'b [u8]) -> Result<Self, SdfError> {
        let expected = expected_length(width, height);
        if buffer.len() != expected {
            return Err(SdfError::BufferLength { expected, actual: buffer.len() });
        }

        Ok(RgbaByteImage { width, height, buffer })
    }

    pub fn as_bytes(&self) -> &'b [u8] {
        self.buffer
    }
}

impl SourceImage for RgbaByteImage<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let index = byte_index(self.width, x, y);
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.buffer[index .. index + CHANNELS]);
        pixel
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.buffer[byte_index(self.width, x, y) + 3]
    }
}


/// An owned RGBA image, used as the destination of the encoder.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaBuffer {

    /// Allocate a zero-initialized buffer.
    pub fn new(width: u32, height: u32) -> Self {
        RgbaBuffer { width, height, pixels: vec![0; expected_length(width, height)] }
    }

    pub fn from_vec(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SdfError> {
        let expected = expected_length(width, height);
        if pixels.len() != expected {
            return Err(SdfError::BufferLength { expected, actual: pixels.len() });
        }

        Ok(RgbaBuffer { width, height, pixels })
    }

    /// Build a buffer by evaluating a function for every pixel.
    pub fn from_fn(width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let mut buffer = Self::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let index = buffer.index(x, y);
                buffer.pixels[index .. index + CHANNELS].copy_from_slice(&pixel(x, y));
            }
        }

        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The index of the red channel of the pixel in the byte buffer.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        byte_index(self.width, x, y)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.as_view().pixel(x, y)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    pub fn as_view(&self) -> RgbaByteImage<'_> {
        RgbaByteImage { width: self.width, height: self.height, buffer: &self.pixels }
    }
}

impl SourceImage for RgbaBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.as_view().pixel(x, y)
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixels[self.index(x, y) + 3]
    }
}


/// Use piston images as source and destination.
#[cfg(feature = "image_io")]
pub mod piston_image {
    use image::RgbaImage;
    use super::{ SourceImage, RgbaBuffer };

    impl SourceImage for RgbaImage {
        fn width(&self) -> u32 {
            self.dimensions().0
        }

        fn height(&self) -> u32 {
            self.dimensions().1
        }

        fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
            self.get_pixel(x, y).0
        }
    }

    impl From<RgbaImage> for RgbaBuffer {
        fn from(image: RgbaImage) -> Self {
            let (width, height) = image.dimensions();
            RgbaBuffer { width, height, pixels: image.into_raw() }
        }
    }

    impl From<RgbaBuffer> for RgbaImage {
        fn from(buffer: RgbaBuffer) -> Self {
            let RgbaBuffer { width, height, pixels } = buffer;

            RgbaImage::from_raw(width, height, pixels)
                .expect("RgbaBuffer length is checked on construction")
        }
    }
}
