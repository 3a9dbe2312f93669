//! Owned 3-channel 8-bit image in row-major layout (stride == width).
//!
//! This is the pixel grid the layer shift engine reads and writes. Every
//! constructor checks the shape, so a value of this type is always
//! rectangular with exactly three channels per pixel.
use crate::error::ShiftError;

/// One RGB pixel.
pub type Rgb8 = [u8; 3];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    data: Vec<Rgb8>,
}

/// `w * h * channels`, or `SizeOverflow` when it does not fit in `usize`.
fn element_count(w: usize, h: usize, channels: usize) -> Result<usize, ShiftError> {
    w.checked_mul(h)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ShiftError::SizeOverflow {
            width: w,
            height: h,
        })
}

impl RgbImage {
    /// Construct a black image of size `w × h`.
    ///
    /// # Panics
    /// If `w * h` overflows `usize`. Use [`RgbImage::from_pixels`] for
    /// untrusted sizes.
    pub fn new(w: usize, h: usize) -> Self {
        let len = match element_count(w, h, 1) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        Self {
            w,
            h,
            data: vec![[0; 3]; len],
        }
    }

    /// Wrap row-major pixels. Fails when `pixels.len() != w * h`.
    pub fn from_pixels(w: usize, h: usize, pixels: Vec<Rgb8>) -> Result<Self, ShiftError> {
        let expected = element_count(w, h, 1)?;
        if pixels.len() != expected {
            return Err(ShiftError::BufferSize {
                width: w,
                height: h,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { w, h, data: pixels })
    }

    /// Wrap interleaved `RGBRGB...` bytes.
    pub fn from_raw(w: usize, h: usize, bytes: Vec<u8>) -> Result<Self, ShiftError> {
        Self::from_interleaved(w, h, 3, &bytes)
    }

    /// Build from an interleaved buffer with an explicit channel count.
    ///
    /// Only 3-channel input is accepted; gray or alpha buffers must be
    /// converted to RGB first.
    pub fn from_interleaved(
        w: usize,
        h: usize,
        channels: usize,
        bytes: &[u8],
    ) -> Result<Self, ShiftError> {
        if channels != 3 {
            return Err(ShiftError::ChannelDepth(channels));
        }
        let expected = element_count(w, h, 3)?;
        if bytes.len() != expected {
            return Err(ShiftError::BufferSize {
                width: w,
                height: h,
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self { w, h, data })
    }

    /// Build from nested rows. All rows must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<Rgb8>>) -> Result<Self, ShiftError> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(element_count(w, h, 1)?);
        for (row, pixels) in rows.into_iter().enumerate() {
            if pixels.len() != w {
                return Err(ShiftError::RaggedRow {
                    row,
                    expected: w,
                    actual: pixels.len(),
                });
            }
            data.extend(pixels);
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    /// Convert (row, col) to a linear index into the pixel buffer.
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Rgb8 {
        self.data[self.idx(row, col)]
    }
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, px: Rgb8) {
        let i = self.idx(row, col);
        self.data[i] = px;
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.h, self.w)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.data
    }

    /// Interleaved `RGBRGB...` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_iter().flatten().collect()
    }
}

impl crate::image::traits::ImageView for RgbImage {
    type Pixel = Rgb8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, row: usize) -> &[Rgb8] {
        let start = row * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for RgbImage {
    #[inline]
    fn row_mut(&mut self, row: usize) -> &mut [Rgb8] {
        let start = row * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
