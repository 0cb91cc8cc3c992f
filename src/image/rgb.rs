//! Owned interleaved RGB image (3 bytes per pixel, no alpha).
//!
//! Produced by the decoding boundary with channel order normalized to red,
//! green, blue. The pipeline driver assembles one again when writing the
//! binary edge map back to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Interleaved red, green, blue bytes in row-major order
    pub data: Vec<u8>,
}

impl ImageRgb8 {
    /// Construct a zero-initialized (black) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h * 3],
        }
    }

    /// Wrap an existing interleaved buffer.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h * 3, "buffer length must equal w * h * 3");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Byte offset of the first channel of the pixel at (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.stride + x) * 3
    }

    #[inline]
    /// Get the (r, g, b) triple at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the (r, g, b) triple at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    #[inline]
    /// Borrow the interleaved bytes of row `y`.
    pub fn row_bytes(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }

    #[inline]
    /// Mutably borrow the interleaved bytes of row `y`.
    pub fn row_bytes_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride * 3;
        let end = start + self.w * 3;
        &mut self.data[start..end]
    }
}
