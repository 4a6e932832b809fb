use crate::color_8888::Color8888;
use crate::math::{float_to_int, Vec3};

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour endpoints of BC1, BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Quantises a colour with components in `[0, 1]` to the nearest [`Color565`].
    ///
    /// Components outside of `[0, 1]` are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress_common::color_565::Color565;
    /// use dxt_compress_common::math::Vec3;
    ///
    /// let red = Color565::from_vec3(Vec3::new(1.0, 0.0, 0.0));
    /// assert_eq!(red.raw_value(), 0xF800);
    /// ```
    #[inline]
    pub fn from_vec3(colour: Vec3) -> Self {
        let r = float_to_int(31.0 * colour.x, 31) as u16;
        let g = float_to_int(63.0 * colour.y, 63) as u16;
        let b = float_to_int(31.0 * colour.z, 31) as u16;
        Self {
            value: (r << 11) | (g << 5) | b,
        }
    }

    /// Reads a [`Color565`] stored in little endian order.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Returns the value in little endian order, as stored in a block.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    // Channels expand to 8 bits by replicating their top bits.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress_common::color_565::Color565;
    ///
    /// let orange = Color565::from_raw(0xFBE0).to_color_8888();
    /// assert_eq!((orange.r, orange.g, orange.b, orange.a), (255, 125, 0, 255));
    /// ```
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}
