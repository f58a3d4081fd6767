/// Linear RGB color.
///
/// Ribbons are drawn opaque, so there is no alpha channel. Channels are not
/// clamped on construction; the render target's format clamps on write.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`), converted to linear.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from(c: [f32; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
