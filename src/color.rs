use rand::Rng;
use std::fmt;

/// 8-bit RGBA color. Alpha is carried through but never touched by shading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Color of rays that hit nothing.
    pub const BACKGROUND: Self = Self::WHITE;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Multiply R, G and B by `intensity`, clamping each channel to `0..=255`.
    ///
    /// Channels are truncated towards zero, so hue is kept and `1.0` returns
    /// the color unchanged.
    #[inline]
    pub fn shaded(self, intensity: f64) -> Self {
        let scale = |c: u8| (c as f64 * intensity).clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    /// Opaque color with random R, G and B, for scene generation.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}
