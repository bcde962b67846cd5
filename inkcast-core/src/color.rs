use crate::util::{FiniteF32, FiniteF32Error};

/// A straight-alpha RGBA color.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, bytemuck::Zeroable, Debug, Hash)]
pub struct Color([FiniteF32; 4]);
impl Color {
    pub const BLACK: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    pub const RED: Self = Self([
        FiniteF32::ONE,
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    pub const GREEN: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ONE,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    pub const BLUE: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
        FiniteF32::ONE,
    ]);
    /// Create a new color. Rejects NaN or infinite channels.
    pub fn new_lossy(r: f32, g: f32, b: f32, a: f32) -> Result<Self, FiniteF32Error> {
        Ok(Self([
            FiniteF32::new(r)?,
            FiniteF32::new(g)?,
            FiniteF32::new(b)?,
            FiniteF32::new(a)?,
        ]))
    }
    /// Create a new color. Rejects NaN or infinite channels.
    pub fn from_array_lossy([r, g, b, a]: [f32; 4]) -> Result<Self, FiniteF32Error> {
        Self::new_lossy(r, g, b, a)
    }
    #[must_use]
    pub fn as_array(&self) -> [f32; 4] {
        [
            self.0[0].get(),
            self.0[1].get(),
            self.0[2].get(),
            self.0[3].get(),
        ]
    }
    #[must_use]
    pub const fn as_finite_array(&self) -> [FiniteF32; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }
}
// Safety: FiniteF32 is NoUninit, arrays have no uninit bytes of their own.
unsafe impl bytemuck::NoUninit for Color {}
