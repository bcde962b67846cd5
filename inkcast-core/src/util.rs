//! Utility types, used throughout the crate.

/// A float which is finite (not NaN, not infinite).
// The preconditions invalidate many bitpatterns, so this is not Pod.
#[derive(Copy, Clone, PartialEq, PartialOrd, bytemuck::NoUninit, bytemuck::Zeroable, Debug)]
#[repr(transparent)]
pub struct FiniteF32(f32);
impl FiniteF32 {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        if val.is_finite() {
            Ok(Self(val))
        } else {
            Err(FiniteF32Error::NotFinite)
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for FiniteF32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f32> for FiniteF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<FiniteF32> for f32 {
    fn from(value: FiniteF32) -> Self {
        value.get()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteF32Error {
    #[error("not finite")]
    NotFinite,
}

// Sound even though f32 is !Eq - no component is ever NaN, so PartialEq
// already behaves like a total equivalence.
impl Eq for FiniteF32 {}
// Taking PartialOrd logic to impl Ord on purpose, justified by the struct invariant.
#[allow(clippy::derive_ord_xor_partial_ord)]
impl Ord for FiniteF32 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Unwrap OK - the wrapped f32 is never NaN and thus never compares as None.
        unsafe { self.partial_cmp(other).unwrap_unchecked() }
    }
}
impl std::hash::Hash for FiniteF32 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // x == y implies Hash(x) == Hash(y), which NaN would break - but we have none.
        state.write_u32(self.0.to_bits());
    }
}

/// An axis-aligned rectangle, grown point-by-point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}
impl Rect {
    /// A degenerate rect covering exactly one point.
    #[must_use]
    pub fn point(pos: [f32; 2]) -> Self {
        Self { min: pos, max: pos }
    }
    /// Grow to cover `pos` as well.
    pub fn extend(&mut self, pos: [f32; 2]) {
        self.min[0] = self.min[0].min(pos[0]);
        self.min[1] = self.min[1].min(pos[1]);
        self.max[0] = self.max[0].max(pos[0]);
        self.max[1] = self.max[1].max(pos[1]);
    }
    #[must_use]
    pub fn size(&self) -> [f32; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}
