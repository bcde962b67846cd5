/// Physical pixel density of a display, per axis, in dots per inch.
///
/// The extrapolation engine wants both axes - cheap panels do report
/// slightly anisotropic values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub dpi_x: f32,
    pub dpi_y: f32,
}
impl Resolution {
    #[must_use]
    pub const fn uniform(dpi: f32) -> Self {
        Self {
            dpi_x: dpi,
            dpi_y: dpi,
        }
    }
}

/// Display refresh rate in Hz. Defaults to 60 when the host can't report one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefreshRate(pub f32);
impl RefreshRate {
    #[must_use]
    pub fn hz(self) -> f32 {
        self.0
    }
}
impl Default for RefreshRate {
    fn default() -> Self {
        Self(60.0)
    }
}
