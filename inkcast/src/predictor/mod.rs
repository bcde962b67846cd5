//! # Predictor capability
//!
//! Wraps the optional vendor extrapolation engine behind one seam so nothing
//! downstream ever branches on device capability. The engine is probed before
//! construction, configured once, and any fault at any point - load, init, or
//! mid-stroke - silently degrades the session to raw-sample passthrough.
//!
//! The engine's internal clock is session-relative: [`Predictor`] rebases
//! timestamps on the way in (`time - base`) and back out (`time + base`).

pub mod native;

use crate::{device::DeviceProfile, prefs::Preferences};
use inkcast_core::{
    stroke::{Milliseconds, Point},
    units::{RefreshRate, Resolution},
};

/// A failure inside, or while reaching, the extrapolation engine.
///
/// Callers of [`Predictor`] never see these - they are
/// interpreted uniformly as "disable prediction and continue".
#[derive(thiserror::Error, Debug)]
pub enum EngineFault {
    #[error("forecast library unavailable: {0}")]
    Unavailable(#[from] libloading::Error),
    #[error("engine refused to create a handle")]
    Create,
    #[error("engine call `{0}` failed")]
    Call(&'static str),
}

/// The extrapolation engine seam.
///
/// Every operation is fallible at this boundary so that native-level faults
/// surface as ordinary `Result`s rather than anything uncatchable.
pub trait ForecastEngine {
    fn set_refresh_rate(&mut self, rate: RefreshRate) -> Result<(), EngineFault>;
    fn set_dpi(&mut self, resolution: Resolution) -> Result<(), EngineFault>;
    /// Upper bound on extrapolation distance, in milliseconds. A hint - the
    /// engine enforces it, not this layer.
    fn set_max_predict_time(&mut self, ms: f32) -> Result<(), EngineFault>;
    /// Clear accumulated history. Must precede the first push of a stroke.
    fn reset(&mut self) -> Result<(), EngineFault>;
    /// Feed one sample. `point.time` is session-relative.
    fn push(&mut self, point: Point) -> Result<(), EngineFault>;
    /// Extrapolate a future point, session-relative time. `None` when the
    /// engine has nothing to offer (insufficient history, hint exceeded).
    fn predict(&mut self) -> Result<Option<Point>, EngineFault>;
}

/// Per-session predictor state: the engine (while healthy) and the stroke's
/// base timestamp.
///
/// Engine teardown is ownership-driven: dropping the predictor drops the
/// engine, which releases its native handle exactly once. When construction
/// degraded to disabled there is nothing to release.
pub struct Predictor {
    engine: Option<Box<dyn ForecastEngine>>,
    base_time: Milliseconds,
}
impl Predictor {
    /// A predictor that always falls through to raw samples.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            engine: None,
            base_time: Milliseconds(0),
        }
    }
    /// Pre-flight capability check. Must pass before the engine is even
    /// constructed - construction on an unsupported platform is documented
    /// to fail unpredictably.
    #[must_use]
    pub fn probe(profile: &DeviceProfile) -> bool {
        let supported = profile.supports_forecast();
        if !supported {
            log::info!("device ABIs {:?} can't host the forecast engine", profile.abis);
        }
        supported
    }
    /// Probe, load, and configure the native engine. Any failure along the
    /// way yields a disabled predictor, never an error.
    #[must_use]
    pub fn new(profile: &DeviceProfile, prefs: &Preferences) -> Self {
        if !Self::probe(profile) {
            return Self::disabled();
        }
        match native::NativeForecast::open(prefs.engine_library.as_deref()) {
            Ok(engine) => Self::with_engine(Box::new(engine), profile, prefs.max_predict_ms),
            Err(fault) => {
                log::warn!("forecast engine unavailable, falling back to raw input: {fault}");
                Self::disabled()
            }
        }
    }
    /// Wrap an already-constructed engine (the seam the tests and any
    /// non-native backend come through). Still probes, still degrades on
    /// configuration failure.
    #[must_use]
    pub fn with_engine(
        mut engine: Box<dyn ForecastEngine>,
        profile: &DeviceProfile,
        max_predict_ms: f32,
    ) -> Self {
        if !Self::probe(profile) {
            return Self::disabled();
        }
        let configure = |engine: &mut dyn ForecastEngine| -> Result<(), EngineFault> {
            engine.set_dpi(profile.resolution)?;
            engine.set_refresh_rate(profile.refresh_rate_or_default())?;
            engine.set_max_predict_time(max_predict_ms)?;
            Ok(())
        };
        match configure(engine.as_mut()) {
            Ok(()) => Self {
                engine: Some(engine),
                base_time: Milliseconds(0),
            },
            Err(fault) => {
                log::warn!("forecast engine configuration failed, disabling prediction: {fault}");
                Self::disabled()
            }
        }
    }
    /// Whether prediction is still live. The only observable surface of
    /// degradation - faults are otherwise silent.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }
    /// Start a new stroke session at `now`. All timestamps pushed afterwards
    /// are rebased against it. Must be called before the stroke's first
    /// [`Predictor::push`].
    pub fn reset_session(&mut self, now: Milliseconds) {
        self.base_time = now;
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if let Err(fault) = engine.reset() {
            self.disable("reset", &fault);
        }
    }
    /// Feed a raw sample, rebased into the session clock.
    pub fn push(&mut self, point: Point) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let rebased = Point {
            time: point.time - self.base_time,
            ..point
        };
        if let Err(fault) = engine.push(rebased) {
            self.disable("push", &fault);
        }
    }
    /// Ask for an extrapolated point, rebased back to absolute time.
    /// `None` means the caller falls back to the raw sample.
    pub fn predict(&mut self) -> Option<Point> {
        let engine = self.engine.as_mut()?;
        match engine.predict() {
            Ok(Some(point)) => Some(Point {
                time: point.time + self.base_time,
                ..point
            }),
            Ok(None) => None,
            Err(fault) => {
                self.disable("predict", &fault);
                None
            }
        }
    }
    /// Treat a fault as capability loss for the rest of the session.
    /// Strokes already drawn are unaffected.
    fn disable(&mut self, during: &str, fault: &EngineFault) {
        log::warn!("forecast engine fault during {during}, disabling prediction: {fault}");
        self.engine = None;
    }
}
