//! Runtime binding of the vendor extrapolation blob.
//!
//! The engine ships as an opaque shared library with a flat C surface around
//! an opaque handle. Everything about it is untrusted: the library may be
//! absent, truncated, or from the wrong vendor, so every failure on the way
//! in is an [`EngineFault`] for the wrapper to degrade on.

use super::{EngineFault, ForecastEngine};
use inkcast_core::{
    stroke::{Milliseconds, Point},
    units::{RefreshRate, Resolution},
};

/// Library name resolved against the platform loader path when the user
/// hasn't configured an explicit location.
pub const DEFAULT_LIBRARY: &str = "libforecast.so";

/// Point layout shared with the native side.
#[repr(C)]
#[derive(Clone, Copy)]
struct RawTouchPoint {
    x: f32,
    y: f32,
    pressure: f32,
    tilt: f32,
    /// Session-relative milliseconds.
    time_ms: i64,
}

type CreateFn = unsafe extern "C" fn(u64) -> u64;
type DestroyFn = unsafe extern "C" fn(u64);
type ResetFn = unsafe extern "C" fn(u64);
type SetRefreshRateFn = unsafe extern "C" fn(u64, f32);
type SetDpiFn = unsafe extern "C" fn(u64, f32, f32);
type SetMaxPredictTimeFn = unsafe extern "C" fn(u64, f32);
type PushTouchPointFn = unsafe extern "C" fn(u64, *const RawTouchPoint);
type PredictTouchPointFn = unsafe extern "C" fn(u64, *mut RawTouchPoint) -> i32;

/// Resolved entry points. Copies of the symbols' fn pointers - valid for as
/// long as the owning [`libloading::Library`] is alive.
struct Api {
    destroy: DestroyFn,
    reset: ResetFn,
    set_refresh_rate: SetRefreshRateFn,
    set_dpi: SetDpiFn,
    set_max_predict_time: SetMaxPredictTimeFn,
    push_touch_point: PushTouchPointFn,
    predict_touch_point: PredictTouchPointFn,
}

/// An open engine instance. Holds the library for the lifetime of the handle;
/// the handle is destroyed exactly once on drop.
pub struct NativeForecast {
    handle: u64,
    api: Api,
    // Declared last: the handle must die before the library unloads.
    _library: libloading::Library,
}
impl NativeForecast {
    /// Load the engine library and create a fresh instance.
    pub fn open(path: Option<&std::path::Path>) -> Result<Self, EngineFault> {
        let path = path.map_or_else(
            || std::path::PathBuf::from(DEFAULT_LIBRARY),
            std::path::Path::to_path_buf,
        );
        // Safety: loading runs the library's initializers. We can't vouch for
        // vendor code; the capability probe gates which platforms get here.
        let library = unsafe { libloading::Library::new(&path) }?;
        // Resolve everything up front so a truncated or mismatched blob fails
        // now, not mid-stroke.
        // Safety: signatures transcribed from the vendor SDK surface.
        let (create, api) = unsafe {
            let create: CreateFn = *library.get(b"forecast_create\0")?;
            let api = Api {
                destroy: *library.get(b"forecast_destroy\0")?,
                reset: *library.get(b"forecast_reset\0")?,
                set_refresh_rate: *library.get(b"forecast_set_refresh_rate\0")?,
                set_dpi: *library.get(b"forecast_set_dpi\0")?,
                set_max_predict_time: *library.get(b"forecast_set_max_predict_time\0")?,
                push_touch_point: *library.get(b"forecast_push_touch_point\0")?,
                predict_touch_point: *library.get(b"forecast_predict_touch_point\0")?,
            };
            (create, api)
        };
        // Zero in asks for a fresh instance, zero out is a refusal.
        // Safety: symbol came from the library we hold.
        let handle = unsafe { create(0) };
        if handle == 0 {
            return Err(EngineFault::Create);
        }
        log::info!("forecast engine loaded from {}", path.display());
        Ok(Self {
            handle,
            api,
            _library: library,
        })
    }
}
// Safety notes for the calls below: the handle is live (created in `open`,
// destroyed only in `drop`) and the fn pointers outlast it.
impl ForecastEngine for NativeForecast {
    fn set_refresh_rate(&mut self, rate: RefreshRate) -> Result<(), EngineFault> {
        unsafe { (self.api.set_refresh_rate)(self.handle, rate.hz()) };
        Ok(())
    }
    fn set_dpi(&mut self, resolution: Resolution) -> Result<(), EngineFault> {
        unsafe { (self.api.set_dpi)(self.handle, resolution.dpi_x, resolution.dpi_y) };
        Ok(())
    }
    fn set_max_predict_time(&mut self, ms: f32) -> Result<(), EngineFault> {
        unsafe { (self.api.set_max_predict_time)(self.handle, ms) };
        Ok(())
    }
    fn reset(&mut self) -> Result<(), EngineFault> {
        unsafe { (self.api.reset)(self.handle) };
        Ok(())
    }
    fn push(&mut self, point: Point) -> Result<(), EngineFault> {
        let raw = RawTouchPoint {
            x: point.pos[0],
            y: point.pos[1],
            pressure: point.pressure,
            tilt: point.tilt,
            time_ms: point.time.0,
        };
        unsafe { (self.api.push_touch_point)(self.handle, &raw) };
        Ok(())
    }
    fn predict(&mut self) -> Result<Option<Point>, EngineFault> {
        let mut raw = RawTouchPoint {
            x: 0.0,
            y: 0.0,
            pressure: 0.0,
            tilt: 0.0,
            time_ms: 0,
        };
        let status = unsafe { (self.api.predict_touch_point)(self.handle, &mut raw) };
        // Nonzero status is "nothing to extrapolate", not a fault.
        if status != 0 {
            return Ok(None);
        }
        Ok(Some(Point::new(
            [raw.x, raw.y],
            raw.pressure,
            raw.tilt,
            Milliseconds(raw.time_ms),
        )))
    }
}
impl Drop for NativeForecast {
    fn drop(&mut self) {
        // Safety: handle came from `create` and this is the only destroy.
        unsafe { (self.api.destroy)(self.handle) };
    }
}
