//! Device capability description, queried once at startup.

use inkcast_core::units::{RefreshRate, Resolution};

/// The one ABI the vendor forecast blob ships native code for.
pub const FORECAST_ABI: &str = "arm64-v8a";

/// Everything the pipeline wants to know about the host device, passed in
/// explicitly so capability decisions never reach for hidden globals.
#[derive(Clone, Debug)]
pub struct DeviceProfile {
    /// Supported ABI identifiers, most-preferred first.
    pub abis: Vec<String>,
    pub resolution: Resolution,
    /// `None` when the host can't report one; treated as 60 Hz.
    pub refresh_rate: Option<RefreshRate>,
}
impl DeviceProfile {
    /// Whether the forecast engine's native code can run here at all.
    ///
    /// Constructing the engine on an unsupported platform is documented to
    /// fail unpredictably, so this must be checked before any engine call.
    #[must_use]
    pub fn supports_forecast(&self) -> bool {
        self.abis.iter().any(|abi| abi.eq_ignore_ascii_case(FORECAST_ABI))
    }
    #[must_use]
    pub fn refresh_rate_or_default(&self) -> RefreshRate {
        self.refresh_rate.unwrap_or_default()
    }
    /// Profile of the machine we're running on. Resolution is a nominal
    /// fallback - hosts with a real display should fill in their own.
    #[must_use]
    pub fn host() -> Self {
        let abis = match std::env::consts::ARCH {
            "aarch64" => vec![FORECAST_ABI.to_owned(), "armeabi-v7a".to_owned()],
            other => vec![other.to_owned()],
        };
        Self {
            abis,
            resolution: Resolution::uniform(96.0),
            refresh_rate: None,
        }
    }
}
