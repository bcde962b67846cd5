//! User preferences, loaded once at startup from the platform preference dir.

const DOCUMENTATION: &str = r"# inkcast preferences. You may edit this file, but formatting and comments
# will not be preserved. Unknown or malformed values fall back to defaults.

# base_stroke_width - stroke width in logical pixels, before pressure weighting.
# max_predict_ms    - how far ahead the forecast engine may extrapolate.
# engine_library    - explicit path to the forecast engine shared library.

";

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Stroke width in logical pixels, before pressure weighting.
    pub base_stroke_width: f32,
    /// Extrapolation horizon hint handed to the engine, in milliseconds.
    pub max_predict_ms: f32,
    /// Where to find the forecast engine library. `None` resolves the default
    /// name against the platform loader path.
    pub engine_library: Option<std::path::PathBuf>,
}
impl Default for Preferences {
    fn default() -> Self {
        Self {
            base_stroke_width: 5.0,
            // One frame at 60Hz.
            max_predict_ms: 16.0,
            engine_library: None,
        }
    }
}
impl Preferences {
    const FILENAME: &'static str = "preferences.toml";
    #[must_use]
    pub fn preferences_dir() -> Option<std::path::PathBuf> {
        let mut base_dir = dirs::preference_dir()?;
        base_dir.push(env!("CARGO_PKG_NAME"));
        Some(base_dir)
    }
    /// Load from the user's preference dir, or default (with a warning, never
    /// an error) when the file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        let Some(mut path) = Self::preferences_dir() else {
            log::warn!("no preference dir available, using default preferences");
            return Self::default();
        };
        path.push(Self::FILENAME);
        Self::load_or_default(&path)
    }
    #[must_use]
    fn load_or_default(path: &std::path::Path) -> Self {
        let loaded: anyhow::Result<Self> = std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|string| Ok(toml::from_str(&string)?));
        match loaded {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("preferences unavailable ({e}), using defaults");
                Self::default()
            }
        }
    }
    pub fn save(&self) -> anyhow::Result<()> {
        let mut path =
            Self::preferences_dir().ok_or_else(|| anyhow::anyhow!("no preference dir"))?;
        std::fs::create_dir_all(&path)?;
        path.push(Self::FILENAME);
        let mut document = DOCUMENTATION.to_owned();
        document.push_str(&toml::to_string_pretty(self)?);
        std::fs::write(&path, document)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Preferences;

    #[test]
    fn missing_fields_default() {
        let prefs: Preferences = toml::from_str("base_stroke_width = 7.0").unwrap();
        assert_eq!(prefs.base_stroke_width, 7.0);
        assert_eq!(prefs.max_predict_ms, 16.0);
        assert!(prefs.engine_library.is_none());
    }
    #[test]
    fn empty_document_is_all_defaults() {
        let prefs: Preferences = toml::from_str("").unwrap();
        assert_eq!(prefs, Preferences::default());
    }
    #[test]
    fn round_trips_through_toml() {
        let prefs = Preferences {
            base_stroke_width: 12.0,
            max_predict_ms: 8.0,
            engine_library: Some("/vendor/lib64/libforecast.so".into()),
        };
        let reparsed: Preferences =
            toml::from_str(&toml::to_string_pretty(&prefs).unwrap()).unwrap();
        assert_eq!(reparsed, prefs);
    }
}
