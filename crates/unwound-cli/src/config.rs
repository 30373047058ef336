use std::path::{Path, PathBuf};

use unwound_core::{Instrument, ProgressionRequest, ScaleFamily};

/// Longest progression the CLI will build
pub(crate) const MAX_COUNT: usize = 64;

/// User defaults, read from `config.toml`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub key: String,
    pub scale: String,
    pub count: usize,
    pub instrument: String,
    pub diagrams: bool,
}

impl Default for Config {
    fn default() -> Self {
        let request = ProgressionRequest::default();
        Self {
            key: request.root,
            scale: request.family.name().to_string(),
            count: request.count,
            instrument: Instrument::default().name().to_string(),
            diagrams: false,
        }
    }
}

impl Config {
    /// Scale family from the config; unrecognized values were reset on load
    pub fn family(&self) -> ScaleFamily {
        self.scale.parse::<ScaleFamily>().unwrap_or_default()
    }

    /// Instrument from the config; unrecognized values were reset on load
    pub fn instrument(&self) -> Instrument {
        self.instrument.parse::<Instrument>().unwrap_or_default()
    }

    /// Reset each field that parses as TOML but holds a value we can't use
    fn validated(mut self, path: &Path) -> Self {
        let defaults = Config::default();
        if let Err(e) = self.scale.parse::<ScaleFamily>() {
            tracing::warn!(path = %path.display(), "Ignoring config scale: {}", e);
            self.scale = defaults.scale;
        }
        if let Err(e) = self.instrument.parse::<Instrument>() {
            tracing::warn!(path = %path.display(), "Ignoring config instrument: {}", e);
            self.instrument = defaults.instrument;
        }
        if self.count > MAX_COUNT {
            tracing::warn!(path = %path.display(), count = self.count, "Ignoring config count above {}", MAX_COUNT);
            self.count = defaults.count;
        }
        self
    }
}

pub(crate) fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("unwound")
        .join("config.toml")
}

/// Load the config at `path`, falling back to defaults.
///
/// A missing file is silent; an unreadable or malformed one is logged, as is
/// any field holding an unknown scale or instrument or an oversized count.
pub(crate) fn load_config(path: &Path) -> Config {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Could not read config: {}", e);
            return Config::default();
        }
    };

    match toml::from_str::<Config>(&text) {
        Ok(config) => config.validated(path),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring malformed config: {}", e);
            Config::default()
        }
    }
}
