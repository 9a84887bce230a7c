// ABOUTME: Configuration module for the text-slides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::controls::DEFAULT_SWIPE_THRESHOLD;
use crate::errors::{Result, SlidesError};
use crate::pptx::ExportConfig;
use crate::segment::DEFAULT_PREVIEW_CHARS;
use crate::session::Session;
use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Global configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub aspect_ratio: String,
    pub swipe_threshold: f64,
    pub preview_chars: usize,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let export = ExportConfig::default();
        Self {
            title: export.title,
            aspect_ratio: export.aspect_ratio,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            debounce_ms: 500,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set but unparsable numbers are
    /// reported as configuration errors.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            title: env::var("SLIDES_TITLE").unwrap_or(defaults.title),
            aspect_ratio: env::var("SLIDES_ASPECT_RATIO").unwrap_or(defaults.aspect_ratio),
            swipe_threshold: parse_var("SLIDES_SWIPE_THRESHOLD", defaults.swipe_threshold)?,
            preview_chars: parse_var("SLIDES_PREVIEW_LENGTH", defaults.preview_chars)?,
            debounce_ms: parse_var("SLIDES_DEBOUNCE_MS", defaults.debounce_ms)?,
        })
    }

    /// Get an export configuration, with CLI overrides taking precedence
    pub fn get_export_config(
        &self,
        title: Option<String>,
        aspect_ratio: Option<String>,
    ) -> ExportConfig {
        ExportConfig {
            title: title.unwrap_or_else(|| self.title.clone()),
            aspect_ratio: aspect_ratio.unwrap_or_else(|| self.aspect_ratio.clone()),
        }
    }

    /// Open a session on `text` using the configured swipe threshold
    pub fn session(&self, text: impl Into<String>) -> Session {
        Session::new(text).with_swipe_threshold(self.swipe_threshold)
    }

    /// Get a watch configuration for `input`, with CLI overrides
    pub fn get_watch_config(
        &self,
        input: PathBuf,
        pptx_output: Option<PathBuf>,
        debounce_ms: Option<u64>,
    ) -> WatchConfig {
        WatchConfig {
            input_path: input,
            pptx_output,
            export: self.get_export_config(None, None),
            preview_chars: self.preview_chars,
            debounce_ms: debounce_ms.unwrap_or(self.debounce_ms),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            SlidesError::ConfigError(format!("Invalid value for {}: {:?}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
