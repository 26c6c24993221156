use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
    #[error("delay window must satisfy 0 < min < max, got [{min}, {max})")]
    InvalidDelayWindow { min: f64, max: f64 },
    #[error("poll interval must be between 1 and 1000 ms, got {0}")]
    InvalidPollInterval(u64),
}

//
// ─── REACTION SETTINGS ────────────────────────────────────────────────────────
//

/// Timing knobs for the reaction trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReactionSettings {
    min_delay_secs: f64,
    max_delay_secs: f64,
    poll_interval_ms: u64,
}

impl ReactionSettings {
    pub const DEFAULT_MIN_DELAY_SECS: f64 = 2.0;
    pub const DEFAULT_MAX_DELAY_SECS: f64 = 5.0;
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

    /// # Errors
    ///
    /// Returns `SettingsError` when the delay window is empty or not finite,
    /// or the poll interval is outside 1..=1000 ms.
    pub fn new(
        min_delay_secs: f64,
        max_delay_secs: f64,
        poll_interval_ms: u64,
    ) -> Result<Self, SettingsError> {
        let window_ok = min_delay_secs.is_finite()
            && max_delay_secs.is_finite()
            && min_delay_secs > 0.0
            && min_delay_secs < max_delay_secs;
        if !window_ok {
            return Err(SettingsError::InvalidDelayWindow {
                min: min_delay_secs,
                max: max_delay_secs,
            });
        }
        if !(1..=1000).contains(&poll_interval_ms) {
            return Err(SettingsError::InvalidPollInterval(poll_interval_ms));
        }
        Ok(Self {
            min_delay_secs,
            max_delay_secs,
            poll_interval_ms,
        })
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidPollInterval` if out of range.
    pub fn with_poll_interval_ms(self, poll_interval_ms: u64) -> Result<Self, SettingsError> {
        Self::new(self.min_delay_secs, self.max_delay_secs, poll_interval_ms)
    }

    #[must_use]
    pub fn min_delay_secs(&self) -> f64 {
        self.min_delay_secs
    }

    #[must_use]
    pub fn max_delay_secs(&self) -> f64 {
        self.max_delay_secs
    }

    #[must_use]
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self {
            min_delay_secs: Self::DEFAULT_MIN_DELAY_SECS,
            max_delay_secs: Self::DEFAULT_MAX_DELAY_SECS,
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

//
// ─── AI SETTINGS ──────────────────────────────────────────────────────────────
//

/// Connection settings for the optional text-generation backend.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AiSettings {
    api_key: Option<String>,
    api_model: Option<String>,
    api_base_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AiSettingsDraft {
    pub api_key: Option<String>,
    pub api_model: Option<String>,
    pub api_base_url: Option<String>,
}

impl AiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidBaseUrl` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AiSettings, SettingsError> {
        let api_key = normalize_optional(self.api_key);
        let api_model = normalize_optional(self.api_model);
        let api_base_url = normalize_optional(self.api_base_url);

        if let Some(url) = api_base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(SettingsError::InvalidBaseUrl);
            }
        }

        Ok(AiSettings {
            api_key,
            api_model,
            api_base_url,
        })
    }
}

impl AiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn api_model(&self) -> Option<&str> {
        self.api_model.as_deref()
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
