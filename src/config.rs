use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::typewriter::TypeTimings;

static SITE_CONFIG: &str = include_str!("../site.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub showcase_interval_ms: u64,
    pub reveal_delay_ms: u64,
    pub reveal_step_ms: u64,
    pub submit_delay_ms: u64,
    pub success_display_ms: u64,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub phrase_hold_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            showcase_interval_ms: 5000,
            reveal_delay_ms: 100,
            reveal_step_ms: 80,
            submit_delay_ms: 1500,
            success_display_ms: 5000,
            type_delay_ms: 50,
            delete_delay_ms: 50,
            phrase_hold_ms: 2000,
        }
    }
}

impl Timings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded configuration, falling back to defaults when it doesn't parse.
    pub fn load() -> Self {
        Self::from_json(SITE_CONFIG).unwrap_or_else(|e| {
            log::warn!("{e}; using default timings");
            Self::default()
        })
    }

    pub fn showcase_interval(&self) -> Duration {
        Duration::from_millis(self.showcase_interval_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn typewriter(&self) -> TypeTimings {
        TypeTimings {
            type_delay: Duration::from_millis(self.type_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            hold: Duration::from_millis(self.phrase_hold_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let timings = Timings::from_json(SITE_CONFIG).expect("site.json should parse");
        assert_eq!(timings.showcase_interval(), Duration::from_secs(5));
        assert_eq!(timings.reveal_step(), Duration::from_millis(80));
        assert_eq!(timings.success_display(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let timings = Timings::from_json(r#"{ "showcase_interval_ms": 3000 }"#).unwrap();
        assert_eq!(timings.showcase_interval_ms, 3000);
        assert_eq!(timings.submit_delay_ms, Timings::default().submit_delay_ms);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Timings::from_json(r#"{ "reveal_step_ms": "fast" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_typewriter_timings() {
        let tw = Timings::default().typewriter();
        assert_eq!(tw.type_delay, Duration::from_millis(50));
        assert_eq!(tw.hold, Duration::from_millis(2000));
    }
}
