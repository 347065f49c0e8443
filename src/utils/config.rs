use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

const MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub ai_delay: Duration,
    pub ar_delay: Duration,
    pub nfc_delay: Duration,
    pub payment_delay: Duration,
    pub log_level: String,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_delay: Duration::from_millis(2000),
            ar_delay: Duration::from_millis(3000),
            nfc_delay: Duration::from_millis(2000),
            payment_delay: Duration::from_millis(2000),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    /// Load from a dotenv-format file without touching the process environment.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut values = HashMap::new();
        #[allow(deprecated)]
        let entries = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        for entry in entries {
            let (key, value) = entry.context("Malformed config file entry")?;
            values.insert(key, value);
        }

        let config = Self::from_lookup(|key| values.get(key).cloned())?;
        tracing::info!("Config: loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let config = Config {
            ai_delay: delay(&lookup, "AURA_AI_DELAY_MS", defaults.ai_delay)?,
            ar_delay: delay(&lookup, "AURA_AR_DELAY_MS", defaults.ar_delay)?,
            nfc_delay: delay(&lookup, "AURA_NFC_DELAY_MS", defaults.nfc_delay)?,
            payment_delay: delay(&lookup, "AURA_PAYMENT_DELAY_MS", defaults.payment_delay)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        let delays = [
            ("AURA_AI_DELAY_MS", self.ai_delay),
            ("AURA_AR_DELAY_MS", self.ar_delay),
            ("AURA_NFC_DELAY_MS", self.nfc_delay),
            ("AURA_PAYMENT_DELAY_MS", self.payment_delay),
        ];
        for (key, value) in delays {
            if value > Duration::from_millis(MAX_DELAY_MS) {
                return Err(anyhow::anyhow!(
                    "{} must be at most {} ms",
                    key,
                    MAX_DELAY_MS
                ));
            }
        }

        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn delay<F>(lookup: &F, key: &str, default: Duration) -> anyhow::Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of milliseconds", key))?;
            Ok(Duration::from_millis(millis))
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.ai_delay, Duration::from_millis(2000));
        assert_eq!(config.ar_delay, Duration::from_millis(3000));
        assert_eq!(config.log_level, "info");
        assert!(!config.is_production());
    }

    #[test]
    fn test_rejects_bad_delays() {
        let garbage = Config::from_lookup(|key| {
            (key == "AURA_NFC_DELAY_MS").then(|| "soon".to_string())
        });
        assert!(garbage.is_err());

        let too_long = Config::from_lookup(|key| {
            (key == "AURA_PAYMENT_DELAY_MS").then(|| "60000".to_string())
        });
        assert!(too_long.is_err());
    }
}
