//! Trainer configuration.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `AUREBESH_STUDY_SECONDS`.
pub const ENV_PREFIX: &str = "AUREBESH_";

/// Tunables for tracks, study countdown and quiz pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSettings {
    /// Sections in the standard alphabet track.
    pub section_count: usize,
    /// Length of the study countdown.
    pub study_seconds: u32,
    /// Sections skipped by "skip ahead", clamped per track.
    pub skip_section_increment: usize,
    /// Pause between answering and the next question.
    pub answer_delay_ms: u64,
    /// Upper bound on sections for the digraph-focused tracks.
    pub focus_section_cap: usize,
    pub numbers_section_count: usize,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            section_count: 6,
            study_seconds: 20,
            skip_section_increment: 2,
            answer_delay_ms: 350,
            focus_section_cap: 4,
            numbers_section_count: 4,
        }
    }
}

impl TrainerSettings {
    /// Check that every count and duration is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.section_count == 0 {
            return Err(SettingsError::Zero {
                field: "section_count",
            });
        }
        if self.study_seconds == 0 {
            return Err(SettingsError::Zero {
                field: "study_seconds",
            });
        }
        if self.focus_section_cap == 0 {
            return Err(SettingsError::Zero {
                field: "focus_section_cap",
            });
        }
        if self.numbers_section_count == 0 {
            return Err(SettingsError::Zero {
                field: "numbers_section_count",
            });
        }
        Ok(())
    }

    /// Defaults overridden by `AUREBESH_*` process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`, then validated.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        override_from(&lookup, "SECTION_COUNT", &mut settings.section_count)?;
        override_from(&lookup, "STUDY_SECONDS", &mut settings.study_seconds)?;
        override_from(
            &lookup,
            "SKIP_SECTION_INCREMENT",
            &mut settings.skip_section_increment,
        )?;
        override_from(&lookup, "ANSWER_DELAY_MS", &mut settings.answer_delay_ms)?;
        override_from(&lookup, "FOCUS_SECTION_CAP", &mut settings.focus_section_cap)?;
        override_from(
            &lookup,
            "NUMBERS_SECTION_COUNT",
            &mut settings.numbers_section_count,
        )?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn study_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.study_seconds))
    }

    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.answer_delay_ms)
    }

    pub(crate) fn sections(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN)
    }
}

fn override_from<F, T>(lookup: &F, name: &str, target: &mut T) -> Result<(), SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let key = format!("{ENV_PREFIX}{name}");
    if let Some(raw) = lookup(&key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidValue { key, value: raw })?;
    }
    Ok(())
}
