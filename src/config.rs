use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "voicebell.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub alarm: AlarmConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// ============================================================================
// Voice Config
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct VoiceConfig {
    /// Extra mis-hearing fixes, applied after the built-in ones
    #[serde(default)]
    pub corrections: BTreeMap<String, String>,

    /// Phrases that mark an utterance as an alarm command
    #[serde(default = "default_alarm_keywords")]
    pub alarm_keywords: Vec<String>,

    /// Phrases that mark an utterance as a timer command
    #[serde(default = "default_timer_keywords")]
    pub timer_keywords: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            corrections: BTreeMap::new(),
            alarm_keywords: default_alarm_keywords(),
            timer_keywords: default_timer_keywords(),
        }
    }
}

fn default_alarm_keywords() -> Vec<String> {
    ["alarm", "wake me", "wake up", "wake", "me up at", "up at"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timer_keywords() -> Vec<String> {
    ["timer", "countdown", "count down"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// Alarm Config
// ============================================================================

/// Settings applied to every alarm created by voice
#[derive(Debug, Deserialize, Clone)]
pub struct AlarmConfig {
    #[serde(default = "default_true")]
    pub vibrate: bool,
    #[serde(default = "default_true")]
    pub gradual_volume: bool,
    /// 0-100
    #[serde(default = "default_volume_level")]
    pub volume_level: u8,
    #[serde(default = "default_true")]
    pub snooze_enabled: bool,
    #[serde(default = "default_snooze_minutes")]
    pub snooze_minutes: u32,
    #[serde(default = "default_max_snooze_count")]
    pub max_snooze_count: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            vibrate: true,
            gradual_volume: true,
            volume_level: default_volume_level(),
            snooze_enabled: true,
            snooze_minutes: default_snooze_minutes(),
            max_snooze_count: default_max_snooze_count(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_volume_level() -> u8 {
    80
}

fn default_snooze_minutes() -> u32 {
    10
}

fn default_max_snooze_count() -> u32 {
    3
}

// ============================================================================
// UI Config
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct UiConfig {
    /// Show alarm times as 19:30 instead of 07:30 PM
    #[serde(default)]
    pub use_24_hour: bool,
}

impl Config {
    /// Load `voicebell.toml` from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from `path`; a missing or unreadable file yields the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Config::default();
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Config::default();
            }
        };

        Self::parse(&text).unwrap_or_else(|e| {
            warn!("Invalid config {}: {}", path.display(), e);
            Config::default()
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.alarm.volume_level = config.alarm.volume_level.min(100);
        Ok(config)
    }
}
