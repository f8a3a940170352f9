//! Scroll gate configuration.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration. Keys are camelCase to match the `data-*` world the config
//! is embedded in.

use serde::{Deserialize, Serialize};

/// Default progress at which the page pauses
pub const DEFAULT_PAUSE_POINT: f64 = 0.3;

/// Default half-width of the pause band
pub const DEFAULT_PAUSE_TOLERANCE: f64 = 0.015;

/// Default distance from the pause point that re-arms the pass flags
pub const DEFAULT_RESET_DISTANCE: f64 = 0.12;

/// Default scale applied to wheel/touch deltas while locked
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.15;

/// Default fade distance in pixels at both ends of the line
pub const DEFAULT_FADE_DISTANCE: f64 = 100.0;

/// Default height in pixels of one message step
pub const DEFAULT_MESSAGE_HEIGHT: f64 = 60.0;

/// Default pixels the page moves on release
pub const DEFAULT_UNLOCK_NUDGE: f64 = 12.0;

/// Progress changes below this are treated as noise
pub const DEFAULT_DIRECTION_NOISE_FLOOR: f64 = 1e-4;

/// Default slide distance in pixels for the message/action panels
pub const DEFAULT_PANEL_TRAVEL: f64 = 40.0;

/// Default delay before the action panel is shown after a forward pass
pub const DEFAULT_ACTION_REVEAL_DELAY_MS: u32 = 600;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("At least 2 messages required, got {0}")]
    TooFewMessages(usize),
}

/// Tunables for the scroll gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    /// Progress along the line where scrolling pauses
    pub pause_point: f64,
    /// Half-width of the band around `pause_point` that triggers the lock
    pub pause_tolerance: f64,
    /// Distance from `pause_point` beyond which pass flags reset
    pub reset_distance: f64,
    /// Multiplier applied to intercepted wheel/touch pixels
    pub wheel_sensitivity: f64,
    /// Pixels of indicator travel over which it fades in
    pub appear_distance: f64,
    /// Pixels before the end of the line over which it fades out
    pub disappear_distance: f64,
    /// Secondary progress needed to move from one message to the next
    pub message_height: f64,
    /// Pixels the page is moved in the travel direction on release
    pub unlock_nudge: f64,
    pub direction_noise_floor: f64,
    pub panel_travel: f64,
    pub action_reveal_delay_ms: u32,
    /// Messages cycled while the page is paused, in order
    pub messages: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pause_point: DEFAULT_PAUSE_POINT,
            pause_tolerance: DEFAULT_PAUSE_TOLERANCE,
            reset_distance: DEFAULT_RESET_DISTANCE,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            appear_distance: DEFAULT_FADE_DISTANCE,
            disappear_distance: DEFAULT_FADE_DISTANCE,
            message_height: DEFAULT_MESSAGE_HEIGHT,
            unlock_nudge: DEFAULT_UNLOCK_NUDGE,
            direction_noise_floor: DEFAULT_DIRECTION_NOISE_FLOOR,
            panel_travel: DEFAULT_PANEL_TRAVEL,
            action_reveal_delay_ms: DEFAULT_ACTION_REVEAL_DELAY_MS,
            messages: default_messages(),
        }
    }
}

fn default_messages() -> Vec<String> {
    [
        "Joining your meeting",
        "Recording every voice",
        "Transcribing in real time",
        "Summary ready when you hang up",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl GateConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize for embedding into the rendered page
    pub fn to_json(&self) -> String {
        // Plain numbers and strings only, serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(field: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value })
            }
        }

        check(
            "pausePoint",
            self.pause_point,
            self.pause_point > 0.0 && self.pause_point < 1.0,
        )?;
        check(
            "pauseTolerance",
            self.pause_tolerance,
            self.pause_tolerance >= 0.0,
        )?;
        check(
            "resetDistance",
            self.reset_distance,
            self.reset_distance > self.pause_tolerance,
        )?;
        check(
            "wheelSensitivity",
            self.wheel_sensitivity,
            self.wheel_sensitivity > 0.0,
        )?;
        check(
            "appearDistance",
            self.appear_distance,
            self.appear_distance >= 0.0,
        )?;
        check(
            "disappearDistance",
            self.disappear_distance,
            self.disappear_distance >= 0.0,
        )?;
        check(
            "messageHeight",
            self.message_height,
            self.message_height > 0.0,
        )?;
        check("unlockNudge", self.unlock_nudge, self.unlock_nudge >= 0.0)?;
        check(
            "directionNoiseFloor",
            self.direction_noise_floor,
            self.direction_noise_floor >= 0.0,
        )?;
        check("panelTravel", self.panel_travel, self.panel_travel >= 0.0)?;

        if self.messages.len() < 2 {
            return Err(ConfigError::TooFewMessages(self.messages.len()));
        }

        Ok(())
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Upper bound of secondary progress
    pub fn threshold(&self) -> f64 {
        self.messages.len().saturating_sub(1) as f64 * self.message_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.message_count(), 4);
        assert_eq!(config.threshold(), 180.0);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GateConfig::from_json("{}").unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            GateConfig::from_json(r#"{"pausePoint": 0.5, "messages": ["a", "b", "c"]}"#).unwrap();
        assert_eq!(config.pause_point, 0.5);
        assert_eq!(config.pause_tolerance, DEFAULT_PAUSE_TOLERANCE);
        assert_eq!(config.threshold(), 120.0);
    }

    #[test]
    fn test_malformed_json() {
        let result = GateConfig::from_json("{pausePoint:");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_pause_point_out_of_range() {
        let result = GateConfig::from_json(r#"{"pausePoint": 1.5}"#);
        assert_eq!(
            result,
            Err(ConfigError::OutOfRange {
                field: "pausePoint",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_reset_distance_must_exceed_tolerance() {
        let config = GateConfig {
            reset_distance: 0.01,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "resetDistance",
                ..
            })
        ));
    }

    #[test]
    fn test_too_few_messages() {
        let result = GateConfig::from_json(r#"{"messages": ["only"]}"#);
        assert_eq!(result, Err(ConfigError::TooFewMessages(1)));
    }

    #[test]
    fn test_json_roundtrip_keeps_camel_case() {
        let json = GateConfig::default().to_json();
        assert!(json.contains("\"pausePoint\""));
        assert!(json.contains("\"actionRevealDelayMs\""));
        assert_eq!(GateConfig::from_json(&json).unwrap(), GateConfig::default());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::OutOfRange {
            field: "messageHeight",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "messageHeight out of range: -1");
    }
}
