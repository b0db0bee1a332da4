//! Store configuration.
//!
//! A [`StoreConfig`] describes the initial tool settings and the history
//! limit of a new store. It can be loaded from JSON, where every field is
//! optional:
//!
//! ```rust
//! use sketchstate::config::StoreConfig;
//! use sketchstate::core::Tool;
//!
//! let config = StoreConfig::from_json(r##"{ "tool": "circle", "color": "#336699" }"##).unwrap();
//! assert_eq!(config.tool, Tool::Circle);
//! assert_eq!(config.stroke_width, 2.0);
//! ```
//!
//! Validation uses `Validation` so that a config with several problems
//! reports all of them at once.

mod violations;

pub use violations::{ConfigError, ConfigViolation};
pub(crate) use violations::format_violations;

use crate::core::{
    validate_font_size, validate_stroke_width, Color, DocumentState, Tool, DEFAULT_FONT_SIZE,
    DEFAULT_STROKE_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Initial settings for a [`DrawingStore`](crate::store::DrawingStore).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub tool: Tool,
    pub color: Color,
    pub stroke_width: f32,
    pub font_size: f32,
    /// Maximum undo depth. `None`, the default, keeps every snapshot.
    pub history_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: Color::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            history_limit: None,
        }
    }
}

impl StoreConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every field, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            match validate_stroke_width(self.stroke_width) {
                Ok(_) => Validation::success(()),
                Err(err) => Validation::fail(err.into()),
            },
            match validate_font_size(self.font_size) {
                Ok(_) => Validation::success(()),
                Err(err) => Validation::fail(err.into()),
            },
            match self.history_limit {
                Some(0) => Validation::fail(ConfigViolation::ZeroHistoryLimit),
                _ => Validation::success(()),
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, converting failures into a [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub(crate) fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit.and_then(NonZeroUsize::new)
    }

    pub(crate) fn initial_state(&self) -> DocumentState {
        DocumentState {
            current_tool: self.tool,
            current_color: self.color,
            stroke_width: self.stroke_width,
            font_size: self.font_size,
            ..DocumentState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SettingsError;

    #[test]
    fn default_config_is_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = StoreConfig {
            stroke_width: 0.0,
            font_size: -4.0,
            history_limit: Some(0),
            ..StoreConfig::default()
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigViolation::Setting(SettingsError::InvalidStrokeWidth(_))
                )));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigViolation::Setting(SettingsError::InvalidFontSize(_))
                )));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroHistoryLimit)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn json_overrides_selected_fields() {
        let config = StoreConfig::from_json(
            r##"{ "tool": "text", "color": "#fff", "font_size": 24, "history_limit": 5 }"##,
        )
        .unwrap();

        assert_eq!(config.tool, Tool::Text);
        assert_eq!(config.color, Color::WHITE);
        assert_eq!(config.font_size, 24.0);
        assert_eq!(config.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.history_limit, Some(5));
    }

    #[test]
    fn null_history_limit_means_unbounded() {
        let config = StoreConfig::from_json(r#"{ "history_limit": null }"#).unwrap();
        assert_eq!(config.history_limit, None);
        assert_eq!(config.history_limit(), None);

        let config = StoreConfig::from_json(r#"{ "history_limit": 3 }"#).unwrap();
        assert_eq!(config.history_limit().map(|l| l.get()), Some(3));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = StoreConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = StoreConfig::from_json(r#"{ "color": "blue" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_values_report_every_violation() {
        let result = StoreConfig::from_json(r#"{ "stroke_width": 0, "history_limit": 0 }"#);

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::Setting(
                    SettingsError::InvalidStrokeWidth(0.0)
                )));
                assert!(violations.contains(&ConfigViolation::ZeroHistoryLimit));
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn initial_state_uses_configured_settings() {
        let config = StoreConfig {
            tool: Tool::Rectangle,
            color: Color::rgb(1, 2, 3),
            stroke_width: 7.0,
            font_size: 30.0,
            history_limit: None,
        };

        let state = config.initial_state();
        assert_eq!(state.current_tool, Tool::Rectangle);
        assert_eq!(state.current_color, Color::rgb(1, 2, 3));
        assert_eq!(state.stroke_width, 7.0);
        assert_eq!(state.font_size, 30.0);
        assert!(state.shapes.is_empty());
    }
}
