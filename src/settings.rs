use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::config::{
    APP_DIR_NAME, DEFAULT_BRICK_TICK_MS, DEFAULT_GROWTH_PER_APPLE, DEFAULT_POINTS_PER_APPLE,
    DEFAULT_SNAKE_TICK_MS, DEFAULT_WIN_LENGTH,
};
use crate::error::SettingsError;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Tunable timing and scoring values. Board size is fixed and not part of it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub snake_tick_ms: u64,
    pub brick_tick_ms: u64,
    pub growth_per_apple: u32,
    pub points_per_apple: u32,
    pub win_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snake_tick_ms: DEFAULT_SNAKE_TICK_MS,
            brick_tick_ms: DEFAULT_BRICK_TICK_MS,
            growth_per_apple: DEFAULT_GROWTH_PER_APPLE,
            points_per_apple: DEFAULT_POINTS_PER_APPLE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn snake_tick_interval(&self) -> Duration {
        Duration::from_millis(self.snake_tick_ms)
    }

    #[must_use]
    pub fn brick_tick_interval(&self) -> Duration {
        Duration::from_millis(self.brick_tick_ms)
    }

    /// Rejects values the game loop cannot run with.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.snake_tick_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "snake_tick_ms",
                reason: "must be greater than zero",
            });
        }
        if self.brick_tick_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "brick_tick_ms",
                reason: "must be greater than zero",
            });
        }
        if self.growth_per_apple == 0 {
            return Err(SettingsError::Invalid {
                field: "growth_per_apple",
                reason: "must be greater than zero",
            });
        }
        if self.points_per_apple == 0 {
            return Err(SettingsError::Invalid {
                field: "points_per_apple",
                reason: "must be greater than zero",
            });
        }

        Ok(self)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns the defaults when the file does not exist. Returns `Err` when the
/// file exists but cannot be read, parsed or validated, so the caller can
/// surface a warning before entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Settings>(&raw)
        .map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?
        .validate()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::error::SettingsError;

    use super::{Settings, load_settings};

    #[test]
    fn missing_settings_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded = load_settings(&path).expect("missing file should return defaults");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let path = write_test_file("partial", r#"{ "snake_tick_ms": 120, "growth_per_apple": 3 }"#);

        let loaded = load_settings(&path).expect("partial file should load");
        assert_eq!(loaded.snake_tick_interval(), Duration::from_millis(120));
        assert_eq!(loaded.growth_per_apple, 3);
        assert_eq!(loaded.brick_tick_ms, Settings::default().brick_tick_ms);

        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_settings_file_returns_error() {
        let path = write_test_file("malformed", "not-json");

        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Json { .. })
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let path = write_test_file("unknown", r#"{ "board_width": 40 }"#);

        assert!(load_settings(&path).is_err());

        cleanup_test_path(&path);
    }

    #[test]
    fn zero_interval_fails_validation() {
        let settings = Settings {
            snake_tick_ms: 0,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid {
                field: "snake_tick_ms",
                ..
            })
        ));
    }

    #[test]
    fn zero_growth_fails_validation() {
        let settings = Settings {
            growth_per_apple: 0,
            ..Settings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_points_fails_validation() {
        let settings = Settings {
            points_per_apple: 0,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid {
                field: "points_per_apple",
                ..
            })
        ));
    }

    fn write_test_file(label: &str, contents: &str) -> PathBuf {
        let path = unique_test_path(label);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, contents).expect("test file write should succeed");
        path
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("brick-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
