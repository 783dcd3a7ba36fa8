mod config;

pub use config::{Config, FocusConfig, MomentumConfig, RoutineConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/discipline[-dev]/` based on DISCIPLINE_ENV.
///
/// Set DISCIPLINE_ENV=dev to use the development config directory. The
/// directory is not created.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    config_dir_from(dirs::home_dir(), std::env::var("DISCIPLINE_ENV").ok().as_deref())
}

fn config_dir_from(home: Option<PathBuf>, env: Option<&str>) -> Result<PathBuf, ConfigError> {
    let base_dir = home.ok_or(ConfigError::HomeDirUnavailable)?.join(".config");

    let dir = if env == Some("dev") {
        base_dir.join("discipline-dev")
    } else {
        base_dir.join("discipline")
    };

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_without_home_is_reported() {
        let err = config_dir_from(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::HomeDirUnavailable));
    }

    #[test]
    fn config_dir_switches_on_dev_env() {
        let home = PathBuf::from("/home/tester");
        assert_eq!(
            config_dir_from(Some(home.clone()), None).unwrap(),
            home.join(".config").join("discipline")
        );
        assert_eq!(
            config_dir_from(Some(home.clone()), Some("production")).unwrap(),
            home.join(".config").join("discipline")
        );
        assert_eq!(
            config_dir_from(Some(home.clone()), Some("dev")).unwrap(),
            home.join(".config").join("discipline-dev")
        );
    }
}
