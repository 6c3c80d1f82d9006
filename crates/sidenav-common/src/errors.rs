use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SideNavError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("gesture script error: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("left.width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: left.width = 0 is out of range"
        );
    }

    #[test]
    fn sidenav_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SideNavError = config_err.into();
        assert!(matches!(err, SideNavError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn sidenav_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SideNavError = io_err.into();
        assert!(matches!(err, SideNavError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn sidenav_error_other_variants() {
        let err = SideNavError::Script("expected array".into());
        assert_eq!(err.to_string(), "gesture script error: expected array");

        let err = SideNavError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
