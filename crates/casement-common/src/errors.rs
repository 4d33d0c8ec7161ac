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

/// Failures reported by the collaborators the facade calls through.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("dialog cancelled: {0}")]
    DialogCancelled(String),

    #[error("shell integration error: {0}")]
    ShellError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("crash reporter error: {0}")]
    CrashReporterError(String),

    #[error("shared process error: {0}")]
    SharedProcessError(String),

    #[error("relaunch error: {0}")]
    RelaunchError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

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

        let err = ConfigError::ValidationError("history.max_entries = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: history.max_entries = 0"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::DialogCancelled("pick folder".into());
        assert_eq!(err.to_string(), "dialog cancelled: pick folder");

        let err = PlatformError::NotSupported("dialogs in headless mode".into());
        assert_eq!(err.to_string(), "not supported: dialogs in headless mode");

        let err = PlatformError::ShellError("no handler for scheme".into());
        assert_eq!(err.to_string(), "shell integration error: no handler for scheme");
    }

    #[test]
    fn platform_error_passes_through_unchanged() {
        let platform_err = PlatformError::RelaunchError("exec failed".into());
        let err: CasementError = platform_err.into();
        assert!(matches!(err, CasementError::Platform(PlatformError::RelaunchError(_))));
        assert_eq!(err.to_string(), "relaunch error: exec failed");
    }

    #[test]
    fn casement_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: CasementError = config_err.into();
        assert!(matches!(err, CasementError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn casement_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CasementError = io_err.into();
        assert!(matches!(err, CasementError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn casement_error_other_variants() {
        let err = CasementError::InvalidCommand("unknown variant `explode`".into());
        assert_eq!(err.to_string(), "invalid command: unknown variant `explode`");

        let err = CasementError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
