//! Tests for error types

#[cfg(test)]
mod tests {
    use crate::error::AdbError;
    use std::path::PathBuf;

    #[test]
    fn test_spawn_error_display() {
        let err = AdbError::Spawn {
            command: "adb bugreport".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("adb bugreport"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_config_error_display() {
        let err = AdbError::Config {
            path: PathBuf::from("/tmp/.adbandroidconfig"),
            message: "expected a string".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains(".adbandroidconfig"));
        assert!(msg.contains("expected a string"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AdbError = io_err.into();
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_error_from_string() {
        let err: AdbError = "something went wrong".to_string().into();
        assert_eq!(format!("{}", err), "something went wrong");
    }
}
