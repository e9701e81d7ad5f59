pub type SweepResult<T> = Result<T, SweepError>;

#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("view not visible: {0}")]
    ViewNotVisible(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("encoder not configured: {0}")]
    EncoderNotConfigured(String),

    #[error("encoder path invalid: {0}")]
    EncoderPathInvalid(String),

    #[error("encoder exited with status {status}: {stderr}")]
    EncoderFailed { status: i32, stderr: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SweepError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn view_not_visible(msg: impl Into<String>) -> Self {
        Self::ViewNotVisible(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn encoder_not_configured(msg: impl Into<String>) -> Self {
        Self::EncoderNotConfigured(msg.into())
    }

    pub fn encoder_path_invalid(msg: impl Into<String>) -> Self {
        Self::EncoderPathInvalid(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SweepError::invalid_parameter("x")
                .to_string()
                .contains("invalid parameter:")
        );
        assert!(
            SweepError::view_not_visible("x")
                .to_string()
                .contains("view not visible:")
        );
        assert!(SweepError::io("x").to_string().contains("i/o error:"));
        assert!(
            SweepError::encoder_not_configured("x")
                .to_string()
                .contains("encoder not configured:")
        );
        assert!(
            SweepError::encoder_path_invalid("x")
                .to_string()
                .contains("encoder path invalid:")
        );
    }

    #[test]
    fn encoder_failed_carries_status_and_stderr() {
        let err = SweepError::EncoderFailed {
            status: 1,
            stderr: "no such filter".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status 1"));
        assert!(msg.contains("no such filter"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SweepError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
