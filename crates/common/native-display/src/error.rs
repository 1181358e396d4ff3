use thiserror::Error;

/// Failures inside a platform back end. These never leave the crate: the
/// public API logs them and substitutes zero values.
#[derive(Debug, Error)]
pub(crate) enum DisplayError {
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    #[error("No display available")]
    NoDisplay,

    #[cfg_attr(any(target_os = "macos", target_os = "windows"), allow(dead_code))]
    #[error("Unsupported")]
    Unsupported,

    #[cfg_attr(
        not(any(target_os = "linux", target_os = "macos", target_os = "windows")),
        allow(dead_code)
    )]
    #[error("Platform error: {message}")]
    Platform {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DisplayError {
    #[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
    pub(crate) fn platform<S: Into<String>>(message: S) -> Self {
        DisplayError::Platform {
            message: message.into(),
            source: None,
        }
    }

    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    pub(crate) fn platform_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        DisplayError::Platform {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

pub(crate) type DisplayResult<T> = Result<T, DisplayError>;
