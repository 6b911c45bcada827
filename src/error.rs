//! Client error type
//!
//! Every fallible operation outside the canvas boundary returns `HudError`.
//! Rendering helpers keep SDL2's `Result<(), String>` convention and are
//! converted with `HudError::Sdl` where they meet this type.

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HudError {
    /// SDL2 call failed (SDL reports errors as plain strings)
    #[error("SDL error: {0}")]
    Sdl(String),

    /// Texture file could not be decoded or uploaded
    #[error("failed to load texture '{name}' from {path}: {reason}")]
    TextureLoad {
        name: String,
        path: PathBuf,
        reason: String,
    },

    /// Sprite requested for a name that was never loaded
    #[error("no texture loaded for '{0}'")]
    MissingTexture(String),

    /// Config file exists but could not be read
    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `ClientConfig`
    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Window reported a zero-sized dimension (minimized)
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    /// Startup step failed; wraps the underlying cause
    #[error("{context}")]
    Startup {
        context: String,
        #[source]
        source: Box<HudError>,
    },
}

impl HudError {
    /// Wraps `self` in a `Startup` error describing the step that failed
    pub fn during(self, context: impl Into<String>) -> Self {
        HudError::Startup {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<String> for HudError {
    fn from(message: String) -> Self {
        HudError::Sdl(message)
    }
}

/// Renders an error and its causes, one per line.
///
/// The first line is the error itself; each cause is prefixed with ` * ` and
/// indented one column further than the previous one.
///
/// ```text
/// failed to create render target
///  * SDL error: out of video memory
/// ```
pub fn format_error_stack(error: &dyn Error) -> String {
    let mut result = error.to_string();
    let mut indent = 0;
    let mut cause = error.source();

    while let Some(inner) = cause {
        result.push('\n');
        result.push_str(&" ".repeat(indent));
        result.push_str(" * ");
        result.push_str(&inner.to_string());
        indent += 1;
        cause = inner.source();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_error_has_no_causes() {
        let error = HudError::MissingTexture("header".to_string());
        assert_eq!(format_error_stack(&error), "no texture loaded for 'header'");
    }

    #[test]
    fn test_nested_errors_are_indented() {
        let error = HudError::Sdl("out of video memory".to_string())
            .during("failed to create render target")
            .during("startup aborted");

        let formatted = format_error_stack(&error);
        let lines: Vec<&str> = formatted.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "startup aborted");
        assert_eq!(lines[1], " * failed to create render target");
        assert_eq!(lines[2], "  * SDL error: out of video memory");
    }

    #[test]
    fn test_sdl_string_conversion() {
        let error: HudError = "window lost".to_string().into();
        assert!(matches!(error, HudError::Sdl(ref msg) if msg == "window lost"));
    }

    #[test]
    fn test_config_parse_error_keeps_source() {
        let parse_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = HudError::ConfigParse {
            path: PathBuf::from("client.json"),
            source: parse_error,
        };
        assert!(error.source().is_some());
        assert!(format_error_stack(&error).contains(" * "));
    }
}
