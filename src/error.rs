use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pattern implementations and the catalog around them.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("cursor has no more elements")]
    CursorExhausted,

    #[error("no snapshot stored at index {index} (history holds {len})")]
    SnapshotMissing { index: usize, len: usize },

    #[error("builder is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("arithmetic overflow while evaluating `{op}`")]
    ArithmeticOverflow { op: &'static str },

    #[error("unknown demo `{0}` (run `patterns list` to see the catalog)")]
    UnknownDemo(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write demo output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PatternError::SnapshotMissing { index: 3, len: 2 }.to_string(),
            "no snapshot stored at index 3 (history holds 2)"
        );
        assert_eq!(
            PatternError::MissingField("dough").to_string(),
            "builder is missing required field `dough`"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PatternError = io.into();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
