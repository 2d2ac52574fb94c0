use std::path::PathBuf;

use thiserror::Error;

/// Why a single proxy line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least host:port, found {0} field(s)")]
    TooFewFields(usize),

    #[error("expected at most 4 fields, found {0}")]
    TooManyFields(usize),

    #[error("host is empty")]
    EmptyHost,

    #[error("port is empty")]
    EmptyPort,

    #[error("invalid port number: {0}")]
    InvalidPort(String),

    #[error("IPv6 host literals are not supported: {0}")]
    Ipv6Host(String),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("line {line_number} ('{content}'): {source}")]
    Parse {
        line_number: usize,
        content: String,
        #[source]
        source: ParseError,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
