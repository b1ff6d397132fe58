use thiserror::Error;

pub type Result<T> = std::result::Result<T, BishopError>;

/// Format errors on the fingerprint text, one variant per way the shape
/// can be wrong. Nothing past parsing can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BishopError {
    #[error("format error: expected 16 octets, found {found}")]
    OctetCount { found: usize },

    #[error("format error: octet {index} ({octet:?}) must be exactly two hex digits")]
    OctetLength { index: usize, octet: String },

    #[error("format error: octet {index} ({octet:?}) is not hexadecimal")]
    InvalidHex { index: usize, octet: String },
}

