// crates/bishop-core/src/fingerprint.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{BishopError, Result};

pub const OCTETS: usize = 16;
pub const DELIM: char = ':';

/// 16 raw octets, e.g. an MD5 key fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; OCTETS]);

impl Fingerprint {
    #[inline]
    pub fn from_bytes(bytes: [u8; OCTETS]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; OCTETS] {
        &self.0
    }

    /// Parse `aa:bb:...` (16 octets, hex digits in either case).
    ///
    /// Whitespace around the whole string is ignored; anything else that is
    /// not exactly two hex digits between delimiters is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(DELIM).collect();
        if parts.len() != OCTETS {
            return Err(BishopError::OctetCount { found: parts.len() });
        }

        let mut out = [0u8; OCTETS];
        for (index, octet) in parts.into_iter().enumerate() {
            out[index] = parse_octet(index, octet)?;
        }
        Ok(Self(out))
    }
}

fn parse_octet(index: usize, octet: &str) -> Result<u8> {
    // chars, not bytes: a multi-byte char must not pass as two digits
    if octet.chars().count() != 2 {
        return Err(BishopError::OctetLength {
            index,
            octet: octet.to_string(),
        });
    }
    // from_str_radix alone would accept a leading '+'
    if !octet.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BishopError::InvalidHex {
            index,
            octet: octet.to_string(),
        });
    }
    u8::from_str_radix(octet, 16).map_err(|_| BishopError::InvalidHex {
        index,
        octet: octet.to_string(),
    })
}

impl FromStr for Fingerprint {
    type Err = BishopError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[u8; OCTETS]> for Fingerprint {
    fn from(bytes: [u8; OCTETS]) -> Self {
        Self(bytes)
    }
}

/// Canonical lowercase colon form.
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIM}")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
