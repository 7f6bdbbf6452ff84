// libdesfire-rs/libdesfire/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ApplicationId - Newtype Pattern (3 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApplicationId([u8; 3]);

impl ApplicationId {
    /// The card-level (PICC) application.
    pub const PICC: Self = Self([0x00, 0x00, 0x00]);

    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    pub fn is_picc(&self) -> bool {
        *self == Self::PICC
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for ApplicationId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 3] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 3,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl FromStr for ApplicationId {
    type Err = Error;

    /// Parse exactly six hex characters, e.g. `112233`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 6 {
            return Err(Error::InvalidInput(format!(
                "application id must be 6 hex characters, got {:?}",
                s
            )));
        }
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidInput)?;
        Self::try_from(&bytes[..])
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// FileId (1 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileId(u8);

impl FileId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<&[u8]> for FileId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [id] => Ok(Self(*id)),
            _ => Err(Error::InvalidLength {
                expected: 1,
                actual: bytes.len(),
            }),
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Two-byte outcome code returned with every card exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const SUCCESS: Self = Self::new(0x91, 0x00);
    pub const MORE_DATA: Self = Self::new(0x91, 0xAF);
    pub const APPLICATION_NOT_FOUND: Self = Self::new(0x91, 0xA0);
    pub const FILE_NOT_FOUND: Self = Self::new(0x91, 0xF0);
    pub const ISO_FILE_NOT_FOUND: Self = Self::new(0x6A, 0x82);
    pub const LENGTH_ERROR: Self = Self::new(0x91, 0x7E);
    pub const AUTHENTICATION_ERROR: Self = Self::new(0x91, 0xAE);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        [self.sw1, self.sw2]
    }

    /// Classify the pair using the fixed card status table.
    pub fn kind(&self) -> crate::protocol::StatusKind {
        crate::protocol::StatusKind::from(*self)
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    pub fn is_more_data(&self) -> bool {
        *self == Self::MORE_DATA
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}
