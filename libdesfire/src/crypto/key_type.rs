// libdesfire-rs/libdesfire/src/crypto/key_type.rs

use std::str::FromStr;

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{INS_AUTHENTICATE_AES, INS_AUTHENTICATE_DES, INS_AUTHENTICATE_ISO};
use crate::{Error, Result};

/// Symmetric algorithm variant used for card keys.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyType {
    /// Single DES, 8-byte key.
    #[default]
    #[display(fmt = "DES")]
    Des,
    /// Two-key triple DES, 16-byte key.
    #[display(fmt = "2TDEA")]
    TwoKey3Des,
    /// Three-key triple DES, 24-byte key.
    #[display(fmt = "3TDEA")]
    ThreeKey3Des,
    /// AES-128, 16-byte key.
    #[display(fmt = "AES")]
    Aes128,
}

impl KeyType {
    pub const ALL: [Self; 4] = [Self::Des, Self::TwoKey3Des, Self::ThreeKey3Des, Self::Aes128];

    /// Required key length in bytes.
    pub const fn key_len(&self) -> usize {
        match self {
            Self::Des => 8,
            Self::TwoKey3Des | Self::Aes128 => 16,
            Self::ThreeKey3Des => 24,
        }
    }

    /// Cipher block length in bytes. Both triple DES variants keep the DES
    /// 8-byte block; only the key length tells them apart.
    pub const fn block_len(&self) -> usize {
        match self {
            Self::Des | Self::TwoKey3Des | Self::ThreeKey3Des => 8,
            Self::Aes128 => 16,
        }
    }

    /// Length of rndA / rndB exchanged during the handshake. This is also
    /// the rotation width.
    pub const fn challenge_len(&self) -> usize {
        match self {
            Self::Des | Self::TwoKey3Des => 8,
            Self::ThreeKey3Des | Self::Aes128 => 16,
        }
    }

    /// Authenticate instruction for this key type.
    pub const fn auth_instruction(&self) -> u8 {
        match self {
            Self::Des => INS_AUTHENTICATE_DES,
            Self::TwoKey3Des | Self::ThreeKey3Des => INS_AUTHENTICATE_ISO,
            Self::Aes128 => INS_AUTHENTICATE_AES,
        }
    }

    /// Check `key` has the length this variant requires.
    pub fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.len() != self.key_len() {
            return Err(Error::KeyLengthMismatch {
                key_type: *self,
                expected: self.key_len(),
                actual: key.len(),
            });
        }
        Ok(())
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DES" => Ok(Self::Des),
            "2TDEA" | "2K3DES" => Ok(Self::TwoKey3Des),
            "3TDEA" | "3K3DES" => Ok(Self::ThreeKey3Des),
            "AES" | "AES128" => Ok(Self::Aes128),
            other => Err(Error::UnsupportedKeyType(other.to_string())),
        }
    }
}
