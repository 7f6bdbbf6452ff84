// libdesfire-rs/libdesfire/src/crypto/context.rs

use aes::Aes128;
use cipher::generic_array::GenericArray;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, IvState, KeyInit, KeyIvInit};
use des::{Des, TdesEde2, TdesEde3};
use log::trace;
use zeroize::Zeroize;

use super::KeyType;
use crate::{Error, Result};

/// CBC cipher that keeps its chaining state between calls.
///
/// A fresh context starts from an all-zero IV. After every `encrypt` or
/// `decrypt` the IV becomes the last ciphertext block processed, so a
/// decrypt followed by an encrypt continues one chain. No padding is ever
/// applied: inputs must be a whole number of blocks.
pub struct CipherContext {
    key_type: KeyType,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl CipherContext {
    pub fn new(key_type: KeyType, key: &[u8]) -> Result<Self> {
        key_type.check_key(key)?;
        Ok(Self {
            key_type,
            key: key.to_vec(),
            iv: vec![0u8; key_type.block_len()],
        })
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Current chaining value (the IV of the next operation).
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Restart the chain from an all-zero IV.
    pub fn reset(&mut self) {
        self.iv.iter_mut().for_each(|b| *b = 0);
    }

    pub fn encrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut buf = self.aligned_copy(data)?;
        match self.key_type {
            KeyType::Des => cbc_encrypt::<Des>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::TwoKey3Des => cbc_encrypt::<TdesEde2>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::ThreeKey3Des => cbc_encrypt::<TdesEde3>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::Aes128 => cbc_encrypt::<Aes128>(&self.key, &mut self.iv, &mut buf)?,
        }
        trace!("{} cbc encrypt {} bytes", self.key_type, buf.len());
        Ok(buf)
    }

    pub fn decrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut buf = self.aligned_copy(data)?;
        match self.key_type {
            KeyType::Des => cbc_decrypt::<Des>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::TwoKey3Des => cbc_decrypt::<TdesEde2>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::ThreeKey3Des => cbc_decrypt::<TdesEde3>(&self.key, &mut self.iv, &mut buf)?,
            KeyType::Aes128 => cbc_decrypt::<Aes128>(&self.key, &mut self.iv, &mut buf)?,
        }
        trace!("{} cbc decrypt {} bytes", self.key_type, buf.len());
        Ok(buf)
    }

    fn aligned_copy(&self, data: &[u8]) -> Result<Vec<u8>> {
        let block = self.key_type.block_len();
        if data.len() % block != 0 {
            return Err(Error::BlockAlignment {
                block,
                actual: data.len(),
            });
        }
        Ok(data.to_vec())
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        self.key.zeroize();
        self.iv.zeroize();
    }
}

impl std::fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherContext")
            .field("key_type", &self.key_type)
            .finish_non_exhaustive()
    }
}

fn cbc_encrypt<C>(key: &[u8], iv: &mut Vec<u8>, buf: &mut [u8]) -> Result<()>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let mut enc = cbc::Encryptor::<C>::new_from_slices(key, iv.as_slice()).map_err(|_| {
        Error::InvalidLength {
            expected: C::key_size(),
            actual: key.len(),
        }
    })?;
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        enc.encrypt_block_mut(GenericArray::from_mut_slice(chunk));
    }
    *iv = enc.iv_state().to_vec();
    Ok(())
}

fn cbc_decrypt<C>(key: &[u8], iv: &mut Vec<u8>, buf: &mut [u8]) -> Result<()>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let mut dec = cbc::Decryptor::<C>::new_from_slices(key, iv.as_slice()).map_err(|_| {
        Error::InvalidLength {
            expected: C::key_size(),
            actual: key.len(),
        }
    })?;
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        dec.decrypt_block_mut(GenericArray::from_mut_slice(chunk));
    }
    *iv = dec.iv_state().to_vec();
    Ok(())
}

/// One-shot CBC encryption from an all-zero IV.
pub fn encrypt(data: &[u8], key: &[u8], key_type: KeyType) -> Result<Vec<u8>> {
    CipherContext::new(key_type, key)?.encrypt(data)
}

/// One-shot CBC decryption from an all-zero IV.
pub fn decrypt(data: &[u8], key: &[u8], key_type: KeyType) -> Result<Vec<u8>> {
    CipherContext::new(key_type, key)?.decrypt(data)
}
