//! Encrypted at-rest storage for the configuration file.
//!
//! The config carries the session code, an opaque credential bound to a
//! remote account, so it is never written in plaintext. Content is encrypted
//! with AES-256-CBC using key material embedded at build time and stored
//! base64-encoded.

use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone)]
pub struct SecureFile {
    path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl SecureFile {
    pub fn new(path: &Path) -> Self {
        // Compile-time embedded keys
        let key = APP_METADATA_ENCRYPTION_KEY.to_vec();
        let iv = APP_METADATA_ENCRYPTION_IV.to_vec();

        Self {
            path: path.to_path_buf(),
            key,
            iv,
        }
    }

    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    pub fn write(&self, content: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(content.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.path)?;
        file.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        let mut file = File::open(&self.path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(decrypted)?)
    }

    /// Discards a file that can no longer be decrypted.
    pub fn remove(&self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
