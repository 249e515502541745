//! Generic JSON-file configuration persistence.
//!
//! `JsonConfig<T>` ties a config value to the file it was loaded from:
//! read-or-create on load, wholesale overwrite on write. A file that exists
//! but fails to deserialize is a fatal error; silently replacing a corrupt
//! config with defaults would destroy user data.

use crate::core::{Result, ShopError};
use lazy_static::lazy_static;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static! {
    // One coarse lock shared by every config instance of every type.
    // Config I/O is rare and never on the purchase hot path.
    static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

/// A config value of type `T` bound to its backing JSON file.
#[derive(Debug)]
pub struct JsonConfig<T> {
    value: T,
    path: PathBuf,
}

impl<T> JsonConfig<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Load a config from `path`.
    ///
    /// An absent file, or one whose content is blank, is created from
    /// `T::default()` and persisted immediately. Any other read or parse
    /// failure propagates as a fatal load error.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let _guard = CONFIG_LOCK.lock()?;

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self {
                    value: T::default(),
                    path,
                };
                config.write_locked()?;
                return Ok(config);
            }
            Err(e) => {
                return Err(ShopError::ConfigIo(
                    path.display().to_string(),
                    e.to_string(),
                ));
            }
        };

        if data.trim().is_empty() {
            let config = Self {
                value: T::default(),
                path,
            };
            config.write_locked()?;
            return Ok(config);
        }

        let value = serde_json::from_str(&data).map_err(|e| {
            ShopError::ConfigMalformed(path.display().to_string(), e.to_string())
        })?;

        Ok(Self { value, path })
    }

    /// Serialize the full in-memory value and overwrite the backing file.
    pub fn write(&self) -> Result<()> {
        let _guard = CONFIG_LOCK.lock()?;
        self.write_locked()
    }

    // Caller must hold CONFIG_LOCK. The std mutex is not reentrant, so the
    // read-or-create path cannot go through `write`.
    fn write_locked(&self) -> Result<()> {
        let display = || self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ShopError::ConfigWrite(display(), e.to_string()))?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.value)
            .map_err(|e| ShopError::ConfigWrite(display(), e.to_string()))?;

        // Write to a temp file and rename over the target so a crash never
        // leaves a half-written config behind.
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, serialized)
            .map_err(|e| ShopError::ConfigWrite(display(), e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| ShopError::ConfigWrite(display(), e.to_string()))?;

        Ok(())
    }

    /// Re-read the backing file, replacing the in-memory value.
    pub fn reload(&mut self) -> Result<()> {
        *self = Self::read(&self.path)?;
        Ok(())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
