//! Last-used prices, kept between runs as a convenience.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{QuoteError, Result};
use crate::model::MaterialSource;

/// Tint roll width.
pub const KEY_TINT_WIDTH: &str = "tint.rollWidthIn";
/// Tint roll price.
pub const KEY_TINT_PRICE: &str = "tint.rollPrice";
/// Canvas roll price.
pub const KEY_CANVAS_PRICE: &str = "canvas.rollPrice";
/// Decal shipping fee.
pub const KEY_SHIP_FEE: &str = "shipFee";

const VINYL_PRICE_PREFIX: &str = "vinylPrice:";
const TAPE_PRICE_PREFIX: &str = "tapePrice:";

/// Key for a vinyl roll price.
pub fn vinyl_price_key(source: MaterialSource, roll_id: &str) -> String {
    format!("{}{}:{}", VINYL_PRICE_PREFIX, source.key(), roll_id)
}

/// Key for a transfer tape roll price.
pub fn tape_price_key(source: MaterialSource, roll_id: &str) -> String {
    format!("{}{}:{}", TAPE_PRICE_PREFIX, source.key(), roll_id)
}

/// Scalar key-value store. Last write wins.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<f64>;

    fn set(&mut self, key: &str, value: f64);

    /// Resolve an input: an explicit value is remembered and returned,
    /// otherwise the remembered value, otherwise `None`.
    fn remember(&mut self, key: &str, given: Option<f64>) -> Option<f64> {
        match given {
            Some(v) if v.is_finite() => {
                self.set(key, v);
                Some(v)
            }
            _ => self.get(key),
        }
    }
}

/// Store that forgets everything on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }
}

/// Store backed by a small JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, f64>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open a store. A missing or unreadable file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, f64>>(&text) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Cannot read preferences {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = values.len(), "preferences loaded");
        Self {
            path,
            values,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write pending changes back to disk.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json).map_err(|e| QuoteError::Preferences {
            message: format!("cannot write {}: {}", self.path.display(), e),
        })?;
        self.dirty = false;
        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }
}
