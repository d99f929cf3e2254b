//! Asset sources for fonts and images.
//!
//! Producers look assets up by name through an [`AssetSource`]. Sources are
//! read-only and shared between producer tasks without coordination.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use config::constants::{EMBLEM_IMAGE, PRIMARY_FONT};

use crate::error::{ModelError, ModelResult};

/// Emblem bitmap compiled into the crate.
const BUNDLED_EMBLEM: &[u8] = include_bytes!("../../assets/emblem.png");

/// Primary caption font compiled into the crate. License text sits next to
/// it in `assets/hack-regular-license.txt`.
const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/hack-regular.ttf");

/// Read-only lookup of named binary assets.
///
/// # Examples
/// ```
/// use skyline_model::assets::{AssetSource, InMemoryAssets};
/// let mut assets = InMemoryAssets::default();
/// assets.insert("font.ttf", vec![1, 2, 3]);
/// assert_eq!(assets.read("font.ttf").unwrap(), vec![1, 2, 3]);
/// assert!(assets.read("missing.ttf").is_err());
/// ```
pub trait AssetSource: Send + Sync {
    /// Returns the full contents of the named asset.
    ///
    /// # Errors
    ///
    /// [`ModelError::AssetUnavailable`] when the asset is missing or cannot
    /// be read.
    fn read(&self, name: &str) -> ModelResult<Vec<u8>>;
}

/// Assets compiled into the binary: the primary caption font and the
/// default emblem.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
    fn read(&self, name: &str) -> ModelResult<Vec<u8>> {
        match name {
            PRIMARY_FONT => Ok(BUNDLED_FONT.to_vec()),
            EMBLEM_IMAGE => Ok(BUNDLED_EMBLEM.to_vec()),
            _ => Err(ModelError::asset_unavailable(name, "not bundled")),
        }
    }
}

/// Assets stored as plain files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirectoryAssets {
    fn read(&self, name: &str) -> ModelResult<Vec<u8>> {
        let relative = Path::new(name);
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(ModelError::asset_unavailable(
                name,
                "asset names must be relative paths without '..'",
            ));
        }
        fs::read(self.root.join(relative)).map_err(|err| ModelError::asset_unavailable(name, err))
    }
}

/// Assets held in memory, for tests and embedding applications.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryAssets {
    /// Inserts or replaces an asset.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }

    /// Builder-style [`InMemoryAssets::insert`].
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetSource for InMemoryAssets {
    fn read(&self, name: &str) -> ModelResult<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::asset_unavailable(name, "not found"))
    }
}

/// Consults several sources in order and returns the first hit.
///
/// # Examples
/// ```
/// use skyline_model::assets::{AssetChain, AssetSource, InMemoryAssets};
/// let chain = AssetChain::bundled()
///     .with(InMemoryAssets::default().with("emblem.png", vec![0u8]));
/// // Sources added later are consulted first.
/// assert_eq!(chain.read("emblem.png").unwrap(), vec![0u8]);
/// ```
#[derive(Default)]
pub struct AssetChain {
    sources: Vec<Box<dyn AssetSource>>,
}

impl AssetChain {
    /// An empty chain; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain holding only [`BundledAssets`].
    pub fn bundled() -> Self {
        Self::new().with(BundledAssets)
    }

    /// Adds a source that takes precedence over the ones already present.
    pub fn with(mut self, source: impl AssetSource + 'static) -> Self {
        self.sources.insert(0, Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl AssetSource for AssetChain {
    fn read(&self, name: &str) -> ModelResult<Vec<u8>> {
        let mut reasons = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            match source.read(name) {
                Ok(bytes) => return Ok(bytes),
                Err(ModelError::AssetUnavailable { reason, .. }) => reasons.push(reason),
                Err(other) => return Err(other),
            }
        }
        let reason = if reasons.is_empty() {
            "no asset sources configured".to_string()
        } else {
            reasons.join("; ")
        };
        Err(ModelError::asset_unavailable(name, reason))
    }
}

impl std::fmt::Debug for AssetChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetChain")
            .field("sources", &self.sources.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
