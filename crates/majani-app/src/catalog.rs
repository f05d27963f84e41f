// Rust guideline compliant 2026-10-12

//! Catalog discovery and path management for a `.majani` directory.

use crate::error::{AppError, Result};
use crate::recent::RecentViews;
use majani_core::{Config, Storage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the catalog directory.
pub const CATALOG_DIR: &str = ".majani";

/// Path metadata for a Majani catalog.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    root: PathBuf,
    majani_dir: PathBuf,
    listings_path: PathBuf,
    recent_path: PathBuf,
    config_path: PathBuf,
}

impl CatalogContext {
    fn at(root: PathBuf) -> Self {
        let majani_dir = root.join(CATALOG_DIR);
        Self {
            root,
            listings_path: majani_dir.join("listings.jsonl"),
            recent_path: majani_dir.join("recent.json"),
            config_path: majani_dir.join("config.toml"),
            majani_dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        match root {
            Some(root) => Ok(root.to_path_buf()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Locates an existing catalog under `root` or the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.majani` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(root)?);
        if !context.majani_dir.exists() {
            return Err(AppError::CatalogNotInitialized {
                path: context.majani_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.majani` directory with a default config and an empty
    /// listings file. Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(root)?);
        std::fs::create_dir_all(&context.majani_dir)?;

        if !context.config_path.exists() {
            Config::default().save(&context.majani_dir)?;
        }
        if !context.listings_path.exists() {
            std::fs::write(&context.listings_path, "")?;
        }

        info!(path = %context.majani_dir.display(), "initialized catalog");
        Ok(context)
    }

    /// Returns the catalog root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.majani` directory path.
    #[must_use]
    pub fn majani_dir(&self) -> &Path {
        self.majani_dir.as_path()
    }

    /// Returns the listings JSONL path.
    #[must_use]
    pub fn listings_path(&self) -> &Path {
        self.listings_path.as_path()
    }

    /// Returns the recently viewed history path.
    #[must_use]
    pub fn recent_path(&self) -> &Path {
        self.recent_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens storage for the listings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.listings_path.clone())?)
    }

    /// Loads catalog configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.majani_dir())?)
    }

    /// Loads the recently viewed history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history file exists but cannot be read.
    pub fn load_recent(&self, limit: usize) -> Result<RecentViews> {
        RecentViews::load(&self.recent_path, limit)
    }
}
