// Rust guideline compliant 2026-10-12

//! Storage module for JSONL file operations.
//!
//! Listings are kept one JSON object per line. Reads stream line by line,
//! writes go through a temp file and an atomic rename, and read-modify-write
//! sequences can be serialized with an advisory lock.
//! Listings are never deleted, so there is no removal operation.

use crate::{Error, Listing, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage engine for listings.
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads all listings from the JSONL file.
    ///
    /// A missing file is an empty catalog. Lines that are not valid JSON, or
    /// that decode to a listing failing validation, are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<Listing>> {
        let mut listings = Vec::new();
        self.scan(
            |listing| {
                listings.push(listing);
                false
            },
            |_| {},
        )?;

        debug!(count = listings.len(), path = %self.path.display(), "loaded listings");
        Ok(listings)
    }

    /// Loads a single listing by ID with early termination.
    ///
    /// # Arguments
    ///
    /// * `id` - The full listing ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The listing is not found
    pub fn load_by_id(&self, id: &str) -> Result<Listing> {
        let mut found = None;
        self.scan(
            |listing| {
                if listing.id == id {
                    found = Some(listing);
                    return true;
                }
                false
            },
            |_| {},
        )?;

        found.ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Streams validated listings into `visit` until it returns true.
    ///
    /// Every non-blank line that is not a valid listing goes to `unreadable`.
    fn scan<F, U>(&self, mut visit: F, mut unreadable: U) -> Result<()>
    where
        F: FnMut(Listing) -> bool,
        U: FnMut(&str),
    {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(());
        }

        let reader = BufReader::new(File::open(&self.path)?);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = serde_json::from_str::<Listing>(&line)
                .map_err(Error::from)
                .and_then(|listing| listing.validate().map(|()| listing));

            match parsed {
                Ok(listing) => {
                    if visit(listing) {
                        break;
                    }
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping unreadable listing"
                    );
                    unreadable(&line);
                }
            }
        }

        Ok(())
    }
}

impl Storage {
    /// Saves a single listing, replacing any listing with the same ID.
    ///
    /// New listings are placed at the front of the file so that the file
    /// keeps newest-posted-first order. Unreadable lines are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The listing fails validation
    /// - The file cannot be read or written
    pub fn save(&self, listing: &Listing) -> Result<()> {
        listing.validate()?;

        self.rewrite_unlocked(|listings| {
            if let Some(pos) = listings.iter().position(|l| l.id == listing.id) {
                listings[pos] = listing.clone();
            } else {
                listings.insert(0, listing.clone());
            }
            Ok(())
        })
    }

    /// Replaces the entire file with the provided listings.
    ///
    /// Whatever the file held before is discarded, unreadable lines included.
    /// Use [`Storage::rewrite`] to modify an existing catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any listing fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save_all(&self, listings: &[Listing]) -> Result<()> {
        self.write_lines(listings, &[])
    }

    /// Runs a read-modify-write over the whole catalog under the lock.
    ///
    /// `modify` sees every readable listing in file order. Lines that could
    /// not be read are written back verbatim after the listings, so a
    /// rewrite never drops a record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock is held by another process
    /// - `modify` fails, in which case the file is left untouched
    /// - Any resulting listing fails validation
    /// - The file cannot be read or written
    pub fn rewrite<F, T>(&self, modify: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Listing>) -> Result<T>,
    {
        self.with_lock(|| self.rewrite_unlocked(modify))
    }

    fn rewrite_unlocked<F, T>(&self, modify: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Listing>) -> Result<T>,
    {
        let mut listings = Vec::new();
        let mut unreadable = Vec::new();
        self.scan(
            |listing| {
                listings.push(listing);
                false
            },
            |line| unreadable.push(line.to_string()),
        )?;

        let output = modify(&mut listings)?;
        self.write_lines(&listings, &unreadable)?;
        Ok(output)
    }

    fn write_lines(&self, listings: &[Listing], unreadable: &[String]) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        for listing in listings {
            listing.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);

            for listing in listings {
                serde_json::to_writer(&mut writer, listing)?;
                writer.write_all(b"\n")?;
            }
            for line in unreadable {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }

            let file = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        debug!(
            count = listings.len(),
            kept_unreadable = unreadable.len(),
            path = %self.path.display(),
            "saved listings"
        );

        Ok(())
    }
}

impl Storage {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock is held by another process
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }

    /// Loads a listing, applies `update` and saves it back under the lock.
    ///
    /// # Arguments
    ///
    /// * `id` - The full listing ID
    /// * `update` - Mutation applied to the loaded listing
    ///
    /// # Returns
    ///
    /// The listing as saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is missing, `update` fails, or the
    /// file cannot be written.
    pub fn update<F>(&self, id: &str, update: F) -> Result<Listing>
    where
        F: FnOnce(&mut Listing) -> Result<()>,
    {
        self.rewrite(|listings| {
            let listing = listings
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            update(listing)?;
            Ok(listing.clone())
        })
    }
}
