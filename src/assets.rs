//! Asset loading with embedded fallbacks
//!
//! This module provides a unified interface for loading the two data files
//! the service needs (`config.yaml` and `palettes.yaml`) with the following
//! behavior:
//!
//! - If an env var is NOT set: use the embedded file only (no filesystem access)
//! - If an env var IS set and the file is missing: seed it from the embedded copy
//! - If an env var IS set and the file exists: use the filesystem copy

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default data files
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
#[include = "palettes.yaml"]
struct EmbeddedData;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Palettes,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Config, AssetCategory::Palettes];

    /// Name of the embedded file
    pub fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Config => "config.yaml",
            AssetCategory::Palettes => "palettes.yaml",
        }
    }
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub config_seeded: bool,
    pub palettes_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.config_seeded && !self.palettes_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External palette library path (from PALETTES_FILE env var)
    palettes_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(config_file: Option<PathBuf>, palettes_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palettes_file,
        }
    }

    /// Loader that only ever reads embedded assets
    pub fn embedded() -> Self {
        Self::default()
    }

    fn path_for(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Config => self.config_file.as_deref(),
            AssetCategory::Palettes => self.palettes_file.as_deref(),
        }
    }

    /// Read one data file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded copy.
    pub fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.path_for(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        let name = category.file_name();
        EmbeddedData::get(name)
            .map(|f| {
                tracing::trace!(file = name, "Loading asset from embedded data");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {name} not found"),
                )
            })
    }

    /// Read one data file as a UTF-8 string
    pub fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Read the palette library as a UTF-8 string
    pub fn read_palettes_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Palettes)
    }

    /// Write the embedded copy of `category` to `path`
    fn write_embedded(category: AssetCategory, path: &Path) -> io::Result<bool> {
        let Some(data) = EmbeddedData::get(category.file_name()) else {
            return Ok(false);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &*data.data)?;
        Ok(true)
    }

    /// Seed missing files with embedded assets
    ///
    /// Only operates on paths that were configured (env var was set).
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        for category in AssetCategory::ALL {
            let Some(path) = self.path_for(category) else {
                continue;
            };
            if path.exists() || !Self::write_embedded(category, path)? {
                continue;
            }
            tracing::info!(path = %path.display(), "Seeded {} with embedded default", category.file_name());
            match category {
                AssetCategory::Config => report.config_seeded = true,
                AssetCategory::Palettes => report.palettes_seeded = true,
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or `./<file>` if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .path_for(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".").join(category.file_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if Self::write_embedded(category, &path)? {
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        let mut files: Vec<String> = EmbeddedData::iter().map(|s| s.to_string()).collect();
        files.sort();
        files
    }
}
