//! Release catalog service
//!
//! Owns the list of release records for the lifetime of the instance.
//! The list only changes through [`CatalogService::add`].

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::application::error_ext::{IoResultExt, JsonResultExt};
use crate::application::ApplicationResult;
use crate::domain::catalog::{capitalize, default_releases};
use crate::domain::{DomainError, Release};

/// In-memory catalog of operating-system releases.
#[derive(Debug, Clone)]
pub struct CatalogService {
    releases: Vec<Release>,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    /// Catalog seeded with the default releases.
    pub fn new() -> Self {
        Self::with_releases(default_releases())
    }

    pub fn with_releases(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Release] {
        &self.releases
    }

    /// Validate and append a record.
    #[instrument(level = "debug", skip_all)]
    pub fn add(&mut self, value: Value) -> Result<(), DomainError> {
        let release = Release::from_value(value)?;
        info!("added release: {}", release.name);
        self.releases.push(release);
        Ok(())
    }

    /// First record whose name matches `distro`, ignoring case.
    pub fn find(&self, distro: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.matches(distro))
    }

    /// Summary line for `distro`.
    pub fn describe(&self, distro: &str) -> Result<String, DomainError> {
        self.find(distro)
            .map(Release::summary)
            .ok_or_else(|| DomainError::ReleaseNotFound(capitalize(distro)))
    }

    /// Append every record of a JSON array file.
    ///
    /// Records are validated one by one; the first invalid record aborts the
    /// load and leaves the records before it in place.
    pub fn load_file(&mut self, path: &Path) -> ApplicationResult<usize> {
        debug!("load_file: {}", path.display());
        let content = std::fs::read_to_string(path).with_path_context("read catalog", path)?;
        let values: Vec<Value> =
            serde_json::from_str(&content).with_path_context("parse catalog", path)?;

        let count = values.len();
        for value in values {
            self.add(value)?;
        }
        Ok(count)
    }
}
