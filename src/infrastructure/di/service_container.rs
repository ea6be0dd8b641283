//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{CatalogService, DockerService};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{CommandRunner, RealCommandRunner};

/// Container holding all application services.
///
/// Created once at startup; the catalog lives as long as the container.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    pub docker: DockerService,

    pub catalog: CatalogService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        let cmd = Arc::new(RealCommandRunner::new(settings.shell.clone()));
        Self::with_deps(settings, cmd)
    }

    /// Create a service container with custom dependencies (for testing).
    ///
    /// Loads `catalog.extra_file` into the catalog when configured.
    pub fn with_deps(settings: Settings, cmd: Arc<dyn CommandRunner>) -> ApplicationResult<Self> {
        let settings = Arc::new(settings);
        let docker = DockerService::new(Arc::clone(&cmd));

        let mut catalog = CatalogService::new();
        if let Some(path) = &settings.catalog.extra_file {
            let added = catalog.load_file(path)?;
            debug!("loaded {} extra releases from {}", added, path.display());
        }

        Ok(Self {
            settings,
            cmd,
            docker,
            catalog,
        })
    }
}
