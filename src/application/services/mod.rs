//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (CommandRunner)
//! but are themselves concrete structs, not traits.

mod catalog;
mod docker;

pub use catalog::CatalogService;
pub use docker::DockerService;
