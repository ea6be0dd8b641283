//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod cleanup;
pub mod entities;
pub mod error;
pub mod normalize;
pub mod templates;

pub use catalog::{Release, SupportedVersion};
pub use cleanup::clean_text;
pub use entities::*;
pub use error::DomainError;
pub use normalize::parse_output;
pub use templates::{template_chain, TemplateTable, COMMAND_TEMPLATES, DEFAULT_DELIMITER};
