//! Registries for clinical documentation templates and documentation
//! instances.
//!
//! Each registry stores its entire collection as one JSON document under a
//! fixed blob-store key, read and written wholesale on every operation. All
//! lookups are linear scans and concurrent writers are last-writer-wins,
//! which is acceptable at admin-tool request volume.

pub mod documentation;
pub mod error;
pub mod templates;

pub use documentation::DocumentationRegistry;
pub use error::RegistryError;
pub use templates::{SeedOutcome, TemplateRegistry};
