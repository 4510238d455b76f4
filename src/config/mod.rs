//! Configuration input subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML) + environment (AppName, DEV_MODE)
//!     → loader.rs (parse & overlay)
//!     → ManagerSettings
//!
//! application document (JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppDocument (validated)
//!     → owned by ConfigManager
//! ```
//!
//! # Design Decisions
//! - Fetching the document from a real backend is the caller's job;
//!   the file loader exists for the CLI and tests
//! - All settings have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::LoadError;
pub use schema::{AppDocument, KeyStore, ManagerSettings};
pub use validation::ValidationError;
