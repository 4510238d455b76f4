//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! manager, views, loader:
//!     → tracing events (view constructed/released, lookups, topic updates)
//!     → logging.rs subscriber (binary only)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - The library only emits `tracing` events; installing a subscriber is
//!   left to the binary or the embedding service
//! - Log level comes from `RUST_LOG` first, then the settings

pub mod logging;

pub use logging::init_logging;
