//! Lifecycle and ownership subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigManager (owns documents + LeaseCounter)
//!     → lookup creates InterfaceHandle<'a> / AppCfg<'a> holding a ViewLease<'a>
//!     → role view wraps the handle (Constructed)
//!     → view dropped → lease dropped → counter decremented (Released)
//! ```
//!
//! # Design Decisions
//! - Views borrow the manager, so tearing the manager down while a view is
//!   alive is rejected by the compiler rather than checked at runtime
//! - Leases are not `Clone`, so a view can never be duplicated
//! - The counter only serves diagnostics and tests

pub mod lease;

pub use lease::{LeaseCounter, ViewLease};
