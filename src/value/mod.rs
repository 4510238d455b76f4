//! Value model subsystem.
//!
//! # Data Flow
//! ```text
//! JSON document (loader.rs)
//!     → ConfigValue tree (node.rs)
//!     → borrowed by the manager and role views
//!     → owned copies handed back to callers
//! ```
//!
//! # Design Decisions
//! - Objects are key-ordered (`BTreeMap`), arrays keep document order
//! - Every accessor returns a typed `CfgError`, never a sentinel
//! - Child borrows cannot outlive the parent borrow

pub mod node;

pub use node::ConfigValue;
