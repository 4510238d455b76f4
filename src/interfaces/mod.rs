//! Role configuration views.
//!
//! # Data Flow
//! ```text
//! ConfigManager lookup (by index / by name)
//!     → InterfaceHandle<'a>
//!     → PublisherCfg / SubscriberCfg / ServerCfg / ClientCfg
//!     → InterfaceCfg methods walk a document snapshot
//!     → owned, validated values or a typed CfgError
//! ```
//!
//! # Absence policy for `AllowedClients` / `Topics`
//! | view          | `Topics` absent | `AllowedClients` absent |
//! |---------------|-----------------|-------------------------|
//! | PublisherCfg  | `NotFound`      | `NotFound`              |
//! | SubscriberCfg | `NotFound`      | `NotFound`              |
//! | ServerCfg     | n/a             | `["*"]` (unrestricted)  |
//! | ClientCfg     | n/a             | `NotFound`              |
//!
//! A present but empty array is always `EmptyCollection`.
//!
//! # Design Decisions
//! - Views are not `Clone`; each one uniquely owns its handle
//! - One typed-result discipline for every role

pub mod client;
pub mod marshal;
pub mod publisher;
pub mod server;
pub mod subscriber;

pub use client::ClientCfg;
pub use publisher::PublisherCfg;
pub use server::ServerCfg;
pub use subscriber::SubscriberCfg;

use crate::error::{CfgError, CfgResult};
use crate::manager::{InterfaceHandle, Role};
use crate::msgbus::{endpoint_string, MsgBusConfig};
use crate::value::ConfigValue;

/// Capabilities shared by every role view.
pub trait InterfaceCfg {
    /// The handle of the entry this view wraps.
    fn handle(&self) -> &InterfaceHandle<'_>;

    /// Transport configuration ready for the message-bus library.
    fn get_msgbus_config(&self) -> CfgResult<MsgBusConfig>;

    /// `AllowedClients` as an ordered list, subject to the role's absence policy.
    fn get_allowed_clients(&self) -> CfgResult<Vec<String>>;

    fn role(&self) -> Role {
        self.handle().role()
    }

    /// The entry's `Name`, if it has one.
    fn name(&self) -> CfgResult<Option<String>> {
        self.handle().with_entry(|entry| match entry.get_opt("Name")? {
            Some(name) => Ok(Some(name.as_str()?.to_string())),
            None => Ok(None),
        })
    }

    /// Owned copy of the raw value stored under `key` in this entry.
    fn get_interface_value(&self, key: &str) -> CfgResult<ConfigValue> {
        self.handle().with_entry(|entry| entry.get(key).cloned())
    }

    /// `EndPoint` coerced to a string.
    fn get_endpoint(&self) -> CfgResult<String> {
        entry_endpoint(self.handle())
    }
}

pub(crate) fn entry_endpoint(handle: &InterfaceHandle<'_>) -> CfgResult<String> {
    handle.with_entry(|entry| match entry.get_opt("EndPoint")? {
        Some(endpoint) => endpoint_string(endpoint),
        None => Err(CfgError::EndpointMissing(handle.label())),
    })
}
