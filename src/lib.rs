//! Typed message-bus interface configuration.
//!
//! Projects an application's loosely-typed configuration document into
//! validated, role-specific views (publisher, subscriber, server, client)
//! and produces the transport configuration a message bus consumes.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lifecycle;
pub mod manager;
pub mod msgbus;
pub mod observability;
pub mod value;

pub use config::{AppDocument, KeyStore, LoadError, ManagerSettings};
pub use error::{CfgError, CfgResult};
pub use interfaces::{ClientCfg, InterfaceCfg, PublisherCfg, ServerCfg, SubscriberCfg};
pub use manager::{AppCfg, ConfigManager, Role};
pub use msgbus::{Endpoint, MsgBusConfig, SecurityMode};
pub use value::ConfigValue;
