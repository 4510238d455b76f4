//! Transport configuration subsystem.
//!
//! # Data Flow
//! ```text
//! interface entry (Type, EndPoint, Topics, AllowedClients, peer app name)
//!     + SecurityContext (mode, app name, key store)
//!     → endpoint.rs (coerce & parse EndPoint)
//!     → security.rs (resolve key material)
//!     → MsgBusConfig (typed)
//!     → to_json() → consumed by the message-bus library
//! ```
//!
//! # Design Decisions
//! - The transport library is external; this module only produces its input
//! - Missing transport fields are `ConfigUnavailable`, never a null config
//! - Keys are only attached to `zmq_tcp` sockets in production mode

pub mod endpoint;
pub mod security;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{CfgError, CfgResult};
use crate::interfaces::marshal;
use crate::manager::Role;
use crate::value::ConfigValue;

pub use endpoint::{endpoint_string, Endpoint, TRANSPORT_IPC, TRANSPORT_TCP};
pub use security::{SecurityContext, SecurityMode, ALLOW_ALL};

/// Socket section name used by publishers on `zmq_tcp`.
pub const TCP_PUBLISH_SECTION: &str = "zmq_tcp_publish";

/// Fully formed transport configuration for one interface entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgBusConfig {
    pub role: Role,
    /// Transport kind from the entry's `Type`.
    pub transport: String,
    pub endpoint: Endpoint,
    pub security: SecurityMode,
    /// Socket sections the endpoint is published under (TCP only).
    pub sections: Vec<String>,
    /// Key material attached to every socket section.
    pub socket_keys: BTreeMap<String, String>,
    /// Client names in dev mode, client public keys in production mode.
    pub allowed_clients: Option<Vec<String>>,
    pub topics: Option<Vec<String>>,
}

impl MsgBusConfig {
    /// Render the JSON object the message-bus library consumes.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert("type".into(), Value::from(self.transport.as_str()));
        root.insert("endpoint".into(), Value::from(self.endpoint.to_string()));
        root.insert("security_mode".into(), Value::from(self.security.as_str()));

        match &self.endpoint {
            Endpoint::Tcp { host, port } => {
                let mut socket = Map::new();
                socket.insert("host".into(), Value::from(host.as_str()));
                socket.insert("port".into(), Value::from(*port));
                for (key, value) in &self.socket_keys {
                    socket.insert(key.clone(), Value::from(value.as_str()));
                }
                for section in &self.sections {
                    root.insert(section.clone(), Value::Object(socket.clone()));
                }
            }
            Endpoint::Ipc { socket_dir, socket_file } => {
                root.insert("socket_dir".into(), Value::from(socket_dir.as_str()));
                if let Some(file) = socket_file {
                    root.insert("socket_file".into(), Value::from(file.as_str()));
                }
            }
            Endpoint::Other(_) => {}
        }

        if let Some(clients) = &self.allowed_clients {
            root.insert("allowed_clients".into(), Value::from(clients.clone()));
        }
        Value::Object(root)
    }
}

/// Build the transport configuration of one entry.
pub(crate) fn build(
    role: Role,
    label: &str,
    entry: &ConfigValue,
    security: &SecurityContext<'_>,
) -> CfgResult<MsgBusConfig> {
    let transport = match entry.get_opt("Type")? {
        Some(value) => value.as_str()?.to_string(),
        None => return Err(CfgError::ConfigUnavailable(format!("{} has no Type", label))),
    };
    let endpoint_value = entry
        .get_opt("EndPoint")?
        .ok_or_else(|| CfgError::ConfigUnavailable(format!("{} has no EndPoint", label)))?;
    let endpoint = Endpoint::parse(&transport, endpoint_value)?;

    let mut allowed_clients = marshal::optional_string_array(entry, "AllowedClients")?;
    let topics = marshal::optional_string_array(entry, "Topics")?;

    let mut sections = Vec::new();
    let mut socket_keys = BTreeMap::new();

    if matches!(endpoint, Endpoint::Tcp { .. }) {
        sections = match role {
            Role::Publisher => vec![TCP_PUBLISH_SECTION.to_string()],
            Role::Subscriber => topics
                .clone()
                .ok_or_else(|| CfgError::ConfigUnavailable(format!("{} has no Topics", label)))?,
            Role::Server | Role::Client => vec![required_str(entry, "Name", label)?.to_string()],
        };

        if !security.is_dev() {
            if role.is_binding() {
                socket_keys.insert(
                    "server_secret_key".to_string(),
                    security.own_private_key()?.to_string(),
                );
                if let Some(clients) = &allowed_clients {
                    allowed_clients = Some(security.client_keys(clients)?);
                }
            } else {
                let peer_field = match role {
                    Role::Subscriber => "PublisherAppName",
                    _ => "ServerAppName",
                };
                let peer = required_str(entry, peer_field, label)?;
                socket_keys.insert(
                    "server_public_key".to_string(),
                    security.public_key(peer)?.to_string(),
                );
                socket_keys.insert(
                    "client_secret_key".to_string(),
                    security.own_private_key()?.to_string(),
                );
                socket_keys.insert(
                    "client_public_key".to_string(),
                    security.public_key(security.app_name)?.to_string(),
                );
            }
        }
    }

    Ok(MsgBusConfig {
        role,
        transport,
        endpoint,
        security: security.mode,
        sections,
        socket_keys,
        allowed_clients,
        topics,
    })
}

fn required_str<'v>(entry: &'v ConfigValue, field: &str, label: &str) -> CfgResult<&'v str> {
    entry
        .get_opt(field)?
        .ok_or_else(|| CfgError::ConfigUnavailable(format!("{} has no {}", label, field)))?
        .as_str()
}
