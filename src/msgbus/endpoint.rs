//! Endpoint coercion and parsing.
//!
//! # Responsibilities
//! - Coerce an `EndPoint` node to a single string
//! - Parse it into the transport-specific form (TCP host/port, IPC socket)
//!
//! # Design Decisions
//! - String arrays are joined with `,` (multi-endpoint entries); `zmq_tcp`
//!   parsing accepts exactly one `host:port`
//! - IPC objects `{SocketDir, SocketFile?}` render as `dir/file`
//! - Anything else is a `ConversionError`, never an empty string

use std::fmt;

use crate::error::{CfgError, CfgResult};
use crate::value::ConfigValue;

pub const TRANSPORT_TCP: &str = "zmq_tcp";
pub const TRANSPORT_IPC: &str = "zmq_ipc";

/// Coerce an `EndPoint` node to its string form.
pub fn endpoint_string(value: &ConfigValue) -> CfgResult<String> {
    match value {
        ConfigValue::Null => Err(CfgError::ConversionError("EndPoint is null".into())),
        ConfigValue::Array(items) => {
            if items.is_empty() {
                return Err(CfgError::ConversionError("EndPoint array is empty".into()));
            }
            let parts = items
                .iter()
                .map(|item| match item {
                    ConfigValue::Null => Err(CfgError::ConversionError(
                        "EndPoint array holds a null".into(),
                    )),
                    other if other.is_scalar() => other.to_scalar_string(),
                    other => Err(CfgError::ConversionError(format!(
                        "EndPoint array holds a nested {}",
                        other.kind()
                    ))),
                })
                .collect::<CfgResult<Vec<_>>>()?;
            Ok(parts.join(","))
        }
        ConfigValue::Object(_) => {
            let (dir, file) = ipc_parts(value)?;
            Ok(match file {
                Some(file) => format!("{}/{}", dir.trim_end_matches('/'), file),
                None => dir,
            })
        }
        scalar => scalar.to_scalar_string(),
    }
}

fn ipc_parts(value: &ConfigValue) -> CfgResult<(String, Option<String>)> {
    let dir = value
        .get("SocketDir")
        .and_then(ConfigValue::as_str)
        .map_err(|_| CfgError::ConversionError("EndPoint object requires a string SocketDir".into()))?;
    let file = match value.get_opt("SocketFile")? {
        None => None,
        Some(v) => Some(
            v.as_str()
                .map_err(|_| CfgError::ConversionError("SocketFile must be a string".into()))?
                .to_string(),
        ),
    };
    Ok((dir.to_string(), file))
}

/// Transport-specific endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Tcp { host: String, port: u16 },
    Ipc { socket_dir: String, socket_file: Option<String> },
    Other(String),
}

impl Endpoint {
    /// Parse an `EndPoint` node for the given transport type.
    pub fn parse(transport: &str, value: &ConfigValue) -> CfgResult<Self> {
        match transport {
            TRANSPORT_TCP => {
                if let ConfigValue::Array(items) = value {
                    return Err(CfgError::ConversionError(format!(
                        "zmq_tcp EndPoint must be a single host:port, found an array of {}",
                        items.len()
                    )));
                }
                let raw = endpoint_string(value)?;
                let (host, port) = raw.rsplit_once(':').ok_or_else(|| {
                    CfgError::ConversionError(format!("'{}' is not a host:port endpoint", raw))
                })?;
                if host.is_empty() {
                    return Err(CfgError::ConversionError(format!("'{}' has no host", raw)));
                }
                if host.contains(',') {
                    return Err(CfgError::ConversionError(format!(
                        "'{}' lists several endpoints",
                        raw
                    )));
                }
                let port = port.parse::<u16>().map_err(|e| {
                    CfgError::ConversionError(format!("invalid port in '{}': {}", raw, e))
                })?;
                Ok(Endpoint::Tcp {
                    host: host.to_string(),
                    port,
                })
            }
            TRANSPORT_IPC => match value {
                ConfigValue::Object(_) => {
                    let (socket_dir, socket_file) = ipc_parts(value)?;
                    Ok(Endpoint::Ipc { socket_dir, socket_file })
                }
                other => Ok(Endpoint::Ipc {
                    socket_dir: endpoint_string(other)?,
                    socket_file: None,
                }),
            },
            _ => Ok(Endpoint::Other(endpoint_string(value)?)),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp { host, port } => write!(f, "{}:{}", host, port),
            Endpoint::Ipc {
                socket_dir,
                socket_file: Some(file),
            } => write!(f, "{}/{}", socket_dir.trim_end_matches('/'), file),
            Endpoint::Ipc { socket_dir, .. } => f.write_str(socket_dir),
            Endpoint::Other(raw) => f.write_str(raw),
        }
    }
}
