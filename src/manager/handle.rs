//! Interface handles.
//!
//! A handle names one entry of one role collection and borrows the manager
//! that owns the document. It carries a lease, so the manager always knows
//! how many views are alive.

use std::fmt;

use crate::error::{CfgError, CfgResult};
use crate::lifecycle::ViewLease;
use crate::manager::ConfigManager;
use crate::msgbus::{self, MsgBusConfig};
use crate::value::ConfigValue;

/// Role of an interface entry; selects the role collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Publisher,
    Subscriber,
    Server,
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Publisher, Role::Subscriber, Role::Server, Role::Client];

    /// Key of the role collection inside the interfaces document.
    pub fn collection_key(self) -> &'static str {
        match self {
            Role::Publisher => "Publishers",
            Role::Subscriber => "Subscribers",
            Role::Server => "Servers",
            Role::Client => "Clients",
        }
    }

    /// Type name of the view serving this role, used in logs.
    pub fn view_name(self) -> &'static str {
        match self {
            Role::Publisher => "PublisherCfg",
            Role::Subscriber => "SubscriberCfg",
            Role::Server => "ServerCfg",
            Role::Client => "ClientCfg",
        }
    }

    /// Publishers and servers bind; subscribers and clients connect.
    pub fn is_binding(self) -> bool {
        matches!(self, Role::Publisher | Role::Server)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Publisher => "publisher",
            Role::Subscriber => "subscriber",
            Role::Server => "server",
            Role::Client => "client",
        };
        f.write_str(name)
    }
}

/// How an entry is looked up within its role collection.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'n> {
    Index(usize),
    Name(&'n str),
}

/// Lifetime-bound reference to one interface entry.
#[derive(Debug)]
pub struct InterfaceHandle<'a> {
    manager: &'a ConfigManager,
    role: Role,
    index: usize,
    _lease: ViewLease<'a>,
}

impl<'a> InterfaceHandle<'a> {
    pub(crate) fn new(manager: &'a ConfigManager, role: Role, index: usize) -> Self {
        Self {
            manager,
            role,
            index,
            _lease: manager.leases().acquire(role.view_name()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Position of the entry within its role collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn manager(&self) -> &'a ConfigManager {
        self.manager
    }

    /// Human readable label for errors and logs, e.g. `Publishers[0]`.
    pub fn label(&self) -> String {
        format!("{}[{}]", self.role.collection_key(), self.index)
    }

    /// Run `f` against a snapshot of the entry.
    pub fn with_entry<R, F>(&self, f: F) -> CfgResult<R>
    where
        F: FnOnce(&ConfigValue) -> CfgResult<R>,
    {
        let snapshot = self.manager.store().snapshot();
        let entry = entry_in(&snapshot.interfaces, self.role, self.index)?;
        f(entry)
    }

    /// Build the transport config of the entry against one document snapshot.
    pub(crate) fn msgbus_config(&self) -> CfgResult<MsgBusConfig> {
        let snapshot = self.manager.store().snapshot();
        let security = self.manager.security(&snapshot)?;
        let entry = entry_in(&snapshot.interfaces, self.role, self.index)?;
        msgbus::build(self.role, &self.label(), entry, &security)
    }

    /// Edit the entry; the edit is published only if `f` succeeds.
    pub(crate) fn update_entry<F>(&self, mut f: F) -> CfgResult<()>
    where
        F: FnMut(&mut ConfigValue) -> CfgResult<()>,
    {
        let (role, index) = (self.role, self.index);
        self.manager.store().update(|doc| {
            let entry = doc
                .interfaces
                .get_mut(role.collection_key())?
                .array_get_mut(index)?;
            f(entry)
        })
    }
}

/// Resolve `role[index]` inside an interfaces document.
pub(crate) fn entry_in(interfaces: &ConfigValue, role: Role, index: usize) -> CfgResult<&ConfigValue> {
    interfaces.get(role.collection_key())?.array_get(index)
}

/// Length of a role collection; an absent collection has length 0.
pub(crate) fn collection_len(interfaces: &ConfigValue, role: Role) -> CfgResult<usize> {
    match interfaces.get_opt(role.collection_key())? {
        Some(collection) => collection.array_len(),
        None => Ok(0),
    }
}

/// Find the position of an entry within its role collection.
///
/// Index lookups treat an absent collection as empty. Names are compared
/// exactly (case-sensitive); entries without a string `Name` never match.
pub(crate) fn position_in(interfaces: &ConfigValue, role: Role, lookup: Lookup<'_>) -> CfgResult<usize> {
    match lookup {
        Lookup::Index(index) => {
            let len = collection_len(interfaces, role)?;
            if index < len {
                Ok(index)
            } else {
                Err(CfgError::IndexOutOfRange { index, len })
            }
        }
        Lookup::Name(name) => interfaces
            .get(role.collection_key())?
            .as_array()?
            .iter()
            .position(|entry| {
                entry
                    .get("Name")
                    .and_then(ConfigValue::as_str)
                    .map(|n| n == name)
                    .unwrap_or(false)
            })
            .ok_or_else(|| CfgError::NotFound(format!("{} named '{}'", role, name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interfaces() -> ConfigValue {
        ConfigValue::from(json!({
            "Clients": [{"Name": "default"}, {"Name": "Default"}, {"Type": "zmq_tcp"}],
            "Servers": []
        }))
    }

    #[test]
    fn test_lookup_by_index() {
        let doc = interfaces();
        assert_eq!(position_in(&doc, Role::Client, Lookup::Index(2)).unwrap(), 2);
        assert_eq!(
            position_in(&doc, Role::Client, Lookup::Index(3)).unwrap_err(),
            CfgError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert!(matches!(
            position_in(&doc, Role::Server, Lookup::Index(0)),
            Err(CfgError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_lookup_by_name_is_case_sensitive() {
        let doc = interfaces();
        assert_eq!(position_in(&doc, Role::Client, Lookup::Name("default")).unwrap(), 0);
        assert_eq!(position_in(&doc, Role::Client, Lookup::Name("Default")).unwrap(), 1);
        assert!(matches!(
            position_in(&doc, Role::Client, Lookup::Name("DEFAULT")),
            Err(CfgError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_collection() {
        let doc = interfaces();
        assert_eq!(collection_len(&doc, Role::Publisher).unwrap(), 0);
        assert_eq!(
            position_in(&doc, Role::Publisher, Lookup::Index(0)).unwrap_err(),
            CfgError::IndexOutOfRange { index: 0, len: 0 }
        );
        assert_eq!(
            position_in(&doc, Role::Publisher, Lookup::Name("default")).unwrap_err(),
            CfgError::NotFound("Publishers".into())
        );
    }

    #[test]
    fn test_collection_with_wrong_shape() {
        let doc = ConfigValue::from(json!({"Publishers": {"Name": "x"}}));
        let mismatch = CfgError::TypeMismatch {
            expected: "array",
            found: "object",
        };
        assert_eq!(collection_len(&doc, Role::Publisher).unwrap_err(), mismatch);
        assert_eq!(
            position_in(&doc, Role::Publisher, Lookup::Index(0)).unwrap_err(),
            mismatch
        );
    }
}
