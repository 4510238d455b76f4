//! Configuration manager subsystem.
//!
//! # Data Flow
//! ```text
//! ManagerSettings + AppDocument
//!     → ConfigManager (owns DocumentStore + LeaseCounter)
//!     → get_*_by_index / get_*_by_name
//!     → handle.rs (InterfaceHandle<'a>, leased)
//!     → interfaces/* role views
//! ```
//!
//! # Ownership
//! Views hold a back-reference to the manager. The manager must therefore
//! outlive every view, and the compiler enforces it:
//!
//! ```compile_fail
//! use bus_config_manager::{AppDocument, ConfigManager, ManagerSettings};
//!
//! let manager = ConfigManager::new(ManagerSettings::default(), AppDocument::default());
//! let publisher = manager.get_publisher_by_index(0);
//! drop(manager); // error: cannot move out of `manager` because it is borrowed
//! drop(publisher);
//! ```
//!
//! Views cannot be duplicated either:
//!
//! ```compile_fail
//! use bus_config_manager::{AppDocument, ConfigManager, ManagerSettings};
//!
//! let manager = ConfigManager::new(ManagerSettings::default(), AppDocument::default());
//! let app = manager.get_app_config();
//! let copy = app.clone(); // error: no method named `clone`
//! ```

pub mod app;
pub mod handle;
pub mod store;

pub use app::AppCfg;
pub use handle::{InterfaceHandle, Lookup, Role};
pub use store::DocumentStore;

use crate::config::loader::{load_document, LoadError};
use crate::config::schema::{AppDocument, ManagerSettings};
use crate::error::CfgResult;
use crate::interfaces::{ClientCfg, PublisherCfg, ServerCfg, SubscriberCfg};
use crate::lifecycle::LeaseCounter;
use crate::msgbus::SecurityContext;
use crate::value::ConfigValue;

/// Root accessor for one application's configuration.
#[derive(Debug)]
pub struct ConfigManager {
    settings: ManagerSettings,
    store: DocumentStore,
    leases: LeaseCounter,
}

impl ConfigManager {
    /// Create a manager over an already fetched document.
    pub fn new(settings: ManagerSettings, document: AppDocument) -> Self {
        tracing::info!(
            app_name = %settings.app_name,
            dev_mode = settings.dev_mode,
            "Configuration manager initialized"
        );
        Self {
            settings,
            store: DocumentStore::new(document),
            leases: LeaseCounter::new(),
        }
    }

    /// Create a manager from the document named by `settings.document_path`.
    pub fn load(settings: ManagerSettings) -> Result<Self, LoadError> {
        let path = settings.document_path.clone().ok_or_else(|| {
            LoadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "document_path is not set",
            ))
        })?;
        let document = load_document(std::path::Path::new(&path))?;
        Ok(Self::new(settings, document))
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    pub fn app_name(&self) -> &str {
        &self.settings.app_name
    }

    pub fn is_dev_mode(&self) -> bool {
        self.settings.dev_mode
    }

    /// Number of views currently borrowing this manager.
    pub fn live_views(&self) -> usize {
        self.leases.live()
    }

    pub(crate) fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub(crate) fn leases(&self) -> &LeaseCounter {
        &self.leases
    }

    pub(crate) fn security<'s>(&'s self, document: &'s AppDocument) -> CfgResult<SecurityContext<'s>> {
        SecurityContext::new(self.settings.dev_mode, &self.settings.app_name, &document.keys)
    }

    /// Number of entries in a role collection; an absent collection counts
    /// as empty, a collection that is not an array is a `TypeMismatch`.
    pub fn num_interfaces(&self, role: Role) -> CfgResult<usize> {
        handle::collection_len(&self.store.snapshot().interfaces, role)
    }

    pub fn get_num_publishers(&self) -> CfgResult<usize> {
        self.num_interfaces(Role::Publisher)
    }

    pub fn get_num_subscribers(&self) -> CfgResult<usize> {
        self.num_interfaces(Role::Subscriber)
    }

    pub fn get_num_servers(&self) -> CfgResult<usize> {
        self.num_interfaces(Role::Server)
    }

    pub fn get_num_clients(&self) -> CfgResult<usize> {
        self.num_interfaces(Role::Client)
    }

    /// Resolve an entry to a leased handle.
    pub fn resolve(&self, role: Role, lookup: Lookup<'_>) -> CfgResult<InterfaceHandle<'_>> {
        let snapshot = self.store.snapshot();
        let index = handle::position_in(&snapshot.interfaces, role, lookup)
            .inspect_err(|e| tracing::warn!(%role, ?lookup, error = %e, "Interface lookup failed"))?;
        Ok(InterfaceHandle::new(self, role, index))
    }

    pub fn get_publisher_by_index(&self, index: usize) -> CfgResult<PublisherCfg<'_>> {
        self.resolve(Role::Publisher, Lookup::Index(index)).map(PublisherCfg::new)
    }

    pub fn get_publisher_by_name(&self, name: &str) -> CfgResult<PublisherCfg<'_>> {
        self.resolve(Role::Publisher, Lookup::Name(name)).map(PublisherCfg::new)
    }

    pub fn get_subscriber_by_index(&self, index: usize) -> CfgResult<SubscriberCfg<'_>> {
        self.resolve(Role::Subscriber, Lookup::Index(index)).map(SubscriberCfg::new)
    }

    pub fn get_subscriber_by_name(&self, name: &str) -> CfgResult<SubscriberCfg<'_>> {
        self.resolve(Role::Subscriber, Lookup::Name(name)).map(SubscriberCfg::new)
    }

    pub fn get_server_by_index(&self, index: usize) -> CfgResult<ServerCfg<'_>> {
        let handle = self.resolve(Role::Server, Lookup::Index(index))?;
        Ok(ServerCfg::new(handle, AppCfg::new(self)))
    }

    pub fn get_server_by_name(&self, name: &str) -> CfgResult<ServerCfg<'_>> {
        let handle = self.resolve(Role::Server, Lookup::Name(name))?;
        Ok(ServerCfg::new(handle, AppCfg::new(self)))
    }

    pub fn get_client_by_index(&self, index: usize) -> CfgResult<ClientCfg<'_>> {
        self.resolve(Role::Client, Lookup::Index(index)).map(ClientCfg::new)
    }

    pub fn get_client_by_name(&self, name: &str) -> CfgResult<ClientCfg<'_>> {
        self.resolve(Role::Client, Lookup::Name(name)).map(ClientCfg::new)
    }

    /// App-level view (config document, interfaces document, shared settings).
    pub fn get_app_config(&self) -> AppCfg<'_> {
        AppCfg::new(self)
    }

    /// Owned copy of the value under `key` in the app config document.
    pub fn get_app_config_value(&self, key: &str) -> CfgResult<ConfigValue> {
        self.store.snapshot().config.get(key).cloned()
    }

    /// Owned copy of the value under `key` in the interfaces document.
    pub fn get_app_interface_value(&self, key: &str) -> CfgResult<ConfigValue> {
        self.store.snapshot().interfaces.get(key).cloned()
    }
}
