//! App-level configuration view.

use crate::error::CfgResult;
use crate::lifecycle::ViewLease;
use crate::manager::ConfigManager;
use crate::msgbus::SecurityMode;
use crate::value::ConfigValue;

/// View over the application-wide parts of the document: the app config,
/// the raw interfaces document and the shared security settings.
#[derive(Debug)]
pub struct AppCfg<'a> {
    manager: &'a ConfigManager,
    _lease: ViewLease<'a>,
}

impl<'a> AppCfg<'a> {
    pub(crate) fn new(manager: &'a ConfigManager) -> Self {
        Self {
            manager,
            _lease: manager.leases().acquire("AppCfg"),
        }
    }

    pub fn app_name(&self) -> &'a str {
        self.manager.app_name()
    }

    pub fn is_dev_mode(&self) -> bool {
        self.manager.is_dev_mode()
    }

    /// Owned copy of the whole app config document.
    pub fn config(&self) -> ConfigValue {
        self.manager.store().snapshot().config.clone()
    }

    /// Owned copy of the whole interfaces document.
    pub fn interface(&self) -> ConfigValue {
        self.manager.store().snapshot().interfaces.clone()
    }

    /// Value under `key` in the app config document.
    pub fn get_config_value(&self, key: &str) -> CfgResult<ConfigValue> {
        self.manager.store().snapshot().config.get(key).cloned()
    }

    /// Value under `key` in the interfaces document, e.g. `Publishers`.
    pub fn get_interface_value(&self, key: &str) -> CfgResult<ConfigValue> {
        self.manager.store().snapshot().interfaces.get(key).cloned()
    }

    /// Security mode shared by every interface of the app.
    pub fn security_mode(&self) -> CfgResult<SecurityMode> {
        let snapshot = self.manager.store().snapshot();
        Ok(self.manager.security(&snapshot)?.mode)
    }

    /// Fails with `ConfigUnavailable` when shared settings cannot be resolved.
    pub(crate) fn ensure_available(&self) -> CfgResult<()> {
        self.security_mode()
            .map(|_| ())
            .inspect_err(|e| tracing::error!(error = %e, "App-level configuration unavailable"))
    }
}
