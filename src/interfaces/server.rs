//! Server view.

use crate::error::CfgResult;
use crate::interfaces::marshal::{self, AbsencePolicy};
use crate::interfaces::{entry_endpoint, InterfaceCfg};
use crate::manager::{AppCfg, InterfaceHandle};
use crate::msgbus::MsgBusConfig;

/// View over one `Servers` entry.
///
/// Owns two resources: the entry handle and the app-level [`AppCfg`] that
/// supplies shared settings (security mode, app name). Both are released
/// together when the view drops. Every capability first checks that the
/// app-level resource can serve, and reports `ConfigUnavailable` otherwise.
#[derive(Debug)]
pub struct ServerCfg<'a> {
    handle: InterfaceHandle<'a>,
    app: AppCfg<'a>,
}

impl<'a> ServerCfg<'a> {
    pub(crate) fn new(handle: InterfaceHandle<'a>, app: AppCfg<'a>) -> Self {
        Self { handle, app }
    }

    /// The app-level resource this server resolves shared settings from.
    pub fn app(&self) -> &AppCfg<'a> {
        &self.app
    }
}

impl InterfaceCfg for ServerCfg<'_> {
    fn handle(&self) -> &InterfaceHandle<'_> {
        &self.handle
    }

    fn get_msgbus_config(&self) -> CfgResult<MsgBusConfig> {
        self.app.ensure_available()?;
        self.handle
            .msgbus_config()
            .inspect_err(|e| tracing::error!(interface = %self.handle.label(), error = %e, "Unable to fetch server msgbus config"))
    }

    fn get_endpoint(&self) -> CfgResult<String> {
        self.app.ensure_available()?;
        entry_endpoint(&self.handle)
    }

    fn get_allowed_clients(&self) -> CfgResult<Vec<String>> {
        self.app.ensure_available()?;
        self.handle
            .with_entry(|entry| marshal::string_array_with(entry, "AllowedClients", AbsencePolicy::Unrestricted))
    }
}
