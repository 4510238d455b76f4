//! Client view.

use crate::error::CfgResult;
use crate::interfaces::marshal::{self, AbsencePolicy};
use crate::interfaces::InterfaceCfg;
use crate::manager::InterfaceHandle;
use crate::msgbus::MsgBusConfig;

/// View over one `Clients` entry.
///
/// `AllowedClients` is a server-side notion; a client entry that carries it
/// is reported as-is, one that lacks it is `NotFound`.
#[derive(Debug)]
pub struct ClientCfg<'a> {
    handle: InterfaceHandle<'a>,
}

impl<'a> ClientCfg<'a> {
    pub(crate) fn new(handle: InterfaceHandle<'a>) -> Self {
        Self { handle }
    }
}

impl InterfaceCfg for ClientCfg<'_> {
    fn handle(&self) -> &InterfaceHandle<'_> {
        &self.handle
    }

    fn get_msgbus_config(&self) -> CfgResult<MsgBusConfig> {
        self.handle.msgbus_config()
    }

    fn get_allowed_clients(&self) -> CfgResult<Vec<String>> {
        self.handle
            .with_entry(|entry| marshal::string_array_with(entry, "AllowedClients", AbsencePolicy::Required))
    }
}
