//! Subscriber view.

use crate::error::CfgResult;
use crate::interfaces::marshal::{self, AbsencePolicy};
use crate::interfaces::InterfaceCfg;
use crate::manager::InterfaceHandle;
use crate::msgbus::MsgBusConfig;

/// View over one `Subscribers` entry.
#[derive(Debug)]
pub struct SubscriberCfg<'a> {
    handle: InterfaceHandle<'a>,
}

impl<'a> SubscriberCfg<'a> {
    pub(crate) fn new(handle: InterfaceHandle<'a>) -> Self {
        Self { handle }
    }

    /// Topics this entry subscribes to, in document order.
    pub fn get_topics(&self) -> CfgResult<Vec<String>> {
        self.handle
            .with_entry(|entry| marshal::string_array_with(entry, "Topics", AbsencePolicy::Required))
    }
}

impl InterfaceCfg for SubscriberCfg<'_> {
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
