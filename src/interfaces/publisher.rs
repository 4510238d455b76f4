//! Publisher view.

use crate::error::{CfgError, CfgResult};
use crate::interfaces::marshal::{self, AbsencePolicy};
use crate::interfaces::InterfaceCfg;
use crate::manager::InterfaceHandle;
use crate::msgbus::MsgBusConfig;
use crate::value::ConfigValue;

const TOPICS: &str = "Topics";
const ALLOWED_CLIENTS: &str = "AllowedClients";

/// View over one `Publishers` entry.
#[derive(Debug)]
pub struct PublisherCfg<'a> {
    handle: InterfaceHandle<'a>,
}

impl<'a> PublisherCfg<'a> {
    pub(crate) fn new(handle: InterfaceHandle<'a>) -> Self {
        Self { handle }
    }

    /// Topics published by this entry, in document order.
    pub fn get_topics(&self) -> CfgResult<Vec<String>> {
        self.handle
            .with_entry(|entry| marshal::string_array_with(entry, TOPICS, AbsencePolicy::Required))
    }

    /// Replace the entry's topics.
    ///
    /// All-or-nothing: on error the previous topics stay visible to every
    /// reader. An empty list is rejected.
    pub fn set_topics<S: AsRef<str>>(&mut self, topics: &[S]) -> CfgResult<()> {
        if topics.is_empty() {
            return Err(CfgError::EmptyCollection(TOPICS.to_string()));
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(topics.len())
            .map_err(|e| CfgError::AllocationFailure(e.to_string()))?;
        values.extend(topics.iter().map(|t| ConfigValue::String(t.as_ref().to_owned())));
        let replacement = ConfigValue::Array(values);

        self.handle
            .update_entry(|entry| entry.insert(TOPICS, replacement.clone()).map(|_| ()))
            .inspect_err(|e| tracing::error!(interface = %self.handle.label(), error = %e, "Failed to set topics"))?;

        tracing::debug!(interface = %self.handle.label(), count = topics.len(), "Topics successfully set");
        Ok(())
    }
}

impl InterfaceCfg for PublisherCfg<'_> {
    fn handle(&self) -> &InterfaceHandle<'_> {
        &self.handle
    }

    fn get_msgbus_config(&self) -> CfgResult<MsgBusConfig> {
        self.handle.msgbus_config()
    }

    fn get_allowed_clients(&self) -> CfgResult<Vec<String>> {
        self.handle
            .with_entry(|entry| marshal::string_array_with(entry, ALLOWED_CLIENTS, AbsencePolicy::Required))
    }
}
