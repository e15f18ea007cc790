//! Interface list held in memory, optionally loaded from JSON.

use super::{InterfaceAddress, InterfaceProvider, NetworkInterface};
use std::error::Error;

/// [`InterfaceProvider`] over a fixed list of interfaces.
#[derive(Debug, Clone, Default)]
pub struct StaticInterfaces {
    interfaces: Vec<NetworkInterface>,
}

impl StaticInterfaces {
    pub fn new(interfaces: Vec<NetworkInterface>) -> StaticInterfaces {
        StaticInterfaces { interfaces }
    }

    /// Parse `{"eth0": [{"address": "10.0.0.1", "family": "IPv4"}], ...}`.
    ///
    /// Interface order follows the JSON document.
    pub fn from_json(json: &str) -> Result<StaticInterfaces, Box<dyn Error>> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| format!("Error parsing interfaces JSON: {e}"))?;

        let mut interfaces = Vec::with_capacity(map.len());
        for (name, value) in map {
            let addresses: Vec<InterfaceAddress> = serde_json::from_value(value)
                .map_err(|e| format!("Error parsing addresses of interface {name}: {e}"))?;
            interfaces.push(NetworkInterface { name, addresses });
        }
        log::debug!("Loaded {} interfaces", interfaces.len());

        Ok(StaticInterfaces { interfaces })
    }

    /// Read [`StaticInterfaces::from_json`] input from a file.
    pub fn from_file(path: &str) -> Result<StaticInterfaces, Box<dyn Error>> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading interfaces file {path}: {e}"))?;
        log::info!("Reading interfaces from {path}");
        StaticInterfaces::from_json(&json)
    }
}

impl InterfaceProvider for StaticInterfaces {
    fn network_interfaces(&self) -> Vec<NetworkInterface> {
        self.interfaces.clone()
    }
}
