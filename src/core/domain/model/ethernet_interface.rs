//! Domain model for the ethernet interface records of the inventory.

use serde::{Deserialize, Serialize};

/// One address of an [`EthernetInterface`] and the network it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EthernetIp {
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "Network", default, skip_serializing_if = "String::is_empty")]
    pub network: String,
}

/// An ethernet interface record owned by a component.
///
/// Unlike the interfaces embedded in a Redfish System, these records carry
/// every address of the interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EthernetInterface {
    /// Xname of the owning component.
    #[serde(rename = "ComponentID")]
    pub component_id: String,
    #[serde(rename = "Type")]
    pub interface_type: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "MACAddress")]
    pub mac_address: String,
    #[serde(rename = "IPAddresses", default)]
    pub ip_addresses: Vec<EthernetIp>,
}
