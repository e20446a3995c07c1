//! Domain models for Redfish endpoints and the Systems and Managers they expose.
//!
//! A Redfish endpoint describes one BMC. Discovery fills in a fake System for
//! the node behind the BMC and a fake Manager for the BMC itself, so the
//! inventory service can register them as if a real BMC had been walked.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of every discovered Redfish endpoint and Manager.
pub const NODE_BMC_TYPE: &str = "NodeBMC";

/// Schema version telling the inventory service to use its v2 parser.
pub const REDFISH_ENDPOINT_SCHEMA_VERSION: u32 = 1;

/// An ethernet interface as embedded in a System or Manager.
///
/// Only a single address fits here; see
/// [`EthernetInterface`](crate::EthernetInterface) for the full record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedfishEthernetInterface {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub ip: String,
}

/// A Redfish System.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct System {
    pub uri: String,
    pub name: String,
    /// Nil if no identifier could be generated.
    pub uuid: Uuid,
    /// Supported reset actions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ethernet_interfaces: Vec<RedfishEthernetInterface>,
}

/// A Redfish Manager, i.e. the BMC itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manager {
    #[serde(flatten)]
    pub system: System,
    #[serde(rename = "type")]
    pub manager_type: String,
}

/// A Redfish endpoint: one BMC with the Systems and Managers it exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedfishEndpoint {
    /// The BMC xname.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type")]
    pub endpoint_type: String,
    #[serde(rename = "MACAddr", default)]
    pub mac_addr: String,
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,
    #[serde(rename = "FQDN", default)]
    pub fqdn: String,
    #[serde(rename = "SchemaVersion")]
    pub schema_version: u32,
    /// UUID of the endpoint's Manager, nil when none was generated.
    #[serde(rename = "UID")]
    pub uid: Uuid,
    #[serde(rename = "Systems", default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<System>,
    #[serde(rename = "Managers", default, skip_serializing_if = "Vec::is_empty")]
    pub managers: Vec<Manager>,
}

/// The collection of Redfish endpoints sent to the inventory service in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedfishEndpointSlice {
    #[serde(rename = "RedfishEndpoints", default)]
    pub redfish_endpoints: Vec<RedfishEndpoint>,
}

impl RedfishEndpointSlice {
    pub fn len(&self) -> usize {
        self.redfish_endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redfish_endpoints.is_empty()
    }

    /// All endpoints for a BMC xname, in discovery order.
    pub fn by_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a RedfishEndpoint> + 'a {
        self.redfish_endpoints.iter().filter(move |rfe| rfe.id == id)
    }
}
