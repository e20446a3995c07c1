//! What a discovery run hands back to its caller.

use crate::core::{
    domain::{
        error::ValidationError,
        model::{
            component::ComponentSlice, ethernet_interface::EthernetInterface,
            redfish_endpoint::RedfishEndpointSlice,
        },
    },
    infrastructure::uuid_issuer::IssueError,
};
use std::fmt;

/// A per-node anomaly that did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryWarning {
    /// A node reused the xname of an earlier node; no component was added for it.
    DuplicateComponent { xname: String },
    /// The node xname does not name a node, so it doubles as the BMC xname.
    XnameFallback {
        xname: String,
        reason: ValidationError,
    },
    /// The System of a node got the nil UUID.
    SystemUuidUnavailable { xname: String, reason: IssueError },
    /// The Manager of a BMC got the nil UUID.
    ManagerUuidUnavailable {
        bmc_xname: String,
        reason: IssueError,
    },
}

impl fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryWarning::DuplicateComponent { xname } => write!(
                f,
                "component with xname {} already exists (duplicate?), not adding",
                xname
            ),
            DiscoveryWarning::XnameFallback { xname, reason } => write!(
                f,
                "node {}: falling back to node xname as BMC xname: {}",
                xname, reason
            ),
            DiscoveryWarning::SystemUuidUnavailable { xname, reason } => write!(
                f,
                "node {}: could not generate UUID for fake BMC System, it will be zero: {}",
                xname, reason
            ),
            DiscoveryWarning::ManagerUuidUnavailable { bmc_xname, reason } => write!(
                f,
                "BMC {}: could not generate UUID for fake BMC Manager, it will be zero: {}",
                bmc_xname, reason
            ),
        }
    }
}

/// The inventory generated by one discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOutput {
    pub components: ComponentSlice,
    /// One endpoint per input node, in input order.
    pub redfish_endpoints: RedfishEndpointSlice,
    pub ethernet_interfaces: Vec<EthernetInterface>,
    /// Anomalies in the order they were met, one entry per occurrence.
    pub warnings: Vec<DiscoveryWarning>,
}

impl DiscoveryOutput {
    /// Returns true if any node repeated the xname of an earlier node.
    pub fn has_duplicates(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, DiscoveryWarning::DuplicateComponent { .. }))
    }

    /// Splits the output into the three collections sent to the inventory service.
    pub fn into_parts(self) -> (ComponentSlice, RedfishEndpointSlice, Vec<EthernetInterface>) {
        (
            self.components,
            self.redfish_endpoints,
            self.ethernet_interfaces,
        )
    }
}
