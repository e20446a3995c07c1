//! Domain model for the nodes fed into discovery.
//!
//! These structures mirror the payload format users write by hand (JSON or
//! YAML) to describe the nodes of a cluster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The list of nodes to discover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeList {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "node{}={{{}}}", idx, node)?;
        }
        f.write_str("]")
    }
}

/// A single compute node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Node {
    /// Display name of the node.
    #[serde(default)]
    pub name: String,
    /// Numeric node identifier.
    #[serde(default)]
    pub nid: i64,
    /// Structural identifier of the node (e.g., "x1000c1s7b0n0").
    pub xname: String,
    /// Single group membership. Deprecated in favour of `groups`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    /// Group memberships.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// MAC address of the node's BMC.
    #[serde(default)]
    pub bmc_mac: String,
    /// IP address of the node's BMC.
    #[serde(default)]
    pub bmc_ip: String,
    /// Fully qualified domain name of the node's BMC.
    #[serde(default)]
    pub bmc_fqdn: String,
    /// Network interfaces of the node.
    #[serde(default, rename = "interfaces")]
    pub ifaces: Vec<Iface>,
}

impl Node {
    /// Every group the node belongs to, the deprecated `group` first.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.groups.len() + 1);
        let declared =
            std::iter::once(self.group.as_str()).chain(self.groups.iter().map(String::as_str));
        for name in declared {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={:?} nid={} xname={} bmc_mac={} bmc_ip={} bmc_fqdn={} interfaces=[",
            self.name, self.nid, self.xname, self.bmc_mac, self.bmc_ip, self.bmc_fqdn
        )?;
        for (idx, iface) in self.ifaces.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "iface{}={{{}}}", idx, iface)?;
        }
        f.write_str("]")
    }
}

/// A network interface, possibly carrying several addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Iface {
    #[serde(default)]
    pub mac_addr: String,
    #[serde(default)]
    pub ip_addrs: Vec<IfaceIp>,
}

impl fmt::Display for Iface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mac_addr={} ip_addrs=[", self.mac_addr)?;
        for (idx, ip) in self.ip_addrs.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "ip{}={{{}}}", idx, ip)?;
        }
        f.write_str("]")
    }
}

/// One address of an [`Iface`].
///
/// `network` is the human-readable name of the network the address lives on
/// (e.g., "nmn"), not its subnet or CIDR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IfaceIp {
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub ip_addr: String,
}

impl fmt::Display for IfaceIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "network={:?} ip_addr={}", self.network, self.ip_addr)
    }
}
