//! Constructors for the entities discovery generates from a node.
//!
//! Every builder is a pure function of its inputs. Deduplication and UUID
//! issuance are the caller's job.

use crate::core::domain::{
    model::{
        component::{COMPONENT_STATE_ON, COMPONENT_TYPE_NODE, Component},
        ethernet_interface::{EthernetInterface, EthernetIp},
        node::Node,
        redfish_endpoint::{
            Manager, NODE_BMC_TYPE, REDFISH_ENDPOINT_SCHEMA_VERSION, RedfishEndpoint,
            RedfishEthernetInterface, System,
        },
    },
    value_object::InventoryUrl,
};
use uuid::Uuid;

/// Reset actions advertised by every generated System.
///
/// Nodes described by hand carry no information about the power actions
/// their BMC supports, so every `ResetType` of the Redfish schema is listed.
pub const SYSTEM_RESET_ACTIONS: [&str; 12] = [
    "On",
    "ForceOff",
    "GracefulShutdown",
    "GracefulRestart",
    "ForceRestart",
    "Nmi",
    "ForceOn",
    "PushPowerButton",
    "PowerCycle",
    "Suspend",
    "Pause",
    "Resume",
];

pub fn build_component(node: &Node) -> Component {
    Component {
        id: node.xname.clone(),
        nid: node.nid,
        component_type: COMPONENT_TYPE_NODE.to_string(),
        state: COMPONENT_STATE_ON.to_string(),
        enabled: true,
    }
}

/// Builds the endpoint of a node's BMC without Systems or Managers.
pub fn build_redfish_endpoint(node: &Node, bmc_xname: &str) -> RedfishEndpoint {
    RedfishEndpoint {
        id: bmc_xname.to_string(),
        name: node.name.clone(),
        endpoint_type: NODE_BMC_TYPE.to_string(),
        mac_addr: node.bmc_mac.clone(),
        ip_address: node.bmc_ip.clone(),
        fqdn: node.bmc_fqdn.clone(),
        schema_version: REDFISH_ENDPOINT_SCHEMA_VERSION,
        uid: Uuid::nil(),
        systems: Vec::new(),
        managers: Vec::new(),
    }
}

/// Builds the System of a node.
///
/// Embedded interfaces only have room for one address, so each takes the
/// first address of its interface (empty if it has none).
pub fn build_system(node: &Node, base_url: &InventoryUrl, uuid: Uuid) -> System {
    let ethernet_interfaces = node
        .ifaces
        .iter()
        .enumerate()
        .map(|(idx, iface)| RedfishEthernetInterface {
            name: node.xname.clone(),
            description: interface_description(idx, node),
            mac: iface.mac_addr.clone(),
            ip: iface
                .ip_addrs
                .first()
                .map(|ip| ip.ip_addr.clone())
                .unwrap_or_default(),
        })
        .collect();

    System {
        uri: base_url.system_uri(&node.xname),
        name: node.name.clone(),
        uuid,
        actions: SYSTEM_RESET_ACTIONS.iter().map(|a| a.to_string()).collect(),
        ethernet_interfaces,
    }
}

/// Builds the inventory interface records of a node, one per interface,
/// each keeping all of its addresses.
pub fn build_node_interfaces(node: &Node) -> Vec<EthernetInterface> {
    node.ifaces
        .iter()
        .enumerate()
        .map(|(idx, iface)| EthernetInterface {
            component_id: node.xname.clone(),
            interface_type: COMPONENT_TYPE_NODE.to_string(),
            description: interface_description(idx, node),
            mac_address: iface.mac_addr.clone(),
            ip_addresses: iface
                .ip_addrs
                .iter()
                .map(|ip| EthernetIp {
                    ip_address: ip.ip_addr.clone(),
                    network: ip.network.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn build_bmc_interface(node: &Node, bmc_xname: &str) -> RedfishEthernetInterface {
    RedfishEthernetInterface {
        name: bmc_xname.to_string(),
        description: format!("Interface for BMC {}", bmc_xname),
        mac: node.bmc_mac.clone(),
        ip: node.bmc_ip.clone(),
    }
}

/// Builds the Manager of a node's BMC.
pub fn build_manager(
    node: &Node,
    bmc_xname: &str,
    base_url: &InventoryUrl,
    uuid: Uuid,
) -> Manager {
    Manager {
        system: System {
            uri: base_url.manager_uri(bmc_xname),
            name: bmc_xname.to_string(),
            uuid,
            actions: Vec::new(),
            ethernet_interfaces: vec![build_bmc_interface(node, bmc_xname)],
        },
        manager_type: NODE_BMC_TYPE.to_string(),
    }
}

fn interface_description(idx: usize, node: &Node) -> String {
    format!("Interface {} for {}", idx, node.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{
        model::node::{Iface, IfaceIp},
        value_object::InventoryUrlConfig,
    };

    fn base_url() -> InventoryUrl {
        InventoryUrl::parse("https://smd.example.com", &InventoryUrlConfig::default()).unwrap()
    }

    fn ip(network: &str, addr: &str) -> IfaceIp {
        IfaceIp {
            network: network.to_string(),
            ip_addr: addr.to_string(),
        }
    }

    fn node() -> Node {
        Node {
            name: "nid001".to_string(),
            nid: 1,
            xname: "x1000c1s7b0n0".to_string(),
            bmc_mac: "de:ca:fc:0f:fe:e1".to_string(),
            bmc_ip: "172.16.0.101".to_string(),
            bmc_fqdn: "x1000c1s7b0.clustr".to_string(),
            ifaces: vec![
                Iface {
                    mac_addr: "de:ad:be:ee:ee:f1".to_string(),
                    ip_addrs: vec![ip("nmn", "10.0.0.1"), ip("hmn", "10.1.0.1")],
                },
                Iface {
                    mac_addr: "de:ad:be:ee:ee:f2".to_string(),
                    ip_addrs: vec![ip("hsn", "10.2.0.1")],
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_component() {
        let component = build_component(&node());
        assert_eq!(component.id, "x1000c1s7b0n0");
        assert_eq!(component.nid, 1);
        assert_eq!(component.component_type, "Node");
        assert_eq!(component.state, "On");
        assert!(component.enabled);
    }

    #[test]
    fn test_build_redfish_endpoint() {
        let rfe = build_redfish_endpoint(&node(), "x1000c1s7b0");
        assert_eq!(rfe.id, "x1000c1s7b0");
        assert_eq!(rfe.name, "nid001");
        assert_eq!(rfe.endpoint_type, "NodeBMC");
        assert_eq!(rfe.mac_addr, "de:ca:fc:0f:fe:e1");
        assert_eq!(rfe.ip_address, "172.16.0.101");
        assert_eq!(rfe.fqdn, "x1000c1s7b0.clustr");
        assert_eq!(rfe.schema_version, 1);
        assert!(rfe.uid.is_nil());
        assert!(rfe.systems.is_empty());
        assert!(rfe.managers.is_empty());
    }

    #[test]
    fn test_build_system_uses_first_address() {
        let uuid = Uuid::from_u128(1);
        let system = build_system(&node(), &base_url(), uuid);

        assert_eq!(
            system.uri,
            "https://smd.example.com/redfish/v1/Systems/x1000c1s7b0n0"
        );
        assert_eq!(system.name, "nid001");
        assert_eq!(system.uuid, uuid);
        assert_eq!(system.actions, SYSTEM_RESET_ACTIONS.to_vec());
        assert_eq!(system.ethernet_interfaces.len(), 2);

        let first = &system.ethernet_interfaces[0];
        assert_eq!(first.name, "x1000c1s7b0n0");
        assert_eq!(first.description, "Interface 0 for nid001");
        assert_eq!(first.mac, "de:ad:be:ee:ee:f1");
        assert_eq!(first.ip, "10.0.0.1");
        assert_eq!(system.ethernet_interfaces[1].description, "Interface 1 for nid001");
        assert_eq!(system.ethernet_interfaces[1].ip, "10.2.0.1");
    }

    #[test]
    fn test_build_system_interface_without_address() {
        let mut n = node();
        n.ifaces = vec![Iface {
            mac_addr: "de:ad:be:ee:ee:f3".to_string(),
            ip_addrs: Vec::new(),
        }];
        let system = build_system(&n, &base_url(), Uuid::nil());
        assert_eq!(system.ethernet_interfaces[0].ip, "");
    }

    #[test]
    fn test_reset_action_catalog() {
        assert_eq!(SYSTEM_RESET_ACTIONS.len(), 12);
        assert_eq!(SYSTEM_RESET_ACTIONS[0], "On");
        assert_eq!(SYSTEM_RESET_ACTIONS[11], "Resume");
    }

    #[test]
    fn test_build_node_interfaces_keeps_all_addresses() {
        let ifaces = build_node_interfaces(&node());
        assert_eq!(ifaces.len(), 2);
        assert_eq!(ifaces[0].component_id, "x1000c1s7b0n0");
        assert_eq!(ifaces[0].interface_type, "Node");
        assert_eq!(ifaces[0].description, "Interface 0 for nid001");
        assert_eq!(ifaces[0].mac_address, "de:ad:be:ee:ee:f1");
        assert_eq!(
            ifaces[0].ip_addresses,
            vec![
                EthernetIp {
                    ip_address: "10.0.0.1".to_string(),
                    network: "nmn".to_string(),
                },
                EthernetIp {
                    ip_address: "10.1.0.1".to_string(),
                    network: "hmn".to_string(),
                },
            ]
        );
        assert_eq!(ifaces[1].ip_addresses.len(), 1);
    }

    #[test]
    fn test_build_manager() {
        let uuid = Uuid::from_u128(2);
        let manager = build_manager(&node(), "x1000c1s7b0", &base_url(), uuid);

        assert_eq!(manager.manager_type, "NodeBMC");
        assert_eq!(
            manager.system.uri,
            "https://smd.example.com/redfish/v1/Managers/x1000c1s7b0"
        );
        assert_eq!(manager.system.name, "x1000c1s7b0");
        assert_eq!(manager.system.uuid, uuid);
        assert!(manager.system.actions.is_empty());
        assert_eq!(
            manager.system.ethernet_interfaces,
            vec![RedfishEthernetInterface {
                name: "x1000c1s7b0".to_string(),
                description: "Interface for BMC x1000c1s7b0".to_string(),
                mac: "de:ca:fc:0f:fe:e1".to_string(),
                ip: "172.16.0.101".to_string(),
            }]
        );
    }
}
