//! The discovery run: turns a node list into inventory entities.
//!
//! This is "fake" discovery. A real discovery tool walks each BMC over
//! Redfish; here the same structures are derived from a node list so that
//! the inventory service can be populated without touching hardware.

use crate::core::{
    application::{
        response::discovery_output::{DiscoveryOutput, DiscoveryWarning},
        service::{
            entity_builder::{
                build_component, build_manager, build_node_interfaces, build_redfish_endpoint,
                build_system,
            },
            ledger::{DiscoveryLedger, LedgerKind},
        },
    },
    domain::{
        error::DiscoveryResult,
        model::node::{Node, NodeList},
        value_object::{InventoryUrl, InventoryUrlConfig, translate},
    },
    infrastructure::uuid_issuer::{UuidSource, issue},
};
use tracing::{debug, warn};

pub struct DiscoveryService<'a> {
    uuid_source: &'a dyn UuidSource,
    url_config: InventoryUrlConfig,
}

impl<'a> DiscoveryService<'a> {
    pub fn new(uuid_source: &'a dyn UuidSource) -> Self {
        Self {
            uuid_source,
            url_config: InventoryUrlConfig::default(),
        }
    }

    /// Replaces the rules the base URI is validated against.
    pub fn with_url_config(mut self, url_config: InventoryUrlConfig) -> Self {
        self.url_config = url_config;
        self
    }

    /// Validates `base_uri` and discovers every node of `node_list`.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Validation` if `base_uri` is not a valid
    /// URI. Nothing is generated in that case, even for an empty list.
    pub fn execute(
        &self,
        base_uri: &str,
        node_list: &NodeList,
    ) -> DiscoveryResult<DiscoveryOutput> {
        let base_url = InventoryUrl::parse(base_uri, &self.url_config)?;
        Ok(self.discover(&base_url, node_list))
    }

    /// Discovers every node of `node_list` against an already validated base URL.
    ///
    /// Nodes are processed in order. The first node to use an xname owns its
    /// component and System; the first node to resolve to a BMC xname owns
    /// its Manager. Every node gets its own Redfish endpoint regardless.
    pub fn discover(&self, base_url: &InventoryUrl, node_list: &NodeList) -> DiscoveryOutput {
        debug!(
            base_url = %base_url,
            nodes = node_list.nodes.len(),
            "discovering nodes"
        );

        let mut ledger = DiscoveryLedger::new();
        let mut output = DiscoveryOutput::default();
        for node in &node_list.nodes {
            self.discover_node(node, base_url, &mut ledger, &mut output);
        }

        debug!(
            components = output.components.len(),
            redfish_endpoints = output.redfish_endpoints.len(),
            ethernet_interfaces = output.ethernet_interfaces.len(),
            warnings = output.warnings.len(),
            "discovery finished"
        );
        output
    }

    fn discover_node(
        &self,
        node: &Node,
        base_url: &InventoryUrl,
        ledger: &mut DiscoveryLedger,
        output: &mut DiscoveryOutput,
    ) {
        debug!(xname = %node.xname, "generating component structure");
        if ledger.present(LedgerKind::Component, &node.xname) {
            warn!(
                xname = %node.xname,
                "component already exists (duplicate?), not adding"
            );
            output.warnings.push(DiscoveryWarning::DuplicateComponent {
                xname: node.xname.clone(),
            });
        } else {
            let component = build_component(node);
            debug!(?component, "adding component");
            ledger.mark(LedgerKind::Component, &node.xname);
            output.components.components.push(component);
        }

        debug!(xname = %node.xname, "generating redfish structure");
        let translation = translate(&node.xname);
        if let Some(reason) = translation.fallback_reason() {
            warn!(
                xname = %node.xname,
                error = %reason,
                "falling back to node xname as BMC xname"
            );
            output.warnings.push(DiscoveryWarning::XnameFallback {
                xname: node.xname.clone(),
                reason: reason.clone(),
            });
        }
        let bmc_xname = translation.bmc_xname();
        let mut rfe = build_redfish_endpoint(node, bmc_xname);

        if ledger.present(LedgerKind::System, &node.xname) {
            debug!(xname = %node.xname, "fake BMC System already exists, skipping creation");
        } else {
            debug!(xname = %node.xname, "generating fake BMC System");
            let issued = issue(self.uuid_source);
            if let Some(reason) = issued.error() {
                warn!(
                    xname = %node.xname,
                    error = %reason,
                    "could not generate UUID for fake BMC System, it will be zero"
                );
                output.warnings.push(DiscoveryWarning::SystemUuidUnavailable {
                    xname: node.xname.clone(),
                    reason: reason.clone(),
                });
            }

            let system = build_system(node, base_url, issued.uuid());
            output.ethernet_interfaces.extend(build_node_interfaces(node));
            ledger.mark(LedgerKind::System, &node.xname);
            debug!(xname = %node.xname, ?system, "generated system");
            rfe.systems.push(system);
        }

        if ledger.present(LedgerKind::Manager, bmc_xname) {
            debug!(bmc_xname, "fake BMC Manager already exists, skipping creation");
        } else {
            debug!(bmc_xname, "generating fake BMC Manager");
            let issued = issue(self.uuid_source);
            match issued.error() {
                Some(reason) => {
                    warn!(
                        bmc_xname,
                        error = %reason,
                        "could not generate UUID for fake BMC Manager, it will be zero"
                    );
                    output.warnings.push(DiscoveryWarning::ManagerUuidUnavailable {
                        bmc_xname: bmc_xname.to_string(),
                        reason: reason.clone(),
                    });
                }
                // The endpoint is identified by its Manager.
                None => rfe.uid = issued.uuid(),
            }

            let manager = build_manager(node, bmc_xname, base_url, issued.uuid());
            ledger.mark(LedgerKind::Manager, bmc_xname);
            debug!(bmc_xname, ?manager, "generated manager");
            rfe.managers.push(manager);
        }

        output.redfish_endpoints.redfish_endpoints.push(rfe);
    }
}
