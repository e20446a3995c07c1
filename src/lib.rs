//! Synthetic inventory generation.
//!
//! Turns a hand-written list of nodes into the entities an inventory service
//! expects after discovering real hardware: components, Redfish endpoints
//! (with a System per node and a Manager per BMC) and ethernet interfaces.
//! Nothing is sent anywhere; the caller hands the output to its own client.

mod core;

pub use crate::core::{
    application::{
        response::discovery_output::{DiscoveryOutput, DiscoveryWarning},
        service::{
            discovery_service::DiscoveryService,
            entity_builder::{
                SYSTEM_RESET_ACTIONS, build_bmc_interface, build_component, build_manager,
                build_node_interfaces, build_redfish_endpoint, build_system,
            },
            ledger::{DiscoveryLedger, LedgerKind},
        },
    },
    domain::{
        error::{DiscoveryError, DiscoveryResult, ValidationError},
        model::{
            component::{COMPONENT_STATE_ON, COMPONENT_TYPE_NODE, Component, ComponentSlice},
            discovery_config::DiscoveryConfig,
            ethernet_interface::{EthernetInterface, EthernetIp},
            group::{Group, Members, add_member_to_group, group_nodes},
            node::{Iface, IfaceIp, Node, NodeList},
            redfish_endpoint::{
                Manager, NODE_BMC_TYPE, REDFISH_ENDPOINT_SCHEMA_VERSION, RedfishEndpoint,
                RedfishEndpointSlice, RedfishEthernetInterface, System,
            },
        },
        value_object::{
            InventoryUrl, InventoryUrlConfig, XnameTranslation, node_xname_to_bmc_xname,
            translate,
        },
    },
    infrastructure::uuid_issuer::{IssueError, IssuedUuid, RandomUuidSource, UuidSource, issue},
};

/// Generates inventory from node lists against one inventory service.
///
/// # Examples
///
/// ```
/// use inventory_discovery::{InventoryDiscovery, Node, NodeList, DiscoveryResult};
///
/// fn main() -> DiscoveryResult<()> {
///     let discovery = InventoryDiscovery::builder()
///         .base_uri("https://smd.example.com")
///         .build()?;
///
///     let nodes = NodeList {
///         nodes: vec![Node {
///             name: "nid001".to_string(),
///             nid: 1,
///             xname: "x1000c1s7b0n0".to_string(),
///             ..Default::default()
///         }],
///     };
///
///     let output = discovery.run(&nodes);
///     assert_eq!(output.components.len(), 1);
///     assert_eq!(output.redfish_endpoints.redfish_endpoints[0].id, "x1000c1s7b0");
///     Ok(())
/// }
/// ```
pub struct InventoryDiscovery {
    config: DiscoveryConfig,
    uuid_source: Box<dyn UuidSource>,
}

/// Builder for InventoryDiscovery configuration
#[derive(Default)]
pub struct InventoryDiscoveryBuilder {
    base_uri: Option<String>,
    url_config: Option<InventoryUrlConfig>,
    uuid_source: Option<Box<dyn UuidSource>>,
}

impl InventoryDiscoveryBuilder {
    /// Root URI of the inventory service. Required.
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Extra rules for the base URI, such as [`InventoryUrlConfig::http`].
    /// By default any absolute URI that can carry a path is accepted.
    pub fn url_config(mut self, url_config: InventoryUrlConfig) -> Self {
        self.url_config = Some(url_config);
        self
    }

    /// Source of System and Manager UUIDs. Defaults to [`RandomUuidSource`].
    pub fn uuid_source(mut self, uuid_source: impl UuidSource + 'static) -> Self {
        self.uuid_source = Some(Box::new(uuid_source));
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Validation` if the base URI is missing or invalid.
    pub fn build(self) -> DiscoveryResult<InventoryDiscovery> {
        let base_uri = self.base_uri.ok_or_else(|| ValidationError::Field {
            field: "base_uri".to_string(),
            message: "Base URI is required".to_string(),
        })?;
        let url_config = self.url_config.unwrap_or_default();
        let base_url = InventoryUrl::parse(&base_uri, &url_config)?;

        Ok(InventoryDiscovery {
            config: DiscoveryConfig::new(base_url),
            uuid_source: self
                .uuid_source
                .unwrap_or_else(|| Box::new(RandomUuidSource)),
        })
    }
}

impl InventoryDiscovery {
    /// Creates a new builder for InventoryDiscovery configuration
    pub fn builder() -> InventoryDiscoveryBuilder {
        InventoryDiscoveryBuilder::default()
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Generates the inventory for `node_list`.
    ///
    /// Runs are independent: nothing is remembered between calls.
    pub fn run(&self, node_list: &NodeList) -> DiscoveryOutput {
        DiscoveryService::new(self.uuid_source.as_ref())
            .discover(self.config.base_url(), node_list)
    }
}

/// Generates the inventory for `node_list` against `base_uri` in one call.
///
/// # Errors
///
/// Returns `DiscoveryError::Validation` if `base_uri` is not a valid URI.
pub fn discovery_info(base_uri: &str, node_list: &NodeList) -> DiscoveryResult<DiscoveryOutput> {
    DiscoveryService::new(&RandomUuidSource).execute(base_uri, node_list)
}
