pub mod component;
pub mod discovery_config;
pub mod ethernet_interface;
pub mod group;
pub mod node;
pub mod redfish_endpoint;
