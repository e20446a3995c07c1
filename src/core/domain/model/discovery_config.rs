use crate::core::domain::value_object::InventoryUrl;

/// Validated configuration of a discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    base_url: InventoryUrl,
}

impl DiscoveryConfig {
    pub fn new(base_url: InventoryUrl) -> Self {
        Self { base_url }
    }

    /// Root URL of the inventory service; System and Manager URIs derive from it.
    pub fn base_url(&self) -> &InventoryUrl {
        &self.base_url
    }
}
