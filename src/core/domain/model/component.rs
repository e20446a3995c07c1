//! Domain model for inventory components.

use serde::{Deserialize, Serialize};

/// Component type of every discovered node.
pub const COMPONENT_TYPE_NODE: &str = "Node";

/// State every discovered node is reported in.
pub const COMPONENT_STATE_ON: &str = "On";

/// A node's presence record in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Component {
    /// The node xname.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "NID")]
    pub nid: i64,
    #[serde(rename = "Type")]
    pub component_type: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Enabled")]
    pub enabled: bool,
}

/// The collection of components sent to the inventory service in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComponentSlice {
    #[serde(rename = "Components", default)]
    pub components: Vec<Component>,
}

impl ComponentSlice {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Looks up a component by xname.
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_serializes_with_inventory_keys() {
        let slice = ComponentSlice {
            components: vec![Component {
                id: "x1000c1s7b0n0".to_string(),
                nid: 1,
                component_type: COMPONENT_TYPE_NODE.to_string(),
                state: COMPONENT_STATE_ON.to_string(),
                enabled: true,
            }],
        };

        let value = serde_json::to_value(&slice).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Components": [
                    {"ID": "x1000c1s7b0n0", "NID": 1, "Type": "Node", "State": "On", "Enabled": true}
                ]
            })
        );
    }

    #[test]
    fn test_component_slice_lookup() {
        let slice = ComponentSlice {
            components: vec![Component {
                id: "x0c0s1b0n0".to_string(),
                nid: 7,
                component_type: COMPONENT_TYPE_NODE.to_string(),
                state: COMPONENT_STATE_ON.to_string(),
                enabled: true,
            }],
        };
        assert_eq!(slice.len(), 1);
        assert!(!slice.is_empty());
        assert_eq!(slice.get("x0c0s1b0n0").map(|c| c.nid), Some(7));
        assert!(slice.get("x0c0s2b0n0").is_none());
        assert!(ComponentSlice::default().is_empty());
    }
}
