//! Domain model for inventory groups and the membership helpers discovery uses.

use crate::core::domain::model::node::NodeList;
use serde::{Deserialize, Serialize};

/// Members of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Members {
    #[serde(default)]
    pub ids: Vec<String>,
}

/// A named group of components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub members: Members,
}

impl Group {
    /// Creates an empty group.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Returns true if `xname` is a member.
    pub fn contains(&self, xname: &str) -> bool {
        self.members.ids.iter().any(|id| id == xname)
    }
}

/// Returns `group` with `xname` added to its members.
///
/// The group is returned unchanged if `xname` is already a member.
pub fn add_member_to_group(group: &Group, xname: &str) -> Group {
    let mut g = group.clone();
    if !g.contains(xname) {
        g.members.ids.push(xname.to_string());
    }
    g
}

/// Builds the groups declared by the nodes of `node_list`.
///
/// Groups are ordered by first appearance, members by node order.
pub fn group_nodes(node_list: &NodeList) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for node in &node_list.nodes {
        for name in node.group_names() {
            match groups.iter().position(|g| g.label == name) {
                Some(idx) => groups[idx] = add_member_to_group(&groups[idx], &node.xname),
                None => groups.push(add_member_to_group(&Group::new(name), &node.xname)),
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::node::Node;

    fn node(xname: &str, group: &str, groups: &[&str]) -> Node {
        Node {
            xname: xname.to_string(),
            group: group.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_member() {
        let group = Group::new("compute");
        let group = add_member_to_group(&group, "x1000c1s7b0n0");
        let group = add_member_to_group(&group, "x1000c1s7b0n1");
        assert_eq!(group.members.ids, vec!["x1000c1s7b0n0", "x1000c1s7b0n1"]);
    }

    #[test]
    fn test_add_existing_member_is_noop() {
        let group = add_member_to_group(&Group::new("compute"), "x1000c1s7b0n0");
        let again = add_member_to_group(&group, "x1000c1s7b0n0");
        assert_eq!(again, group);
    }

    #[test]
    fn test_add_member_leaves_original_untouched() {
        let group = Group::new("compute");
        let _ = add_member_to_group(&group, "x1000c1s7b0n0");
        assert!(group.members.ids.is_empty());
    }

    #[test]
    fn test_group_nodes() {
        let list = NodeList {
            nodes: vec![
                node("x0c0s1b0n0", "compute", &["gpu"]),
                node("x0c0s2b0n0", "", &["compute"]),
                node("x0c0s1b0n0", "", &["compute", "login"]),
                node("x0c0s3b0n0", "", &[]),
            ],
        };

        let groups = group_nodes(&list);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["compute", "gpu", "login"]);
        assert_eq!(groups[0].members.ids, vec!["x0c0s1b0n0", "x0c0s2b0n0"]);
        assert_eq!(groups[1].members.ids, vec!["x0c0s1b0n0"]);
        assert_eq!(groups[2].members.ids, vec!["x0c0s1b0n0"]);
    }

    #[test]
    fn test_group_serialization() {
        let group = add_member_to_group(&Group::new("compute"), "x0c0s1b0n0");
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            serde_json::json!({"label": "compute", "members": {"ids": ["x0c0s1b0n0"]}})
        );
    }
}
