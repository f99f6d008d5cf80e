//! Core enumerations for the reality-graph.
//!
//! Node and capability kinds only. No edge, grant or event structure is
//! defined on top of them yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of nodes in the reality-graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// A tangible object in the physical world
    PhysicalObject,
    /// A unit of data in transit
    DataPacket,
    /// Something that moves physical objects
    TransportVehicle,
    /// A node offering computation
    ComputeNode,
    /// A node offering storage
    StorageNode,
}

impl NodeType {
    /// Every node type, in declaration order.
    pub const ALL: [NodeType; 5] = [
        Self::PhysicalObject,
        Self::DataPacket,
        Self::TransportVehicle,
        Self::ComputeNode,
        Self::StorageNode,
    ];

    /// Wire name of the node type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhysicalObject => "physical_object",
            Self::DataPacket => "data_packet",
            Self::TransportVehicle => "transport_vehicle",
            Self::ComputeNode => "compute_node",
            Self::StorageNode => "storage_node",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("node type", s))
    }
}

/// Types of capabilities for resource negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityType {
    Read,
    Write,
    Execute,
}

impl CapabilityType {
    pub const ALL: [CapabilityType; 3] = [Self::Read, Self::Write, Self::Execute];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Execute => "execute",
        }
    }
}

impl fmt::Display for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("capability type", s))
    }
}

/// A string that names no variant of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_names() {
        let names: Vec<_> = NodeType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "physical_object",
                "data_packet",
                "transport_vehicle",
                "compute_node",
                "storage_node"
            ]
        );
    }

    #[test]
    fn test_node_type_serde_matches_as_str() {
        for t in NodeType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            let back: NodeType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn test_node_type_parse() {
        assert_eq!("compute_node".parse::<NodeType>().unwrap(), NodeType::ComputeNode);
        assert_eq!(" DATA_PACKET ".parse::<NodeType>().unwrap(), NodeType::DataPacket);

        let err = "router".parse::<NodeType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown node type: router");
    }

    #[test]
    fn test_capability_type() {
        assert_eq!(CapabilityType::Execute.to_string(), "execute");
        assert_eq!("Write".parse::<CapabilityType>().unwrap(), CapabilityType::Write);
        assert!("exec".parse::<CapabilityType>().is_err());

        let json = serde_json::to_string(&CapabilityType::Read).unwrap();
        assert_eq!(json, "\"read\"");
    }
}
