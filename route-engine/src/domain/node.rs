//! Node identifier types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid node identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid node id: {reason}")]
pub struct InvalidNodeId {
    reason: &'static str,
}

/// The identifier of a node (city, junction) in the road graph.
///
/// Identifiers are non-empty strings with no leading or trailing
/// whitespace; surrounding whitespace in the input is stripped rather
/// than rejected, so `"Lyon "` and `"Lyon"` name the same node. This
/// type guarantees that any `NodeId` value is valid by construction.
///
/// Cloning is cheap: the name is shared behind an [`Arc`].
///
/// # Examples
///
/// ```
/// use route_engine::domain::NodeId;
///
/// let lyon = NodeId::parse("Lyon").unwrap();
/// assert_eq!(lyon.as_str(), "Lyon");
///
/// // Surrounding whitespace is stripped
/// assert_eq!(NodeId::parse("  Lyon\t").unwrap(), lyon);
///
/// // Empty and blank inputs are rejected
/// assert!(NodeId::parse("").is_err());
/// assert!(NodeId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Parse a node identifier from a string.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidNodeId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidNodeId {
                reason: "must contain at least one non-whitespace character",
            });
        }

        Ok(NodeId(Arc::from(trimmed)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.as_str())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
