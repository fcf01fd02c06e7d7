use super::NodeId;
use std::fmt;

/// Cycle value object: a closed path `to -> ... -> from -> to`
///
/// The node that closes the cycle appears first and last. Equality is on the
/// exact ordered path, so two rotations of the same loop are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle(Vec<NodeId>);

impl Cycle {
    pub fn new(path: Vec<NodeId>) -> Self {
        Self(path)
    }

    /// The full closed path, including the repeated closing node
    pub fn path(&self) -> &[NodeId] {
        &self.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{}", joined)
    }
}
