//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated routing data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod candidate;
mod node;
mod route;

pub use candidate::Candidate;
pub use node::{InvalidNodeId, NodeId};
pub use route::{EmptyRoute, Route};
