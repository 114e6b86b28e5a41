//! Multi-stop route planner.
//!
//! A library that answers: "what is the fastest way to drive through
//! these stops, in order, and what should I do if a road on that way
//! is closed?"
//!
//! Travel cost is time over a directed road graph: road length divided
//! by an average speed, plus a per-node transfer delay at every
//! intermediate stop. Alternates come from re-planning with each road
//! of the best route excluded in turn.

pub mod domain;
pub mod graph;
pub mod planner;
pub mod report;
