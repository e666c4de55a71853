//! Data models module
//!
//! Contains the data structures exchanged with the analysis backend:
//! - Agent graph types (agents, tools, connections)
//! - Test case and result types

pub mod graph;
pub mod testing;
