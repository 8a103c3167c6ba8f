//! # STL Wrappers
//!
//! Single-owner wrappers around the standard containers, each exposing a
//! reduced, checked subset of the underlying operations.
//!
//! - [`Vector`] - resizable array with doubling growth and checked range removal
//! - [`List`] - doubly-linked list with positional insert and splice
//! - [`UnorderedMap`] - hash map with inserting and non-inserting lookups
//! - [`PriorityQueue`] - max-heap
//!
//! None of the wrappers implement `Clone`. Fallible operations return
//! [`ContainerError`] and leave the container untouched on failure.
//!
//! ```bash
//! cargo run --bin stl_demo
//! cargo run --bin stl_demo -- demo.toml
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod priority_queue;
pub mod unordered_map;
pub mod vector;

#[cfg(test)]
mod test_util;

pub use error::ContainerError;
pub use list::List;
pub use priority_queue::PriorityQueue;
pub use unordered_map::UnorderedMap;
pub use vector::Vector;
