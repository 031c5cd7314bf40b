//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! is modeled as a separate struct (`NewLink`) from the persisted record
//! (`Link`).

pub mod link;

pub use link::{Link, NewLink};
