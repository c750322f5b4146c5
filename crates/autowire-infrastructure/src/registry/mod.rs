//! Collaborator adapters
//!
//! In-memory implementations of the domain ports, for embedding containers
//! that keep their service and constant tables in process.

pub mod constants;
pub mod in_memory;

pub use constants::ConstantTable;
pub use in_memory::InMemoryServiceRegistry;
