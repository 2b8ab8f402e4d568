//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **cache**: card list cache backed by Redis or process memory
//! - **core_banking**: reqwest client for the upstream card API
//! - **persistence**: PostgreSQL card configuration store using Diesel
//!
//! Adapters translate between domain types and infrastructure
//! representations and contain no business logic.

pub mod cache;
pub mod core_banking;
pub mod persistence;
