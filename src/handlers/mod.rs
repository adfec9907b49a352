//! HTTP handlers for listing CRUD and operational probes.

pub mod probe;
pub mod property;
