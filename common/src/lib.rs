//! # cidr-common
//!
//! Shared data model for CIDR expansion: network blocks, port sets,
//! membership records, error types and the runtime configuration.

pub mod config;
pub mod error;
pub mod network;
