//! toolbench library interface
//!
//! A single-user local toolbox: a todo list, an encrypted password vault
//! and a handful of stateless text tools behind a local HTTP API. The
//! centerpiece is the curl-to-Python translator in [`curl`].
//!
//! # Module Organization
//!
//! - [`curl`] - Curl command translation (parse + code generation)
//! - [`server`] - Local HTTP transport
//! - [`api`] - HTTP API handlers
//! - [`store`] - JSON-file persistence for todos and vault entries
//! - [`vault`] - Reversible encryption for stored passwords
//! - [`tools`] - Stateless text tools
//! - [`errors`] - Error types (ToolbenchError, Result)
//! - [`core`] - Main execution logic

pub mod api;
pub mod cli;
pub mod core;
pub mod curl;
pub mod errors;
pub mod json;
pub mod server;
pub mod store;
pub mod tools;
pub mod vault;
