//! Grocer HTTP API
//!
//! Axum router, middleware and CLI commands for the grocery storefront
//! and its back office.

pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
