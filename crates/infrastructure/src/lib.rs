//! Rescue Dogs MCP Infrastructure Layer
pub mod cache;
pub mod http;
