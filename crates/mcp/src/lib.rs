//! MCP surface of the rescue dogs server: JSON-RPC protocol types, tool
//! registry, markdown presentation and the stdio transport.
pub mod dto;
pub mod formatters;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod state;
pub mod tools;

pub use server::McpServer;
pub use state::McpState;
