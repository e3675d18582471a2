//! Model Context Protocol surface for Vikunja.
//!
//! - **server**: [`VikunjaServer`], the tool handler registered with rmcp
//! - **tools**: one module per resource family, each contributing a tool router
//! - **format**: plain-text rendering used by every tool result
//! - **service**: Streamable HTTP service for the `http` transport

pub mod format;
pub mod server;
mod service;
pub mod tools;


pub use server::VikunjaServer;
pub use service::create_mcp_service;
