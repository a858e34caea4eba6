//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Rocketlane REST API as MCP tools, over stdio or the
//! Streamable HTTP transport.
//!
//! - **server**: [`RocketlaneServer`], the handler every transport serves
//! - **tools**: one tool router per Rocketlane entity
//! - **args**: string argument validation shared by all tools

pub mod args;
pub mod server;
mod service;
pub mod tools;


pub use server::RocketlaneServer;
pub use service::create_mcp_service;
