//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the catalog operations to AI assistants as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading and result helpers shared by the tools
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{GlossaMcpServer, run_server};
