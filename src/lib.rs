//! Glossa - translation catalog usage analyser
//!
//! Glossa cross-references the dotted identifiers quoted in source code with
//! JSON translation catalogs: it reports which catalog paths are used, used
//! only as a namespace prefix, or never referenced, and edits catalogs in
//! place.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog indexing, identifier extraction and usage analysis
//! - `error`: Error taxonomy for catalog operations
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod mcp;
pub mod utils;
