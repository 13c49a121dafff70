//! zoodesk: register animals of a closed set of kinds and describe their behaviors.
//!
//! Layers, leaves first:
//! - [`domain`]: animal kinds, capabilities, the append-only registry
//! - [`application`]: registration and query service, reports
//! - [`infrastructure`]: console boundary and service wiring
//! - [`cli`]: argument parsing, commands, interactive session

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
