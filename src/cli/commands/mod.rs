//! Command implementations for scriptnav
//!
//! Each command is implemented in its own module.

pub mod config;
pub mod decl;
pub mod def;
pub mod settings;
