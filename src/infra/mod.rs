//! Infrastructure layer for scriptnav
//!
//! Contains low-level implementations and external integrations.

pub mod ast;
