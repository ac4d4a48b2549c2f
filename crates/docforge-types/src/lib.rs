//! Shared domain types for docforge.
//!
//! This crate contains the value objects exchanged between the scanner-facing
//! HTTP adapter and the README generation pipeline, plus the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod analysis;
pub mod error;
pub mod llm;
