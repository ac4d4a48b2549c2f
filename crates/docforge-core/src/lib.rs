//! README generation pipeline for docforge.
//!
//! This crate defines the "ports" (the [`llm::GenerativeBackend`] and
//! [`agent::BackendFactory`] traits) that the infrastructure layer
//! implements, plus the pure prompt builder and the orchestrating agent.
//! It depends only on `docforge-types` -- never on `docforge-infra` or any
//! HTTP crate.

pub mod agent;
pub mod llm;
pub mod prompt;
