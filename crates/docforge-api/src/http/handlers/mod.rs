//! Request handlers.

pub mod readme;
