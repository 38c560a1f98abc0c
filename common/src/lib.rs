//! Platform-independent core of the supply justification form.
//!
//! Everything here is plain Rust so the frontend stays a thin Yew adapter and the
//! validation and submission rules can be exercised with `cargo test`.

pub mod config;
pub mod form;
pub mod model;
pub mod requests;
pub mod sanitize;
pub mod submission;
pub mod validation;
