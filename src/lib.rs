//! versemeter - Chapter readability of a verse corpus against reference texts
//!
//! This library turns a nested corpus export into per-chapter texts with
//! known quotations removed, scores each chapter with nine readability
//! metrics, and reports where reference texts fall in that distribution.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod aggregate;
pub mod config;
pub mod exclusion;
pub mod export;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod readability;
pub mod summary;
pub mod text;
