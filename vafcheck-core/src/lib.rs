//! # Core types for vafcheck
//!
//! Shared models (truth records, call records, evaluated records), the error type used
//! across the workspace, and small file utilities such as transparent gzip reading.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{Result, VafCheckError};
