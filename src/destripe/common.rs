//! Common utilities module
//!
//! This module contains shared utilities used across the destriping pipeline.

pub mod error;

pub use error::{DestripeError, Result};
