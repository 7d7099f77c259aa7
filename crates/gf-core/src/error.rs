//! Core error type.
//!
//! Sub-crates define their own error enums; `gf-sim` folds them all into
//! `SimError` via `From` impls.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
