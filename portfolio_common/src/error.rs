//! Error types shared by the library and the `portfolio` binary.
//!
//! The container itself cannot fail. What remains is writing the constituents out.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// I/O error, in practice a failed write to stdout.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
